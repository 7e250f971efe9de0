//! Twin routes as a maximum-cost flow of value two.
//!
//! Every city `u` is split into an entry node `u` and an exit node `u + n` joined by an arc
//! of cost one; its capacity is one for interior cities and two for the westmost and
//! eastmost city. A direct route `(u, v)` with `u < v` becomes an arc from the exit of `u`
//! to the entry of `v` of capacity one and cost zero. Two units of flow from the entry of
//! the westmost to the exit of the eastmost city correspond to two disjoint west-to-east
//! paths, and the cost of the flow is the number of cities on them (with both endpoints
//! counted twice).

use std::collections::VecDeque;

use log::{debug, trace};

use super::*;
use crate::{
    algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm},
    utils::NodeMarker,
};

pub type Capacity = u32;
pub type Cost = i64;
pub type EdgeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub target: Node,
    /// Remaining capacity in the residual network
    pub residual: Capacity,
    pub cost: Cost,
}

/// Residual network stored as an arena of edges. Each arc is stored next to its reverse
/// arc, i.e. the partner of edge `e` is `e ^ 1`.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    pub fn new(number_of_nodes: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); number_of_nodes],
        }
    }

    pub fn number_of_nodes(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of stored edges including reverse arcs
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Adds the arc `(u, v)` and its reverse arc with capacity zero and negated cost.
    /// Returns the id of the forward arc.
    pub fn add_arc(&mut self, u: Node, v: Node, capacity: Capacity, cost: Cost) -> EdgeId {
        let id = self.edges.len();
        debug_assert!(id % 2 == 0);

        self.edges.push(FlowEdge {
            target: v,
            residual: capacity,
            cost,
        });
        self.outgoing[u as usize].push(id);

        self.edges.push(FlowEdge {
            target: u,
            residual: 0,
            cost: -cost,
        });
        self.outgoing[v as usize].push(id + 1);

        id
    }

    pub fn edge(&self, e: EdgeId) -> &FlowEdge {
        &self.edges[e]
    }

    pub fn partner(e: EdgeId) -> EdgeId {
        e ^ 1
    }

    /// Outgoing edges of `u` (including reverse arcs), most recently added first
    pub fn out_edges(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing[u as usize].iter().rev().copied()
    }

    /// Pushes `amount` units along `e`
    fn push(&mut self, e: EdgeId, amount: Capacity) {
        debug_assert!(self.edges[e].residual >= amount);
        self.edges[e].residual -= amount;
        self.edges[Self::partner(e)].residual += amount;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowSummary {
    pub flow: Capacity,
    pub cost: Cost,
    pub augmentations: usize,
}

/// Successive longest augmenting paths. Each step searches one path with a queue-based
/// Bellman-Ford relaxation (reverse arcs carry negative cost) and pushes its bottleneck.
pub struct LongestPathAugmenter<'a> {
    network: &'a mut FlowNetwork,
    source: Node,
    sink: Node,
    summary: FlowSummary,
    completed: bool,

    distance: Vec<Option<Cost>>,
    bottleneck: Vec<Capacity>,
    predecessor: Vec<Option<EdgeId>>,
    in_queue: NodeMarker,
}

impl<'a> LongestPathAugmenter<'a> {
    pub fn new(network: &'a mut FlowNetwork, source: Node, sink: Node) -> Self {
        let n = network.number_of_nodes();
        Self {
            network,
            source,
            sink,
            summary: FlowSummary::default(),
            completed: false,
            distance: vec![None; n],
            bottleneck: vec![0; n],
            predecessor: vec![None; n],
            in_queue: NodeMarker::new(n),
        }
    }

    /// Computes the most expensive path from source to every node in the residual network;
    /// returns *true* if the sink is reachable
    fn find_augmenting_path(&mut self) -> bool {
        self.distance.fill(None);
        self.predecessor.fill(None);
        self.in_queue.reset();

        let source = self.source as usize;
        self.distance[source] = Some(0);
        self.bottleneck[source] = Capacity::MAX;
        self.in_queue.mark(self.source);

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            self.in_queue.unmark(u);
            let Some(dist_u) = self.distance[u as usize] else {
                continue;
            };

            for e in self.network.out_edges(u) {
                let edge = *self.network.edge(e);
                if edge.residual == 0 {
                    continue;
                }

                let v = edge.target as usize;
                let candidate = dist_u + edge.cost;
                if self.distance[v].is_some_and(|d| d >= candidate) {
                    continue;
                }

                self.distance[v] = Some(candidate);
                self.predecessor[v] = Some(e);
                self.bottleneck[v] = self.bottleneck[u as usize].min(edge.residual);

                if self.in_queue.try_mark(edge.target) {
                    queue.push_back(edge.target);
                }
            }
        }

        self.distance[self.sink as usize].is_some()
    }

    fn augment(&mut self) {
        let sink = self.sink as usize;
        let (Some(gain), amount) = (self.distance[sink], self.bottleneck[sink]) else {
            return;
        };

        self.summary.flow += amount;
        self.summary.cost += amount as Cost * gain;
        self.summary.augmentations += 1;
        trace!("Augment {amount} unit(s) with gain {gain}");

        let mut v = self.sink;
        while v != self.source {
            let Some(e) = self.predecessor[v as usize] else {
                break;
            };
            self.network.push(e, amount);
            v = self.network.edge(FlowNetwork::partner(e)).target;
        }
    }
}

impl IterativeAlgorithm<FlowSummary> for LongestPathAugmenter<'_> {
    fn execute_step(&mut self) {
        if self.find_augmenting_path() {
            self.augment();
        } else {
            self.completed = true;
        }
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn best_known_solution(&mut self) -> Option<FlowSummary> {
        Some(self.summary)
    }
}

impl TerminatingIterativeAlgorithm<FlowSummary> for LongestPathAugmenter<'_> {}

/// The split-node network of a [`CityGraph`] with `n` cities
pub struct TwinRouteNetwork {
    network: FlowNetwork,
    n: Node,
}

impl TwinRouteNetwork {
    pub fn new(graph: &CityGraph) -> Self {
        let n = graph.number_of_nodes();
        let mut network = FlowNetwork::new(2 * n as usize + 1);

        for u in 2..n {
            network.add_arc(u, u + n, 1, 1);
        }
        network.add_arc(1, 1 + n, 2, 1);
        network.add_arc(n, 2 * n, 2, 1);

        for &Edge(u, v) in graph.edges() {
            debug_assert!(u < v);
            network.add_arc(u + n, v, 1, 0);
        }

        Self { network, n }
    }

    pub fn source(&self) -> Node {
        1
    }

    pub fn sink(&self) -> Node {
        2 * self.n
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn maximize(&mut self) -> FlowSummary {
        let (source, sink) = (self.source(), self.sink());
        LongestPathAugmenter::new(&mut self.network, source, sink)
            .run_to_completion()
            .unwrap_or_default()
    }

    fn exit_of(&self, city: Node) -> Node {
        city + self.n
    }

    fn city_of_exit(&self, node: Node) -> Node {
        node - self.n
    }

    /// Arcs out of `node` that lead into a city and are saturated by the flow
    fn saturated_successors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.network.out_edges(node).filter_map(|e| {
            let edge = self.network.edge(e);
            (edge.residual == 0 && (1..=self.n).contains(&edge.target))
                .then(|| self.exit_of(edge.target))
        })
    }

    /// Reads the tour off a settled flow of value two: first the outbound leg by following
    /// one saturated arc per city, then the remaining saturated paths in post-order which
    /// yields the return leg from east to west.
    fn extract_stops(&self) -> Vec<Node> {
        let mut visited = NodeMarker::new(self.network.number_of_nodes());
        let mut stops = Vec::with_capacity(self.n as usize + 1);

        let start = self.exit_of(1);
        let mut current = start;
        loop {
            visited.mark(current);
            stops.push(self.city_of_exit(current));

            match self
                .saturated_successors(current)
                .find(|&next| !visited.is_marked(next))
            {
                Some(next) => current = next,
                None => break,
            }
        }

        self.collect_return_leg(start, &mut visited, &mut stops);
        stops
    }

    fn collect_return_leg(&self, node: Node, visited: &mut NodeMarker, stops: &mut Vec<Node>) {
        for next in self.saturated_successors(node) {
            if visited.try_mark(next) {
                self.collect_return_leg(next, visited, stops);
            }
        }
        stops.push(self.city_of_exit(node));
    }
}

/// Node-split maximum-cost flow with queue-based longest augmenting paths
#[derive(Clone, Copy, Debug, Default)]
pub struct MinCostFlow;

impl TwinRouteSolver for MinCostFlow {
    fn name(&self) -> &'static str {
        "flow"
    }

    fn solve(&self, graph: &CityGraph) -> Option<Tour> {
        let n = graph.number_of_nodes();
        if n < 2 {
            return None;
        }

        let mut network = TwinRouteNetwork::new(graph);
        let summary = network.maximize();
        debug!(
            "Flow {} of cost {} after {} augmentations on {} nodes / {} arcs",
            summary.flow,
            summary.cost,
            summary.augmentations,
            network.network().number_of_nodes(),
            network.network().number_of_edges() / 2
        );

        match summary.flow {
            2 => {
                let coverage = NumCities::try_from(summary.cost - 2).ok()?;
                let stops = network.extract_stops();
                debug_assert_eq!(stops.len(), coverage as usize + 1);
                Some(Tour::new(coverage, stops))
            }
            1 if graph.has_direct_route() => Some(Tour::new(2, vec![1, n, 1])),
            _ => None,
        }
    }
}
