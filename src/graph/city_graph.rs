use std::ops::RangeInclusive;

use fxhash::FxHashMap;
use log::warn;

use super::*;
use crate::errors::{GraphViolation, InvariantCheck, Result, RouteError};

/// Cities in west-to-east order together with the symmetric direct-route relation.
///
/// Cities are indexed `1..=n`; index `0` is a virtual start that is adjacent to every
/// neighbor of the westmost city. It allows the dynamic program to seed both travellers
/// at the westmost city without special casing the first move.
#[derive(Clone, Debug)]
pub struct CityGraph {
    names: Vec<String>,
    indices: FxHashMap<String, Node>,
    road: Vec<bool>,
    edges: Vec<Edge>,
}

impl CityGraph {
    /// Creates a graph without routes. Fails if a name is declared twice.
    pub fn with_cities<I, S>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = cities.into_iter().map(Into::into).collect();

        // the adjacency matrix is dense
        let too_many = || RouteError::TooManyCities(names.len());
        if Node::try_from(names.len()).is_err() {
            return Err(too_many());
        }
        let dim = names.len() + 1;
        let cells = dim.checked_mul(dim).ok_or_else(too_many)?;

        let mut road = Vec::new();
        road.try_reserve_exact(cells).map_err(|_| too_many())?;
        road.resize(cells, false);

        let mut indices = FxHashMap::default();
        indices.reserve(names.len());
        for (i, name) in names.iter().enumerate() {
            if indices.insert(name.clone(), i as Node + 1).is_some() {
                return Err(RouteError::DuplicateCity(name.clone()));
            }
        }

        Ok(Self {
            names,
            indices,
            road,
            edges: Vec::new(),
        })
    }

    /// Creates a graph from city names (west to east) and pairs of city names
    pub fn try_new<I, S, E, A, B>(cities: I, routes: E) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::with_cities(cities)?;
        for (a, b) in routes {
            graph.add_route(a.as_ref(), b.as_ref())?;
        }
        Ok(graph)
    }

    /// Adds a direct route between two named cities. Returns *true* exactly if the route
    /// was not present previously.
    pub fn add_route(&mut self, from: &str, to: &str) -> Result<bool> {
        let u = self.try_index_of(from)?;
        let v = self.try_index_of(to)?;
        Ok(self.try_add_edge(Edge(u, v)))
    }

    /// Adds the undirected route `edge`. Returns *true* exactly if the route was not present
    /// previously; self-loops and endpoints that are not city indices are dropped.
    pub fn try_add_edge(&mut self, edge: Edge) -> bool {
        let edge = edge.normalized();
        let Edge(u, v) = edge;
        if u < 1 || v > self.number_of_nodes() {
            warn!(
                "Ignore route {edge:?} with an endpoint outside of 1..={}",
                self.number_of_nodes()
            );
            return false;
        }

        if edge.is_loop() {
            warn!("Ignore self-loop at {}", self.names[u as usize - 1]);
            return false;
        }

        if self.has_edge(u, v) {
            return false;
        }

        self.set_adjacent(u, v);
        if u == 1 {
            self.set_adjacent(0, v);
        }

        self.edges.push(Edge(u, v));
        true
    }

    /// Returns *true* if `u` and `v` are adjacent, including the virtual start `0`
    pub fn is_adjacent(&self, u: Node, v: Node) -> bool {
        self.road[self.cell(u, v)]
    }

    /// All normalized routes in order of first insertion
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn name_of(&self, u: Node) -> Option<&str> {
        let i = (u as usize).checked_sub(1)?;
        self.names.get(i).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<Node> {
        self.indices.get(name).copied()
    }

    pub fn try_index_of(&self, name: &str) -> Result<Node> {
        self.index_of(name)
            .ok_or_else(|| RouteError::UnknownCity(name.to_string()))
    }

    /// City names from west to east
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn westmost(&self) -> Node {
        1
    }

    pub fn eastmost(&self) -> Node {
        self.number_of_nodes()
    }

    /// Returns *true* if the westmost and eastmost city are directly connected
    pub fn has_direct_route(&self) -> bool {
        self.len() >= 2 && self.has_edge(self.westmost(), self.eastmost())
    }

    fn cell(&self, u: Node, v: Node) -> usize {
        let dim = self.names.len() + 1;
        debug_assert!((u as usize) < dim && (v as usize) < dim);
        u as usize * dim + v as usize
    }

    fn set_adjacent(&mut self, u: Node, v: Node) {
        let (uv, vu) = (self.cell(u, v), self.cell(v, u));
        self.road[uv] = true;
        self.road[vu] = true;
    }
}

impl Default for CityGraph {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            indices: FxHashMap::default(),
            road: vec![false; 1],
            edges: Vec::new(),
        }
    }
}

impl GraphNodeOrder for CityGraph {
    type VertexIter<'a> = RangeInclusive<Node>;

    fn number_of_nodes(&self) -> NumCities {
        self.names.len() as NumCities
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        self.vertices_range()
    }
}

impl GraphEdgeOrder for CityGraph {
    fn number_of_edges(&self) -> NumRoutes {
        self.edges.len() as NumRoutes
    }
}

impl AdjacencyTest for CityGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        u >= 1 && v >= 1 && self.is_adjacent(u, v)
    }
}

impl InvariantCheck<GraphViolation> for CityGraph {
    fn is_correct(&self) -> std::result::Result<(), GraphViolation> {
        let n = self.number_of_nodes();
        for u in 0..=n {
            if self.is_adjacent(u, u) {
                return Err(GraphViolation::SelfLoop(u));
            }
            for v in (u + 1)..=n {
                if self.is_adjacent(u, v) != self.is_adjacent(v, u) {
                    return Err(GraphViolation::Asymmetric(u, v));
                }
            }
        }

        if let Some(v) = (1..=n).find(|&v| self.is_adjacent(0, v) != self.has_edge(1, v)) {
            return Err(GraphViolation::DanglingVirtualStart(v));
        }

        if let Some(&edge) = self
            .edges
            .iter()
            .find(|e| !e.is_normalized() || !self.has_edge(e.0, e.1))
        {
            return Err(GraphViolation::UnlistedRoute(edge.0, edge.1));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn lookup_names() {
        let graph = CityGraph::with_cities(["A", "B", "C"]).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.index_of("B"), Some(2));
        assert_eq!(graph.name_of(3), Some("C"));
        assert_eq!(graph.name_of(0), None);
        assert_eq!(graph.name_of(4), None);
        assert!(matches!(
            graph.try_index_of("D"),
            Err(RouteError::UnknownCity(name)) if name == "D"
        ));
        assert_eq!(graph.vertices().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_city() {
        assert!(matches!(
            CityGraph::with_cities(["A", "B", "A"]),
            Err(RouteError::DuplicateCity(name)) if name == "A"
        ));
    }

    #[test]
    fn virtual_start() {
        let graph =
            CityGraph::try_new(["A", "B", "C", "D"], [("B", "A"), ("B", "C"), ("D", "C")])
                .unwrap();

        assert!(graph.is_adjacent(0, 2));
        assert!(graph.is_adjacent(2, 0));
        assert!(!graph.is_adjacent(0, 3));
        assert!(!graph.is_adjacent(0, 4));
        assert!(!graph.is_adjacent(0, 1));
        assert!(!graph.has_edge(0, 2));
        assert!(graph.is_correct().is_ok());
    }

    #[test]
    fn duplicate_and_loop_routes() {
        let mut graph = CityGraph::with_cities(["A", "B", "C"]).unwrap();
        assert!(graph.add_route("A", "C").unwrap());
        assert!(!graph.add_route("C", "A").unwrap());
        assert!(!graph.add_route("B", "B").unwrap());
        assert!(graph.add_route("C", "B").unwrap());

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edges(), &[Edge(1, 3), Edge(2, 3)]);
        assert!(graph.has_direct_route());
        assert!(!graph.has_edge(2, 2));
        assert!(graph.is_correct().is_ok());
    }

    #[test]
    fn out_of_range_edge() {
        let mut graph = CityGraph::with_cities(["A", "B"]).unwrap();
        assert!(!graph.try_add_edge(Edge(0, 2)));
        assert!(!graph.try_add_edge(Edge(1, 3)));
        assert!(graph.try_add_edge(Edge(2, 1)));
        assert_eq!(graph.edges(), &[Edge(1, 2)]);
        assert!(graph.is_correct().is_ok());
    }

    #[test]
    fn route_list_matches_matrix() {
        let mut graph = CityGraph::try_new(["A", "B", "C"], [("A", "C")]).unwrap();
        graph.edges.push(Edge(3, 2));
        assert_eq!(graph.is_correct(), Err(GraphViolation::UnlistedRoute(3, 2)));
    }

    #[test]
    fn unknown_route_endpoint() {
        let result = CityGraph::try_new(["A", "B"], [("A", "Z")]);
        assert!(matches!(result, Err(RouteError::UnknownCity(name)) if name == "Z"));
    }

    #[test]
    fn empty() {
        let graph = CityGraph::default();
        assert!(graph.is_empty());
        assert!(!graph.has_direct_route());
        assert!(graph.is_correct().is_ok());
    }
}
