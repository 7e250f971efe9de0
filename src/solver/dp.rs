//! Twin routes by dynamic programming over pairs of traveller positions.
//!
//! `best(x, y)` is the number of distinct cities two travellers can cover when traveller A
//! stands at `x` and traveller B at `y`, counted backwards towards the shared start: A starts
//! at the virtual start `0` and B at the westmost city `1`. The first move of A from `0`
//! models leaving the westmost city, so every move adds exactly one new city and the final
//! state `(n, n)` counts the eastmost city twice and the westmost city never, which amounts
//! to the number of distinct cities of the tour.

use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// `None` represents an unreachable state (negative infinity)
type Score = Option<NumCities>;

/// Symmetric memo of evaluated states
struct DpTable {
    dim: usize,
    cells: Vec<Option<Score>>,
}

impl DpTable {
    fn new(n: NumCities) -> Self {
        let dim = n as usize + 1;
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    fn get(&self, x: Node, y: Node) -> Option<Score> {
        self.cells[self.cell(x, y)]
    }

    /// Score of an evaluated state; unevaluated states are treated as unreachable
    fn score(&self, x: Node, y: Node) -> Score {
        self.get(x, y).flatten()
    }

    fn set(&mut self, x: Node, y: Node, score: Score) {
        let cell = self.cell(x, y);
        self.cells[cell] = Some(score);
    }

    fn cell(&self, x: Node, y: Node) -> usize {
        let (x, y) = (x.min(y) as usize, x.max(y) as usize);
        x * self.dim + y
    }

    fn number_of_evaluated(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Per-call state of the dynamic program
struct DpRun<'a> {
    graph: &'a CityGraph,
    table: DpTable,
}

impl<'a> DpRun<'a> {
    fn new(graph: &'a CityGraph) -> Self {
        Self {
            graph,
            table: DpTable::new(graph.number_of_nodes()),
        }
    }

    fn is_base(x: Node, y: Node) -> bool {
        x + y == 1
    }

    fn best(&mut self, x: Node, y: Node) -> Score {
        if let Some(score) = self.table.get(x, y) {
            return score;
        }

        if Self::is_base(x, y) {
            self.table.set(x, y, Some(0));
            return Some(0);
        }

        let mut score: Score = None;
        for i in 0..x.min(y) {
            if self.graph.is_adjacent(i, x) {
                score = score.max(self.best(i, y).map(|s| s + 1));
            }
            if self.graph.is_adjacent(i, y) {
                score = score.max(self.best(i, x).map(|s| s + 1));
            }
        }

        trace!("best({x}, {y}) = {score:?}");
        self.table.set(x, y, score);
        score
    }

    /// Walks back from `(n, n)` to the shared start, always taking the westmost predecessor
    /// that attains the optimum (traveller A before traveller B). Returns the positions of
    /// both travellers along the way.
    fn trace_back(&self) -> Option<(Vec<Node>, Vec<Node>)> {
        let n = self.graph.eastmost();
        let (mut x, mut y) = (n, n);
        let mut trace_a = Vec::new();
        let mut trace_b = Vec::new();

        loop {
            trace_a.push(x);
            trace_b.push(y);

            if Self::is_base(x, y) {
                return Some((trace_a, trace_b));
            }

            let wanted = self.table.score(x, y)?.checked_sub(1);
            let step = (0..x.min(y)).find_map(|i| {
                if self.graph.is_adjacent(i, x) && self.table.score(i, y) == wanted {
                    Some((i, y))
                } else if self.graph.is_adjacent(i, y) && self.table.score(x, i) == wanted {
                    Some((x, i))
                } else {
                    None
                }
            })?;

            (x, y) = step;
        }
    }
}

/// Memoized two-pointer recursion; deterministic tie-break by ascending predecessor index
#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicProgramming;

impl TwinRouteSolver for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn solve(&self, graph: &CityGraph) -> Option<Tour> {
        if graph.number_of_nodes() < 2 {
            return None;
        }

        let n = graph.eastmost();
        let mut run = DpRun::new(graph);
        let coverage = run.best(n, n);
        debug!(
            "DP optimum {coverage:?} after evaluating {} states",
            run.table.number_of_evaluated()
        );

        let coverage = coverage.filter(|&c| c > 0)?;
        let (trace_a, trace_b) = run.trace_back()?;
        debug!(
            "DP traces: A={:?} B={:?}",
            trace_a.iter().dedup().collect_vec(),
            trace_b.iter().dedup().collect_vec()
        );

        Some(Tour::from_legs(
            coverage,
            graph.westmost(),
            trace_a,
            trace_b,
        ))
    }
}
