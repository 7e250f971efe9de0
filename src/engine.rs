//! Entry point of the library: turns city names and routes into a [`RouteResult`].
//!
//! Every call builds its own [`CityGraph`] and solver state; nothing is shared between calls.

use std::io::BufRead;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    graph::*,
    io::{CityGraphReader, NO_SOLUTION},
    solver::{Strategy, Tour},
};

/// Outcome of one invocation. `NoSolution` is a regular result, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteResult {
    /// City names of the closed tour; first and last are the westmost city
    Route(Vec<String>),
    NoSolution,
}

impl RouteResult {
    pub fn from_tour(tour: Option<Tour>, graph: &CityGraph) -> Self {
        match tour {
            Some(tour) => RouteResult::Route(tour.names(graph)),
            None => RouteResult::NoSolution,
        }
    }

    pub fn is_solution(&self) -> bool {
        matches!(self, RouteResult::Route(_))
    }

    /// Number of distinct cities on the tour
    pub fn coverage(&self) -> Option<usize> {
        match self {
            RouteResult::Route(names) => Some(names.len().saturating_sub(1)),
            RouteResult::NoSolution => None,
        }
    }

    /// Renders the result protocol line by line
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            RouteResult::Route(names) => {
                let mut lines = Vec::with_capacity(names.len() + 1);
                lines.push(names.len().saturating_sub(1).to_string());
                lines.extend(names.iter().cloned());
                lines
            }
            RouteResult::NoSolution => vec![NO_SOLUTION.to_string()],
        }
    }
}

/// Runs exactly one solving [`Strategy`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    strategy: Strategy,
}

impl Engine {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn solve_graph(&self, graph: &CityGraph) -> RouteResult {
        info!(
            "Solve instance with {} cities and {} routes using {}",
            graph.number_of_nodes(),
            graph.number_of_edges(),
            self.strategy
        );

        let tour = self.strategy.solver().solve(graph);
        debug_assert!(tour.as_ref().is_none_or(|t| t.check(graph).is_ok()));

        match &tour {
            Some(tour) => info!("Found twin route covering {} cities", tour.coverage()),
            None => info!("No twin route exists"),
        }

        RouteResult::from_tour(tour, graph)
    }

    /// Solves the instance given by city names (west to east) and pairs of city names
    pub fn compute_optimal_route<I, S, E, A, B>(&self, cities: I, routes: E) -> Result<RouteResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let graph = CityGraph::try_new(cities, routes)?;
        Ok(self.solve_graph(&graph))
    }

    /// Solves an instance given in the line-oriented text format
    pub fn run_batch<R: BufRead>(&self, reader: R) -> Result<RouteResult> {
        let graph = CityGraph::try_read_instance(reader)?;
        Ok(self.solve_graph(&graph))
    }

    /// Like [`Engine::run_batch`] but renders the outcome as output lines; a malformed input
    /// yields a single line with the error message and no partial output.
    pub fn run_text(&self, input: &str) -> Vec<String> {
        match self.run_batch(input.as_bytes()) {
            Ok(result) => result.to_lines(),
            Err(e) => vec![e.to_string()],
        }
    }
}

/// Solves the instance with the default strategy
pub fn compute_optimal_route<I, S, E, A, B>(cities: I, routes: E) -> Result<RouteResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    E: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    Engine::default().compute_optimal_route(cities, routes)
}
