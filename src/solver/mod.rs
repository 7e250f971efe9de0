pub mod dp;
pub mod flow;
pub mod tour;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::graph::*;

pub use dp::DynamicProgramming;
pub use flow::{FlowNetwork, MinCostFlow, TwinRouteNetwork};
pub use tour::Tour;

/// Computes a maximum-coverage twin route of a [`CityGraph`].
///
/// Implementations keep all working state local to [`TwinRouteSolver::solve`], so a solver
/// may be shared freely and repeated calls are independent.
pub trait TwinRouteSolver {
    fn name(&self) -> &'static str;

    /// Returns an optimal tour or `None` if no twin route exists
    fn solve(&self, graph: &CityGraph) -> Option<Tour>;
}

/// Selects one of the interchangeable solvers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Dp,
    Flow,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Dp, Strategy::Flow];

    pub fn solver(self) -> &'static dyn TwinRouteSolver {
        match self {
            Strategy::Dp => &DynamicProgramming,
            Strategy::Flow => &MinCostFlow,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.solver().name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dp" => Ok(Strategy::Dp),
            "flow" | "mcmf" => Ok(Strategy::Flow),
            _ => Err(format!("unknown strategy `{s}`; expected `dp` or `flow`")),
        }
    }
}
