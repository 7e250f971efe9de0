pub mod algorithm;
pub mod api;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod solver;
pub mod utils;

pub mod prelude {
    pub use super::engine::*;
    pub use super::errors::{InvariantCheck, RouteError};
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::solver::*;
}

#[cfg(test)]
mod testing;
