use std::error::Error;

use thiserror::Error;

use crate::graph::Node;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}

/// Failures while turning user input into a [`crate::graph::CityGraph`].
///
/// Observe that an instance without any qualifying twin route is *not* an error; it is
/// reported as [`crate::engine::RouteResult::NoSolution`].
#[derive(Debug, Error)]
pub enum RouteError {
    /// The header could not be parsed or fewer lines than declared were supplied
    #[error("Invalid input: {0}")]
    MalformedCount(String),

    #[error("Invalid city name: `{0}` is not a declared city")]
    UnknownCity(String),

    #[error("Invalid city name: `{0}` is declared more than once")]
    DuplicateCity(String),

    #[error("Invalid input: {0} cities exceed the supported instance size")]
    TooManyCities(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("adjacency of {0} and {1} is not symmetric")]
    Asymmetric(Node, Node),

    #[error("self-loop at {0}")]
    SelfLoop(Node),

    #[error("route list entry ({0}, {1}) is not a normalized edge of the matrix")]
    UnlistedRoute(Node, Node),

    #[error("virtual start is adjacent to {0} but {0} is not adjacent to the westmost city")]
    DanglingVirtualStart(Node),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourViolation {
    #[error("tour has only {0} stops")]
    TooShort(usize),

    #[error("tour does not start and end at the westmost city")]
    NotClosed,

    #[error("no direct route between consecutive stops {0} and {1}")]
    NotAdjacent(Node, Node),

    #[error("stop {0} is visited more than once")]
    Revisited(Node),

    #[error("outbound leg is not strictly west-to-east")]
    NotMonotone,

    #[error("tour covers {stops} cities but reports {reported}")]
    CoverageMismatch { stops: usize, reported: usize },
}
