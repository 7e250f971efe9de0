use super::*;

pub trait EdgeOps {
    fn normalized(&self) -> Self;
    fn is_normalized(&self) -> bool;
    fn is_loop(&self) -> bool;
}

/// An undirected direct route between two city indices
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// The western endpoint (smaller index)
    pub fn west(&self) -> Node {
        self.0.min(self.1)
    }

    /// The eastern endpoint (larger index)
    pub fn east(&self) -> Node {
        self.0.max(self.1)
    }
}

impl EdgeOps for Edge {
    fn normalized(&self) -> Self {
        Edge(self.west(), self.east())
    }

    fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}
