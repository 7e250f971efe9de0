pub mod city_graph;
pub mod edge;
pub mod gnp;

/// City index; `1..=n` from west to east, `0` is the virtual start next to the westmost city
pub type Node = u32;
pub type NumCities = Node;
pub type NumRoutes = u64;

use std::ops::RangeInclusive;

pub use city_graph::*;
pub use edge::*;
pub use gnp::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    type VertexIter<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    /// Returns the number of cities of the graph (the virtual start is not counted)
    fn number_of_nodes(&self) -> NumCities;

    /// Return the number of cities as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over the city indices `1..=n`
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns the index range of all cities. In contrast to self.vertices(), the range does
    /// not borrow self and hence may be used where additional mutable references are needed
    fn vertices_range(&self) -> RangeInclusive<Node> {
        1..=self.number_of_nodes()
    }

    /// Returns true if the graph has no cities (and thus no routes)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of undirected routes of the graph
    fn number_of_edges(&self) -> NumRoutes;
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if there is a direct route between u and v
    fn has_edge(&self, u: Node, v: Node) -> bool;
}
