use std::marker::PhantomData;

use num::PrimInt;

use crate::graph::Node;

/// Dense per-node flags (queue membership, visitation, ...) owned by a single solver run
#[derive(Clone, Default, Debug)]
pub struct Marker<I: PrimInt> {
    data: Vec<bool>,
    _index: PhantomData<I>,
}

pub type NodeMarker = Marker<Node>;

impl<I: PrimInt> Marker<I> {
    #[inline(always)]
    pub fn new(n: usize) -> Self {
        Marker {
            data: vec![false; n],
            _index: Default::default(),
        }
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|i| *i = false);
    }

    #[inline(always)]
    pub fn is_marked(&self, index: I) -> bool {
        self.data[Self::position(index)]
    }

    #[inline(always)]
    pub fn mark(&mut self, index: I) {
        self.data[Self::position(index)] = true;
    }

    #[inline(always)]
    pub fn unmark(&mut self, index: I) {
        self.data[Self::position(index)] = false;
    }

    /// Marks `index` and returns *true* if it was unmarked before
    #[inline(always)]
    pub fn try_mark(&mut self, index: I) -> bool {
        let was_marked = self.is_marked(index);
        self.mark(index);
        !was_marked
    }

    #[inline(always)]
    fn position(index: I) -> usize {
        index.to_usize().unwrap_or(usize::MAX)
    }
}
