//! Fringe disciplines used by the solvers. Entries are indices into the grid's cell storage and
//! the same index may be present more than once; stale entries are discarded by the search loop
//! when they come out, not here.
use crate::cell::Cell;
use std::collections::VecDeque;

pub trait Fringe {
    fn push(&mut self, ix: usize);
    /// Removes the next entry to expand. `cells` gives access to the current cost values for
    /// fringes that order by them.
    fn pop(&mut self, cells: &[Cell]) -> Option<usize>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Clone, Debug, Default)]
pub struct StackFringe(Vec<usize>);

impl Fringe for StackFringe {
    fn push(&mut self, ix: usize) {
        self.0.push(ix);
    }
    fn pop(&mut self, _: &[Cell]) -> Option<usize> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct QueueFringe(VecDeque<usize>);

impl Fringe for QueueFringe {
    fn push(&mut self, ix: usize) {
        self.0.push_back(ix);
    }
    fn pop(&mut self, _: &[Cell]) -> Option<usize> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Which of several equally minimal entries a [ScanFringe] hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// The earliest inserted candidate wins.
    First,
    /// The latest inserted candidate wins.
    Last,
}

/// Unordered list with a linear scan for the entry of minimal key. Keys are read from the cells
/// at extraction time, so a cell whose costs changed after it was pushed is ranked by its current
/// values. Removal keeps the remaining entries in insertion order, which the tie-break depends on.
#[derive(Clone, Debug)]
pub struct ScanFringe {
    entries: Vec<usize>,
    key: fn(&Cell) -> f64,
    ties: TieBreak,
}

impl ScanFringe {
    pub fn new(key: fn(&Cell) -> f64, ties: TieBreak) -> ScanFringe {
        ScanFringe {
            entries: Vec::new(),
            key,
            ties,
        }
    }
}

impl Fringe for ScanFringe {
    fn push(&mut self, ix: usize) {
        self.entries.push(ix);
    }
    fn pop(&mut self, cells: &[Cell]) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let mut best = 0;
        for i in 1..self.entries.len() {
            let best_key = (self.key)(&cells[self.entries[best]]);
            let key = (self.key)(&cells[self.entries[i]]);
            let replace = match self.ties {
                TieBreak::First => best_key > key,
                TieBreak::Last => best_key >= key,
            };
            if replace {
                best = i;
            }
        }
        Some(self.entries.remove(best))
    }
    fn len(&self) -> usize {
        self.entries.len()
    }
}
