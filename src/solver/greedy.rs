use crate::cell::Cell;
use crate::fringe::{ScanFringe, TieBreak};
use crate::grid::Grid;
use crate::point::euclidean_distance;
use crate::solver::GridSolver;

/// Greedy best-first search: always expands the fringe cell closest to the goal in straight-line
/// distance. Among equally close cells the one discovered last is taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    type Fringe = ScanFringe;

    fn name(&self) -> &'static str {
        "Greedy"
    }
    fn fringe(&self) -> ScanFringe {
        ScanFringe::new(Cell::h, TieBreak::Last)
    }
    fn discover(&self, grid: &mut Grid, _current: usize, neighbour: usize) {
        if let Some(goal) = grid.goal() {
            let cell = grid.cell_mut(neighbour);
            cell.h = euclidean_distance(&cell.point(), &goal);
        }
    }
}
