use crate::cell::Cell;
use crate::fringe::{ScanFringe, TieBreak};
use crate::grid::Grid;
use crate::point::euclidean_distance;
use crate::solver::GridSolver;

/// A* with unit step cost and the straight-line distance to the goal as heuristic. The fringe
/// cell of smallest `f = g + h` is expanded next; among equal values the one discovered first.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Fringe = ScanFringe;

    fn name(&self) -> &'static str {
        "A*"
    }
    fn fringe(&self) -> ScanFringe {
        ScanFringe::new(Cell::f, TieBreak::First)
    }
    fn discover(&self, grid: &mut Grid, current: usize, neighbour: usize) {
        if let Some(goal) = grid.goal() {
            let cell = grid.cell_mut(neighbour);
            cell.h = euclidean_distance(&cell.point(), &goal);
        }
        let g = grid.cell(current).g + 1;
        grid.cell_mut(neighbour).g = g;
    }
}
