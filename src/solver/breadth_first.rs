use crate::fringe::QueueFringe;
use crate::solver::GridSolver;

/// Expands cells in the order they were discovered, which yields a route with the fewest steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    type Fringe = QueueFringe;

    fn name(&self) -> &'static str {
        "Breadth-first"
    }
    fn fringe(&self) -> QueueFringe {
        QueueFringe::default()
    }
}
