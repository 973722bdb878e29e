use crate::fringe::StackFringe;
use crate::solver::GridSolver;

/// Expands the most recently discovered cell first. Finds some path, not necessarily a short one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl GridSolver for DepthFirstSolver {
    type Fringe = StackFringe;

    fn name(&self) -> &'static str {
        "Depth-first"
    }
    fn fringe(&self) -> StackFringe {
        StackFringe::default()
    }
}
