use crate::cell::Cell;
use crate::fringe::Fringe;
use crate::grid::Grid;
use crate::point::Point;
use core::fmt;
use log::{debug, info, warn};

pub mod astar;
pub mod breadth_first;
pub mod depth_first;
pub mod greedy;

use astar::AstarSolver;
use breadth_first::BreadthFirstSolver;
use depth_first::DepthFirstSolver;
use greedy::GreedySolver;

/// Result of one search call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    /// Cells from start to goal, both included. Empty if the goal could not be reached.
    pub path: Vec<Cell>,
    /// Number of cells expanded before the search ended.
    pub traversed: usize,
    /// Expanded cells in visiting order. Only filled when the grid traces visits.
    pub visit_order: Vec<Point>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    pub fn len(&self) -> usize {
        self.path.len()
    }
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
    pub fn points(&self) -> Vec<Point> {
        self.path.iter().map(Cell::point).collect()
    }
}

/// A search strategy over a [Grid]. Implementors choose the fringe discipline and the cost
/// bookkeeping done when a neighbour is discovered; the expansion loop itself is shared.
pub trait GridSolver {
    type Fringe: Fringe;

    fn name(&self) -> &'static str;

    fn fringe(&self) -> Self::Fringe;

    /// Called for every unvisited neighbour of `current` right after its parent link has been
    /// pointed at `current` and before it is pushed onto the fringe.
    fn discover(&self, _grid: &mut Grid, _current: usize, _neighbour: usize) {}

    /// Runs the search from the grid's start until a goal cell is expanded or the fringe runs
    /// dry. Cells already visited are discarded when they come off the fringe. The grid's search
    /// bookkeeping is cleared again before returning, whatever the outcome.
    fn solve(&self, grid: &mut Grid) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();
        let Some(start) = grid.start().and_then(|p| grid.index_of(p.x, p.y)) else {
            warn!("{}: no start placed on the grid", self.name());
            return outcome;
        };
        if grid.goal().is_none() {
            warn!("{}: no goal placed on the grid", self.name());
            return outcome;
        }

        let mut fringe = self.fringe();
        fringe.push(start);
        let mut reached = None;
        while let Some(current) = fringe.pop(grid.storage()) {
            if grid.cell(current).visited {
                continue;
            }
            grid.cell_mut(current).visited = true;
            outcome.traversed += 1;
            if grid.trace_visits {
                let p = grid.cell(current).point();
                debug!("{}: visiting {}", self.name(), p);
                outcome.visit_order.push(p);
            }
            if grid.cell(current).goal {
                reached = Some(current);
                break;
            }
            for neighbour in grid.neighbor_indices(current) {
                if !grid.cell(neighbour).visited {
                    grid.cell_mut(neighbour).parent = Some(current);
                    self.discover(grid, current, neighbour);
                    fringe.push(neighbour);
                }
            }
        }

        match reached {
            Some(goal) => {
                outcome.path = grid.reconstruct_path(goal);
                info!(
                    "{}: path of {} cells found, {} cells traversed",
                    self.name(),
                    outcome.path.len(),
                    outcome.traversed
                );
            }
            None => info!(
                "{}: no path found, {} cells traversed",
                self.name(),
                outcome.traversed
            ),
        }
        grid.reset_search_state();
        outcome
    }
}

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::DepthFirst => DepthFirstSolver.name(),
            Algorithm::BreadthFirst => BreadthFirstSolver.name(),
            Algorithm::Greedy => GreedySolver.name(),
            Algorithm::AStar => AstarSolver.name(),
        };
        write!(f, "{}", name)
    }
}

impl Grid {
    pub fn search(&mut self, algorithm: Algorithm) -> SearchOutcome {
        match algorithm {
            Algorithm::DepthFirst => DepthFirstSolver.solve(self),
            Algorithm::BreadthFirst => BreadthFirstSolver.solve(self),
            Algorithm::Greedy => GreedySolver.solve(self),
            Algorithm::AStar => AstarSolver.solve(self),
        }
    }
    pub fn depth_first_search(&mut self) -> SearchOutcome {
        self.search(Algorithm::DepthFirst)
    }
    pub fn breadth_first_search(&mut self) -> SearchOutcome {
        self.search(Algorithm::BreadthFirst)
    }
    pub fn greedy_search(&mut self) -> SearchOutcome {
        self.search(Algorithm::Greedy)
    }
    pub fn astar_search(&mut self) -> SearchOutcome {
        self.search(Algorithm::AStar)
    }
}
