use crate::cell::{Cell, Tile};
use crate::error::{GridError, Result};
use crate::point::{self, Point};
use crate::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION, WALL_PROBABILITY,
};
use core::fmt;
use grid_util::grid::{Grid as _, SimpleGrid};
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// [Grid] owns a row-major [SimpleGrid] of [Cell]s surrounded by a one cell wall border, together
/// with the designated start and goal. Parent links between cells are stored as indices into this
/// storage and never leave it.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
    pub(crate) trace_visits: bool,
}

/// A [DEFAULT_WIDTH] by [DEFAULT_HEIGHT] grid with start and goal placed from a fixed seed.
impl Default for Grid {
    fn default() -> Grid {
        let mut grid = Grid::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        grid.scatter_start_goal(&mut StdRng::seed_from_u64(DEFAULT_SEED));
        grid
    }
}

impl Grid {
    fn empty(width: usize, height: usize) -> Grid {
        let mut grid = Grid {
            cells: SimpleGrid::new(0, 0, Cell::new(0, 0)),
            start: None,
            goal: None,
            trace_visits: false,
        };
        grid.rebuild(width, height);
        grid
    }

    fn check_dimensions(width: usize, height: usize) -> Result<()> {
        let allowed = MIN_DIMENSION..=MAX_DIMENSION;
        if allowed.contains(&width) && allowed.contains(&height) {
            Ok(())
        } else {
            Err(GridError::InvalidDimensions { width, height })
        }
    }

    /// Creates a walled grid with a floor interior. The grid has no start or goal until they are
    /// placed with [Grid::set_start]/[Grid::set_goal] or [Grid::place_random_start_goal];
    /// searching it before then finds nothing.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        Grid::check_dimensions(width, height)?;
        Ok(Grid::empty(width, height))
    }

    /// Creates a walled grid and places start and goal at distinct random interior cells.
    pub fn new_random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        grid.place_random_start_goal(rng)?;
        Ok(grid)
    }

    /// Reinitializes every cell for the new dimensions: walls on the border, floor inside. Any
    /// previous start, goal and search state is discarded.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        Grid::check_dimensions(width, height)?;
        self.rebuild(width, height);
        Ok(())
    }

    fn rebuild(&mut self, width: usize, height: usize) {
        self.start = None;
        self.goal = None;
        self.cells = SimpleGrid::new(width, height, Cell::new(0, 0));
        for (y, x) in (0..height).cartesian_product(0..width) {
            self.cells.set(x, y, Cell::new(x as i32, y as i32));
        }
        self.reset_tiles();
    }

    fn is_border(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.width() as i32 - 1 || p.y == self.height() as i32 - 1
    }

    fn reset_tiles(&mut self) {
        for ix in 0..self.cells.values.len() {
            let tile = if self.is_border(self.cells.values[ix].point()) {
                Tile::Wall
            } else {
                Tile::Floor
            };
            self.cells.values[ix].tile = tile;
        }
    }

    fn interior_cells(&self) -> usize {
        self.width().saturating_sub(2) * self.height().saturating_sub(2)
    }

    fn random_interior_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(1..self.width() as i32 - 1),
            rng.gen_range(1..self.height() as i32 - 1),
        )
    }

    /// Moves start and goal to two distinct interior cells chosen uniformly at random. The goal is
    /// redrawn until it differs from the start.
    pub fn place_random_start_goal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.interior_cells() < 2 {
            return Err(GridError::InteriorTooSmall {
                width: self.width(),
                height: self.height(),
            });
        }
        self.scatter_start_goal(rng);
        Ok(())
    }

    /// Needs at least two interior cells.
    fn scatter_start_goal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = self.random_interior_point(rng);
        let mut goal = self.random_interior_point(rng);
        while goal == start {
            goal = self.random_interior_point(rng);
        }
        self.move_start(start);
        self.move_goal(goal);
        info!("Placed start at {} and goal at {}", start, goal);
    }

    /// Resets the tiles to border walls and floor, then turns every interior cell into a wall with
    /// probability [WALL_PROBABILITY]. The result may separate start from goal.
    pub fn pepper_walls<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset_tiles();
        for ix in 0..self.cells.values.len() {
            if !self.is_border(self.cells.values[ix].point()) && rng.gen_bool(WALL_PROBABILITY) {
                self.cells.values[ix].tile = Tile::Wall;
            }
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }

    /// Whether `0 <= x < width` and `0 <= y < height`.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.cells.point_in_bounds(Point::new(x, y))
    }

    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let p = Point::new(x, y);
        self.cells
            .point_in_bounds(p)
            .then(|| self.cells.get_ix_point(&p))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        self.index_of(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Cell storage in index order, as seen by the fringes.
    pub(crate) fn storage(&self) -> &[Cell] {
        &self.cells.values
    }
    pub(crate) fn cell(&self, ix: usize) -> &Cell {
        &self.cells.values[ix]
    }
    pub(crate) fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells.values[ix]
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|ix| self.cell(ix))
    }

    pub fn set_cell(&mut self, x: i32, y: i32, tile: Tile) -> Result<()> {
        let ix = self.checked_index(x, y)?;
        self.cell_mut(ix).tile = tile;
        Ok(())
    }

    /// Relocates the start flag. Leaves the grid untouched if the coordinate is out of bounds.
    pub fn set_start(&mut self, x: i32, y: i32) -> Result<()> {
        self.checked_index(x, y)?;
        self.move_start(Point::new(x, y));
        Ok(())
    }

    /// Relocates the goal flag. Leaves the grid untouched if the coordinate is out of bounds.
    pub fn set_goal(&mut self, x: i32, y: i32) -> Result<()> {
        self.checked_index(x, y)?;
        self.move_goal(Point::new(x, y));
        Ok(())
    }

    /// `to` must be in bounds.
    fn move_start(&mut self, to: Point) {
        if let Some(old) = self.start {
            let mut cell = self.cells.get_point(old);
            cell.start = false;
            self.cells.set_point(old, cell);
        }
        let mut cell = self.cells.get_point(to);
        cell.start = true;
        self.cells.set_point(to, cell);
        self.start = Some(to);
    }

    /// `to` must be in bounds.
    fn move_goal(&mut self, to: Point) {
        if let Some(old) = self.goal {
            let mut cell = self.cells.get_point(old);
            cell.goal = false;
            self.cells.set_point(old, cell);
        }
        let mut cell = self.cells.get_point(to);
        cell.goal = true;
        self.cells.set_point(to, cell);
        self.goal = Some(to);
    }

    pub fn trace_visits(&self) -> bool {
        self.trace_visits
    }
    /// Enables recording (and debug logging) of every visited cell during searches.
    pub fn set_trace_visits(&mut self, trace: bool) {
        self.trace_visits = trace;
    }

    /// The in-bounds neighbours of `(x, y)` that a search may step onto, in west, north, east,
    /// south order. A neighbour qualifies if it is floor or the goal. Out-of-bounds positions have
    /// no neighbours.
    pub fn neighbors(&self, x: i32, y: i32) -> SmallVec<[Point; 4]> {
        if !self.in_bounds(x, y) {
            return SmallVec::new();
        }
        point::wnes_neighborhood(&Point::new(x, y))
            .into_iter()
            .filter(|p| self.get_cell(p.x, p.y).is_some_and(Cell::is_passable))
            .collect()
    }

    pub(crate) fn neighbor_indices(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let p = self.cell(ix).point();
        self.neighbors(p.x, p.y)
            .into_iter()
            .filter_map(|n| self.index_of(n.x, n.y))
            .collect()
    }

    /// Straight-line distance between two in-bounds points.
    pub fn euclidean_distance(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<f64> {
        if self.in_bounds(x1, y1) && self.in_bounds(x2, y2) {
            Some(point::euclidean_distance(
                &Point::new(x1, y1),
                &Point::new(x2, y2),
            ))
        } else {
            None
        }
    }

    /// Taxicab distance between two in-bounds points. Not used by any of the searches.
    pub fn manhattan_distance(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<i32> {
        if self.in_bounds(x1, y1) && self.in_bounds(x2, y2) {
            Some(Point::new(x1, y1).manhattan_distance(&Point::new(x2, y2)))
        } else {
            None
        }
    }

    /// Clears `visited`, `parent`, `g` and `h` on every cell.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.values.iter_mut() {
            cell.reset_search();
        }
    }

    /// Whether no cell carries bookkeeping from a search.
    pub fn search_state_is_clear(&self) -> bool {
        self.cells().all(Cell::search_state_is_clear)
    }

    /// Follows parent links back from `ix` and returns the chain in start to `ix` order.
    pub(crate) fn reconstruct_path(&self, ix: usize) -> Vec<Cell> {
        let mut path: Vec<Cell> = std::iter::successors(Some(ix), |&i| self.cell(i).parent)
            .map(|i| *self.cell(i))
            .collect();
        path.reverse();
        path
    }

    /// Generates a [UnionFind] structure linking every passable cell to its passable neighbours,
    /// and the start to the passable cells it can step onto.
    fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.values.len());
        for (ix, cell) in self.cells().enumerate() {
            if !cell.is_passable() && !cell.start {
                continue;
            }
            let p = cell.point();
            for n in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                if let Some(n_ix) = self.index_of(n.x, n.y) {
                    if cell.is_passable() && self.cell(n_ix).is_passable() {
                        components.union(ix, n_ix);
                    }
                }
            }
            if cell.start {
                for n_ix in self.neighbor_indices(ix) {
                    components.union(ix, n_ix);
                }
            }
        }
        components
    }

    /// Checks whether any search can reach the goal from the start.
    pub fn reachable(&self) -> bool {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return false;
        };
        match (
            self.index_of(start.x, start.y),
            self.index_of(goal.x, goal.y),
        ) {
            (Some(s), Some(g)) => s == g || self.generate_components().equiv(s, g),
            _ => false,
        }
    }

    /// Rendering character for a position: goal and start markers take precedence over the tile.
    pub fn display_char(&self, x: i32, y: i32) -> Option<char> {
        self.get_cell(x, y).map(|cell| {
            if cell.goal {
                Tile::Goal.as_char()
            } else if cell.start {
                Tile::Start.as_char()
            } else {
                cell.tile.as_char()
            }
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .filter_map(|x| self.display_char(x, y))
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn resize_builds_border_walls() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.cells().count(), 12);
        assert_eq!(grid.to_string(), "####\n#..#\n####\n");
        for cell in grid.cells() {
            assert_eq!(grid.get_cell(cell.x(), cell.y()), Some(cell));
        }
        assert!(grid.start().is_none() && grid.goal().is_none());
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        let single = Grid::new(1, 1).unwrap();
        assert_eq!(single.get_cell(0, 0).unwrap().tile(), Tile::Wall);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Grid::new_random(3, 3, &mut rng).unwrap_err(),
            GridError::InteriorTooSmall {
                width: 3,
                height: 3
            }
        );
        assert!(Grid::new_random(4, 3, &mut rng).is_ok());
    }

    /// Pins the strict upper bound: `x == width` and `y == height` are outside the grid.
    #[test]
    fn bounds_are_strict() {
        let mut grid = Grid::new(5, 4).unwrap();
        assert!(grid.get_cell(5, 0).is_none());
        assert!(grid.get_cell(0, 4).is_none());
        assert!(grid.get_cell(-1, 0).is_none());
        assert!(grid.get_cell(4, 3).is_some());
        assert_eq!(
            grid.set_cell(5, 1, Tile::Floor),
            Err(GridError::OutOfBounds {
                x: 5,
                y: 1,
                width: 5,
                height: 4
            })
        );
        assert!(grid.set_cell(1, 4, Tile::Wall).is_err());
        assert!(grid.set_start(5, 2).is_err());
        assert!(grid.set_goal(2, 4).is_err());
        assert!(grid.start().is_none());
        assert!(grid.euclidean_distance(0, 0, 5, 0).is_none());
        assert!(grid.manhattan_distance(0, 0, 0, 4).is_none());
    }

    #[test]
    fn relocating_start_and_goal_keeps_single_flags() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set_start(1, 1).unwrap();
        grid.set_goal(4, 4).unwrap();
        grid.set_start(2, 3).unwrap();
        grid.set_goal(3, 1).unwrap();
        assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
        assert_eq!(grid.cells().filter(|c| c.is_goal()).count(), 1);
        assert!(grid.get_cell(2, 3).unwrap().is_start());
        assert!(grid.get_cell(3, 1).unwrap().is_goal());
        assert_eq!(grid.start(), Some(Point::new(2, 3)));
        assert_eq!(grid.goal(), Some(Point::new(3, 1)));
        // A rejected move keeps the old placement.
        assert!(grid.set_goal(6, 1).is_err());
        assert_eq!(grid.goal(), Some(Point::new(3, 1)));
    }

    #[test]
    fn random_placement_is_distinct_and_interior() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(4, 3).unwrap();
        for _ in 0..200 {
            grid.place_random_start_goal(&mut rng).unwrap();
            let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
            assert_ne!(start, goal);
            for p in [start, goal] {
                assert!(p.x >= 1 && p.x <= 2 && p.y == 1);
            }
            assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
            assert_eq!(grid.cells().filter(|c| c.is_goal()).count(), 1);
        }
    }

    #[test]
    fn neighbors_follow_fixed_order_and_traversal_rule() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(
            grid.neighbors(2, 2).as_slice(),
            &[
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3)
            ]
        );
        // Border cells are walls and are never offered.
        assert_eq!(
            grid.neighbors(1, 1).as_slice(),
            &[Point::new(2, 1), Point::new(1, 2)]
        );
        // A walled goal is still a valid neighbour.
        grid.set_cell(2, 1, Tile::Wall).unwrap();
        grid.set_goal(2, 1).unwrap();
        grid.set_cell(1, 2, Tile::Start).unwrap();
        assert_eq!(grid.neighbors(1, 1).as_slice(), &[Point::new(2, 1)]);
        // Out of bounds candidates are skipped rather than wrapped.
        assert!(grid.neighbors(0, 0).is_empty());
    }

    #[test]
    fn pepper_walls_keeps_border_and_flags() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new_random(30, 30, &mut rng).unwrap();
        grid.pepper_walls(&mut rng);
        let interior: Vec<&Cell> = grid
            .cells()
            .filter(|c| !grid.is_border(c.point()))
            .collect();
        let walls = interior.iter().filter(|c| c.tile() == Tile::Wall).count();
        let share = walls as f64 / interior.len() as f64;
        assert!(share > 0.15 && share < 0.35, "wall share {share}");
        assert!(grid
            .cells()
            .filter(|c| grid.is_border(c.point()))
            .all(|c| c.tile() == Tile::Wall));
        assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
        assert_eq!(grid.cells().filter(|c| c.is_goal()).count(), 1);
    }

    #[test]
    fn display_marks_start_and_goal() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.set_start(1, 1).unwrap();
        grid.set_goal(3, 1).unwrap();
        grid.set_cell(2, 1, Tile::Wall).unwrap();
        assert_eq!(grid.to_string(), "#####\n#S#G#\n#####\n");
        assert_eq!(grid.display_char(0, 0), Some('#'));
        assert_eq!(grid.display_char(5, 0), None);
    }

    #[test]
    fn reachability_through_components() {
        let mut grid = Grid::new(7, 5).unwrap();
        grid.set_start(1, 2).unwrap();
        grid.set_goal(5, 2).unwrap();
        assert!(grid.reachable());
        for y in 1..4 {
            grid.set_cell(3, y, Tile::Wall).unwrap();
        }
        assert!(!grid.reachable());
        // The goal flag lets a walled goal be entered.
        grid.set_goal(3, 2).unwrap();
        assert!(grid.reachable());
        grid.set_goal(1, 2).unwrap();
        assert!(grid.reachable());
    }

    #[test]
    fn neighbors_of_far_away_coordinates_are_empty() {
        let grid = Grid::new(5, 5).unwrap();
        let far = [
            (i32::MAX, 2),
            (2, i32::MAX),
            (i32::MIN, 2),
            (2, i32::MIN),
            (5, 2),
            (-1, 2),
        ];
        for (x, y) in far {
            assert!(grid.neighbors(x, y).is_empty(), "({x}, {y})");
        }
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let too_big = MAX_DIMENSION + 1;
        assert_eq!(
            Grid::new(too_big, 3).unwrap_err(),
            GridError::InvalidDimensions {
                width: too_big,
                height: 3
            }
        );
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(grid.resize(3, too_big).is_err());
        assert_eq!((grid.width(), grid.height()), (4, 4));
    }

    #[test]
    fn default_grid_is_placed() {
        let grid = Grid::default();
        assert_eq!((grid.width(), grid.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
        assert_ne!(start, goal);
        assert!(!grid.is_border(start) && !grid.is_border(goal));
        assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
        assert_eq!(grid.cells().filter(|c| c.is_goal()).count(), 1);
        // Seeded, so every default grid is the same.
        assert_eq!(Grid::default().to_string(), grid.to_string());
    }
}
