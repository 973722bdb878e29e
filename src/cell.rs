use crate::point::Point;

/// Terrain classification of a cell. Only [Tile::Floor] is traversable; the start and goal
/// markers exist for display and do not by themselves make a cell passable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Character used when rendering the tile.
    pub fn as_char(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}

/// A single grid position together with the bookkeeping a search leaves on it.
///
/// The coordinates never change after construction. `g`, `h`, the visited flag and the parent
/// link are scoped to one search call and are cleared by [Cell::reset_search].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pos: Point,
    pub(crate) g: u32,
    pub(crate) h: f64,
    pub(crate) tile: Tile,
    pub(crate) start: bool,
    pub(crate) goal: bool,
    pub(crate) visited: bool,
    /// Index of the predecessor in the owning grid's storage.
    pub(crate) parent: Option<usize>,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell {
            pos: Point::new(x, y),
            g: 0,
            h: 0.0,
            tile: Tile::Floor,
            start: false,
            goal: false,
            visited: false,
            parent: None,
        }
    }
    pub fn x(&self) -> i32 {
        self.pos.x
    }
    pub fn y(&self) -> i32 {
        self.pos.y
    }
    pub fn point(&self) -> Point {
        self.pos
    }
    /// Accumulated step cost from the start.
    pub fn g(&self) -> u32 {
        self.g
    }
    /// Heuristic estimate of the remaining distance to the goal.
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
    pub fn tile(&self) -> Tile {
        self.tile
    }
    pub fn is_start(&self) -> bool {
        self.start
    }
    pub fn is_goal(&self) -> bool {
        self.goal
    }
    pub fn is_visited(&self) -> bool {
        self.visited
    }
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
    /// Whether a search may step onto this cell.
    pub fn is_passable(&self) -> bool {
        self.tile == Tile::Floor || self.goal
    }

    pub(crate) fn reset_search(&mut self) {
        self.visited = false;
        self.parent = None;
        self.g = 0;
        self.h = 0.0;
    }

    pub(crate) fn search_state_is_clear(&self) -> bool {
        !self.visited && self.parent.is_none() && self.g == 0 && self.h == 0.0
    }
}
