use thiserror::Error;

/// Convenient result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Failures reported by grid configuration and mutation. Not finding a route is not an error;
/// searches report it as an empty path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Requested dimensions are below the 1x1 minimum.
    #[error("grid dimensions {width}x{height} are below the minimum of 1x1")]
    InvalidDimensions { width: usize, height: usize },

    /// The walled interior cannot hold two distinct cells for start and goal.
    #[error("a {width}x{height} grid has fewer than two interior cells for start and goal")]
    InteriorTooSmall { width: usize, height: usize },
}
