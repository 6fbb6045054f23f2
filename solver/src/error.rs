use crate::cell::Color;
use crate::grid::Point;

/// Errors that can occur while turning an image into a [`crate::Maze`].
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// A pixel did not match any of the known cell colors.
    #[error("unknown color ({}, {}, {}) at row {row}, column {col}", .color.0[0], .color.0[1], .color.0[2])]
    UnknownColor { color: Color, row: usize, col: usize },

    /// The pixels decoded fine but do not describe a usable maze.
    #[error("invalid maze: {0}")]
    InvalidMaze(#[from] InvalidMaze),

    /// The image file could not be opened or decoded.
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
}

/// Structural problems with an otherwise well-colored grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMaze {
    #[error("the grid has no cells")]
    Empty,

    #[error("{len} cells cannot be split into rows of {width}")]
    NotRectangular { len: usize, width: usize },

    #[error("no start cell")]
    MissingStart,

    #[error("no finish cell")]
    MissingFinish,

    #[error("start cell appears at both {first} and {second}")]
    DuplicateStart { first: Point, second: Point },

    #[error("finish cell appears at both {first} and {second}")]
    DuplicateFinish { first: Point, second: Point },
}

/// Reasons a list of points cannot be a [`crate::Path`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPath {
    #[error("a path has at least one point")]
    Empty,

    #[error("{from} and {to} are not orthogonally adjacent")]
    NotAdjacent { from: Point, to: Point },

    #[error("{0} is visited twice")]
    Repeated(Point),
}
