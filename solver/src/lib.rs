//! Solve mazes drawn as images.
//!
//! Each pixel of the input is one cell: white is open floor, black is wall,
//! green marks the start and red the finish. [`decode`] turns the pixels into a
//! [`Maze`], [`find_path`] runs a breadth-first search for a shortest route and
//! [`encode`] paints that route back onto a fresh image.

mod cell;
mod decode;
mod encode;
mod error;
mod find;
mod grid;

pub use cell::{
    Cell, Color, EMPTY_COLOR, FINISH_COLOR, PATH_COLOR, PATH_GLYPH, START_COLOR, WALL_COLOR,
};
pub use decode::{decode, decode_image, load};
pub use encode::{encode, render_text};
pub use error::{InvalidMaze, InvalidPath, MazeError};
pub use find::{find_path, Path, PathFinder, PathFinderState, Search, Visited, VisitedItem};
pub use grid::{CellStorage, Maze, Point};
