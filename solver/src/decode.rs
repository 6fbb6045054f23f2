use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::cell::{Cell, Color};
use crate::error::{InvalidMaze, MazeError};
use crate::grid::Maze;

/// Classify row-major `pixels` into a maze `width` cells wide.
///
/// Colors must match exactly; the first pixel that does not is reported as
/// [`MazeError::UnknownColor`] and no maze is built.
pub fn decode(pixels: &[Color], width: usize) -> Result<Maze, MazeError> {
    if width == 0 || pixels.is_empty() {
        return Err(InvalidMaze::Empty.into());
    }
    if pixels.len() % width != 0 {
        return Err(InvalidMaze::NotRectangular {
            len: pixels.len(),
            width,
        }
        .into());
    }

    let cells = pixels
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            Cell::from_color(color).ok_or(MazeError::UnknownColor {
                color,
                row: i / width,
                col: i % width,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let maze = Maze::from_cells(cells, width)?;
    debug!(
        "decoded {}x{} maze, start {} finish {}",
        maze.columns(),
        maze.rows(),
        maze.start(),
        maze.finish()
    );

    Ok(maze)
}

/// Decode an already loaded image. Anything that is not 8-bit RGB is converted first.
pub fn decode_image(img: &DynamicImage) -> Result<Maze, MazeError> {
    let rgb = img.to_rgb8();
    let pixels: Vec<Color> = rgb.pixels().copied().collect();

    decode(&pixels, rgb.width() as usize)
}

/// Open the image at `path` and decode it.
pub fn load(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    let img = image::open(path)?;
    decode_image(&img)
}
