use std::fmt::Display;

use image::Rgb;
use serde::Serialize;

/// The pixel type mazes are read from and rendered to
pub type Color = Rgb<u8>;

pub const EMPTY_COLOR: Color = Rgb([255, 255, 255]);
pub const WALL_COLOR: Color = Rgb([0, 0, 0]);
pub const START_COLOR: Color = Rgb([0, 255, 0]);
pub const FINISH_COLOR: Color = Rgb([255, 0, 0]);

/// Color painted on cells of the found path
pub const PATH_COLOR: Color = Rgb([0, 255, 0]);

/// Glyph used for path cells in the text rendering
pub const PATH_GLYPH: char = '@';

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Start,
    Finish,
}

/// Every recognized input color and the cell it stands for
const COLOR_TABLE: [(Color, Cell); 4] = [
    (EMPTY_COLOR, Cell::Empty),
    (WALL_COLOR, Cell::Wall),
    (START_COLOR, Cell::Start),
    (FINISH_COLOR, Cell::Finish),
];

impl Cell {
    /// Classifies a pixel. Matching is exact, anything not in the table gives `None`.
    pub fn from_color(color: Color) -> Option<Cell> {
        COLOR_TABLE
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, cell)| *cell)
    }

    pub fn color(self) -> Color {
        match self {
            Cell::Empty => EMPTY_COLOR,
            Cell::Wall => WALL_COLOR,
            Cell::Start => START_COLOR,
            Cell::Finish => FINISH_COLOR,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Start => 'O',
            Cell::Finish => 'X',
        }
    }

    /// Whether the search may step onto this cell.
    /// The start cell is only ever the origin and is never re-entered.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Finish)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
