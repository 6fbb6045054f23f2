use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::InvalidMaze;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of classified cells with exactly one start and one finish.
///
/// Cells are stored row-major in a single vec. A `Maze` can only be obtained
/// through [`Maze::from_rows`] or the decoder, both of which validate the
/// invariants, and it is never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: Point,
    finish: Point,
}

impl Maze {
    /// Build a maze from hand-written rows, e.g. in tests.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, InvalidMaze> {
        let columns = rows.first().map_or(0, Vec::len);
        let len = rows.iter().map(Vec::len).sum();

        if columns == 0 {
            return Err(InvalidMaze::Empty);
        }
        if rows.iter().any(|row| row.len() != columns) {
            return Err(InvalidMaze::NotRectangular { len, width: columns });
        }

        Self::from_cells(rows.into_iter().flatten().collect(), columns)
    }

    /// Build a maze from row-major cells. `cells.len()` must be a non-zero multiple of `columns`.
    pub(crate) fn from_cells(cells: Vec<Cell>, columns: usize) -> Result<Self, InvalidMaze> {
        if columns == 0 || cells.is_empty() {
            return Err(InvalidMaze::Empty);
        }
        if cells.len() % columns != 0 {
            return Err(InvalidMaze::NotRectangular {
                len: cells.len(),
                width: columns,
            });
        }

        let mut start = None;
        let mut finish = None;

        for (i, cell) in cells.iter().enumerate() {
            let point = Point::new(i / columns, i % columns);
            match cell {
                Cell::Start => match start {
                    Some(first) => {
                        return Err(InvalidMaze::DuplicateStart {
                            first,
                            second: point,
                        })
                    }
                    None => start = Some(point),
                },
                Cell::Finish => match finish {
                    Some(first) => {
                        return Err(InvalidMaze::DuplicateFinish {
                            first,
                            second: point,
                        })
                    }
                    None => finish = Some(point),
                },
                Cell::Empty | Cell::Wall => {}
            }
        }

        Ok(Self {
            rows: cells.len() / columns,
            columns,
            start: start.ok_or(InvalidMaze::MissingStart)?,
            finish: finish.ok_or(InvalidMaze::MissingFinish)?,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.columns
    }

    /// # Panics
    /// If `point` lies outside the maze.
    pub fn get(&self, point: Point) -> Cell {
        assert!(self.contains(point), "{point} is outside the maze");
        self.cells[point.row * self.columns + point.col]
    }

    /// Returns the neighbouring points the search may step onto from `point`,
    /// always in the order up, down, left, right.
    /// Only points inside the map holding an empty or finish cell are returned.
    pub fn neighbors_of(&self, point: Point) -> impl Iterator<Item = Point> {
        let mut points = Vec::with_capacity(4);

        if point.row > 0 {
            points.push(Point::new(point.row - 1, point.col));
        }
        if point.row + 1 < self.rows {
            points.push(Point::new(point.row + 1, point.col));
        }
        if point.col > 0 {
            points.push(Point::new(point.row, point.col - 1));
        }
        if point.col + 1 < self.columns {
            points.push(Point::new(point.row, point.col + 1));
        }

        // filter to only keep cells we are allowed to walk onto
        points.retain(|p| self.get(*p).is_walkable());

        points.into_iter()
    }

    /// Create a storage for values of type T with the same dimensions as the maze
    pub fn create_storage<T: Default + Clone>(&self) -> CellStorage<T> {
        CellStorage {
            columns: self.columns,
            values: vec![T::default(); self.rows * self.columns],
        }
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Per-cell values laid out like the maze they were created from
#[derive(Clone, Debug)]
pub struct CellStorage<T> {
    columns: usize,
    values: Vec<T>,
}

impl<T: Copy> CellStorage<T> {
    pub fn get(&self, point: Point) -> T {
        self.values[point.row * self.columns + point.col]
    }

    pub fn get_mut(&mut self, point: Point) -> &mut T {
        &mut self.values[point.row * self.columns + point.col]
    }
}

/// One row per line, values right-aligned to the widest one and separated by a space
impl<T: Display> Display for CellStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let texts: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        let width = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);

        for row in texts.chunks(self.columns) {
            for (i, text) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", text)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
