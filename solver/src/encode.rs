use image::RgbImage;

use crate::cell::{Cell, EMPTY_COLOR, PATH_COLOR, PATH_GLYPH};
use crate::grid::{Maze, Point};

/// Render `maze` with `path` painted over it.
///
/// The result has the same dimensions as the decoded image. Path cells,
/// including the start and finish themselves, take the path color. Passing an
/// empty path reproduces the original picture.
///
/// # Panics
/// If a point of `path` lies outside the maze, or the maze is too large for an image.
pub fn encode(maze: &Maze, path: &[Point]) -> RgbImage {
    let mut img = RgbImage::from_pixel(
        image_dimension(maze.columns()),
        image_dimension(maze.rows()),
        EMPTY_COLOR,
    );

    for (i, cell) in maze.cells().iter().enumerate() {
        if *cell == Cell::Empty {
            continue;
        }
        let (row, col) = (i / maze.columns(), i % maze.columns());
        img.put_pixel(image_dimension(col), image_dimension(row), cell.color());
    }

    for point in path {
        assert!(maze.contains(*point), "path point {point} is outside the maze");
        img.put_pixel(image_dimension(point.col), image_dimension(point.row), PATH_COLOR);
    }

    img
}

fn image_dimension(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("{n} does not fit in an image dimension"))
}

/// Text version of [`encode`]: one line per row, path cells drawn as `@`.
///
/// # Panics
/// If a point of `path` lies outside the maze.
pub fn render_text(maze: &Maze, path: &[Point]) -> String {
    let mut grid: Vec<Vec<char>> = maze
        .cells()
        .chunks(maze.columns())
        .map(|row| row.iter().map(|cell| cell.glyph()).collect())
        .collect();

    for point in path {
        assert!(maze.contains(*point), "path point {point} is outside the maze");
        grid[point.row][point.col] = PATH_GLYPH;
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>() + "\n")
        .collect()
}

#[cfg(test)]
mod test {

    use image::Rgb;

    use super::*;
    use crate::cell::{FINISH_COLOR, START_COLOR, WALL_COLOR};
    use crate::decode::decode;
    use crate::error::{InvalidMaze, MazeError};
    use crate::find::find_path;

    fn create_basic_maze() -> Maze {
        use Cell::*;
        Maze::from_rows(vec![
            vec![Start, Empty, Wall],
            vec![Wall, Empty, Wall],
            vec![Wall, Empty, Finish],
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_path_reproduces_pixels() {
        let pixels = vec![
            START_COLOR, EMPTY_COLOR, WALL_COLOR, //
            WALL_COLOR, EMPTY_COLOR, WALL_COLOR, //
            WALL_COLOR, EMPTY_COLOR, FINISH_COLOR,
        ];
        let maze = decode(&pixels, 3).unwrap();

        let img = encode(&maze, &[]);

        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.pixels().copied().collect::<Vec<_>>(), pixels);
    }

    #[test]
    fn test_path_overwrites_start_and_finish() {
        let maze = create_basic_maze();
        let path = find_path(&maze).into_path().unwrap();

        let img = encode(&maze, &path);

        for point in path.iter() {
            assert_eq!(img.get_pixel(point.col as u32, point.row as u32), &PATH_COLOR);
        }
        // the finish marker is no longer red
        assert_ne!(img.get_pixel(2, 2), &FINISH_COLOR);
        // cells off the path keep their color
        assert_eq!(img.get_pixel(2, 0), &WALL_COLOR);
        assert_eq!(img.get_pixel(0, 1), &WALL_COLOR);
    }

    #[test]
    fn test_encode_does_not_touch_maze() {
        let maze = create_basic_maze();
        let path = find_path(&maze).into_path().unwrap();

        let _ = encode(&maze, &path);

        assert_eq!(maze.get(Point::new(2, 2)), Cell::Finish);
        assert_eq!(maze, create_basic_maze());
    }

    #[test]
    fn test_solved_image_has_two_start_markers() {
        let maze = create_basic_maze();
        let path = find_path(&maze).into_path().unwrap();
        let img = encode(&maze, &path);

        // start and finish are both painted green now, so the finish is lost
        let pixels: Vec<Rgb<u8>> = img.pixels().copied().collect();
        assert!(matches!(
            decode(&pixels, 3),
            Err(MazeError::InvalidMaze(InvalidMaze::DuplicateStart { .. }))
        ));
    }

    #[test]
    fn test_render_text() {
        let maze = create_basic_maze();
        assert_eq!(render_text(&maze, &[]), "O #\n# #\n# X\n");

        let path = find_path(&maze).into_path().unwrap();
        assert_eq!(render_text(&maze, &path), "@@#\n#@#\n#@@\n");
    }

    #[test]
    #[should_panic(expected = "path point (3, 0) is outside the maze")]
    fn test_render_text_rejects_points_outside() {
        let maze = create_basic_maze();
        render_text(&maze, &[Point::new(3, 0)]);
    }

    #[test]
    #[should_panic(expected = "path point (0, 3) is outside the maze")]
    fn test_encode_rejects_points_outside() {
        let maze = create_basic_maze();
        let _ = encode(&maze, &[Point::new(0, 3)]);
    }

    #[test]
    fn test_image_dimension() {
        assert_eq!(image_dimension(0), 0);
        assert_eq!(image_dimension(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "does not fit in an image dimension")]
    fn test_image_dimension_overflow() {
        image_dimension(u32::MAX as usize + 1);
    }
}
