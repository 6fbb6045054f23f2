use std::{
    collections::{HashSet, VecDeque},
    fmt::Display,
    ops::{Deref, DerefMut},
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::InvalidPath;
use crate::grid::{CellStorage, Maze, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitedItem {
    /// Number of steps from the start
    pub distance: usize,
    /// The point this one was discovered from, `None` for the start
    pub from: Option<Point>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visited(Option<VisitedItem>);

impl Deref for Visited {
    type Target = Option<VisitedItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Visited {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
impl Display for Visited {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(item) => write!(f, "{}", item.distance),
            None => Ok(()),
        }
    }
}

/// A shortest walk from the start to the finish of a maze, both included.
///
/// Always holds at least one point, consecutive points are orthogonally
/// adjacent and no point appears twice. Deserializing checks the same.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct Path(Vec<Point>);

impl TryFrom<Vec<Point>> for Path {
    type Error = InvalidPath;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err(InvalidPath::Empty);
        }
        for pair in points.windows(2) {
            let steps = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
            if steps != 1 {
                return Err(InvalidPath::NotAdjacent {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        let mut seen = HashSet::with_capacity(points.len());
        if let Some(point) = points.iter().find(|p| !seen.insert(**p)) {
            return Err(InvalidPath::Repeated(*point));
        }

        Ok(Path(points))
    }
}

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn start(&self) -> Point {
        self.0[0]
    }

    pub fn finish(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState {
    Computing,
    NoPathFound,
    PathFound(Path),
}

impl PathFinderState {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Outcome of [`find_path`]. Not finding a path is a normal result, not an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    Found(Path),
    NotFound,
}

impl Search {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Search::Found(path) => Some(path),
            Search::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Search::Found(path) => Some(path),
            Search::NotFound => None,
        }
    }
}

/// Breadth-first search from the start of a maze to its finish.
///
/// Every point is enqueued at most once and remembers the point it was
/// discovered from, so the path is rebuilt a single time when the finish is
/// dequeued. Neighbours are expanded in the fixed order of
/// [`Maze::neighbors_of`], which together with the FIFO queue decides which of
/// several equally short paths is reported.
#[derive(Debug)]
pub struct PathFinder {
    start: Point,
    goal: Point,
    visited: CellStorage<Visited>,
    visit_list: VecDeque<Point>,
    expanded: usize,
    state: PathFinderState,
}

impl PathFinder {
    pub fn new(maze: &Maze) -> Self {
        let start = maze.start();
        let mut visited: CellStorage<Visited> = maze.create_storage();
        *visited.get_mut(start) = Visited(Some(VisitedItem {
            distance: 0,
            from: None,
        }));

        Self {
            start,
            goal: maze.finish(),
            visited,
            visit_list: VecDeque::from([start]),
            expanded: 0,
            state: PathFinderState::Computing,
        }
    }

    pub fn finish(mut self, maze: &Maze) -> (PathFinderState, CellStorage<Visited>) {
        loop {
            match self.step(maze) {
                PathFinderState::Computing => {}
                s => {
                    debug!(
                        "search done after expanding {} cells: {}",
                        self.expanded,
                        match &s {
                            PathFinderState::PathFound(path) => format!("path of {} cells", path.len()),
                            _ => "no path".to_string(),
                        }
                    );
                    trace!("distances from start:\n{}", self.visited);
                    return (s, self.visited);
                }
            }
        }
    }

    /// Dequeue and process a single point
    pub fn step(&mut self, maze: &Maze) -> PathFinderState {
        if self.state.is_done() {
            return self.state.clone();
        }

        let Some(point) = self.visit_list.pop_front() else {
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        if point == self.goal {
            self.state = PathFinderState::PathFound(self.backtrack());
            return self.state.clone();
        }

        self.expanded += 1;
        let distance = self.distance_of(point) + 1;

        for next in maze.neighbors_of(point) {
            if self.visited.get(next).is_none() {
                *self.visited.get_mut(next) = Visited(Some(VisitedItem {
                    distance,
                    from: Some(point),
                }));
                self.visit_list.push_back(next);
            }
        }

        self.state.clone()
    }

    fn distance_of(&self, point: Point) -> usize {
        (*self.visited.get(point)).map_or(0, |item| item.distance)
    }

    /// Walk the back-pointers from the goal to the start
    fn backtrack(&self) -> Path {
        let mut path = vec![self.goal];
        let mut current = self.visited.get(self.goal);

        while let Some(VisitedItem {
            from: Some(from), ..
        }) = *current
        {
            path.push(from);
            current = self.visited.get(from);
        }

        path.reverse();
        debug_assert_eq!(path.first(), Some(&self.start));

        Path(path)
    }

    pub fn state(&self) -> &PathFinderState {
        &self.state
    }

    pub fn get_visited(&self) -> &CellStorage<Visited> {
        &self.visited
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

/// Find a shortest path (fewest cells) from the start to the finish of `maze`.
pub fn find_path(maze: &Maze) -> Search {
    match PathFinder::new(maze).finish(maze).0 {
        PathFinderState::PathFound(path) => Search::Found(path),
        _ => Search::NotFound,
    }
}
