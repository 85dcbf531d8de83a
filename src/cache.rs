use crate::grid::Grid;
use crate::point::Point;

/// Remembers the most recently computed path together with the inputs it was
/// computed for.
///
/// Collaborators that poll for start/goal changes every frame can call
/// [refresh](Self::refresh) unconditionally: the search only reruns when the
/// start, the goal, or the grid contents differ from the previous call. A
/// missing path is exposed as an empty slice plus a [found](Self::found)
/// flag the caller can branch on.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    key: Option<CacheKey>,
    path: Vec<Point>,
    found: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    start: Point,
    goal: Point,
    grid_version: u64,
}

impl PathCache {
    pub fn new() -> PathCache {
        PathCache::default()
    }

    /// Whether the cached path was computed for exactly these inputs.
    pub fn is_current(&self, grid: &Grid, start: Point, goal: Point) -> bool {
        self.key
            == Some(CacheKey {
                start,
                goal,
                grid_version: grid.version(),
            })
    }

    /// Returns the path for (grid, start, goal), recomputing it only when
    /// one of the inputs changed since the previous call.
    pub fn refresh(&mut self, grid: &Grid, start: Point, goal: Point) -> &[Point] {
        if !self.is_current(grid, start, goal) {
            let path = grid.find_path(start, goal);
            self.found = path.is_some();
            self.path = path.unwrap_or_default();
            self.key = Some(CacheKey {
                start,
                goal,
                grid_version: grid.version(),
            });
        }
        &self.path
    }

    /// The most recently computed path. Empty when no path was found or
    /// nothing has been computed yet.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Whether the last [refresh](Self::refresh) found a path.
    pub fn found(&self) -> bool {
        self.found
    }
}
