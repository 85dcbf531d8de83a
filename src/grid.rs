use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::point::Point;

/// A rectangular occupancy map with dimensions fixed at construction.
///
/// Cell states live in a flat buffer indexed by `y * width + x`, with `true`
/// marking a blocked cell. [Grid] also maintains connected components of the
/// free cells in a [UnionFind] structure so that reachability questions can
/// be answered without flood-filling, and a version counter so collaborators
/// can detect that a previously computed path may be stale.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    components: UnionFind<usize>,
    components_dirty: bool,
    version: u64,
}

impl Grid {
    /// Creates a `width` by `height` grid with every cell set to `blocked`.
    /// Components are generated immediately, so a fresh grid answers
    /// reachability queries without further setup.
    pub fn new(width: usize, height: usize, blocked: bool) -> Grid {
        let mut grid = Grid {
            cells: vec![blocked; width * height],
            width,
            height,
            components: UnionFind::new(width * height),
            components_dirty: false,
            version: 0,
        };
        grid.generate_components();
        grid
    }

    pub(crate) fn ix(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Incremented whenever a cell actually changes state.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < self.width && p.y >= 0 && (p.y as usize) < self.height
    }

    /// Whether `p` is blocked. Positions outside the grid read as blocked:
    /// they are never traversable, and queries stay non-fallible.
    pub fn is_blocked(&self, p: Point) -> bool {
        !self.in_bounds(p) || self.cells[self.ix(p)]
    }

    /// Whether `p` is inside the grid and free.
    pub fn is_free(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.cells[self.ix(p)]
    }

    /// Marks `p` blocked. Out-of-bounds positions are silently ignored so
    /// callers do not have to pre-validate coordinates.
    pub fn add_obstacle(&mut self, p: Point) {
        self.set(p, true);
    }

    /// Marks `p` free. Same out-of-bounds policy as
    /// [add_obstacle](Self::add_obstacle).
    pub fn remove_obstacle(&mut self, p: Point) {
        self.set(p, false);
    }

    /// Updates a single cell, keeping the components sound: freeing a cell
    /// joins it with its free neighbours immediately, while blocking one
    /// only flags the components as dirty, since it may break a component
    /// apart. Out-of-bounds positions are silently ignored.
    pub fn set(&mut self, p: Point, blocked: bool) {
        if !self.in_bounds(p) {
            return;
        }
        let p_ix = self.ix(p);
        if self.cells[p_ix] == blocked {
            return;
        }
        if blocked {
            self.components_dirty = true;
        } else {
            for n in p.neumann_neighborhood() {
                if self.is_free(n) {
                    let n_ix = self.ix(n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
        self.cells[p_ix] = blocked;
        self.version += 1;
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if !self.is_free(point) {
                    continue;
                }
                let parent_ix = self.ix(point);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_free(n) {
                        let n_ix = self.ix(n);
                        self.components.union(parent_ix, n_ix);
                    }
                }
            }
        }
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out-of-bounds
    /// endpoints are always unreachable. Stale components are only ever
    /// over-connected (blocking defers the split until the next
    /// regeneration), so a `true` answer remains trustworthy between
    /// [update](Self::update) calls.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.ix(*start);
            let goal_ix = self.ix(*goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let values = (0..self.width as i32)
                .map(|x| self.is_blocked(Point::new(x, y)) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected
    /// components.
    #[test]
    fn component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = Grid::new(3, 2, false);
        grid.add_obstacle(Point::new(1, 0));
        grid.add_obstacle(Point::new(1, 1));
        grid.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(grid.unreachable(&p1, &p2));
        assert!(grid.reachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &p4));
    }

    #[test]
    fn freeing_joins_components_immediately() {
        let mut grid = Grid::new(3, 1, false);
        grid.add_obstacle(Point::new(1, 0));
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        grid.remove_obstacle(Point::new(1, 0));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn out_of_bounds_mutation_is_ignored() {
        let mut grid = Grid::new(4, 4, false);
        let version = grid.version();
        grid.add_obstacle(Point::new(-1, 2));
        grid.add_obstacle(Point::new(0, 4));
        grid.remove_obstacle(Point::new(7, 7));
        assert_eq!(grid.version(), version);
    }

    #[test]
    fn version_bumps_only_on_state_change() {
        let mut grid = Grid::new(2, 2, false);
        let p = Point::new(1, 1);
        let version = grid.version();
        grid.remove_obstacle(p);
        assert_eq!(grid.version(), version);
        grid.add_obstacle(p);
        assert_eq!(grid.version(), version + 1);
        grid.add_obstacle(p);
        assert_eq!(grid.version(), version + 1);
    }

    #[test]
    fn out_of_bounds_reads_as_blocked() {
        let grid = Grid::new(2, 2, false);
        assert!(grid.is_blocked(Point::new(-1, 0)));
        assert!(grid.is_blocked(Point::new(0, 2)));
        assert!(!grid.is_free(Point::new(2, 0)));
        assert!(grid.is_free(Point::new(1, 1)));
    }

    #[test]
    fn obstacle_round_trip_restores_state() {
        let mut grid = Grid::new(3, 3, false);
        let p = Point::new(1, 1);
        grid.add_obstacle(p);
        assert!(grid.is_blocked(p));
        grid.remove_obstacle(p);
        assert!(grid.is_free(p));
        assert!(grid.reachable(&Point::new(0, 1), &Point::new(2, 1)));
    }
}
