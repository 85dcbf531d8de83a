use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::info;
use std::collections::VecDeque;

use crate::grid::Grid;
use crate::point::Point;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Sentinel distance for cells a [distance_map](Grid::distance_map) source
/// cannot reach.
pub const UNREACHABLE: i32 = i32::MAX;

impl Grid {
    /// Computes an unweighted shortest path from `start` to `goal` over the
    /// 4-connected neighbor graph of free cells using breadth-first search.
    /// The path runs from `start` to `goal` inclusive, each consecutive pair
    /// one cardinal step apart.
    ///
    /// Returns [None] when either endpoint lies outside the grid or no route
    /// exists. The frontier is seeded with `start` unconditionally, so a
    /// blocked start can still path out of its cell; a blocked goal is never
    /// entered, unless it equals the start, in which case the path is the
    /// single cell itself. The call keeps no state between invocations:
    /// identical inputs produce identical paths.
    pub fn find_path(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return None;
        }
        if start == goal {
            return Some(vec![start]);
        }
        if self.is_blocked(goal) {
            info!("goal {} is blocked, no path from {}", goal, start);
            return None;
        }
        // Check if start and goal are on the same connected component. A
        // blocked start has no component membership and skips the check.
        if !self.is_blocked(start) && self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        self.bfs(start, goal)
    }

    fn bfs(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        let mut frontier: VecDeque<usize> = VecDeque::new();
        let mut came_from: FxIndexMap<Point, usize> = FxIndexMap::default();
        came_from.insert(start, usize::MAX);
        frontier.push_back(0);
        while let Some(index) = frontier.pop_front() {
            let (&current, _) = came_from.get_index(index).unwrap();
            if current == goal {
                return Some(reverse_path(&came_from, index));
            }
            for next in current.neumann_neighborhood() {
                if !self.is_free(next) {
                    continue;
                }
                if let Vacant(e) = came_from.entry(next) {
                    frontier.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        info!("no path from {} to {}", start, goal);
        None
    }

    /// Breadth-first distances from `source` to every cell, in steps, laid
    /// out as `y * width + x`. Blocked and unreached cells hold
    /// [UNREACHABLE]. A blocked source still gets distance zero, mirroring
    /// the endpoint policy of [find_path](Self::find_path).
    pub fn distance_map(&self, source: Point) -> Vec<i32> {
        let mut distances = vec![UNREACHABLE; self.width() * self.height()];
        if !self.in_bounds(source) {
            return distances;
        }
        distances[self.ix(source)] = 0;
        let mut frontier: VecDeque<Point> = VecDeque::new();
        frontier.push_back(source);
        while let Some(current) = frontier.pop_front() {
            let next_dist = distances[self.ix(current)] + 1;
            for next in current.neumann_neighborhood() {
                if self.is_free(next) && distances[self.ix(next)] == UNREACHABLE {
                    distances[self.ix(next)] = next_dist;
                    frontier.push_back(next);
                }
            }
        }
        distances
    }
}

fn reverse_path(came_from: &FxIndexMap<Point, usize>, goal: usize) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(goal, |i| {
        came_from.get_index(*i).map(|(&node, &parent)| {
            *i = parent;
            node
        })
    })
    .collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_equals_goal_yields_single_cell() {
        let grid = Grid::new(3, 3, false);
        let p = Point::new(1, 2);
        assert_eq!(grid.find_path(p, p), Some(vec![p]));
    }

    #[test]
    fn start_equals_goal_even_when_blocked() {
        let mut grid = Grid::new(3, 3, false);
        let p = Point::new(1, 1);
        grid.add_obstacle(p);
        assert_eq!(grid.find_path(p, p), Some(vec![p]));
    }

    #[test]
    fn routes_around_an_obstacle() {
        // |S  |
        // | # |
        // |  G|
        //  ___
        let mut grid = Grid::new(3, 3, false);
        grid.add_obstacle(Point::new(1, 1));
        let path = grid
            .find_path(Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(path[4], Point::new(2, 2));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn direction_order_breaks_ties() {
        // On an open grid the +x direction is explored first, so the found
        // path walks east before turning south.
        let grid = Grid::new(2, 2, false);
        let path = grid
            .find_path(Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn blocked_goal_has_no_path() {
        let mut grid = Grid::new(3, 3, false);
        grid.add_obstacle(Point::new(2, 2));
        assert_eq!(grid.find_path(Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn blocked_start_can_path_out() {
        let mut grid = Grid::new(3, 1, false);
        grid.add_obstacle(Point::new(0, 0));
        let path = grid
            .find_path(Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn out_of_bounds_endpoints_have_no_path() {
        let grid = Grid::new(3, 3, false);
        assert_eq!(grid.find_path(Point::new(-1, 0), Point::new(2, 2)), None);
        assert_eq!(grid.find_path(Point::new(0, 0), Point::new(3, 0)), None);
    }

    #[test]
    fn identical_inputs_yield_identical_paths() {
        let mut grid = Grid::new(4, 4, false);
        grid.add_obstacle(Point::new(1, 1));
        grid.add_obstacle(Point::new(2, 2));
        let start = Point::new(0, 0);
        let goal = Point::new(3, 3);
        assert_eq!(grid.find_path(start, goal), grid.find_path(start, goal));
    }

    #[test]
    fn distance_map_matches_path_length() {
        let mut grid = Grid::new(3, 3, false);
        grid.add_obstacle(Point::new(1, 1));
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let distances = grid.distance_map(start);
        let path = grid.find_path(start, goal).unwrap();
        assert_eq!(distances[grid.ix(goal)], path.len() as i32 - 1);
        assert_eq!(distances[grid.ix(start)], 0);
        assert_eq!(distances[grid.ix(Point::new(1, 1))], UNREACHABLE);
    }
}
