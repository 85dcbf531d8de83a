use grid_bfs::{Grid, Point};

// Finds a path on a 4x3 grid where a wall with a single gap separates the
// start from the goal:
//
// S # . .
// . # . .
// . . . G
//
// The search has to walk down to the gap and back across.

fn main() {
    let mut grid = Grid::new(4, 3, false);
    grid.add_obstacle(Point::new(1, 0));
    grid.add_obstacle(Point::new(1, 1));
    println!("{}", grid);
    let start = Point::new(0, 0);
    let goal = Point::new(3, 2);
    let path = grid.find_path(start, goal).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
