use fxhash::FxHashSet;
use grid_bfs::{generator, Grid, PathCache, Point};
use rand::prelude::*;

// Scatters random obstacles over an 8x8 grid, keeping the start and goal
// corners clear, and prints the grid with the found path overlayed.

fn main() {
    let start = Point::new(0, 0);
    let goal = Point::new(7, 7);
    let excluded = FxHashSet::from_iter([start, goal]);
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(8, 8, false);
    generator::populate(&mut grid, &excluded, 0.25, &mut rng);

    let mut cache = PathCache::new();
    cache.refresh(&grid, start, goal);
    let on_path: FxHashSet<Point> = cache.path().iter().copied().collect();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if p == start {
                print!("S");
            } else if p == goal {
                print!("G");
            } else if on_path.contains(&p) {
                print!("o");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
    if !cache.found() {
        println!("no path from {} to {}", start, goal);
    }
}
