use fxhash::FxHashSet;
use rand::Rng;

use crate::grid::Grid;
use crate::point::Point;

/// Fills `grid` with randomly scattered obstacles.
///
/// Sweeps the cells in row-major order (row 0 first, columns left to right),
/// clearing each one and then re-blocking it when a uniform draw in `[0, 1)`
/// falls below `probability`. Cells in `excluded` are skipped without
/// consuming a draw, so they always end up free; it should contain at least
/// the intended start and goal. The layout is fully determined by
/// (dimensions, `excluded`, `probability`, rng state), making seeded runs
/// reproducible. Components are regenerated once the sweep is done.
pub fn populate<R: Rng>(
    grid: &mut Grid,
    excluded: &FxHashSet<Point>,
    probability: f64,
    rng: &mut R,
) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let point = Point::new(x, y);
            grid.remove_obstacle(point);
            if excluded.contains(&point) {
                continue;
            }
            if rng.gen::<f64>() < probability {
                grid.add_obstacle(point);
            }
        }
    }
    grid.generate_components();
}
