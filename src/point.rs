use core::fmt;
use std::ops::Add;

/// The four cardinal unit steps, in the order neighbors are expanded during
/// search. The order fixes which of several equal-length paths is found.
pub const CARDINAL_DIRECTIONS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// A grid position as an integer (column, row) pair. Compares and hashes by
/// value so it can serve as a map or set key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The four 4-connected neighbors, in expansion order.
    pub fn neumann_neighborhood(&self) -> [Point; 4] {
        CARDINAL_DIRECTIONS.map(|d| *self + d)
    }

    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
