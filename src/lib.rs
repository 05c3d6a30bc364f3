//! Helpers shared by several of the daily solutions: grid coordinates,
//! bounded neighbour enumeration and a small cartesian product.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// Row-major grid coordinate, ordered (y, x) the way the puzzle inputs
/// are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

impl Point {
    pub const ZERO: Point = Point { y: 0, x: 0 };

    pub fn new(y: i32, x: i32) -> Point {
        Point { y, x }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point {
            y: self.y + other.y,
            x: self.x + other.x,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point {
            y: self.y - other.y,
            x: self.x - other.x,
        }
    }
}

/// The four orthogonal (dy, dx) offsets.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight surrounding (dy, dx) offsets.
pub const ADJACENT_8: [(i32, i32); 8] = [
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
];

/// Neighbours of (y, x) that fall inside a height x width grid, for the
/// given offset set.
pub fn neighbours(y: i32, x: i32, height: i32, width: i32, offsets: &[(i32, i32)]) -> Vec<Point> {
    let mut result = Vec::with_capacity(offsets.len());
    for (dy, dx) in offsets {
        let (ny, nx) = (y + dy, x + dx);
        if ny < 0 || ny == height || nx < 0 || nx == width {
            continue;
        }
        result.push(Point::new(ny, nx));
    }
    result
}

/// Cross product of two slices.
pub fn cartesian_product<T: Clone, U: Clone>(lhs: &[T], rhs: &[U]) -> Vec<(T, U)> {
    lhs.iter()
        .flat_map(|l| rhs.iter().map(move |r| (l.clone(), r.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_corner() {
        let n = neighbours(0, 0, 3, 3, &ORTHOGONAL);
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_neighbours_interior() {
        assert_eq!(neighbours(1, 1, 3, 3, &ORTHOGONAL).len(), 4);
        assert_eq!(neighbours(1, 1, 3, 3, &ADJACENT_8).len(), 8);
    }

    #[test]
    fn test_cartesian_product() {
        assert_eq!(
            cartesian_product(&[1, 2], &['a', 'b']),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }

    #[test]
    fn test_point_arithmetic() {
        assert_eq!(
            Point::new(1, 2) + Point::new(3, 4) - Point::new(2, 2),
            Point::new(2, 4)
        );
    }
}
