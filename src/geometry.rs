//! Free-function interface to the point and polygon queries.
//!
//! Polygons are plain slices of points. Every function is pure and safe to call
//! from any number of threads.
use crate::data::{Point, Vector};
use crate::PolygonScalar;

pub use crate::algorithms::closest_point::{closest_point_on_polygon, closest_point_on_segment};
pub use crate::algorithms::point_location::{in_polygon, locate, on_segment};

/// Component-wise `a - b`.
pub fn subtract<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>) -> Vector<T, 2> {
  a - b
}

pub fn squared_length<T: PolygonScalar>(v: &Vector<T, 2>) -> T {
  v.squared_magnitude()
}

/// Order-equivalent to the Euclidean distance, without the square root.
pub fn squared_distance<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>) -> T {
  a.squared_euclidean_distance(b)
}
