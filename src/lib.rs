//! Membership and nearest-boundary-point queries for simple 2D polygons.
//!
//! The queries are pure functions over [`Point`](data::Point)s and polygons given as
//! slices of points. A polygon is a closed loop: edge `i` runs from vertex `i` to
//! vertex `(i + 1) % n`. Any sequence is accepted, including empty and
//! degenerate ones.
//!
//! ```rust
//! # use polyprobe::data::Point;
//! # use polyprobe::geometry::{closest_point_on_polygon, in_polygon};
//! let square = [
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ];
//! assert!(in_polygon(&square, &Point::new([5.0, 5.0])));
//! assert!(!in_polygon(&square, &Point::new([15.0, 5.0])));
//! assert_eq!(
//!   closest_point_on_polygon(&square, &Point::new([15.0, 5.0])),
//!   Point::new([10.0, 5.0])
//! );
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::float::FloatCore;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
pub mod geometry;
pub mod scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  NonFiniteCoordinate,
  EmptyScene,
  InvalidColor,
  /// Stiffness outside `(0, 1]` or damping outside `[0, 1)`.
  UnstableSpring,
  InvalidParameter,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::EmptyScene => write!(f, "Scene has no shapes"),
      Error::InvalidColor => write!(f, "Color is not of the form #rrggbb"),
      Error::UnstableSpring => write!(
        f,
        "Spring stiffness must be in (0, 1] and damping in [0, 1)"
      ),
      Error::InvalidParameter => write!(f, "Invalid scene parameter"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type for every geometric query in this crate.
///
/// `EPS` is the tolerance below which cross and dot products are treated as
/// exactly zero.
pub trait PolygonScalar: FloatCore + Debug {
  const EPS: Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty => $eps:expr ),* ) => {
    $(
      impl PolygonScalar for $ty {
        const EPS: $ty = $eps;
      }
    )*
  };
}

floating_precision!(f32 => 1e-5, f64 => 1e-9);

#[cfg(test)]
pub mod testing;
