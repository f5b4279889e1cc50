use crate::algorithms::closest_point::closest_point_on_polygon;
use crate::algorithms::point_location::locate;
use crate::data::{Point, PointLocation};
use crate::Error;
use crate::PolygonScalar;

mod iter;
pub use iter::*;

/// A closed loop of points. The edge from the last point back to the first is
/// implied. No orientation, simplicity or minimum size is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { points }
  }

  /// Rejects non-finite coordinates. Degenerate loops (fewer than three points,
  /// repeated points) are accepted.
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error>
  where
    T: PolygonScalar,
  {
    if points.iter().all(Point::is_finite) {
      Ok(Polygon { points })
    } else {
      Err(Error::NonFiniteCoordinate)
    }
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.points.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter::new(&self.points)
  }

  pub fn map_points<F>(self, f: F) -> Polygon<T>
  where
    F: Fn(Point<T, 2>) -> Point<T, 2>,
  {
    Polygon {
      points: self.points.into_iter().map(f).collect(),
    }
  }

  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation
  where
    T: PolygonScalar,
  {
    locate(&self.points, pt)
  }

  /// Boundary points are contained.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    self.locate(pt).is_contained()
  }

  /// Nearest boundary point for outside points, `pt` itself otherwise.
  pub fn closest_point(&self, pt: &Point<T, 2>) -> Point<T, 2>
  where
    T: PolygonScalar,
  {
    closest_point_on_polygon(&self.points, pt)
  }
}
