use super::Point;
use crate::algorithms::closest_point::closest_point_on_segment;
use crate::algorithms::point_location::on_segment;
use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B. Both end points are part of the edge.
#[derive(Debug, PartialEq)]
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T: PolygonScalar> DirectedEdge<'_, T, 2> {
  pub fn is_degenerate(self) -> bool {
    self.src == self.dst
  }

  /// True if `pt` lies on the closed segment, within `T::EPS`.
  pub fn contains(self, pt: &Point<T, 2>) -> bool {
    on_segment(pt, self.src, self.dst)
  }

  pub fn closest_point(self, pt: &Point<T, 2>) -> Point<T, 2> {
    closest_point_on_segment(self.src, self.dst, pt)
  }
}
