use ordered_float::OrderedFloat;

use crate::algorithms::point_location::in_polygon;
use crate::data::polygon::EdgeIter;
use crate::data::Point;
use crate::PolygonScalar;

/// Nearest point to `p` on the closed segment `[a, b]`.
///
/// `p` is projected onto the line through `a` and `b` and the projection is
/// clamped to the segment. A zero-length segment returns `a`.
pub fn closest_point_on_segment<T>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  p: &Point<T, 2>,
) -> Point<T, 2>
where
  T: PolygonScalar,
{
  let ab = b - a;
  let len2 = ab.squared_magnitude();
  if len2 == T::zero() {
    return *a;
  }
  let t = (p - a).dot(&ab) / len2;
  let t = t.max(T::zero()).min(T::one());
  a + &(ab * t)
}

/// Nearest point to `p` on the boundary of `polygon`, or `p` itself when it is
/// contained (see [`in_polygon`]). An empty polygon also returns `p`.
///
/// When several edges are equally close the earliest edge in iteration order
/// wins. This tie-break is an implementation detail.
///
/// # Examples
///
/// ```rust
/// # use polyprobe::data::Point;
/// # use polyprobe::algorithms::closest_point_on_polygon;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
/// ];
/// let outside = Point::new([15.0, 5.0]);
/// assert_eq!(closest_point_on_polygon(&square, &outside), Point::new([10.0, 5.0]));
/// let inside = Point::new([2.0, 3.0]);
/// assert_eq!(closest_point_on_polygon(&square, &inside), inside);
/// ```
pub fn closest_point_on_polygon<T>(polygon: &[Point<T, 2>], p: &Point<T, 2>) -> Point<T, 2>
where
  T: PolygonScalar,
{
  if polygon.is_empty() || in_polygon(polygon, p) {
    return *p;
  }
  EdgeIter::new(polygon)
    .map(|edge| edge.closest_point(p))
    .min_by_key(|q| OrderedFloat(q.squared_euclidean_distance(p)))
    .unwrap_or(*p)
}
