use crate::data::polygon::EdgeIter;
use crate::data::{Point, PointLocation};
use crate::PolygonScalar;

/// True iff `p` lies on the closed segment `[a, b]`.
///
/// Collinearity is tested with the cross product of `p - a` and `b - a`, the
/// bounds with their dot product. Both are widened by `T::EPS` so end points
/// are always included. A zero-length segment contains exactly its end point.
pub fn on_segment<T>(p: &Point<T, 2>, a: &Point<T, 2>, b: &Point<T, 2>) -> bool
where
  T: PolygonScalar,
{
  let ap = p - a;
  let ab = b - a;
  if ab.squared_magnitude() == T::zero() {
    return ap.squared_magnitude() <= T::EPS * T::EPS;
  }
  if ab.cross(&ap).abs() > T::EPS {
    return false;
  }
  let dot = ap.dot(&ab);
  if dot < -T::EPS {
    return false;
  }
  dot <= ab.squared_magnitude() + T::EPS
}

/// Classify `p` against a closed loop of points.
///
/// Any edge containing `p` (see [`on_segment`]) makes it
/// [`OnBoundary`](PointLocation::OnBoundary). Otherwise the even-odd rule decides:
/// a ray from `p` towards positive x toggles the result at every edge with
/// exactly one end point strictly above `p` whose crossing lies strictly right of
/// `p`. Vertex order (cw or ccw) does not matter.
///
/// Self-intersecting loops are classified by parity, not winding number. Every
/// point on any of their edges, crossings included, is still `OnBoundary`.
///
/// # Examples
///
/// ```rust
/// # use polyprobe::data::{Point, PointLocation};
/// # use polyprobe::algorithms::locate;
/// let triangle = [
///   Point::new([0.0, 0.0]),
///   Point::new([4.0, 0.0]),
///   Point::new([0.0, 4.0]),
/// ];
/// assert_eq!(locate(&triangle, &Point::new([1.0, 1.0])), PointLocation::Inside);
/// assert_eq!(locate(&triangle, &Point::new([2.0, 2.0])), PointLocation::OnBoundary);
/// assert_eq!(locate(&triangle, &Point::new([3.0, 3.0])), PointLocation::Outside);
/// ```
pub fn locate<T>(polygon: &[Point<T, 2>], p: &Point<T, 2>) -> PointLocation
where
  T: PolygonScalar,
{
  if EdgeIter::new(polygon).any(|edge| edge.contains(p)) {
    return PointLocation::OnBoundary;
  }

  let [px, py] = p.array;
  let mut inside = false;
  for edge in EdgeIter::new(polygon) {
    let [xi, yi] = edge.dst.array;
    let [xj, yj] = edge.src.array;
    // yi != yj whenever the first test passes.
    if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
      inside = !inside;
    }
  }
  if inside {
    PointLocation::Inside
  } else {
    PointLocation::Outside
  }
}

/// Boundary points count as inside. An empty polygon contains nothing.
pub fn in_polygon<T>(polygon: &[Point<T, 2>], p: &Point<T, 2>) -> bool
where
  T: PolygonScalar,
{
  locate(polygon, p).is_contained()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Polygon;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn square() -> Vec<Point<f64, 2>> {
    vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ]
  }

  #[test]
  fn square_interior_and_exterior() {
    let sq = square();
    assert!(in_polygon(&sq, &Point::new([5.0, 5.0])));
    assert!(!in_polygon(&sq, &Point::new([15.0, 5.0])));
    assert!(!in_polygon(&sq, &Point::new([-0.1, 5.0])));
    assert!(!in_polygon(&sq, &Point::new([5.0, 10.5])));
  }

  #[test]
  fn square_boundary() {
    let sq = square();
    assert_eq!(locate(&sq, &Point::new([10.0, 5.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&sq, &Point::new([0.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&sq, &Point::new([0.0, 10.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&sq, &Point::new([3.0, 0.0])), PointLocation::OnBoundary);
  }

  #[test]
  fn boundary_within_tolerance() {
    let sq = square();
    assert!(in_polygon(&sq, &Point::new([10.0 + 1e-11, 5.0])));
    assert!(in_polygon(&sq, &Point::new([10.0, 10.0 + 1e-11])));
    assert!(!in_polygon(&sq, &Point::new([10.0 + 1e-6, 5.0])));
  }

  #[test]
  fn winding_does_not_matter() {
    let mut sq = square();
    sq.reverse();
    assert_eq!(locate(&sq, &Point::new([5.0, 5.0])), PointLocation::Inside);
    assert_eq!(locate(&sq, &Point::new([15.0, 5.0])), PointLocation::Outside);
  }

  #[test]
  fn ray_through_vertex() {
    // The ray from (1,2) passes exactly through the vertex (3,2).
    let diamond = [
      Point::new([2.0, 0.0]),
      Point::new([3.0, 2.0]),
      Point::new([2.0, 4.0]),
      Point::new([0.0, 2.0]),
    ];
    assert_eq!(locate(&diamond, &Point::new([1.0, 2.0])), PointLocation::Inside);
    assert_eq!(locate(&diamond, &Point::new([-1.0, 2.0])), PointLocation::Outside);
  }

  #[test]
  fn ray_along_horizontal_edge() {
    let step = [
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 2.0]),
      Point::new([2.0, 2.0]),
      Point::new([2.0, 4.0]),
      Point::new([0.0, 4.0]),
    ];
    assert_eq!(locate(&step, &Point::new([1.0, 2.0])), PointLocation::Inside);
    assert_eq!(locate(&step, &Point::new([-1.0, 2.0])), PointLocation::Outside);
    assert_eq!(locate(&step, &Point::new([5.0, 2.0])), PointLocation::Outside);
  }

  #[test]
  fn self_intersecting_bowtie_is_parity_based() {
    // Two triangles meeting at (2,2). The crossing point lies on two edges.
    let bowtie = [
      Point::new([0.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ];
    assert_eq!(locate(&bowtie, &Point::new([2.0, 2.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&bowtie, &Point::new([3.5, 2.0])), PointLocation::Inside);
    assert_eq!(locate(&bowtie, &Point::new([2.0, 3.5])), PointLocation::Outside);
  }

  #[test]
  fn empty_polygon() {
    let empty: [Point<f64, 2>; 0] = [];
    assert_eq!(locate(&empty, &Point::new([0.0, 0.0])), PointLocation::Outside);
    assert!(!in_polygon(&empty, &Point::new([0.0, 0.0])));
  }

  #[test]
  fn single_point_polygon() {
    let single = [Point::new([2.0, 2.0])];
    assert!(in_polygon(&single, &Point::new([2.0, 2.0])));
    assert!(!in_polygon(&single, &Point::new([2.0, 2.5])));
  }

  #[test]
  fn two_point_polygon_is_a_segment() {
    let seg = [Point::new([0.0, 0.0]), Point::new([4.0, 4.0])];
    assert_eq!(locate(&seg, &Point::new([1.0, 1.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&seg, &Point::new([1.0, 2.0])), PointLocation::Outside);
  }

  #[test]
  fn on_segment_bounds() {
    let a = Point::new([1.0, 1.0]);
    let b = Point::new([5.0, 1.0]);
    assert!(on_segment(&Point::new([1.0, 1.0]), &a, &b));
    assert!(on_segment(&Point::new([5.0, 1.0]), &a, &b));
    assert!(on_segment(&Point::new([3.0, 1.0]), &a, &b));
    assert!(!on_segment(&Point::new([0.5, 1.0]), &a, &b));
    assert!(!on_segment(&Point::new([5.5, 1.0]), &a, &b));
    assert!(!on_segment(&Point::new([3.0, 1.1]), &a, &b));
  }

  #[test]
  fn on_segment_degenerate() {
    let a = Point::new([2.0, 2.0]);
    assert!(on_segment(&a, &a, &a));
    assert!(!on_segment(&Point::new([2.0, 3.0]), &a, &a));
  }

  #[test]
  fn repeated_vertex_keeps_exterior_outside() {
    let poly = [
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([5.0, 5.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ];
    assert_eq!(locate(&poly, &Point::new([8.0, 5.0])), PointLocation::Outside);
    assert_eq!(locate(&poly, &Point::new([2.0, 5.0])), PointLocation::Inside);
    assert_eq!(locate(&poly, &Point::new([10.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(locate(&poly, &Point::new([7.5, 2.5])), PointLocation::OnBoundary);
  }

  #[test]
  fn f32_polygons() {
    let tri = [
      Point::new([0.0_f32, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ];
    assert!(in_polygon(&tri, &Point::new([1.0, 1.0])));
    assert!(in_polygon(&tri, &Point::new([2.0, 2.0])));
    assert!(!in_polygon(&tri, &Point::new([3.0, 3.0])));
  }

  #[proptest]
  fn vertices_and_edges_are_contained(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(0.0..=1.0)] t: f64,
    #[strategy(0usize..64)] nth: usize,
  ) {
    let edge = poly.iter_boundary_edges().nth(nth % poly.len()).unwrap();
    let pt = edge.src + &((edge.dst - edge.src) * t);
    prop_assert!(in_polygon(poly.points(), edge.src));
    prop_assert!(in_polygon(poly.points(), &pt));
  }

  #[proptest]
  fn matches_winding_oracle(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(any_point())] pt: Point<f64, 2>,
  ) {
    prop_assume!(boundary_distance_squared(poly.points(), &pt) > 1e-6);
    let expected = if winding_number(poly.points(), &pt) != 0 {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    };
    prop_assert_eq!(locate(poly.points(), &pt), expected);
  }

  #[proptest]
  fn repeated_vertex_matches_winding_oracle(
    #[strategy(star_polygon_with_repeat())] poly: Polygon<f64>,
    #[strategy(any_point())] pt: Point<f64, 2>,
  ) {
    prop_assume!(boundary_distance_squared(poly.points(), &pt) > 1e-6);
    let expected = if winding_number(poly.points(), &pt) != 0 {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    };
    prop_assert_eq!(locate(poly.points(), &pt), expected);
  }

  #[proptest]
  fn reversal_invariant(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(any_point())] pt: Point<f64, 2>,
  ) {
    let mut reversed = poly.points().to_vec();
    reversed.reverse();
    prop_assert_eq!(in_polygon(poly.points(), &pt), in_polygon(&reversed, &pt));
  }
}
