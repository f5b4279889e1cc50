// Strategies and reference predicates shared by the unit tests:
//  * points in a box around the origin
//  * simple, star-shaped polygons, optionally with a repeated vertex
//  * a winding-number oracle and a boundary distance that share no code with
//    the crate's own predicates.
use crate::data::{Point, Polygon};

use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;

pub fn init_test() {
  drop(env_logger::builder().is_test(true).try_init());
}

pub fn any_point() -> impl Strategy<Value = Point<f64, 2>> {
  (-120.0..120.0f64, -120.0..120.0f64).prop_map(|(x, y)| Point::new([x, y]))
}

// Vertices are placed at strictly increasing angles around the origin with no
// angular gap of pi or more, which keeps the loop simple.
pub fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
  vec((0.1..0.9f64, 1.0..100.0f64), 4..16).prop_map(|samples| {
    let n = samples.len() as f64;
    let pts = samples
      .iter()
      .enumerate()
      .map(|(i, &(jitter, radius))| {
        let angle = (i as f64 + jitter) / n * TAU;
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Polygon::new_unchecked(pts)
  })
}

// A star polygon with one vertex repeated in place, giving a zero-length edge.
pub fn star_polygon_with_repeat() -> impl Strategy<Value = Polygon<f64>> {
  star_polygon()
    .prop_flat_map(|poly| {
      let n = poly.len();
      (Just(poly), 0..n)
    })
    .prop_map(|(poly, nth)| {
      let mut pts = poly.points().to_vec();
      pts.insert(nth, pts[nth]);
      Polygon::new_unchecked(pts)
    })
}

pub fn winding_number(polygon: &[Point<f64, 2>], p: &Point<f64, 2>) -> i32 {
  let mut winding = 0;
  for (i, a) in polygon.iter().enumerate() {
    let b = &polygon[(i + 1) % polygon.len()];
    let is_left = (b[0] - a[0]) * (p[1] - a[1]) - (p[0] - a[0]) * (b[1] - a[1]);
    if a[1] <= p[1] {
      if b[1] > p[1] && is_left > 0.0 {
        winding += 1;
      }
    } else if b[1] <= p[1] && is_left < 0.0 {
      winding -= 1;
    }
  }
  winding
}

pub fn boundary_distance_squared(polygon: &[Point<f64, 2>], p: &Point<f64, 2>) -> f64 {
  polygon
    .iter()
    .enumerate()
    .map(|(i, a)| {
      let b = &polygon[(i + 1) % polygon.len()];
      let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
      let len2 = dx * dx + dy * dy;
      let t = if len2 > 0.0 {
        (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len2).clamp(0.0, 1.0)
      } else {
        0.0
      };
      let (qx, qy) = (a[0] + t * dx - p[0], a[1] + t * dy - p[1]);
      qx * qx + qy * qy
    })
    .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn oracle_on_square() {
    let square = [
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ];
    assert_eq!(winding_number(&square, &Point::new([5.0, 5.0])), 1);
    assert_eq!(winding_number(&square, &Point::new([15.0, 5.0])), 0);
    assert_eq!(boundary_distance_squared(&square, &Point::new([15.0, 5.0])), 25.0);
  }

  #[test]
  fn oracle_ignores_zero_length_edges() {
    let square = [
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ];
    assert_eq!(winding_number(&square, &Point::new([5.0, 5.0])), 1);
    assert_eq!(boundary_distance_squared(&square, &Point::new([13.0, -4.0])), 25.0);
  }
}
