use crate::data::DirectedEdge;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }
}

/// Edges of a closed loop of points. Edge `i` runs from point `i` to point
/// `(i + 1) % n`, so `n` points give `n` edges and a single point gives one
/// zero-length edge.
pub struct EdgeIter<'a, T: 'a> {
  points: &'a [Point<T, 2>],
  index: usize,
}

impl<'a, T> EdgeIter<'a, T> {
  pub fn new(points: &'a [Point<T, 2>]) -> EdgeIter<'a, T> {
    EdgeIter { points, index: 0 }
  }
}

impl<T> Clone for EdgeIter<'_, T> {
  fn clone(&self) -> Self {
    EdgeIter {
      points: self.points,
      index: self.index,
    }
  }
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T, 2>;
  fn next(&mut self) -> Option<Self::Item> {
    let src = self.points.get(self.index)?;
    let dst = &self.points[(self.index + 1) % self.points.len()];
    self.index += 1;
    Some(DirectedEdge { src, dst })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.points.len() - self.index
  }
}
