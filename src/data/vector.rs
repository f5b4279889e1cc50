use array_init::array_init;
use num_traits::identities::Zero;
use num_traits::NumOps;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: NumOps + Zero + Copy,
{
  pub fn dot(&self, rhs: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(rhs.0.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
  }

  /// Equivalent to `self.dot(self)`.
  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }
}

impl<T> Vector<T, 2>
where
  T: NumOps + Copy,
{
  /// Perp-dot product. Zero iff the two vectors are parallel; positive iff `rhs`
  /// lies counter-clockwise of `self`.
  pub fn cross(&self, rhs: &Vector<T, 2>) -> T {
    self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

mod add;
mod mul;

impl<T, const N: usize> Zero for Vector<T, N>
where
  T: NumOps + Zero + Copy,
{
  fn zero() -> Vector<T, N> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}
