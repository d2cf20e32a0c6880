use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::Number;

use super::Mat4;

impl<T: AbsDiffEq> AbsDiffEq for Mat4<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (0..4).all(|row| {
            (0..4).all(|col| T::abs_diff_eq(&self[(row, col)], &other[(row, col)], epsilon))
        })
    }
}

impl<T: RelativeEq> RelativeEq for Mat4<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        (0..4).all(|row| {
            (0..4).all(|col| {
                T::relative_eq(&self[(row, col)], &other[(row, col)], epsilon, max_relative)
            })
        })
    }
}

impl<T: UlpsEq> UlpsEq for Mat4<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        (0..4).all(|row| {
            (0..4).all(|col| T::ulps_eq(&self[(row, col)], &other[(row, col)], epsilon, max_ulps))
        })
    }
}

impl<T> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Matrix * Matrix.
impl<T: Number> Mul for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Mat4::from_fn(|row, col| {
            (0..4).fold(T::ZERO, |acc, k| acc + self[(row, k)] * rhs[(k, col)])
        })
    }
}
