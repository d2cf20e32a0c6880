use std::{array, fmt};

use crate::traits::{One, Zero};

mod ops;

/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A row-major 4x4 matrix with element type `T`.
///
/// # Construction
///
/// - [`Mat4::from_rows`] fills a matrix from an array of rows.
/// - [`Mat4::from_fn`] creates each element by invoking a closure with its row
///   and column.
/// - [`Mat4::ZERO`] is a matrix with every element set to 0, and
///   [`Mat4::IDENTITY`] has 1 on its diagonal and 0 everywhere else.
///
/// There is deliberately no [`Default`] implementation: a matrix is only
/// meaningful once all 16 elements have been chosen, so it must be built from
/// explicit rows or taken from one of the constants.
///
/// # Element Access
///
/// [`Mat4`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second
/// is the *column*, matching common mathematical notation. Indices are
/// 0-based.
///
/// ```
/// # use caber_linalg::*;
/// let mut mat = Mat4::<i32>::ZERO;
/// mat[(0, 1)] = 4;
/// assert_eq!(mat[(0, 1)], 4);
/// assert_eq!(mat[(1, 0)], 0);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mat4<T>([[T; 4]; 4]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T: Zero> Mat4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
    ]);
}

impl<T: Zero + One> Mat4<T> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    /// Multiplying any matrix with it returns that matrix unchanged.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T> Mat4<T> {
    /// Creates a [`Mat4`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let mat = Mat4::from_rows([
    ///     [0, 1, 2, 3],
    ///     [4, 5, 6, 7],
    ///     [8, 9, 10, 11],
    ///     [12, 13, 14, 15],
    /// ]);
    /// assert_eq!(mat[(0, 0)], 0);
    /// assert_eq!(mat[(2, 1)], 9);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Creates a [`Mat4`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let mat = Mat4::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat[(0, 0)], 0);
    /// assert_eq!(mat[(3, 2)], 32);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }
}

impl<T: fmt::Debug> fmt::Debug for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn random_matrix() -> Mat4f {
        Mat4::from_fn(|_, _| fastrand::f32() * 2.0 - 1.0)
    }

    #[test]
    fn constants() {
        assert_eq!(Mat4::<i32>::ZERO[(1, 2)], 0);
        assert_eq!(Mat4::<i32>::IDENTITY[(2, 2)], 1);
        assert_eq!(Mat4::<i32>::IDENTITY[(2, 3)], 0);
    }

    #[test]
    fn identity_laws() {
        let m = Mat4::from_rows([
            [0.5f32, -1.0, 2.0, 3.5],
            [4.0, 5.5, -6.0, 7.0],
            [8.0, -9.5, 10.0, 11.0],
            [12.0, 13.0, -14.5, 15.0],
        ]);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat4::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let b = Mat4::from_rows([
            [17, 18, 19, 20],
            [21, 22, 23, 24],
            [25, 26, 27, 28],
            [29, 30, 31, 32],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 0)], 1 * 17 + 2 * 21 + 3 * 25 + 4 * 29);
        assert_eq!(c[(2, 3)], 9 * 20 + 10 * 24 + 11 * 28 + 12 * 32);
        assert_eq!(c[(3, 1)], 13 * 18 + 14 * 22 + 15 * 26 + 16 * 30);
    }

    #[test]
    fn mul_is_associative() {
        fastrand::seed(0x2b6d_01e4);
        for _ in 0..16 {
            let (a, b, c) = (random_matrix(), random_matrix(), random_matrix());
            assert_relative_eq!(
                (a * b) * c,
                a * (b * c),
                epsilon = 1e-5,
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn fmt() {
        let mat = Mat4::<i32>::IDENTITY;
        assert_eq!(
            format!("{:?}", mat),
            "[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]"
        );
    }
}
