use std::fmt;

use crate::{
    matrix::Mat4,
    traits::{Number, One, Sqrt, Trig, Zero},
    vector::Vec3,
};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary components and a real component.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent
/// rotations in 3D space. The `x`, `y`, and `z` components correspond to the
/// `i`, `j`, and `k` imaginary parts, while the `w` component is the real
/// number part of the quaternion.
///
/// The [`Default`] implementation returns [`Quat::IDENTITY`], the rotation
/// that leaves everything in place.
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(C)]
pub struct Quat<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, `(0, 0, 0, 1)`.
    ///
    /// This is a unit quaternion that represents "no rotation".
    pub const IDENTITY: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
        w: T::ONE,
    };
}

impl<T: Zero + One> Default for Quat<T> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> Quat<T> {
    /// Creates a quaternion from its 4 components.
    #[inline]
    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation of `radians` around
    /// `axis`.
    ///
    /// `axis` is expected to be of unit length. The axis is *not* normalized
    /// here: passing a non-unit axis produces a non-unit quaternion, which
    /// does not represent a pure rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// use std::f32::consts::PI;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let half_turn = Quat::from_axis_angle(Vec3f::Z, PI);
    /// let expected = Quat::from_components(0.0, 0.0, 1.0, 0.0);
    /// assert_abs_diff_eq!(half_turn, expected, epsilon = 1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = radians * Self::one_half();
        let (sin, cos) = (half.sin(), half.cos());
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Composes `self` with a rotation of `radians` around `axis`.
    ///
    /// The freshly constructed rotation is multiplied *on the left*, so it
    /// applies after any rotation `self` already encodes. Like
    /// [`Quat::from_axis_angle`], this expects `axis` to be of unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// use std::f32::consts::PI;
    /// use approx::assert_abs_diff_eq;
    ///
    /// // Two quarter turns equal one half turn.
    /// let twice = Quatf::IDENTITY
    ///     .rotate(Vec3f::Z, PI / 2.0)
    ///     .rotate(Vec3f::Z, PI / 2.0);
    /// let once = Quatf::IDENTITY.rotate(Vec3f::Z, PI);
    /// assert_abs_diff_eq!(twice, once, epsilon = 1e-6);
    /// ```
    pub fn rotate(self, axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_axis_angle(axis, radians) * self
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, the quaternion does not represent a
    /// pure rotation. When using quaternions to model rotations, it is
    /// advisable to ensure that they are always of length one.
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The all-zero quaternion has no direction to preserve: normalizing it
    /// returns the all-zero quaternion again. Note that this sentinel is *not*
    /// a valid rotation (in particular, it is not the identity).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length > T::ZERO {
            Self::from_components(
                self.x / length,
                self.y / length,
                self.z / length,
                self.w / length,
            )
        } else {
            Self::from_components(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
        }
    }

    /// Converts this quaternion into the 4x4 matrix applying the same
    /// rotation.
    ///
    /// Only the rotation sub-block (the upper-left 3x3) and the lower-right
    /// element carry information; the translation column and the rest of the
    /// bottom row are zero. The result is therefore *not* a complete
    /// homogeneous transform: callers building one must fill in the remaining
    /// entries themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// assert_eq!(Quatf::IDENTITY.to_matrix(), Mat4f::IDENTITY);
    /// ```
    pub fn to_matrix(self) -> Mat4<T>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let Self { x, y, z, w } = self;
        Mat4::from_rows([
            [
                T::ONE - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
                T::ZERO,
            ],
            [
                two * (x * y + w * z),
                T::ONE - two * (x * x + z * z),
                two * (y * z - w * x),
                T::ZERO,
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                T::ONE - two * (x * x + y * y),
                T::ZERO,
            ],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .field(&self.w)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec3, Mat4, Vec3f};

    use super::*;

    #[test]
    fn default_is_identity() {
        let q = Quatf::default();
        assert_eq!(q, Quat::from_components(0.0, 0.0, 0.0, 1.0));
        assert_eq!(q, Quatf::IDENTITY);
    }

    #[test]
    fn identity_laws() {
        let q = Quat::from_components(0.5f32, -0.5, 0.5, 0.5);
        assert_eq!(Quatf::IDENTITY * q, q);
        assert_eq!(q * Quatf::IDENTITY, q);
    }

    #[test]
    fn normalize() {
        let q = Quat::from_components(1.0f32, -2.0, 3.0, 4.0);
        assert_relative_eq!(q.normalize().length(), 1.0, epsilon = 1e-6);

        let zero = Quat::from_components(0.0f32, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), zero);
    }

    #[test]
    fn rotate_about_z() {
        let q = Quatf::default().rotate(Vec3f::Z, PI);
        assert_abs_diff_eq!(
            q,
            Quat::from_components(0.0, 0.0, 1.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn rotations_compose() {
        let twice = Quatf::default()
            .rotate(Vec3f::Z, PI / 2.0)
            .rotate(Vec3f::Z, PI / 2.0);
        let once = Quatf::default().rotate(Vec3f::Z, PI);
        assert_abs_diff_eq!(twice, once, epsilon = 1e-6);
    }

    #[test]
    fn hamilton_product_is_not_commutative() {
        let a = Quat::from_axis_angle(Vec3f::X, PI / 2.0);
        let b = Quat::from_axis_angle(Vec3f::Y, PI / 2.0);
        let ab = a * b;
        let ba = b * a;
        assert_ne!(ab, ba);
        // Both orderings still produce unit quaternions.
        assert_relative_eq!(ab.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(ba.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn non_unit_axis_yields_non_unit_rotation() {
        let q = Quat::from_axis_angle(vec3(0.0f32, 0.0, 2.0), PI);
        assert_relative_eq!(q.length(), 2.0, max_relative = 1e-6);
    }

    #[test]
    fn to_matrix() {
        assert_eq!(Quatf::IDENTITY.to_matrix(), Mat4::IDENTITY);

        // A half turn about Z negates X and Y.
        let m = Quatf::default().rotate(Vec3f::Z, PI).to_matrix();
        let expected = Mat4::from_rows([
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_abs_diff_eq!(m, expected, epsilon = 1e-6);
    }
}
