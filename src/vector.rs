use std::fmt;

use crate::traits::{Number, One, Sqrt, Zero};

mod ops;

/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;

/// A 3-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec3`] function directly creates a vector from its
///   elements.
/// - [`Vec3::splat`] creates a vector by copying the given value into each
///   element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vec3::ZERO`] is a vector containing all-zeroes, and `Vec3::X`,
///   `Vec3::Y` and `Vec3::Z` are the unit vectors pointing in the given
///   direction.
///
/// # Comparison
///
/// The [`PartialEq`] implementation compares elements *exactly*, with no
/// tolerance. Callers that need tolerance-based comparison of float vectors
/// can use the [`approx`] traits implemented for [`Vec3`].
///
/// [`approx`]: https://docs.rs/approx
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T: Zero> Vec3<T> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };
}

impl<T: Zero + One> Vec3<T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self {
        x: T::ONE,
        y: T::ZERO,
        z: T::ZERO,
    };
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::ONE,
        z: T::ZERO,
    };
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ONE,
    };
}

impl<T> Vec3<T> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let v = Vec3::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self {
            x: elem,
            y: elem,
            z: elem,
        }
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Vec3<U>
    where
        F: FnMut(T) -> U,
    {
        Vec3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Converts this [`Vec3`] into a 3-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the squared length of this [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// assert_eq!(vec3(4, 0, 0).length2(), 16);
    /// ```
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the length of this [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction: normalizing it returns the zero
    /// vector instead of dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length > T::ZERO {
            self / length
        } else {
            Self::ZERO
        }
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Its direction depends on the order of the arguments: swapping
    /// them will invert the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caber_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        vec3(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(value: Vec3<T>) -> Self {
        value.into_array()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vec3 { x, y, z }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn exact_eq() {
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));

        assert_eq!(vec3(1u32, 2, 3), vec3(1u32, 2, 3));
        assert_ne!(vec3(1u32, 2, 3), vec3(3u32, 2, 1));

        assert_eq!(vec3(0.5f32, 0.25, -1.0), vec3(0.5f32, 0.25, -1.0));
        assert_ne!(vec3(0.5f32, 0.25, -1.0), vec3(0.5f32, 0.25, -1.0000001));
    }

    #[test]
    fn add_sub() {
        let a = vec3(1.0f32, -2.0, 0.5);
        let b = vec3(3.0f32, 7.0, -0.25);
        assert_eq!(a + b, vec3(4.0, 5.0, 0.25));
        assert_eq!(a - a, Vec3f::ZERO);

        // `(a + b) - b` recovers `a` up to rounding.
        let roundtrip = (a + b) - b;
        assert_relative_eq!(roundtrip.x, a.x);
        assert_relative_eq!(roundtrip.y, a.y);
        assert_relative_eq!(roundtrip.z, a.z);
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let delta = vec3(0.125f32, -4.0, 9.5);
        let mut v = vec3(1.0f32, 2.0, 3.0);
        v += delta;
        assert_eq!(v, vec3(1.0, 2.0, 3.0) + delta);
        v -= delta;
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(3.0f32, 4.0, 0.0).normalize(), vec3(0.6, 0.8, 0.0));
        assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);

        let v = vec3(-2.5f32, 0.01, 12.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn dot_cross() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(Vec3f::X.dot(Vec3f::Y), 0.0);
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec3f::Z), "(0, 0, 1)");
        assert_eq!(format!("{:?}", Vec3f::Z), "(0.0, 0.0, 1.0)");
    }
}
