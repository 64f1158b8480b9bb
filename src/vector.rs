//! Vectors in three dimensions.

use crate::{num::Float, quaternion::Quaternion};
use anyhow::{Result, anyhow};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra as na;
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A vector in three-dimensional space.
///
/// The components are only reachable through accessors, so a vector can
/// not be modified after construction. Every operation returns a new
/// vector. No normalization is ever applied implicitly.
///
/// Dividing by a zero scalar is not guarded against and yields
/// non-finite components, like for the [`nalgebra`] vector types. Use
/// [`Self::try_normalize`] when a unit vector must be obtained from
/// a vector that may have zero length.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D<F = f64> {
    x: F,
    y: F,
    z: F,
}

impl<F: Float> Vector3D<F> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(F::ZERO, F::ZERO, F::ZERO);

    /// The unit vector along the x-axis.
    pub const X_AXIS: Self = Self::new(F::ONE, F::ZERO, F::ZERO);

    /// The unit vector along the y-axis.
    pub const Y_AXIS: Self = Self::new(F::ZERO, F::ONE, F::ZERO);

    /// The unit vector along the z-axis.
    pub const Z_AXIS: Self = Self::new(F::ZERO, F::ZERO, F::ONE);

    /// Creates a new vector with the given components.
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector from the given array of components.
    pub const fn from_array([x, y, z]: [F; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// Returns the components of the vector as an array.
    pub const fn to_array(&self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    pub const fn x(&self) -> F {
        self.x
    }

    pub const fn y(&self) -> F {
        self.y
    }

    pub const fn z(&self) -> F {
        self.z
    }

    /// Computes the squared length of the vector.
    pub fn length_squared(&self) -> F {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the length of the vector.
    pub fn length(&self) -> F {
        self.length_squared().sqrt()
    }

    /// Returns the vector divided by its length. The result is non-finite
    /// if the vector has zero length.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Returns the vector divided by its length.
    ///
    /// # Errors
    /// Returns an error if the vector has zero or non-finite length.
    pub fn try_normalize(&self) -> Result<Self> {
        let length = self.length();
        if length == F::ZERO || !length.is_finite() {
            log::debug!("Rejected normalization of vector {self}");
            return Err(anyhow!(
                "Cannot normalize vector {self} with length {length}"
            ));
        }
        Ok(*self / length)
    }

    /// Whether all components of the vector are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Computes the cross product `a × b`. The cross product is
    /// anti-commutative.
    pub fn cross_product(a: &Self, b: &Self) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Computes the dot product `a · b`.
    pub fn dot_product(a: &Self, b: &Self) -> F {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Computes the Euclidean distance between this and the given
    /// vector, which serves as a measure of how different they are.
    pub fn scalar_difference(&self, other: &Self) -> F {
        (*self - *other).length()
    }

    /// Linearly interpolates between `x` (for `t = 0`) and `y` (for
    /// `t = 1`). The interpolation parameter is not clamped, so values
    /// outside `[0, 1]` extrapolate.
    pub fn interpolate(t: F, x: &Self, y: &Self) -> Self {
        *x * (F::ONE - t) + *y * t
    }

    /// Lifts the vector into the imaginary subspace of quaternion space,
    /// yielding a quaternion with zero real part.
    pub fn to_quaternion(&self) -> Quaternion<F> {
        Quaternion::from_vector(self)
    }
}

impl<F: Float> Default for Vector3D<F> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<F: Float> Add for Vector3D<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<F: Float> Sub for Vector3D<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<F: Float> Neg for Vector3D<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> Mul<F> for Vector3D<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self::new(rhs * self.x, rhs * self.y, rhs * self.z)
    }
}

impl<F: Float> Div<F> for Vector3D<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl_scalar_lhs_ops!(Vector3D; f32, f64);

impl<F: Float> From<[F; 3]> for Vector3D<F> {
    fn from(components: [F; 3]) -> Self {
        Self::from_array(components)
    }
}

impl<F: Float> From<na::Vector3<F>> for Vector3D<F> {
    fn from(vector: na::Vector3<F>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl<F: Float> From<Vector3D<F>> for na::Vector3<F> {
    fn from(vector: Vector3D<F>) -> Self {
        na::vector![vector.x, vector.y, vector.z]
    }
}

impl<F: Float> fmt::Display for Vector3D<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed!(f, "({:.*}, {:.*}, {:.*})", self.x, self.y, self.z)
    }
}

// SAFETY: `Vector3D` is `repr(C)` and consists of three values of the
// same `Pod` type, so it has no padding.
unsafe impl<F: Float + Zeroable> Zeroable for Vector3D<F> {}
unsafe impl<F: Float + Pod> Pod for Vector3D<F> {}

impl<F: Float> AbsDiffEq for Vector3D<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<F: Float> RelativeEq for Vector3D<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
