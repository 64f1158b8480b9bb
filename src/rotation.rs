//! Rotations in three dimensions.

use crate::{
    angle::Angle,
    num::Float,
    quaternion::Quaternion,
    vector::Vector3D,
};
use anyhow::Result;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use std::fmt;

/// A rotation in three dimensions, represented by a unit quaternion.
///
/// A vector `v` is rotated by conjugating it with the quaternion,
/// `q * v * q⁻¹`, with the vector identified with a vector quaternion.
/// Composing rotations is done by rotating a vector with each of them in
/// turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation<F = f64> {
    quaternion: Quaternion<F>,
}

impl<F: Float> Rotation<F> {
    /// Creates the rotation that leaves every vector unchanged.
    pub const fn identity() -> Self {
        Self {
            quaternion: Quaternion::R_AXIS,
        }
    }

    /// Creates a rotation by the given angle about the given axis,
    /// following the right-hand rule. The axis is normalized here, so it
    /// need not have unit length. A zero-length axis results in a
    /// rotation with non-finite components.
    pub fn from_axis_angle<A: Angle<F>>(axis: &Vector3D<F>, angle: A) -> Self {
        Self::from_unit_axis_angle(&axis.normalized(), angle)
    }

    /// Like [`Self::from_axis_angle`], but fails for an axis that can not
    /// be normalized.
    ///
    /// # Errors
    /// Returns an error if the axis has zero or non-finite length.
    pub fn try_from_axis_angle<A: Angle<F>>(axis: &Vector3D<F>, angle: A) -> Result<Self> {
        let unit_axis = axis.try_normalize()?;
        Ok(Self::from_unit_axis_angle(&unit_axis, angle))
    }

    /// Creates a rotation by the given angle about the x-axis.
    pub fn about_x_axis<A: Angle<F>>(angle: A) -> Self {
        Self::from_axis_angle(&Vector3D::X_AXIS, angle)
    }

    /// Creates a rotation by the given angle about the y-axis.
    pub fn about_y_axis<A: Angle<F>>(angle: A) -> Self {
        Self::from_axis_angle(&Vector3D::Y_AXIS, angle)
    }

    /// Creates a rotation by the given angle about the z-axis.
    pub fn about_z_axis<A: Angle<F>>(angle: A) -> Self {
        Self::from_axis_angle(&Vector3D::Z_AXIS, angle)
    }

    /// Returns the unit quaternion representing the rotation.
    pub fn quaternion(&self) -> &Quaternion<F> {
        &self.quaternion
    }

    /// Rotates the given vector.
    pub fn rotate(&self, vector: &Vector3D<F>) -> Vector3D<F> {
        let rotated = self
            .quaternion
            .multiply(&vector.to_quaternion())
            .multiply(&self.quaternion.inverse());

        // The real part vanishes up to round-off
        rotated.to_vector3d()
    }

    fn from_unit_axis_angle<A: Angle<F>>(unit_axis: &Vector3D<F>, angle: A) -> Self {
        let half_angle = angle.radians() * F::HALF;
        let (sin_half_angle, cos_half_angle) = half_angle.sin_cos();

        Self {
            quaternion: Quaternion::new(
                cos_half_angle,
                sin_half_angle * unit_axis.x(),
                sin_half_angle * unit_axis.y(),
                sin_half_angle * unit_axis.z(),
            ),
        }
    }
}

impl<F: Float> Default for Rotation<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<Rotation<F>> for na::UnitQuaternion<F> {
    fn from(rotation: Rotation<F>) -> Self {
        na::UnitQuaternion::new_unchecked(rotation.quaternion.into())
    }
}

impl<F: Float> fmt::Display for Rotation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation-")?;
        fmt::Display::fmt(&self.quaternion, f)
    }
}

impl<F: Float> AbsDiffEq for Rotation<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.quaternion.abs_diff_eq(&other.quaternion, epsilon)
    }
}

impl<F: Float> RelativeEq for Rotation<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.quaternion.relative_eq(&other.quaternion, epsilon, max_relative)
    }
}
