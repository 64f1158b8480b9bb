//! Vectors, quaternions and rotations in three dimensions.
//!
//! [`Vector3D`]s are rotated by a [`Rotation`], which conjugates the vector
//! (lifted into the imaginary subspace of quaternion space) with a unit
//! [`Quaternion`]. Quaternions additionally support the exponential,
//! logarithm, real powers and spherical linear interpolation.

#[macro_use]
mod macros;

mod angle;
mod num;
mod quaternion;
mod rotation;
mod vector;

#[cfg(test)]
mod strategies;

pub use angle::{Angle, Degrees, Radians};
pub use num::Float;
pub use quaternion::{LOG_REAL_TOLERANCE, Quaternion};
pub use rotation::Rotation;
pub use vector::Vector3D;
