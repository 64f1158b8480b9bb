//! Representations of angles.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Div, Mul, Neg};

/// An angle in some unit, convertible to radians.
pub trait Angle<F>: Copy {
    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

/// An angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn radians(self) -> F {
        Radians::from(self).0
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn radians(self) -> F {
        self.0
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(rad.0 * float_from!(F, 180.0) * F::FRAC_1_PI())
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(deg.0 * F::PI() / float_from!(F, 180.0))
    }
}

macro_rules! impl_angle_ops {
    ($angle:ident) => {
        impl<F: Neg<Output = F>> Neg for $angle<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<F: Mul<Output = F>> Mul<F> for $angle<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Div<Output = F>> Div<F> for $angle<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<T: Copy + AbsDiffEq> AbsDiffEq for $angle<T>
        where
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> T::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                T::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl<T: Copy + RelativeEq> RelativeEq for $angle<T>
        where
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> T::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: T::Epsilon,
                max_relative: T::Epsilon,
            ) -> bool {
                T::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees);
impl_angle_ops!(Radians);
