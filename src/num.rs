//! Numbers and numerics.

use nalgebra as na;
use num_traits as nt;
use std::fmt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    Copy + fmt::Display + nt::FloatConst + nt::FromPrimitive + na::RealField + na::Scalar
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const HALF: Self;
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const HALF: Self = 0.5;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
