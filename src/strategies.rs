//! Proptest strategies shared by the unit tests.

use crate::Vector3D;
use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

prop_compose! {
    pub(crate) fn vector_strategy(max_component: f64)(
        x in -max_component..max_component,
        y in -max_component..max_component,
        z in -max_component..max_component,
    ) -> Vector3D<f64> {
        Vector3D::new(x, y, z)
    }
}

prop_compose! {
    pub(crate) fn direction_strategy()(
        phi in 0.0..TAU,
        theta in 0.0..PI,
    ) -> Vector3D<f64> {
        Vector3D::new(
            f64::cos(phi) * f64::sin(theta),
            f64::sin(phi) * f64::sin(theta),
            f64::cos(theta),
        )
    }
}
