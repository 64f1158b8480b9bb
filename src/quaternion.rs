//! Quaternions and their transcendental functions.

use crate::{num::Float, vector::Vector3D};
use anyhow::{Result, anyhow};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra as na;
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// When the imaginary part of a normalized quaternion is shorter than
/// this, [`Quaternion::ln`] treats the quaternion as purely real.
pub const LOG_REAL_TOLERANCE: f64 = 1e-4;

/// A quaternion `r + i·I + j·J + k·K`, with real part `r` and imaginary
/// parts `i`, `j` and `k` along the three imaginary units.
///
/// Quaternions with zero real part are called vector quaternions, and
/// are identified with [`Vector3D`]s through [`Self::to_vector3d`] and
/// [`Vector3D::to_quaternion`].
///
/// Like the vector type, a quaternion is never modified after
/// construction. Operations requiring a nonzero length ([`Self::inverse`],
/// [`Self::ln`] and division by a zero scalar) produce non-finite
/// components when given a zero-length quaternion. The `try_` variants
/// report this as an error instead.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<F = f64> {
    r: F,
    i: F,
    j: F,
    k: F,
}

impl<F: Float> Quaternion<F> {
    /// The zero quaternion.
    pub const ZERO: Self = Self::new(F::ZERO, F::ZERO, F::ZERO, F::ZERO);

    /// The unit along the real axis, which is the multiplicative
    /// identity.
    pub const R_AXIS: Self = Self::new(F::ONE, F::ZERO, F::ZERO, F::ZERO);

    /// The imaginary unit `I`.
    pub const I_AXIS: Self = Self::new(F::ZERO, F::ONE, F::ZERO, F::ZERO);

    /// The imaginary unit `J`.
    pub const J_AXIS: Self = Self::new(F::ZERO, F::ZERO, F::ONE, F::ZERO);

    /// The imaginary unit `K`.
    pub const K_AXIS: Self = Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE);

    /// Creates a new quaternion with the given real and imaginary
    /// components.
    pub const fn new(r: F, i: F, j: F, k: F) -> Self {
        Self { r, i, j, k }
    }

    /// Creates a purely real quaternion.
    pub const fn from_real(r: F) -> Self {
        Self::new(r, F::ZERO, F::ZERO, F::ZERO)
    }

    /// Creates a vector quaternion with the components of the given
    /// vector as imaginary parts.
    pub const fn from_vector(vector: &Vector3D<F>) -> Self {
        Self::new(F::ZERO, vector.x(), vector.y(), vector.z())
    }

    pub const fn r(&self) -> F {
        self.r
    }

    pub const fn i(&self) -> F {
        self.i
    }

    pub const fn j(&self) -> F {
        self.j
    }

    pub const fn k(&self) -> F {
        self.k
    }

    /// Returns the imaginary part of the quaternion as a vector, discarding
    /// the real part.
    pub const fn to_vector3d(&self) -> Vector3D<F> {
        Vector3D::new(self.i, self.j, self.k)
    }

    /// Whether the real part of the quaternion is zero.
    pub fn is_vector_quaternion(&self) -> bool {
        self.r == F::ZERO
    }

    /// Whether all components of the quaternion are finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.i.is_finite() && self.j.is_finite() && self.k.is_finite()
    }

    /// Computes the Hamilton product `a * b`. The product is not
    /// commutative.
    pub fn product(a: &Self, b: &Self) -> Self {
        Self::new(
            a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
            a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
            a.r * b.j + a.j * b.r + a.k * b.i - a.i * b.k,
            a.r * b.k + a.k * b.r + a.i * b.j - a.j * b.i,
        )
    }

    /// Computes the Hamilton product of this and the given quaternion,
    /// with this quaternion on the left.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::product(self, other)
    }

    /// Returns the conjugate quaternion, which has negated imaginary
    /// parts.
    pub fn conjugate(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Computes the squared length as the real part of the product of the
    /// quaternion with its conjugate.
    pub fn length_squared(&self) -> F {
        Self::product(self, &self.conjugate()).r
    }

    pub fn length(&self) -> F {
        self.length_squared().sqrt()
    }

    /// Returns the conjugate divided by the length. For the unit
    /// quaternions representing rotations, this is the multiplicative
    /// inverse.
    ///
    /// A zero-length quaternion yields non-finite components.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.length()
    }

    /// Like [`Self::inverse`], but fails for a zero-length quaternion.
    ///
    /// # Errors
    /// Returns an error if the quaternion has zero length.
    pub fn try_inverse(&self) -> Result<Self> {
        let length = self.length();
        if length == F::ZERO {
            log::debug!("Rejected inversion of quaternion {self}");
            return Err(anyhow!("Cannot invert zero-length quaternion"));
        }
        Ok(self.conjugate() / length)
    }

    /// Computes the Euclidean distance between this and the given
    /// quaternion, which serves as a measure of how different they are.
    pub fn scalar_difference(&self, other: &Self) -> F {
        (*self - *other).length()
    }

    /// Computes the exponential of the quaternion.
    ///
    /// With `q = |q|·u` for a unit quaternion `u`, the result is
    /// `e^r · (cos |q| + u·sin |q|)`. For a vector quaternion `v` of
    /// unit length, `e^(v·π) = -1`.
    ///
    /// The exponential of the zero quaternion is the identity
    /// [`Self::R_AXIS`].
    pub fn exp(&self) -> Self {
        let length = self.length();

        if length <= F::default_epsilon() {
            log::trace!("Taking exponential of zero-length quaternion");
            return Self::R_AXIS;
        }

        let unit_quaternion = *self / length;
        let (sin_length, cos_length) = length.sin_cos();

        (Self::R_AXIS * cos_length + unit_quaternion * sin_length) * self.r.exp()
    }

    /// Computes the natural logarithm of the quaternion.
    ///
    /// If `q = |q|·(cos A + v·sin A)` for a unit vector quaternion `v`,
    /// the logarithm is `ln |q| + v·A`, where `A` lies in `[0, π]`. If the
    /// imaginary part of the normalized quaternion is shorter than
    /// [`LOG_REAL_TOLERANCE`], the quaternion is considered real and the
    /// result is the real logarithm of the normalized real part.
    ///
    /// A zero-length quaternion yields non-finite components.
    pub fn ln(&self) -> Self {
        let length = self.length();
        let normalized = *self / length;

        let real = normalized.r;
        let angle = real.clamp(F::NEG_ONE, F::ONE).acos();

        let vector_part = Self::new(F::ZERO, normalized.i, normalized.j, normalized.k);
        let vector_part_length = vector_part.length();

        if vector_part_length < float_from!(F, LOG_REAL_TOLERANCE) {
            log::trace!("Taking logarithm of quaternion {self} as a real number");
            return Self::from_real(real.ln());
        }

        Self::from_real(length.ln()) + (vector_part / vector_part_length) * angle
    }

    /// Like [`Self::ln`], but fails for a zero-length quaternion.
    ///
    /// # Errors
    /// Returns an error if the quaternion has zero length.
    pub fn try_ln(&self) -> Result<Self> {
        if self.length() == F::ZERO {
            log::debug!("Rejected logarithm of quaternion {self}");
            return Err(anyhow!("Cannot take logarithm of zero-length quaternion"));
        }
        Ok(self.ln())
    }

    /// Raises the quaternion to the given real power, computed as
    /// `exp(y·ln(x))`.
    ///
    /// The exponent is restricted to be real because quaternion
    /// multiplication does not commute, so `ln(x^y)` is not generally
    /// `y·ln(x)` for a quaternion `y`.
    pub fn pow(&self, exponent: F) -> Self {
        (self.ln() * exponent).exp()
    }

    /// Like [`Self::pow`], but fails for a zero-length quaternion.
    ///
    /// # Errors
    /// Returns an error if the quaternion has zero length.
    pub fn try_pow(&self, exponent: F) -> Result<Self> {
        Ok((self.try_ln()? * exponent).exp())
    }

    /// Spherical linear interpolation, computed as
    /// `x^(1 - t) * y^t`, going from `x` at `t = 0` to `y` at `t = 1`.
    ///
    /// The sign of the quaternions is left as given, so the
    /// interpolation does not necessarily follow the shorter arc between
    /// the rotations represented by `x` and `y`.
    pub fn slerp(x: &Self, y: &Self, t: F) -> Self {
        Self::product(&x.pow(F::ONE - t), &y.pow(t))
    }
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<F: Float> Neg for Quaternion<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.r, -self.i, -self.j, -self.k)
    }
}

impl<F: Float> Add for Quaternion<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.i + rhs.i,
            self.j + rhs.j,
            self.k + rhs.k,
        )
    }
}

impl<F: Float> Sub for Quaternion<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.i - rhs.i,
            self.j - rhs.j,
            self.k - rhs.k,
        )
    }
}

impl<F: Float> Add<F> for Quaternion<F> {
    type Output = Self;
    fn add(self, rhs: F) -> Self {
        Self::new(self.r + rhs, self.i, self.j, self.k)
    }
}

impl<F: Float> Sub<F> for Quaternion<F> {
    type Output = Self;
    fn sub(self, rhs: F) -> Self {
        Self::new(self.r - rhs, self.i, self.j, self.k)
    }
}

impl<F: Float> Mul for Quaternion<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::product(&self, &rhs)
    }
}

impl<F: Float> Mul<F> for Quaternion<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self::new(rhs * self.r, rhs * self.i, rhs * self.j, rhs * self.k)
    }
}

impl<F: Float> Div<F> for Quaternion<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self::new(self.r / rhs, self.i / rhs, self.j / rhs, self.k / rhs)
    }
}

impl_scalar_lhs_ops!(Quaternion; f32, f64; with_add_sub);

impl<F: Float> From<na::Quaternion<F>> for Quaternion<F> {
    fn from(quaternion: na::Quaternion<F>) -> Self {
        Self::new(quaternion.w, quaternion.i, quaternion.j, quaternion.k)
    }
}

impl<F: Float> From<Quaternion<F>> for na::Quaternion<F> {
    fn from(quaternion: Quaternion<F>) -> Self {
        na::Quaternion::new(quaternion.r, quaternion.i, quaternion.j, quaternion.k)
    }
}

impl<F: Float> fmt::Display for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed!(
            f,
            "({:.*} + {:.*}I + {:.*}J + {:.*}K)",
            self.r,
            self.i,
            self.j,
            self.k
        )
    }
}

// SAFETY: `Quaternion` is `repr(C)` and consists of four values of the
// same `Pod` type, so it has no padding.
unsafe impl<F: Float + Zeroable> Zeroable for Quaternion<F> {}
unsafe impl<F: Float + Pod> Pod for Quaternion<F> {}

impl<F: Float> AbsDiffEq for Quaternion<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
    }
}

impl<F: Float> RelativeEq for Quaternion<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.i.relative_eq(&other.i, epsilon, max_relative)
            && self.j.relative_eq(&other.j, epsilon, max_relative)
            && self.k.relative_eq(&other.k, epsilon, max_relative)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::strategies::direction_strategy;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

    type Quaternion = super::Quaternion<f64>;
    type Vector3D = crate::Vector3D<f64>;

    const TOLERANCE: f64 = 1e-9;

    prop_compose! {
        fn quaternion_strategy(max_component: f64)(
            r in -max_component..max_component,
            i in -max_component..max_component,
            j in -max_component..max_component,
            k in -max_component..max_component,
        ) -> Quaternion {
            Quaternion::new(r, i, j, k)
        }
    }

    prop_compose! {
        fn unit_quaternion_strategy()(
            axis in direction_strategy(),
            angle in 0.01..(PI - 0.01),
        ) -> Quaternion {
            Quaternion::from_real(angle.cos()) + axis.to_quaternion() * angle.sin()
        }
    }

    #[test]
    fn adding_imaginary_units_gives_sum_of_components() {
        let expected = Quaternion::new(0.0, 1.0, 1.0, 0.0);
        let actual = Quaternion::I_AXIS + Quaternion::J_AXIS;
        assert_abs_diff_eq!(expected.scalar_difference(&actual), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn subtracting_imaginary_units_gives_difference_of_components() {
        let expected = Quaternion::new(0.0, 1.0, -1.0, 0.0);
        let actual = Quaternion::I_AXIS - Quaternion::J_AXIS;
        assert_abs_diff_eq!(expected.scalar_difference(&actual), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn dividing_by_scalar_divides_each_component() {
        let expected = Quaternion::new(0.0, 0.5, 0.0, 0.0);
        let actual = Quaternion::I_AXIS / 2.0;
        assert_abs_diff_eq!((expected - actual).length(), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn scalar_arithmetic_only_affects_real_part_for_addition() {
        let quaternion = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(quaternion + 2.0, Quaternion::new(3.0, 2.0, 3.0, 4.0));
        assert_eq!(2.0 + quaternion, Quaternion::new(3.0, 2.0, 3.0, 4.0));
        assert_eq!(quaternion - 2.0, Quaternion::new(-1.0, 2.0, 3.0, 4.0));
        assert_eq!(2.0 - quaternion, Quaternion::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(2.0 * quaternion, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(quaternion * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn adding_scalar_leaves_operand_unchanged() {
        let quaternion = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let _shifted = quaternion + 10.0;
        assert_eq!(quaternion, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Quaternion::R_AXIS, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn multiplication_of_units_follows_hamilton_rules() {
        let i = Quaternion::I_AXIS;
        let j = Quaternion::J_AXIS;
        let k = Quaternion::K_AXIS;
        let one = Quaternion::R_AXIS;

        assert_abs_diff_eq!(Quaternion::product(&i, &i), -one, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&i, &j), k, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&i, &k), -j, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&j, &i), -k, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&j, &j), -one, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&j, &k), i, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&k, &i), j, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&k, &j), -i, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::product(&k, &k), -one, epsilon = TOLERANCE);
    }

    #[test]
    fn multiply_and_operator_agree_with_product() {
        let a = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        let b = Quaternion::new(-0.3, 1.0, 2.0, -1.5);
        assert_eq!(a.multiply(&b), Quaternion::product(&a, &b));
        assert_eq!(a * b, Quaternion::product(&a, &b));
        assert_abs_diff_ne!(a * b, b * a, epsilon = TOLERANCE);
    }

    #[test]
    fn identity_is_neutral_for_multiplication() {
        let quaternion = Quaternion::new(0.2, -1.0, 4.0, 2.5);
        assert_eq!(Quaternion::R_AXIS * quaternion, quaternion);
        assert_eq!(quaternion * Quaternion::R_AXIS, quaternion);
    }

    #[test]
    fn conjugation_negates_imaginary_parts() {
        let quaternion = Quaternion::new(1.0, 2.0, -3.0, 4.0);
        assert_eq!(quaternion.conjugate(), Quaternion::new(1.0, -2.0, 3.0, -4.0));
        assert_eq!(quaternion.conjugate().conjugate(), quaternion);
    }

    #[test]
    fn length_of_quaternion_is_correct() {
        let quaternion = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_abs_diff_eq!(quaternion.length_squared(), 25.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(quaternion.length(), 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn inverse_of_unit_quaternion_gives_identity_product() {
        let quaternion = Quaternion::new(0.5, 0.5, -0.5, 0.5);
        let inverse = quaternion.inverse();
        assert_abs_diff_eq!(quaternion * inverse, Quaternion::R_AXIS, epsilon = TOLERANCE);
        assert_abs_diff_eq!(inverse * quaternion, Quaternion::R_AXIS, epsilon = TOLERANCE);
    }

    #[test]
    fn inverse_divides_conjugate_by_length() {
        let quaternion = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        assert_abs_diff_eq!(
            quaternion.inverse(),
            Quaternion::new(0.0, -0.6, 0.0, -0.8),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn inverting_zero_quaternion_fails() {
        assert!(Quaternion::ZERO.try_inverse().is_err());
        assert!(!Quaternion::ZERO.inverse().is_finite());
        assert!(Quaternion::I_AXIS.try_inverse().is_ok());
    }

    #[test]
    fn scalar_difference_is_zero_only_for_equal_quaternions() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(1.0, 2.0, 3.0, 6.0);
        assert_eq!(a.scalar_difference(&a), 0.0);
        assert_abs_diff_eq!(a.scalar_difference(&b), 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(b.scalar_difference(&a), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn converting_between_vector_and_quaternion_drops_real_part() {
        let vector = Vector3D::new(1.0, 2.0, 3.0);
        let quaternion = Quaternion::from_vector(&vector);
        assert!(quaternion.is_vector_quaternion());
        assert_eq!(quaternion.to_vector3d(), vector);
        assert_eq!(Quaternion::new(7.0, 1.0, 2.0, 3.0).to_vector3d(), vector);
        assert!(!Quaternion::R_AXIS.is_vector_quaternion());
    }

    #[test]
    fn exp_and_ln_of_imaginary_units_round_trip() {
        for unit in [Quaternion::I_AXIS, Quaternion::J_AXIS, Quaternion::K_AXIS] {
            let exp_of_ln = unit.ln().exp();
            let ln_of_exp = unit.exp().ln();
            assert_abs_diff_eq!(exp_of_ln.scalar_difference(&ln_of_exp), 0.0, epsilon = 1e-4);
            assert_abs_diff_eq!(exp_of_ln, unit, epsilon = 1e-9);
            assert_abs_diff_eq!(ln_of_exp, unit, epsilon = 1e-9);
        }
    }

    #[test]
    fn ln_of_imaginary_unit_is_quarter_turn() {
        assert_abs_diff_eq!(
            Quaternion::I_AXIS.ln(),
            Quaternion::new(0.0, FRAC_PI_2, 0.0, 0.0),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn exp_of_half_turn_vector_quaternion_is_minus_one() {
        let exp = (Quaternion::J_AXIS * PI).exp();
        assert_abs_diff_eq!(exp, -Quaternion::R_AXIS, epsilon = TOLERANCE);
    }

    #[test]
    fn exp_of_zero_is_identity() {
        assert_eq!(Quaternion::ZERO.exp(), Quaternion::R_AXIS);
    }

    #[test]
    fn ln_of_nearly_real_quaternion_is_real() {
        let ln = Quaternion::new(1.0, 1e-6, 0.0, 0.0).ln();
        assert_eq!(ln.i(), 0.0);
        assert_eq!(ln.j(), 0.0);
        assert_eq!(ln.k(), 0.0);
        assert_abs_diff_eq!(ln.r(), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::R_AXIS.ln(), Quaternion::ZERO, epsilon = TOLERANCE);
    }

    #[test]
    fn ln_of_zero_quaternion_fails() {
        assert!(Quaternion::ZERO.try_ln().is_err());
        assert!(!Quaternion::ZERO.ln().is_finite());
        assert!(Quaternion::K_AXIS.try_ln().is_ok());
    }

    #[test]
    fn squaring_imaginary_units_gives_minus_one() {
        for unit in [Quaternion::I_AXIS, Quaternion::J_AXIS, Quaternion::K_AXIS] {
            assert_abs_diff_eq!(
                unit.pow(2.0).scalar_difference(&(-Quaternion::R_AXIS)),
                0.0,
                epsilon = TOLERANCE
            );
        }
    }

    #[test]
    fn square_root_of_rotation_quaternion_halves_angle() {
        let quarter_turn = Quaternion::new(FRAC_PI_4.cos(), 0.0, 0.0, FRAC_PI_4.sin());
        let eighth_turn = Quaternion::new(FRAC_PI_8.cos(), 0.0, 0.0, FRAC_PI_8.sin());
        assert_abs_diff_eq!(quarter_turn.pow(0.5), eighth_turn, epsilon = TOLERANCE);
    }

    #[test]
    fn raising_zero_quaternion_to_power_fails() {
        let error = Quaternion::ZERO.try_pow(2.0).unwrap_err();
        assert!(error.to_string().contains("zero-length"));
        assert_abs_diff_eq!(
            Quaternion::J_AXIS.try_pow(2.0).unwrap(),
            Quaternion::J_AXIS.pow(2.0),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn slerp_hits_endpoints() {
        let x = Quaternion::new(FRAC_PI_8.cos(), FRAC_PI_8.sin(), 0.0, 0.0);
        let y = Quaternion::new(FRAC_PI_4.cos(), 0.0, FRAC_PI_4.sin(), 0.0);
        assert_abs_diff_eq!(Quaternion::slerp(&x, &y, 0.0), x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(Quaternion::slerp(&x, &y, 1.0), y, epsilon = TOLERANCE);
    }

    #[test]
    fn slerp_from_identity_follows_rotation_angle() {
        let quarter_turn = Quaternion::new(FRAC_PI_4.cos(), 0.0, 0.0, FRAC_PI_4.sin());
        let halfway = Quaternion::slerp(&Quaternion::R_AXIS, &quarter_turn, 0.5);
        assert_abs_diff_eq!(
            halfway,
            Quaternion::new(FRAC_PI_8.cos(), 0.0, 0.0, FRAC_PI_8.sin()),
            epsilon = TOLERANCE
        );
        assert_abs_diff_eq!(halfway.length(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn quaternion_is_displayed_with_unit_labels() {
        let quaternion = Quaternion::new(1.0, -2.0, 0.5, 0.25);
        assert_eq!(quaternion.to_string(), "(1.00 + -2.00I + 0.50J + 0.25K)");
        assert_eq!(
            format!("{:.1}", Quaternion::R_AXIS),
            "(1.0 + 0.0I + 0.0J + 0.0K)"
        );
    }

    #[test]
    fn converting_to_and_from_nalgebra_preserves_components() {
        let quaternion = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let converted: na::Quaternion<f64> = quaternion.into();
        assert_eq!(converted.w, 1.0);
        assert_eq!(converted.i, 2.0);
        assert_eq!(converted.j, 3.0);
        assert_eq!(converted.k, 4.0);
        assert_eq!(Quaternion::from(converted), quaternion);
    }

    proptest! {
        #[test]
        fn product_matches_nalgebra(
            a in quaternion_strategy(1e2),
            b in quaternion_strategy(1e2),
        ) {
            let expected = na::Quaternion::from(a) * na::Quaternion::from(b);
            let actual = Quaternion::product(&a, &b);
            prop_assert!(actual.scalar_difference(&Quaternion::from(expected)) < 1e-8);
        }

        #[test]
        fn length_is_multiplicative(
            a in quaternion_strategy(1e1),
            b in quaternion_strategy(1e1),
        ) {
            let product_length = (a * b).length();
            prop_assert!((product_length - a.length() * b.length()).abs() < 1e-9 * (1.0 + product_length));
        }

        #[test]
        fn exp_of_ln_of_unit_quaternion_round_trips(q in unit_quaternion_strategy()) {
            prop_assert!(q.ln().exp().scalar_difference(&q) < 1e-8);
        }

        #[test]
        fn ln_of_exp_of_vector_quaternion_round_trips(
            axis in direction_strategy(),
            angle in 0.01..(PI - 0.01),
        ) {
            let v = axis.to_quaternion() * angle;
            prop_assert!(v.exp().ln().scalar_difference(&v) < 1e-8);
        }

        #[test]
        fn slerp_of_unit_quaternions_stays_on_unit_sphere(
            x in unit_quaternion_strategy(),
            y in unit_quaternion_strategy(),
            t in 0.0..1.0,
        ) {
            prop_assert!((Quaternion::slerp(&x, &y, t).length() - 1.0).abs() < 1e-8);
        }
    }
}
