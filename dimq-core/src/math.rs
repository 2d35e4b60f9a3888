//! Mathematical functions threaded through the dimension algebra.
//!
//! Squaring and square roots are available at any dimension the type algebra
//! can account for; the transcendental functions only exist at the
//! dimensionless type, so applying them to a dimensioned scalar is a compile
//! error rather than a physics bug.
//!
//! All payload math uses the `std` float intrinsics when the `std` feature is
//! enabled and falls back to [`libm`] otherwise.

use crate::dimension::{DimMul, DimSqrt, Dimensionless, Prod, Sqrt};
use crate::scalar::Scalar;

impl<D: DimMul<D>> Scalar<D> {
    /// Squares the value; the dimension doubles.
    ///
    /// ```rust
    /// use dimq_core::si::{Meters, SquareMeters};
    ///
    /// let side = Meters::new(3.0);
    /// let area: SquareMeters = side.squared();
    /// assert_eq!(area.value(), 9.0);
    /// ```
    #[inline]
    pub fn squared(self) -> Scalar<Prod<D, D>> {
        Scalar::new(self.value() * self.value())
    }
}

impl<D: DimSqrt> Scalar<D> {
    /// Arithmetic square root; every dimension exponent halves.
    ///
    /// Only dimensions whose exponents are all even have a square root, so
    /// `sqrt` of a plain length does not compile. Negative payloads yield NaN
    /// per IEEE-754; there is no error path.
    ///
    /// ```rust
    /// use dimq_core::si::{Meters, SquareMeters};
    ///
    /// let side: Meters = SquareMeters::new(25.0).sqrt();
    /// assert_eq!(side.value(), 5.0);
    /// assert!(SquareMeters::new(-1.0).sqrt().is_nan());
    /// ```
    #[inline]
    pub fn sqrt(self) -> Scalar<Sqrt<D>> {
        #[cfg(feature = "std")]
        {
            Scalar::new(self.value().sqrt())
        }
        #[cfg(not(feature = "std"))]
        {
            Scalar::new(libm::sqrt(self.value()))
        }
    }
}

impl Scalar<Dimensionless> {
    /// The mathematical constant π at full `f64` precision.
    ///
    /// π is only meaningful without a dimension attached, so the constant
    /// exists solely at the dimensionless type.
    ///
    /// ```rust
    /// use dimq_core::si::Unitless;
    /// assert_eq!(Unitless::PI.value(), core::f64::consts::PI);
    /// ```
    pub const PI: Self = Self::new(core::f64::consts::PI);

    /// Raises a dimensionless value to a dimensionless power.
    ///
    /// ```rust
    /// use dimq_core::si::Unitless;
    /// let x = Unitless::new(2.0);
    /// assert_eq!(x.powf(Unitless::new(10.0)).value(), 1024.0);
    /// ```
    #[inline]
    pub fn powf(self, exp: Self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().powf(exp.value()))
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::pow(self.value(), exp.value()))
        }
    }

    /// `e` raised to this value.
    #[inline]
    pub fn exp(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().exp())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::exp(self.value()))
        }
    }

    /// Natural logarithm; non-positive inputs follow IEEE-754 (`ln(0) = -∞`,
    /// negative inputs yield NaN).
    #[inline]
    pub fn ln(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().ln())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::log(self.value()))
        }
    }

    /// Sine of the value interpreted as radians.
    #[inline]
    pub fn sin(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().sin())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::sin(self.value()))
        }
    }

    /// Cosine of the value interpreted as radians.
    #[inline]
    pub fn cos(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().cos())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::cos(self.value()))
        }
    }

    /// Tangent of the value interpreted as radians.
    #[inline]
    pub fn tan(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.value().tan())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::tan(self.value()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::si::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::{E, FRAC_PI_2, FRAC_PI_4};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Squaring
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn squared_doubles_dimension() {
        let area: SquareMeters = Meters::new(3.0).squared();
        assert_eq!(area.value(), 9.0);
    }

    #[test]
    fn squared_of_negative_is_positive() {
        let area: SquareMeters = Meters::new(-3.0).squared();
        assert_eq!(area.value(), 9.0);
    }

    #[test]
    fn squared_matches_self_multiplication() {
        let v = MetersPerSecond::new(7.5);
        assert_eq!(v.squared(), v * v);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Square root
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sqrt_halves_dimension() {
        let side: Meters = SquareMeters::new(25.0).sqrt();
        assert_eq!(side.value(), 5.0);
    }

    #[test]
    fn sqrt_of_dimensionless() {
        assert_eq!(Unitless::new(16.0).sqrt().value(), 4.0);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(SquareMeters::new(-4.0).sqrt().is_nan());
    }

    #[test]
    fn sqrt_special_values() {
        assert!(SquareMeters::INFINITY.sqrt().is_infinite());
        assert!(SquareMeters::NAN.sqrt().is_nan());
        assert!(SquareMeters::ZERO.sqrt().is_zero());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // π
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn pi_matches_f64_constant() {
        assert_eq!(Unitless::PI.value(), core::f64::consts::PI);
    }

    #[test]
    fn pi_to_fifteen_significant_digits() {
        assert_abs_diff_eq!(Unitless::PI.strip().value(), 3.14159265358979, epsilon = 1e-14);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Powers, exponentials, logarithms
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn powf_basic() {
        let two = Unitless::new(2.0);
        assert_eq!(two.powf(Unitless::new(10.0)).value(), 1024.0);
        assert_eq!(two.powf(Unitless::ZERO).value(), 1.0);
        assert_eq!(two.powf(Unitless::new(-1.0)).value(), 0.5);
    }

    #[test]
    fn exp_basic() {
        assert_eq!(Unitless::ZERO.exp().value(), 1.0);
        assert_relative_eq!(Unitless::new(1.0).exp().value(), E, max_relative = 1e-15);
        assert_eq!(Unitless::NEG_INFINITY.exp().value(), 0.0);
        assert!(Unitless::INFINITY.exp().is_infinite());
    }

    #[test]
    fn ln_basic() {
        assert_eq!(Unitless::new(1.0).ln().value(), 0.0);
        assert_relative_eq!(Unitless::new(E).ln().value(), 1.0, max_relative = 1e-15);
        assert!(Unitless::new(-1.0).ln().is_nan());
        assert_eq!(Unitless::ZERO.ln(), Unitless::NEG_INFINITY);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trigonometry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sin_basic() {
        assert_eq!(Unitless::ZERO.sin().value(), 0.0);
        assert_abs_diff_eq!(Unitless::new(FRAC_PI_2).sin().value(), 1.0, epsilon = 1e-15);
        assert!(Unitless::INFINITY.sin().is_nan());
    }

    #[test]
    fn cos_basic() {
        assert_eq!(Unitless::ZERO.cos().value(), 1.0);
        assert_abs_diff_eq!(Unitless::PI.cos().value(), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn tan_basic() {
        assert_eq!(Unitless::ZERO.tan().value(), 0.0);
        assert_abs_diff_eq!(Unitless::new(FRAC_PI_4).tan().value(), 1.0, epsilon = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_sqrt_of_squared_recovers_abs(x in -1e6..1e6f64) {
            let q = Meters::new(x);
            let back: Meters = q.squared().sqrt();
            let scale = x.abs().max(1.0);
            prop_assert!((back.value() - x.abs()).abs() < 1e-9 * scale);
        }

        #[test]
        fn prop_exp_ln_roundtrip(x in 1e-3..1e6f64) {
            let q = Unitless::new(x);
            let back = q.ln().exp();
            prop_assert!((back.value() - x).abs() < 1e-9 * x.max(1.0));
        }

        #[test]
        fn prop_sin_cos_identity(x in -1e3..1e3f64) {
            let q = Unitless::new(x);
            let sum = q.sin().squared() + q.cos().squared();
            prop_assert!((sum.value() - 1.0).abs() < 1e-12);
        }
    }
}
