//! Scalar type and its implementations.

use crate::dimension::{DimDiv, DimMul, Dimension, Dimensionless, Prod, Quot, Signature};
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar value carrying a type-level dimension.
///
/// `Scalar<D>` wraps an `f64` payload together with phantom type information
/// about its dimension `D`. This enables compile-time dimensional analysis
/// while maintaining zero runtime cost: the payload is the whole runtime
/// representation, and dimension misuse is a type error rather than a runtime
/// check.
///
/// Addition, subtraction, remainder, and comparisons require both operands to
/// share one dimension. Multiplication and division accept any pair of
/// dimensions and compute the result dimension in the type system. Compound
/// assignment scales in place and therefore only accepts dimensionless
/// right-hand sides.
///
/// # Examples
///
/// ```rust
/// use dimq_core::si::{Meters, MetersPerSecond, Seconds};
///
/// let d = Meters::new(100.0);
/// let t = Seconds::new(20.0);
/// let v: MetersPerSecond = d / t;
/// assert_eq!(v.value(), 5.0);
/// ```
pub struct Scalar<D: Dimension>(f64, PhantomData<D>);

// Manual impls throughout: deriving would place bounds on the phantom
// dimension parameter, which generic `D: Dimension` callers cannot satisfy.

impl<D: Dimension> Clone for Scalar<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Scalar<D> {}

impl<D: Dimension> Default for Scalar<D> {
    /// The additive identity at dimension `D`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> fmt::Debug for Scalar<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scalar").field(&self.0).finish()
    }
}

impl<D: Dimension> PartialEq for Scalar<D> {
    /// IEEE-754 equality on the payload: NaN is not equal to anything,
    /// including itself, and `0.0 == -0.0`.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Scalar<D> {
    /// IEEE-754 ordering on the payload: comparisons involving NaN are
    /// unordered, so every operator except `!=` returns `false` for NaN.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dimension> Scalar<D> {
    /// The additive identity for this dimension.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert!(Meters::ZERO.is_zero());
    /// ```
    pub const ZERO: Self = Self::new(0.0);

    /// A constant representing NaN for this dimension.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert!(Meters::NAN.is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Positive infinity.
    pub const INFINITY: Self = Self::new(f64::INFINITY);

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self::new(f64::NEG_INFINITY);

    /// Creates a new scalar with the given payload.
    ///
    /// ```rust
    /// use dimq_core::si::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric payload.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Infinity carrying the sign of `reference`'s payload.
    ///
    /// A zero, positive, or NaN reference selects [`Self::INFINITY`]; only a
    /// negative reference selects [`Self::NEG_INFINITY`].
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert_eq!(Meters::signed_infinity(Meters::new(7.0)), Meters::INFINITY);
    /// assert_eq!(Meters::signed_infinity(Meters::new(-7.0)), Meters::NEG_INFINITY);
    /// ```
    #[inline]
    pub fn signed_infinity(reference: Self) -> Self {
        if reference.0 < 0.0 {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }

    /// `true` iff the payload is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// `true` iff the payload is exactly positive or negative infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    /// `true` iff the payload compares equal to zero exactly.
    ///
    /// Both zero signs qualify; there is no tolerance.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// `true` iff the payload is anything other than zero (including NaN).
    ///
    /// Use this in conditionals instead of treating a scalar as a boolean.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert!(Meters::new(0.5).is_nonzero());
    /// assert!(!Meters::ZERO.is_nonzero());
    /// ```
    #[inline]
    pub fn is_nonzero(self) -> bool {
        self.0 != 0.0
    }

    /// Returns a dimensionless copy of the payload, discarding the dimension.
    ///
    /// This is the single sanctioned escape hatch from the static dimension
    /// discipline; reserve it for boundaries that genuinely require a bare
    /// number (e.g. handing coordinates to rendering code).
    ///
    /// ```rust
    /// use dimq_core::si::{Meters, Unitless};
    /// let x = Meters::new(3.0);
    /// let raw: Unitless = x.strip();
    /// assert_eq!(raw.value(), 3.0);
    /// ```
    #[inline]
    pub const fn strip(self) -> Scalar<Dimensionless> {
        Scalar::new(self.0)
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use dimq_core::si::Meters;
    /// assert_eq!(Meters::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.0.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::fabs(self.0))
        }
    }

    /// Returns the minimum of this scalar and another of the same dimension.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this scalar and another of the same dimension.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Scalar<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Scalar<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension> Sub for Scalar<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Scalar<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Scalar<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension> Rem for Scalar<D> {
    type Output = Self;
    /// Floating remainder of two same-dimension scalars; the sign follows the
    /// dividend, per `f64 %`.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self::new(self.0 % rhs.0)
    }
}

impl<D1, D2> Mul<Scalar<D2>> for Scalar<D1>
where
    D1: DimMul<D2>,
    D2: Dimension,
{
    type Output = Scalar<Prod<D1, D2>>;
    #[inline]
    fn mul(self, rhs: Scalar<D2>) -> Self::Output {
        Scalar::new(self.0 * rhs.0)
    }
}

impl<D1, D2> Div<Scalar<D2>> for Scalar<D1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
{
    type Output = Scalar<Quot<D1, D2>>;
    #[inline]
    fn div(self, rhs: Scalar<D2>) -> Self::Output {
        Scalar::new(self.0 / rhs.0)
    }
}

impl<D: Dimension> Mul<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Scalar<D>> for f64 {
    type Output = Scalar<D>;
    #[inline]
    fn mul(self, rhs: Scalar<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> Div<f64> for Scalar<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

// In-place scaling must not change the dimension of the left operand, so the
// compound forms only accept dimensionless right-hand sides, unlike the
// binary `*`/`/`, which compose dimensions.

impl<D: Dimension> MulAssign<Scalar<Dimensionless>> for Scalar<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar<Dimensionless>) {
        self.0 *= rhs.0;
    }
}

impl<D: Dimension> DivAssign<Scalar<Dimensionless>> for Scalar<D> {
    #[inline]
    fn div_assign(&mut self, rhs: Scalar<Dimensionless>) {
        self.0 /= rhs.0;
    }
}

impl<D: Dimension> MulAssign<f64> for Scalar<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> DivAssign<f64> for Scalar<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<D: Dimension> From<f64> for Scalar<D> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> fmt::Display for Scalar<D> {
    /// Formats the payload followed by the dimension signature; dimensionless
    /// scalars print the bare number.
    ///
    /// ```rust
    /// use dimq_core::si::{MetersPerSecond, Unitless};
    /// assert_eq!(MetersPerSecond::new(10.0).to_string(), "10 m s^-1");
    /// assert_eq!(Unitless::new(42.0).to_string(), "42");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if !D::IS_DIMENSIONLESS {
            write!(f, " {}", Signature::<D>::new())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Scalar<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Scalar<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Scalar::new(value))
    }
}

/// Serde helper module for serializing scalars with their dimension signature.
///
/// Use this with the `#[serde(with = "...")]` attribute when serialized data
/// should carry the dimension signature alongside the payload, e.g. in
/// configuration files that are read without the Rust types at hand.
///
/// # Examples
///
/// ```rust
/// use dimq_core::si::{Meters, Seconds};
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimq_core::serde_with_unit")]
///     max_distance: Meters, // {"value": 100.0, "unit": "m"}
///
///     timeout: Seconds, // 30.0 — the compact default form
/// }
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Scalar<D>` as a struct with `value` and `unit` fields,
    /// where `unit` is the dimension signature (`{"value": 42.5, "unit": "m"}`
    /// in JSON).
    pub fn serialize<D, S>(scalar: &Scalar<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Scalar", 2)?;
        state.serialize_field("value", &scalar.value())?;
        state.serialize_field("unit", &Signature::<D>::new().to_string())?;
        state.end()
    }

    /// Deserializes a `Scalar<D>` from a struct with `value` and optionally
    /// `unit` fields.
    ///
    /// The `unit` field is validated if present but not required, so data
    /// written without signatures still loads. A present signature that does
    /// not match `D` is rejected.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Scalar<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct ScalarVisitor<D>(core::marker::PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for ScalarVisitor<D> {
            type Value = Scalar<D>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Scalar with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Scalar<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref unit_str) = unit {
                    let expected = Signature::<D>::new().to_string();
                    if *unit_str != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit_str
                        )));
                    }
                }

                Ok(Scalar::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Scalar",
            &["value", "unit"],
            ScalarVisitor(core::marker::PhantomData),
        )
    }
}
