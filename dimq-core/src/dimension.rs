//! Type-level dimensions and their exponent algebra.

use core::fmt::{Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{Add, Sub};
use typenum::{Integer, PartialDiv, PartialQuot, Diff, Sum, P2, Z0};

/// Trait implemented by every type-level **dimension**.
///
/// A dimension is a vector of integer exponents over the three base
/// dimensions of this crate: length, time, and mass. The exponents live in
/// the type (see [`Dim`]); this trait mirrors them as runtime constants so
/// that formatting and serialization can inspect them. Nothing else about a
/// dimension exists at runtime.
///
/// ```rust
/// use dimq_core::{Dimension, Velocity};
///
/// assert_eq!(Velocity::LENGTH, 1);
/// assert_eq!(Velocity::TIME, -1);
/// assert_eq!(Velocity::MASS, 0);
/// assert!(!Velocity::IS_DIMENSIONLESS);
/// ```
pub trait Dimension {
    /// Exponent of the length base dimension.
    const LENGTH: i32;

    /// Exponent of the time base dimension.
    const TIME: i32;

    /// Exponent of the mass base dimension.
    const MASS: i32;

    /// `true` iff every base exponent is zero.
    const IS_DIMENSIONLESS: bool =
        Self::LENGTH == 0 && Self::TIME == 0 && Self::MASS == 0;
}

/// Canonical dimension marker: exponents over length (`L`), time (`T`), and
/// mass (`M`) as [`typenum`] type-level signed integers.
///
/// `Dim` is a zero-sized phantom type; it never holds a value. Velocity, for
/// example, is `Dim<P1, N1, Z0>` (length¹ · time⁻¹).
///
/// ```rust
/// use dimq_core::{Dim, Dimension};
/// use dimq_core::typenum::{P1, N2, Z0};
///
/// type Acceleration = Dim<P1, N2, Z0>;
/// assert_eq!(Acceleration::TIME, -2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dim<L, T, M>(PhantomData<(L, T, M)>);

impl<L: Integer, T: Integer, M: Integer> Dimension for Dim<L, T, M> {
    const LENGTH: i32 = L::I32;
    const TIME: i32 = T::I32;
    const MASS: i32 = M::I32;
}

/// The dimension with all exponents zero.
///
/// Dimensionless values are the only ones that participate in transcendental
/// functions and exponents; see the scalar math API.
pub type Dimensionless = Dim<Z0, Z0, Z0>;

/// Dimension-level product: base exponents add pairwise.
///
/// Implemented for every pair of [`Dim`]s; the compiler computes the output
/// exponents, so `Scalar<A> * Scalar<B>` is typed `Scalar<Prod<A, B>>`.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// The product dimension.
    type Output: Dimension;
}

/// Dimension-level quotient: base exponents subtract pairwise.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// The quotient dimension.
    type Output: Dimension;
}

/// Dimension-level square root: base exponents halve.
///
/// Only implemented when every exponent is even (type-level division by two
/// is exact), so taking the square root of, say, a plain length does not
/// compile.
pub trait DimSqrt: Dimension {
    /// The dimension with every exponent halved.
    type Output: Dimension;
}

impl<L1, T1, M1, L2, T2, M2> DimMul<Dim<L2, T2, M2>> for Dim<L1, T1, M1>
where
    L1: Integer + Add<L2>,
    T1: Integer + Add<T2>,
    M1: Integer + Add<M2>,
    L2: Integer,
    T2: Integer,
    M2: Integer,
    Sum<L1, L2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<M1, M2>: Integer,
{
    type Output = Dim<Sum<L1, L2>, Sum<T1, T2>, Sum<M1, M2>>;
}

impl<L1, T1, M1, L2, T2, M2> DimDiv<Dim<L2, T2, M2>> for Dim<L1, T1, M1>
where
    L1: Integer + Sub<L2>,
    T1: Integer + Sub<T2>,
    M1: Integer + Sub<M2>,
    L2: Integer,
    T2: Integer,
    M2: Integer,
    Diff<L1, L2>: Integer,
    Diff<T1, T2>: Integer,
    Diff<M1, M2>: Integer,
{
    type Output = Dim<Diff<L1, L2>, Diff<T1, T2>, Diff<M1, M2>>;
}

impl<L, T, M> DimSqrt for Dim<L, T, M>
where
    L: Integer + PartialDiv<P2>,
    T: Integer + PartialDiv<P2>,
    M: Integer + PartialDiv<P2>,
    PartialQuot<L, P2>: Integer,
    PartialQuot<T, P2>: Integer,
    PartialQuot<M, P2>: Integer,
{
    type Output = Dim<PartialQuot<L, P2>, PartialQuot<T, P2>, PartialQuot<M, P2>>;
}

/// The product of two dimensions.
pub type Prod<A, B> = <A as DimMul<B>>::Output;

/// The quotient of two dimensions.
pub type Quot<A, B> = <A as DimDiv<B>>::Output;

/// The square root of a dimension (all exponents halved).
pub type Sqrt<D> = <D as DimSqrt>::Output;

/// Formats a dimension's base-exponent signature.
///
/// Zero exponents are skipped, unit exponents print the bare symbol, and the
/// dimensionless signature is empty. Mass is printed first, matching the
/// customary SI ordering for derived units.
///
/// ```rust
/// use dimq_core::{Energy, Signature, Velocity};
///
/// assert_eq!(Signature::<Velocity>::new().to_string(), "m s^-1");
/// assert_eq!(Signature::<Energy>::new().to_string(), "kg m^2 s^-2");
/// ```
pub struct Signature<D: Dimension>(PhantomData<D>);

impl<D: Dimension> Signature<D> {
    /// Creates the signature formatter for `D`.
    #[inline]
    pub const fn new() -> Self {
        Signature(PhantomData)
    }
}

impl<D: Dimension> Default for Signature<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimension> Display for Signature<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (symbol, exponent) in [("kg", D::MASS), ("m", D::LENGTH), ("s", D::TIME)] {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}
