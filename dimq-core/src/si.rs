//! Predefined SI dimensions and quantity aliases.
//!
//! Values in this crate are always expressed in canonical SI base units
//! (metre, second, kilogram), so each dimension needs exactly one quantity
//! alias and there is no conversion ladder. Quantities in other units enter
//! the system by explicit multiplication with a compensating quantity, never
//! by a cast:
//!
//! ```rust
//! use dimq_core::si::{Meters, MetersPerSecond, Seconds};
//!
//! // 1 km/h expressed in base units.
//! let kmh: MetersPerSecond = Meters::new(1_000.0) / Seconds::new(3_600.0);
//! assert!((kmh.value() - 0.277_777_777_777_777_8).abs() < 1e-15);
//! ```
//!
//! The one-unit constants [`M`], [`S`], and [`KG`] allow quantities to be
//! built multiplicatively:
//!
//! ```rust
//! use dimq_core::si::{MetersPerSecondSquared, KG, M, S};
//!
//! let g: MetersPerSecondSquared = 9.81 * M / (S * S);
//! assert_eq!(g.value(), 9.81);
//! ```

use crate::dimension::{Dim, Dimensionless};
use crate::scalar::Scalar;
use typenum::{N1, N2, N3, P1, P2, P3, Z0};

// ─────────────────────────────────────────────────────────────────────────────
// Dimension aliases
// ─────────────────────────────────────────────────────────────────────────────

/// Length dimension `[L]`.
pub type Length = Dim<P1, Z0, Z0>;

/// Time dimension `[T]`.
pub type Time = Dim<Z0, P1, Z0>;

/// Mass dimension `[M]`.
pub type Mass = Dim<Z0, Z0, P1>;

/// Area `[L^2]`.
pub type Area = Dim<P2, Z0, Z0>;

/// Volume `[L^3]`.
pub type Volume = Dim<P3, Z0, Z0>;

/// Frequency `[T^-1]`.
pub type Frequency = Dim<Z0, N1, Z0>;

/// Velocity `[L T^-1]`.
pub type Velocity = Dim<P1, N1, Z0>;

/// Acceleration `[L T^-2]`.
pub type Acceleration = Dim<P1, N2, Z0>;

/// Force `[L M T^-2]`.
pub type Force = Dim<P1, N2, P1>;

/// Energy `[L^2 M T^-2]`.
pub type Energy = Dim<P2, N2, P1>;

/// Power `[L^2 M T^-3]`.
pub type Power = Dim<P2, N3, P1>;

/// Pressure `[L^-1 M T^-2]`.
pub type Pressure = Dim<N1, N2, P1>;

/// Mass density `[L^-3 M]`.
pub type Density = Dim<N3, Z0, P1>;

// ─────────────────────────────────────────────────────────────────────────────
// Quantity aliases (canonical SI base units)
// ─────────────────────────────────────────────────────────────────────────────

/// A dimensionless scalar.
pub type Unitless = Scalar<Dimensionless>;

/// A length in metres.
pub type Meters = Scalar<Length>;

/// A time in seconds.
pub type Seconds = Scalar<Time>;

/// A mass in kilograms.
pub type Kilograms = Scalar<Mass>;

/// An area in square metres.
pub type SquareMeters = Scalar<Area>;

/// A volume in cubic metres.
pub type CubicMeters = Scalar<Volume>;

/// A frequency in hertz.
pub type Hertz = Scalar<Frequency>;

/// A velocity in metres per second.
pub type MetersPerSecond = Scalar<Velocity>;

/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared = Scalar<Acceleration>;

/// A force in newtons.
pub type Newtons = Scalar<Force>;

/// An energy in joules.
pub type Joules = Scalar<Energy>;

/// A power in watts.
pub type Watts = Scalar<Power>;

/// A pressure in pascals.
pub type Pascals = Scalar<Pressure>;

/// A mass density in kilograms per cubic metre.
pub type KilogramsPerCubicMeter = Scalar<Density>;

// ─────────────────────────────────────────────────────────────────────────────
// One-unit constants
// ─────────────────────────────────────────────────────────────────────────────

/// One metre.
pub const M: Meters = Meters::new(1.0);

/// One second.
pub const S: Seconds = Seconds::new(1.0);

/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);
