//! Compile-time dimensional analysis for `f64` scalars.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimq-core`: the [`Scalar<D>`] value type, the type-level
//! dimension algebra, and a predefined SI vocabulary (lengths, times, masses,
//! and common derived quantities).
//!
//! The core idea is: a value is always a `Scalar<D>`, where `D` is a
//! zero-sized type carrying integer exponents over length, time, and mass.
//! This keeps dimensions at compile time with no runtime overhead beyond an
//! `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds, and `sqrt` of an odd-exponent dimension doesn't exist).
//! - Multiplication and division compose dimensions in the type system, so
//!   `Meters / Seconds` *is* a `MetersPerSecond` without any conversion step.
//! - Transcendental functions (`exp`, `ln`, `sin`, `cos`, `tan`, `powf`) are
//!   only callable on dimensionless values.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion ladders: values are canonical SI (metre, second,
//!   kilogram). Convert at the boundary by multiplying with a compensating
//!   quantity.
//! - Exact arithmetic: scalars are backed by `f64` and follow IEEE-754,
//!   including NaN, signed zeros, and infinities.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::{Joules, Kilograms, Meters, MetersPerSecond, Seconds};
//!
//! let distance = Meters::new(100.0);
//! let time = Seconds::new(20.0);
//! let speed: MetersPerSecond = distance / time;
//!
//! let mass = Kilograms::new(80.0);
//! let kinetic: Joules = 0.5 * mass * speed.squared();
//! assert_eq!(kinetic.value(), 1_000.0);
//! ```
//!
//! Recover a side length from an area; the square root halves every
//! dimension exponent:
//!
//! ```rust
//! use dimq::{Meters, SquareMeters};
//!
//! let area = SquareMeters::new(625.0);
//! let side: Meters = area.sqrt();
//! assert_eq!(side.value(), 25.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! Adding values of different dimensions does not compile:
//!
//! ```compile_fail
//! use dimq::{Meters, Seconds};
//!
//! let d = Meters::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! Neither does the square root of a dimension with an odd exponent:
//!
//! ```compile_fail
//! use dimq::Meters;
//!
//! let _ = Meters::new(4.0).sqrt(); // length has exponent 1
//! ```
//!
//! Transcendental functions only exist at the dimensionless type:
//!
//! ```compile_fail
//! use dimq::Seconds;
//!
//! let _ = Seconds::new(1.0).exp(); // argument must be dimensionless
//! ```
//!
//! In-place scaling cannot change the dimension of the left operand, so
//! compound assignment rejects dimensioned right-hand sides:
//!
//! ```compile_fail
//! use dimq::{Meters, Seconds};
//!
//! let mut d = Meters::new(6.0);
//! d *= Seconds::new(2.0); // only dimensionless scaling is allowed
//! ```
//!
//! # Escape hatch
//!
//! [`Scalar::strip`] discards the dimension and returns the bare payload as a
//! dimensionless scalar. It is the single sanctioned unit-erasure point, for
//! boundaries that genuinely need a plain number (rendering, FFI, logging):
//!
//! ```rust
//! use dimq::{Meters, Unitless};
//!
//! let x = Meters::new(3.0);
//! let raw: Unitless = x.strip();
//! assert_eq!(raw.value(), 3.0);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support for `Scalar<D>`; serialization is the
//!   raw `f64` payload, with an opt-in `serde_with_unit` helper that tags
//!   values with their dimension signature.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from
//! its core operations. Dimension misuse fails to compile; floating-point
//! edge cases (division by zero, sqrt of a negative, overflow) follow
//! IEEE-754 and propagate as NaN or ±∞.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

pub use dimq_core::si;
