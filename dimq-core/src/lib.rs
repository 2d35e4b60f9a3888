//! Core type system for compile-time dimensional analysis.
//!
//! `dimq-core` provides a minimal, zero-cost dimensional model:
//!
//! - A *dimension* is a zero-sized marker type [`Dim<L, T, M>`] carrying
//!   integer exponents over length, time, and mass as type-level integers.
//! - A value tagged with a dimension is a [`Scalar<D>`], backed by an `f64`.
//! - Multiplication and division compose dimensions in the type system
//!   ([`DimMul`]/[`DimDiv`]); square roots halve exponents and exist only for
//!   all-even dimensions ([`DimSqrt`]); transcendental functions exist only at
//!   the dimensionless type.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimension mixing (you can't add metres to
//!   seconds, or take `sin` of a mass).
//! - Zero runtime overhead for dimension tags (phantom types only).
//! - Full exponent algebra: products, quotients, powers, and roots of
//!   dimensions are computed by the compiler, not checked at runtime.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion ladders (feet, kilometres, …): values are canonical SI.
//!   Conversion is explicit multiplication by a compensating quantity.
//! - Exact arithmetic ([`Scalar`] is `f64`).
//! - Runtime-tagged dimensions: there is no fallback representation; the
//!   static encoding is the product.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::si::{Meters, MetersPerSecond, Seconds};
//!
//! let d = Meters::new(100.0);
//! let t = Seconds::new(20.0);
//! let v: MetersPerSecond = d / t;
//! assert_eq!(v.value(), 5.0);
//! ```
//!
//! Square roots are dimension-checked: only all-even exponent dimensions
//! have one.
//!
//! ```rust
//! use dimq_core::si::{Meters, SquareMeters};
//!
//! let side: Meters = SquareMeters::new(144.0).sqrt();
//! assert_eq!(side.value(), 12.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core`
//! is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Scalar<D>`]; serialization is the
//!   raw `f64` payload only, plus an opt-in `serde_with_unit` helper that
//!   tags values with their dimension signature (requires `std`).
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from
//! its core operations. Dimension misuse is a compile error; the remaining
//! arithmetic is pure `f64` computation following IEEE-754 behavior (NaN and
//! infinities propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod math;
mod scalar;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    Dim, DimDiv, DimMul, DimSqrt, Dimension, Dimensionless, Prod, Quot, Signature, Sqrt,
};
pub use scalar::Scalar;

#[cfg(all(feature = "serde", feature = "std"))]
pub use scalar::serde_with_unit;

/// Type-level integers used for dimension exponents.
///
/// Re-exported so downstream crates can define their own dimensions without
/// depending on `typenum` directly.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined SI vocabulary
// ─────────────────────────────────────────────────────────────────────────────

pub mod si;

pub use si::*;
