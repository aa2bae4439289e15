//! Point-mass and **centre-of-gravity** bookkeeping for assemblies, built around
//! a shared mass-properties capability satisfied by single weights and by
//! (arbitrarily nested) collections of weights.
//!
//! All quantities are canonical: masses in kilograms, coordinates in metres.
//! Conversion constants for common units live in [`float_types`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod collection;
pub mod corrector;
pub mod errors;
pub mod float_types;
pub mod force;
pub mod traits;
pub mod weight;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use collection::WeightsCollection;
pub use corrector::find_corrector;
pub use errors::WeightError;
pub use force::Force;
pub use traits::{MassProperties, SharedWeight};
pub use weight::Weight;
