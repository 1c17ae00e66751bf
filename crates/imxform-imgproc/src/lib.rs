#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// localized brightness adjustment module.
pub mod intensity;

/// module containing parallelization utilities.
pub mod parallel;

/// rotation and translation of whole images.
pub mod transform;

/// image geometric transformations module.
pub mod warp;
