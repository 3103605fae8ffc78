#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image enhancement module.
pub mod enhance;

/// module containing parallelization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;

/// image geometric transformations module.
pub mod warp;
