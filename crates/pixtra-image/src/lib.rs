#![deny(missing_docs)]
//! Pixel buffer types for generating and manipulating raster images

/// image representation for raster processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
