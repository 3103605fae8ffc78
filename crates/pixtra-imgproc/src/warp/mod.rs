//! Geometric image transformations.
//!
//! Both transforms use inverse mapping with nearest-neighbor sampling: for
//! each destination pixel the corresponding source coordinate is computed,
//! and the source sample is copied verbatim when it lies inside the image,
//! otherwise the destination pixel is filled black.

mod rotate;
mod translate;

pub use rotate::rotate;
pub use translate::translate;

/// Check whether a point lies in the half-open rectangle
/// `[min_x, max_x) x [min_y, max_y)`.
///
/// Geometric transforms use this to validate a computed source coordinate
/// before dereferencing it.
#[inline]
pub fn in_bounds(x: i64, y: i64, min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> bool {
    x >= min_x && x < max_x && y >= min_y && y < max_y
}
