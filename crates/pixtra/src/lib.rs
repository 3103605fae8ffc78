#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pixtra_image as image;

#[doc(inline)]
pub use pixtra_imgproc as imgproc;
