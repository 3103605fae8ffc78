/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the image dimensions are not positive.
    #[error("Image dimensions must be positive, got {0}x{1}")]
    ZeroSizedImage(usize, usize),

    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when accessing a pixel outside of the image bounds.
    #[error("Pixel coordinates ({0}, {1}) out of bounds for image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when accessing a channel outside of the pixel layout.
    #[error("Channel index {0} out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
