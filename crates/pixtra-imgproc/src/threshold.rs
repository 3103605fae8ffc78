use pixtra_image::{Image, ImageError};

use crate::parallel;

/// Apply a binary threshold to a grayscale image.
///
/// Every sample strictly below `threshold` becomes 0, every other sample
/// becomes 255. The comparison is carried out in `i32`, so the threshold is
/// unconstrained: values <= 0 yield an all-255 output and values > 255 yield
/// an all-0 output. Neither case is an error.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `threshold` - The threshold value.
///
/// # Returns
///
/// A newly allocated grayscale image of the same size.
///
/// # Examples
///
/// ```
/// use pixtra_image::{Image, ImageSize};
/// use pixtra_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let thresholded = threshold_binary(&image, 128).unwrap();
///
/// assert_eq!(thresholded.num_channels(), 1);
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary(src: &Image<u8, 1>, threshold: i32) -> Result<Image<u8, 1>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;

    parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
        *dst_val = if i32::from(src_val) < threshold {
            0
        } else {
            255
        };
    });

    Ok(dst)
}
