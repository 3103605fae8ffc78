use pixtra_image::{Image, ImageError};

use crate::parallel;

/// Invert the colors of an image.
///
/// Each channel is mapped to its complement:
///
/// dst(x,y,c) = 255 - src(x,y,c)
///
/// Applying the operation twice restores the original image exactly.
///
/// # Arguments
///
/// * `src` - The input image.
///
/// # Returns
///
/// A newly allocated image of the same size and channel count.
///
/// # Examples
///
/// ```
/// use pixtra_image::{Image, ImageSize};
/// use pixtra_imgproc::enhance::negate;
///
/// let data = vec![0u8, 128, 255];
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, data).unwrap();
///
/// let negated = negate(&image).unwrap();
///
/// assert_eq!(negated.as_slice(), &[255, 127, 0]);
/// ```
pub fn negate<const C: usize>(src: &Image<u8, C>) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;

    parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
        *dst_val = 255 - src_val;
    });

    Ok(dst)
}

/// Adjust the brightness of an image.
///
/// Each channel is shifted by `delta` and clamped to the valid sample range:
///
/// dst(x,y,c) = clamp(src(x,y,c) + delta, 0, 255)
///
/// A negative `delta` darkens the image. The shift is computed in `i64`, so
/// any delta magnitude is admissible; clamping absorbs overflow and
/// underflow.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `delta` - The brightness shift to add to each sample.
///
/// # Returns
///
/// A newly allocated image of the same size and channel count.
///
/// # Examples
///
/// ```
/// use pixtra_image::{Image, ImageSize};
/// use pixtra_imgproc::enhance::adjust_brightness;
///
/// let data = vec![0u8, 100, 200];
/// let image = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, data).unwrap();
///
/// let brightened = adjust_brightness(&image, 120).unwrap();
///
/// assert_eq!(brightened.as_slice(), &[120, 220, 255]);
/// ```
pub fn adjust_brightness<const C: usize>(
    src: &Image<u8, C>,
    delta: i32,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;

    let delta = i64::from(delta);
    parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
        *dst_val = (i64::from(src_val) + delta).clamp(0, 255) as u8;
    });

    Ok(dst)
}
