use pixtra_image::{Image, ImageError};

use crate::parallel;

use super::in_bounds;

/// Translate an image by an integer offset.
///
/// For each destination pixel (x, y) the source coordinate is
/// `(x - dx, y - dy)`; destination pixels whose source coordinate falls
/// outside the image are filled black. The full destination rectangle is
/// written, so the output does not depend on the buffer's initial contents.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dx` - The horizontal offset in pixels.
/// * `dy` - The vertical offset in pixels.
///
/// # Returns
///
/// A newly allocated image of the same size and channel count.
///
/// # Examples
///
/// ```
/// use pixtra_image::{Image, ImageSize};
/// use pixtra_imgproc::warp::translate;
///
/// let data = vec![1u8, 2, 3, 4];
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 2 }, data).unwrap();
///
/// let shifted = translate(&image, 1, 0).unwrap();
///
/// assert_eq!(shifted.as_slice(), &[0, 1, 0, 3]);
/// ```
pub fn translate<const C: usize>(
    src: &Image<u8, C>,
    dx: i32,
    dy: i32,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;

    let (cols, rows) = (src.cols() as i64, src.rows() as i64);
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(&mut dst, |x, y, dst_pixel| {
        let x_src = x as i64 - dx;
        let y_src = y as i64 - dy;

        if in_bounds(x_src, y_src, 0, 0, cols, rows) {
            let idx = (y_src as usize * cols as usize + x_src as usize) * C;
            dst_pixel.copy_from_slice(&src_data[idx..idx + C]);
        } else {
            dst_pixel.fill(0);
        }
    });

    Ok(dst)
}
