use pixtra_image::{Image, ImageError};

use crate::parallel;

use super::in_bounds;

/// Rotate an image about a pivot point.
///
/// For each destination pixel (x, y) the source coordinate is found by
/// applying the forward rotation formula to the destination offset from the
/// pivot:
///
/// ```text
/// x_src = trunc(cos(t) * (x - px) - sin(t) * (y - py) + px)
/// y_src = trunc(sin(t) * (x - px) + cos(t) * (y - py) + py)
/// ```
///
/// Destination pixels whose source coordinate falls outside the image are
/// filled black. The mapped coordinates are truncated toward zero, not
/// floored; together with the sign convention above this pins the exact
/// output grid, so neither may be changed without breaking compatibility
/// with existing outputs.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle_deg` - The rotation angle in degrees.
/// * `pivot` - The (x, y) point to rotate about; defaults to the image
///   center `(width / 2, height / 2)` when `None`.
///
/// # Returns
///
/// A newly allocated image of the same size and channel count.
///
/// # Examples
///
/// ```
/// use pixtra_image::{Image, ImageSize};
/// use pixtra_imgproc::warp::rotate;
///
/// let data = vec![1u8, 2, 3, 4];
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 2 }, data).unwrap();
///
/// let rotated = rotate(&image, 0.0, None).unwrap();
///
/// assert_eq!(rotated.as_slice(), image.as_slice());
/// ```
pub fn rotate<const C: usize>(
    src: &Image<u8, C>,
    angle_deg: f64,
    pivot: Option<(i64, i64)>,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;

    let (cols, rows) = (src.cols() as i64, src.rows() as i64);
    // resolve the pivot once, before the pixel loop
    let (px, py) = pivot.unwrap_or(((src.cols() / 2) as i64, (src.rows() / 2) as i64));
    let (px, py) = (px as f64, py as f64);

    let theta = angle_deg.to_radians();
    let s = theta.sin();
    let c = theta.cos();

    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(&mut dst, |x, y, dst_pixel| {
        let dx = x as f64 - px;
        let dy = y as f64 - py;

        // truncation toward zero, matching the reference integer cast
        let x_src = (c * dx - s * dy + px) as i64;
        let y_src = (s * dx + c * dy + py) as i64;

        if in_bounds(x_src, y_src, 0, 0, cols, rows) {
            let idx = (y_src as usize * cols as usize + x_src as usize) * C;
            dst_pixel.copy_from_slice(&src_data[idx..idx + C]);
        } else {
            dst_pixel.fill(0);
        }
    });

    Ok(dst)
}
