use image::Luma;

use crate::error::{TransformError, TransformResult};
use crate::utils::{clamp_f32_to_primitive, round_half_away, validate_source};
use crate::Image;

/// Samples a grayscale image at a fractional coordinate using bilinear interpolation.
///
/// The four neighbors `(⌊x⌋, ⌊y⌋)` to `(⌊x⌋ + 1, ⌊y⌋ + 1)` are blended in
/// two stages: first vertically along both columns, then horizontally
/// between the two intermediate values. Every stage rounds to the nearest
/// integer with ties away from zero, so the result is reproducible across
/// platforms.
///
/// On or past the last column (row) the neighborhood is stepped back by one
/// unit so it stays inside the image, while the weights are still taken
/// from the real coordinate. An integer coordinate on the last column
/// therefore reads that column exactly, and `x` in `[cols - 1, cols)`
/// holds the edge value. This is not a full clamp: coordinates outside
/// `[0, cols) x [0, rows)` are rejected.
///
/// # Arguments
///
/// * `image` - Source image, at least 2x2
/// * `x` - Horizontal (column) coordinate
/// * `y` - Vertical (row) coordinate
///
/// # Errors
///
/// * `TransformError::InvalidSource` - the image is smaller than 2x2
/// * `TransformError::OutOfBounds` - the coordinate is outside
///   `[0, cols) x [0, rows)`, or is not finite
///
/// # Examples
///
/// ```
/// use image::{GrayImage, Luma};
/// use imageops_geometry::sample_bilinear;
///
/// let image = GrayImage::from_fn(2, 2, |x, _| Luma([x as u8 * 100]));
/// assert_eq!(sample_bilinear(&image, 0.5, 0.0).unwrap(), 50);
/// ```
pub fn sample_bilinear(image: &Image<Luma<u8>>, x: f64, y: f64) -> TransformResult<u8> {
    let (width, height) = image.dimensions();
    validate_source(width, height, 2)?;
    bilinear_value(image, x, y)
}

/// Sampler body shared by the resize and rotate kernels.
///
/// Callers must have validated that the image is at least 2x2.
pub(crate) fn bilinear_value(image: &Image<Luma<u8>>, x: f64, y: f64) -> TransformResult<u8> {
    let (width, height) = image.dimensions();
    let max_x = f64::from(width - 1);
    let max_y = f64::from(height - 1);

    let x0 = x.floor();
    let y0 = y.floor();

    // NaN fails every comparison and lands here as well.
    if !(x0 >= 0.0 && x0 <= max_x && y0 >= 0.0 && y0 <= max_y) {
        return Err(TransformError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    let x0 = x0.min(max_x - 1.0);
    let y0 = y0.min(max_y - 1.0);

    let (px, py) = (x0 as u32, y0 as u32);
    let a = i64::from(image.get_pixel(px, py)[0]);
    let b = i64::from(image.get_pixel(px, py + 1)[0]);
    let c = i64::from(image.get_pixel(px + 1, py)[0]);
    let d = i64::from(image.get_pixel(px + 1, py + 1)[0]);

    // Weights reach 1 on the last column (row) and never extrapolate past it.
    let alpha = (y - y0).min(1.0);
    let beta = (x - x0).min(1.0);

    let m1 = a + round_half_away(alpha * (b - a) as f64);
    let m2 = c + round_half_away(alpha * (d - c) as f64);
    let p = m1 + round_half_away(beta * (m2 - m1) as f64);

    Ok(clamp_f32_to_primitive::<u8>(p as f32))
}
