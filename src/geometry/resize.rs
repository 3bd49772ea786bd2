use image::{ImageBuffer, Luma};
use itertools::iproduct;

use crate::error::TransformResult;
use crate::geometry::bilinear::bilinear_value;
use crate::geometry::rows::fill_rows;
use crate::utils::{round_half_away, validate_source, validate_target_size};
use crate::Image;

/// Resampling strategy used by [`Resize::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMethod {
    /// Scatter every source pixel to its scaled destination position.
    ///
    /// Upscaling leaves unwritten destination pixels at zero.
    Forward,
    /// Gather each destination pixel from the nearest source pixel.
    Nearest,
    /// Gather each destination pixel by bilinear interpolation.
    #[default]
    Bilinear,
}

/// Resize operations on 8-bit grayscale images.
///
/// All three strategies scale by `target / source` independently along
/// each axis and return a freshly allocated image of the target extent.
/// The source is never modified.
pub trait Resize: Sized {
    /// Resizes by forward mapping.
    ///
    /// Source pixel `(x, y)` is written to
    /// `(⌊x · width / cols⌋, ⌊y · height / rows⌋)` in row-major order, so
    /// when several source pixels land on the same destination pixel the
    /// last one wins. On upscale most destination pixels are never
    /// written and stay zero.
    ///
    /// # Arguments
    ///
    /// * `size` - Destination extent as `(width, height)`
    ///
    /// # Errors
    ///
    /// * `TransformError::InvalidExtent` - `size` has a zero dimension
    /// * `TransformError::InvalidSource` - the source is empty
    fn resize_forward(&self, size: (u32, u32)) -> TransformResult<Self>;

    /// Resizes by inverse mapping to the nearest source pixel.
    ///
    /// Destination pixel `(x, y)` reads source pixel
    /// `(round(x · cols / width), round(y · rows / height))`, ties away
    /// from zero, clamped to the last column and row.
    ///
    /// # Errors
    ///
    /// * `TransformError::InvalidExtent` - `size` has a zero dimension
    /// * `TransformError::InvalidSource` - the source is empty
    fn resize_nearest(&self, size: (u32, u32)) -> TransformResult<Self>;

    /// Resizes by inverse mapping with bilinear interpolation.
    ///
    /// Destination pixel `(x, y)` is [`sample_bilinear`](crate::sample_bilinear)
    /// of the source at `(x · cols / width, y · rows / height)`.
    ///
    /// # Errors
    ///
    /// * `TransformError::InvalidExtent` - `size` has a zero dimension
    /// * `TransformError::InvalidSource` - the source is smaller than 2x2
    fn resize_bilinear(&self, size: (u32, u32)) -> TransformResult<Self>;

    /// Resizes with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{GrayImage, Luma};
    /// use imageops_geometry::{Resize, ResizeMethod};
    ///
    /// # fn example() -> Result<(), imageops_geometry::TransformError> {
    /// let image = GrayImage::from_pixel(4, 4, Luma([128]));
    /// let resized = image.resize((8, 6), ResizeMethod::Nearest)?;
    /// assert_eq!(resized.dimensions(), (8, 6));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn resize(&self, size: (u32, u32), method: ResizeMethod) -> TransformResult<Self> {
        match method {
            ResizeMethod::Forward => self.resize_forward(size),
            ResizeMethod::Nearest => self.resize_nearest(size),
            ResizeMethod::Bilinear => self.resize_bilinear(size),
        }
    }
}

impl Resize for Image<Luma<u8>> {
    fn resize_forward(&self, size: (u32, u32)) -> TransformResult<Self> {
        validate_target_size(size)?;
        let (src_width, src_height) = self.dimensions();
        validate_source(src_width, src_height, 1)?;

        let (width, height) = size;
        log::debug!("forward resize {src_width}x{src_height} -> {width}x{height}");

        let (ratio_x, ratio_y) = scale_ratios(self, size);
        let mut output: Self = ImageBuffer::new(width, height);

        // Last write wins, so this loop stays sequential and row-major.
        for (y, x) in iproduct!(0..src_height, 0..src_width) {
            let dx = ((f64::from(x) * ratio_x) as u32).min(width - 1);
            let dy = ((f64::from(y) * ratio_y) as u32).min(height - 1);
            output.put_pixel(dx, dy, *self.get_pixel(x, y));
        }

        Ok(output)
    }

    fn resize_nearest(&self, size: (u32, u32)) -> TransformResult<Self> {
        validate_target_size(size)?;
        let (src_width, src_height) = self.dimensions();
        validate_source(src_width, src_height, 1)?;

        let (width, height) = size;
        log::debug!("nearest resize {src_width}x{src_height} -> {width}x{height}");

        let (ratio_x, ratio_y) = scale_ratios(self, size);
        fill_rows(width, height, |row, samples| {
            let sy = nearest_index(row, ratio_y, src_height);
            for (col, sample) in samples.iter_mut().enumerate() {
                let sx = nearest_index(col as u32, ratio_x, src_width);
                *sample = self.get_pixel(sx, sy)[0];
            }
            Ok(())
        })
    }

    fn resize_bilinear(&self, size: (u32, u32)) -> TransformResult<Self> {
        validate_target_size(size)?;
        let (src_width, src_height) = self.dimensions();
        validate_source(src_width, src_height, 2)?;

        let (width, height) = size;
        log::debug!("bilinear resize {src_width}x{src_height} -> {width}x{height}");

        let (ratio_x, ratio_y) = scale_ratios(self, size);
        fill_rows(width, height, |row, samples| {
            let sy = f64::from(row) / ratio_y;
            for (col, sample) in samples.iter_mut().enumerate() {
                *sample = bilinear_value(self, col as f64 / ratio_x, sy)?;
            }
            Ok(())
        })
    }
}

/// Per-axis scale factors `(target.width / cols, target.height / rows)`.
fn scale_ratios(image: &Image<Luma<u8>>, size: (u32, u32)) -> (f64, f64) {
    let (src_width, src_height) = image.dimensions();
    (
        f64::from(size.0) / f64::from(src_width),
        f64::from(size.1) / f64::from(src_height),
    )
}

/// Inverse-maps a destination index to the nearest source index.
///
/// Rounding at the last destination index can land on `len`; the result
/// is clamped to `len - 1`.
fn nearest_index(dst: u32, ratio: f64, len: u32) -> u32 {
    round_half_away(f64::from(dst) / ratio).clamp(0, i64::from(len) - 1) as u32
}
