use std::convert::Infallible;

use image::Luma;

use crate::geometry::rows::fill_rows;
use crate::Image;

/// Integer translation of 8-bit grayscale images.
pub trait Translate {
    /// Shifts the image content by `offset` pixels.
    ///
    /// The result has the same extent as the source. Destination pixel
    /// `p` takes the source pixel at `p - offset` when that lies inside
    /// the source; content shifted out of frame is dropped and uncovered
    /// regions are zero.
    ///
    /// # Arguments
    ///
    /// * `offset` - Shift as `(x, y)`; positive values move content right and down
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{GrayImage, Luma};
    /// use imageops_geometry::Translate;
    ///
    /// let image = GrayImage::from_pixel(3, 3, Luma([1]));
    /// let shifted = image.translate((1, 0));
    /// assert_eq!(shifted.get_pixel(0, 0)[0], 0);
    /// assert_eq!(shifted.get_pixel(1, 0)[0], 1);
    /// ```
    fn translate(&self, offset: (i64, i64)) -> Self;
}

impl Translate for Image<Luma<u8>> {
    fn translate(&self, offset: (i64, i64)) -> Self {
        let (width, height) = self.dimensions();
        let (dx, dy) = offset;
        log::debug!("translate {width}x{height} by ({dx}, {dy})");

        let columns = 0..i64::from(width);
        let rows = 0..i64::from(height);

        let result = fill_rows::<Infallible, _>(width, height, |row, samples| {
            let sy = i64::from(row).saturating_sub(dy);
            if !rows.contains(&sy) {
                return Ok(());
            }
            for (col, sample) in samples.iter_mut().enumerate() {
                let sx = (col as i64).saturating_sub(dx);
                if columns.contains(&sx) {
                    *sample = self.get_pixel(sx as u32, sy as u32)[0];
                }
            }
            Ok(())
        });

        match result {
            Ok(image) => image,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_gradient_image;
    use image::ImageBuffer;

    #[test]
    fn translate_with_positive_x_clears_first_column() {
        let src: Image<Luma<u8>> = ImageBuffer::from_pixel(3, 3, Luma([1]));
        let result = src.translate((1, 0));

        for y in 0..3 {
            assert_eq!(result.get_pixel(0, y)[0], 0);
            assert_eq!(result.get_pixel(1, y)[0], 1);
            assert_eq!(result.get_pixel(2, y)[0], 1);
        }
    }

    #[test]
    fn translate_with_negative_offset_moves_content_up_left() {
        let src = create_gradient_image(4, 3);
        let result = src.translate((-1, -2));

        assert_eq!(result.dimensions(), (4, 3));
        for x in 0..3 {
            assert_eq!(result.get_pixel(x, 0), src.get_pixel(x + 1, 2));
        }
        assert_eq!(result.get_pixel(3, 0)[0], 0);
        assert!((0..4).all(|x| result.get_pixel(x, 1)[0] == 0 && result.get_pixel(x, 2)[0] == 0));
    }

    #[test]
    fn translate_with_zero_offset_is_identity() {
        let src = create_gradient_image(5, 4);
        assert_eq!(src.translate((0, 0)), src);
    }

    #[test]
    fn translate_past_frame_returns_black_image() {
        let src = create_gradient_image(4, 4);
        for offset in [(4, 0), (0, -4), (i64::MAX, 0), (i64::MIN, i64::MIN)] {
            let result = src.translate(offset);
            assert!(result.pixels().all(|p| p[0] == 0), "offset {offset:?}");
        }
    }

    #[test]
    fn translate_with_empty_image_returns_empty_image() {
        let src: Image<Luma<u8>> = ImageBuffer::new(0, 0);
        assert_eq!(src.translate((3, 3)).dimensions(), (0, 0));
    }
}
