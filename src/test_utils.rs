//! Test utilities for imageops-geometry
//!
//! This module provides common fixtures for testing the transform kernels.
//! It is only compiled when running tests.

#[cfg(test)]
use image::Luma;
#[cfg(test)]
use itertools::iproduct;

#[cfg(test)]
use crate::Image;

/// Creates a test grayscale (Luma) image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known grayscale values:
/// - (0,0): [200]
/// - (1,0): [150]
/// - (0,1): [100]
/// - (1,1): [50]
///
/// # Returns
/// A 2x2 Luma image with u8 subpixels
#[cfg(test)]
pub fn create_test_luma_image() -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Luma([200]));
    image.put_pixel(1, 0, Luma([150]));
    image.put_pixel(0, 1, Luma([100]));
    image.put_pixel(1, 1, Luma([50]));
    image
}

/// Creates a grayscale image whose values increase in row-major order.
///
/// Pixel `(x, y)` holds `((y * width + x) * 16) % 256`, so a 4x4 image
/// contains `0, 16, 32, ..., 240`.
#[cfg(test)]
pub fn create_gradient_image(width: u32, height: u32) -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        image.put_pixel(x, y, Luma([((y * width + x) * 16 % 256) as u8]));
    });
    image
}

/// Compares two grayscale images pixel by pixel with a tolerance.
///
/// # Returns
/// `true` if dimensions match and every pixel differs by at most `tolerance`
#[cfg(test)]
pub fn images_approx_equal(expected: &Image<Luma<u8>>, actual: &Image<Luma<u8>>, tolerance: u8) -> bool {
    if expected.dimensions() != actual.dimensions() {
        return false;
    }

    expected
        .pixels()
        .zip(actual.pixels())
        .all(|(e, a)| e[0].abs_diff(a[0]) <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_gradient_image_with_4x4_holds_row_major_ramp() {
        let image = create_gradient_image(4, 4);
        let values: Vec<u8> = image.pixels().map(|p| p[0]).collect();
        let expected: Vec<u8> = (0..16).map(|v| v * 16).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn images_approx_equal_with_tolerant_comparison_returns_true() {
        let image1 = create_test_luma_image();
        let mut image2 = create_test_luma_image();
        image2.put_pixel(0, 0, Luma([201]));

        assert!(images_approx_equal(&image1, &image2, 1));
        assert!(!images_approx_equal(&image1, &image2, 0));
        assert!(!images_approx_equal(&image1, &create_gradient_image(3, 2), 255));
    }
}
