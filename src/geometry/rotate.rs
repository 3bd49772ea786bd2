//! Rotation by inverse mapping with bilinear sampling.
//!
//! For every destination pixel `(col, row)` the source coordinate is
//!
//! ```text
//! x =  (col - px) * cos θ + (row - py) * sin θ + px
//! y = -(col - px) * sin θ + (row - py) * cos θ + py
//! ```
//!
//! where `(px, py)` is the pivot. Destination pixels whose source
//! coordinate falls outside `[0, cols) x [0, rows)` stay zero. The output
//! always has the source extent, so rotated content that leaves the frame
//! is clipped.

use image::Luma;

use crate::error::TransformResult;
use crate::geometry::bilinear::bilinear_value;
use crate::geometry::rows::fill_rows;
use crate::utils::validate_source;
use crate::Image;

/// Rotation of 8-bit grayscale images by an arbitrary angle.
///
/// Angles are in degrees and are not normalized; negative values and
/// values beyond a full turn are accepted as is.
pub trait Rotate: Sized {
    /// Rotates the image about its top-left pixel `(0, 0)`.
    ///
    /// For any angle that is not a multiple of a full turn most of the
    /// content leaves the frame. Use [`Rotate::rotate_about_center`] to
    /// keep it visible.
    ///
    /// # Errors
    ///
    /// * `TransformError::InvalidSource` - the source is smaller than 2x2
    fn rotate(&self, degrees: f64) -> TransformResult<Self>;

    /// Rotates the image about an arbitrary integer pivot `(x, y)`.
    ///
    /// The pivot may lie outside the image.
    ///
    /// # Errors
    ///
    /// * `TransformError::InvalidSource` - the source is smaller than 2x2
    fn rotate_about(&self, degrees: f64, pivot: (i64, i64)) -> TransformResult<Self>;

    /// Rotates the image about [`center_of`] the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{GrayImage, Luma};
    /// use imageops_geometry::Rotate;
    ///
    /// # fn example() -> Result<(), imageops_geometry::TransformError> {
    /// let image = GrayImage::from_pixel(9, 9, Luma([255]));
    /// let rotated = image.rotate_about_center(20.0)?;
    /// assert_eq!(rotated.get_pixel(4, 4)[0], 255);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn rotate_about_center(&self, degrees: f64) -> TransformResult<Self>;
}

/// Integer center `(width / 2, height / 2)` of an image, usable as a pivot.
pub fn center_of(image: &Image<Luma<u8>>) -> (i64, i64) {
    let (width, height) = image.dimensions();
    (i64::from(width / 2), i64::from(height / 2))
}

impl Rotate for Image<Luma<u8>> {
    fn rotate(&self, degrees: f64) -> TransformResult<Self> {
        log::debug!("rotate {:?} by {degrees} degrees about origin", self.dimensions());
        rotate_impl(self, degrees, (0, 0))
    }

    fn rotate_about(&self, degrees: f64, pivot: (i64, i64)) -> TransformResult<Self> {
        log::debug!(
            "rotate {:?} by {degrees} degrees about {pivot:?}",
            self.dimensions()
        );
        rotate_impl(self, degrees, pivot)
    }

    fn rotate_about_center(&self, degrees: f64) -> TransformResult<Self> {
        self.rotate_about(degrees, center_of(self))
    }
}

/// Inverse rotation about a fixed pivot.
#[derive(Debug, Clone, Copy)]
struct InverseRotation {
    sin: f64,
    cos: f64,
    pivot_x: f64,
    pivot_y: f64,
}

impl InverseRotation {
    fn new(degrees: f64, pivot: (i64, i64)) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            sin,
            cos,
            pivot_x: pivot.0 as f64,
            pivot_y: pivot.1 as f64,
        }
    }

    /// Source coordinate `(x, y)` for destination pixel `(col, row)`.
    #[inline]
    fn source_of(&self, col: u32, row: u32) -> (f64, f64) {
        let jj = f64::from(col) - self.pivot_x;
        let ii = f64::from(row) - self.pivot_y;
        (
            jj * self.cos + ii * self.sin + self.pivot_x,
            -jj * self.sin + ii * self.cos + self.pivot_y,
        )
    }
}

fn rotate_impl(
    image: &Image<Luma<u8>>,
    degrees: f64,
    pivot: (i64, i64),
) -> TransformResult<Image<Luma<u8>>> {
    let (width, height) = image.dimensions();
    validate_source(width, height, 2)?;

    let mapping = InverseRotation::new(degrees, pivot);
    let (cols, rows) = (f64::from(width), f64::from(height));

    fill_rows(width, height, |row, samples| {
        for (col, sample) in samples.iter_mut().enumerate() {
            let (x, y) = mapping.source_of(col as u32, row);
            if (0.0..cols).contains(&x) && (0.0..rows).contains(&y) {
                *sample = bilinear_value(image, x, y)?;
            }
        }
        Ok(())
    })
}
