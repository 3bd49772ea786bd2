//! Geometric transform kernels for single-channel 8-bit images.
//!
//! Every transform borrows its source read-only and returns a freshly
//! allocated [`Image`]. Resize, rotate and translate are provided as
//! extension traits on `Image<Luma<u8>>` (`image::GrayImage`), and the
//! bilinear sampler they share is exposed as [`sample_bilinear`].
//!
//! Enable the `rayon` feature to evaluate destination rows in parallel.

mod error;
mod geometry;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use error::{TransformError, TransformResult};
pub use geometry::bilinear::sample_bilinear;
pub use geometry::resize::{Resize, ResizeMethod};
pub use geometry::rotate::{center_of, Rotate};
pub use geometry::translate::Translate;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
