//! Internal utility functions for imageops-geometry.
//!
//! This module contains the numeric helpers and argument checks shared by
//! the resize, translate and rotate kernels.

use image::Primitive;
use imageproc::definitions::Clamp;

use crate::error::{TransformError, TransformResult};

/// Clamps a floating-point value to the range of a primitive type.
///
/// # Arguments
///
/// * `value` - The floating-point value to clamp
///
/// # Returns
///
/// The clamped value as the target primitive type
#[inline]
pub fn clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value)
}

/// Rounds to the nearest integer, ties away from zero.
///
/// Nearest resize and the bilinear sampler both go through this helper so
/// that their outputs agree bit for bit. `f64::round` already breaks ties
/// away from zero; `round_ties_even` would silently diverge.
#[inline]
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

/// Validates that a destination extent is at least 1x1.
///
/// # Arguments
///
/// * `size` - Destination extent as `(width, height)`
///
/// # Returns
///
/// `Ok(())` if both dimensions are non-zero, otherwise `InvalidExtent`
pub fn validate_target_size(size: (u32, u32)) -> TransformResult<()> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        log::warn!("rejecting target extent {width}x{height}");
        return Err(TransformError::InvalidExtent { width, height });
    }
    Ok(())
}

/// Validates that a source image has at least `min` rows and columns.
///
/// # Arguments
///
/// * `width` - Source width (columns)
/// * `height` - Source height (rows)
/// * `min` - Minimum accepted value for both dimensions
///
/// # Returns
///
/// `Ok(())` if the source is large enough, otherwise `InvalidSource`
pub fn validate_source(width: u32, height: u32, min: u32) -> TransformResult<()> {
    if width < min || height < min {
        log::warn!("rejecting {width}x{height} source, need at least {min}x{min}");
        return Err(TransformError::InvalidSource { width, height, min });
    }
    Ok(())
}
