use thiserror::Error;

/// Error type for geometric transforms
///
/// These are contract violations detected before any pixel is written.
/// A transform either completes for every destination pixel or returns
/// one of these variants; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The requested destination extent has a zero dimension
    ///
    /// Returned by the resize family when `width < 1` or `height < 1`.
    #[error("Target extent must be at least 1x1, got {width}x{height}")]
    InvalidExtent { width: u32, height: u32 },

    /// The source image is too small for the requested operation
    ///
    /// Bilinear sampling needs a 2x2 neighborhood, so the sampler,
    /// bilinear resize and both rotations require `min = 2`. Forward and
    /// nearest resize only need a non-empty source (`min = 1`).
    #[error("Source image must be at least {min}x{min}, got {width}x{height}")]
    InvalidSource { width: u32, height: u32, min: u32 },

    /// A sampling coordinate fell outside `[0, width) x [0, height)`
    ///
    /// The sampler holds the edge value within the last unit of each axis.
    /// Anything further out is reported instead of read.
    #[error("Sampling coordinate ({x}, {y}) is outside the {width}x{height} source")]
    OutOfBounds {
        /// Horizontal coordinate as supplied to the sampler
        x: f64,
        /// Vertical coordinate as supplied to the sampler
        y: f64,
        width: u32,
        height: u32,
    },
}

/// Result alias used by every fallible transform
pub type TransformResult<T> = Result<T, TransformError>;
