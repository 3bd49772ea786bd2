use image::{ImageBuffer, Luma};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::Image;

/// Allocates a zeroed grayscale image and fills it one row at a time.
///
/// `fill` receives the destination row index and the row's samples. Rows
/// are independent, so with the `rayon` feature they are evaluated on the
/// global thread pool; each worker only writes its own row.
pub(crate) fn fill_rows<E, F>(width: u32, height: u32, fill: F) -> Result<Image<Luma<u8>>, E>
where
    E: Send,
    F: Fn(u32, &mut [u8]) -> Result<(), E> + Send + Sync,
{
    let mut output: Image<Luma<u8>> = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        return Ok(output);
    }

    for_each_row(&mut output, width as usize, &fill)?;
    Ok(output)
}

#[cfg(not(feature = "rayon"))]
fn for_each_row<E, F>(data: &mut [u8], stride: usize, fill: &F) -> Result<(), E>
where
    F: Fn(u32, &mut [u8]) -> Result<(), E>,
{
    data.chunks_exact_mut(stride)
        .enumerate()
        .try_for_each(|(row, samples)| fill(row as u32, samples))
}

#[cfg(feature = "rayon")]
fn for_each_row<E, F>(data: &mut [u8], stride: usize, fill: &F) -> Result<(), E>
where
    E: Send,
    F: Fn(u32, &mut [u8]) -> Result<(), E> + Send + Sync,
{
    data.par_chunks_exact_mut(stride)
        .enumerate()
        .try_for_each(|(row, samples)| fill(row as u32, samples))
}
