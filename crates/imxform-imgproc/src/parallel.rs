use rayon::prelude::*;

use imxform_image::Image;

/// Apply a function to each destination pixel for grid sampling in parallel.
///
/// Rows are distributed over the global Rayon thread pool. Each row is written by a
/// single task, so the output does not depend on scheduling.
///
/// # Arguments
///
/// * `dst` - The destination image.
/// * `map_x` - Row-major source x coordinates, one per destination pixel.
/// * `map_y` - Row-major source y coordinates, one per destination pixel.
/// * `f` - Called with the source coordinates and the destination pixel samples.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(&f32, &f32, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 || C == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.par_chunks_exact(cols))
        .zip(map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
