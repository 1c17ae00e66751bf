use imxform_image::{Image, ImageDtype, ImageError};

use crate::interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix. A singular matrix yields a zero linear part.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let [a, b, c, d, e, f] = m.map(f64::from);

    // follow OpenCV: check for determinant == 0
    // https://github.com/opencv/opencv/blob/4.9.0/modules/imgproc/src/imgwarp.cpp#L2765
    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f].map(|v| v as f32)
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// Positive angles rotate counter-clockwise as seen on screen, where the y axis points down.
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use imxform_imgproc::warp::get_rotation_matrix2d;
///
/// let rotation_matrix = get_rotation_matrix2d((0.0, 0.0), 90.0, 1.0);
/// assert!((rotation_matrix[1] - 1.0).abs() < 1e-6);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = f64::from(angle).to_radians();
    let alpha = f64::from(scale) * angle.cos();
    let beta = f64::from(scale) * angle.sin();

    let (cx, cy) = (f64::from(center.0), f64::from(center.1));
    let tx = (1.0 - alpha) * cx - beta * cy;
    let ty = beta * cx + (1.0 - alpha) * cy;

    [alpha, beta, tx, -beta, alpha, ty].map(|v| v as f32)
}

/// Returns a 2x3 matrix for a pure translation.
///
/// | 1  0  x_shift |
/// | 0  1  y_shift |
///
/// Positive shifts move the content right and down.
pub fn get_translation_matrix2d(x_shift: f32, y_shift: f32) -> [f32; 6] {
    [1.0, 0.0, x_shift, 0.0, 1.0, y_shift]
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Number of sub-pixel positions per pixel that source coordinates are snapped to.
///
/// Same as OpenCV's `INTER_TAB_SIZE`: float noise in the inverse map must not move a
/// coordinate that lies exactly on the source border to its inner side.
const SUBPIXEL_STEPS: f32 = 32.0;

fn snap_to_subpixel(v: f32) -> f32 {
    (v * SUBPIXEL_STEPS).round() / SUBPIXEL_STEPS
}

/// Applies an affine transformation to an image.
///
/// Every destination pixel is mapped back into the source through the inverse of `m`.
/// Source locations are snapped to 1/32 of a pixel. Destination pixels whose source location
/// falls outside the source image keep their current value, so `dst` should be allocated
/// with the background value (usually zero).
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The 2x3 affine transformation matrix src -> dst.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use imxform_image::{Image, ImageSize};
/// use imxform_imgproc::interpolation::InterpolationMode;
/// use imxform_imgproc::warp::warp_affine;
///
/// let src = Image::<_, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1f32,
/// ).unwrap();
///
/// let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
///
/// let mut dst = Image::<_, 3>::from_size_val(src.size(), 0.0).unwrap();
///
/// warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    let (dst_rows, dst_cols) = (dst.rows(), dst.cols());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        let (u, v) = transform_point(x as f32, y as f32, &m_inv);
        (snap_to_subpixel(u), snap_to_subpixel(v))
    });

    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        // check if the position is within the bounds of the src image
        if x >= 0.0f32 && x < src_cols && y >= 0.0f32 && y < src_rows {
            let pixel = interpolate_pixel(src, x, y, interpolation);
            dst_pixel
                .iter_mut()
                .zip(pixel)
                .for_each(|(out, val)| *out = T::from_f32(val));
        }
    });

    Ok(())
}
