use imxform_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.trunc() as usize;
    let iv = v.trunc() as usize;

    let iu0 = iu.min(cols - 1);
    let iv0 = iv.min(rows - 1);

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    let mut pixel = [0.0; C];
    for k in 0..C {
        let (v00, v01, v10, v11): (f32, f32, f32, f32) =
            (p00[k].into(), p01[k].into(), p10[k].into(), p11[k].into());
        pixel[k] = v00 * w00 + v01 * w01 + v10 * w10 + v11 * w11;
    }

    pixel
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imxform_image::{Image, ImageError};

    #[test]
    fn bilinear_midpoint() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 2].into(), vec![0, 100, 200, 255])?;
        let [val] = super::bilinear_interpolation(&image, 0.5, 0.5);
        assert_relative_eq!(val, 138.75);
        Ok(())
    }

    #[test]
    fn bilinear_on_grid_is_exact() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::new([2, 1].into(), vec![1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(super::bilinear_interpolation(&image, 1.0, 0.0), [3.0, 4.0]);
        Ok(())
    }
}
