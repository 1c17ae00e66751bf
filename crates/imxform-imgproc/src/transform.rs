use imxform_image::{Image, ImageDtype, ImageError};

use crate::interpolation::InterpolationMode;
use crate::warp::{get_rotation_matrix2d, get_translation_matrix2d, warp_affine};

/// The two images produced by [`rotate_pair`].
#[derive(Clone, Debug)]
pub struct RotatedPair<T, const C: usize> {
    /// Rotated by `+angle` (counter-clockwise on screen).
    pub left: Image<T, C>,
    /// Rotated by `-angle` (clockwise on screen).
    pub right: Image<T, C>,
}

/// The two images produced by [`translate_pair`].
#[derive(Clone, Debug)]
pub struct ShiftedPair<T, const C: usize> {
    /// Shifted along the x axis only.
    pub x_shifted: Image<T, C>,
    /// Shifted along the y axis only.
    pub y_shifted: Image<T, C>,
}

/// Rotate an image about its center at unit scale.
///
/// The output has the size of the input; pixels that map outside the source are zero.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle` - The rotation angle in degrees, positive is counter-clockwise.
/// * `interpolation` - The interpolation mode to use.
pub fn rotate<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    angle: f32,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError> {
    let center = (src.width() as f32 / 2.0, src.height() as f32 / 2.0);
    let m = get_rotation_matrix2d(center, angle, 1.0);

    let mut dst = Image::from_size_val(src.size(), T::default())?;
    warp_affine(src, &mut dst, &m, interpolation)?;

    Ok(dst)
}

/// Rotate an image by `+angle` and by `-angle` about its center.
///
/// Both rotations use bilinear interpolation and keep the input canvas size.
///
/// # Example
///
/// ```
/// use imxform_image::Image;
/// use imxform_imgproc::transform::rotate_pair;
///
/// let image = Image::<u8, 3>::from_size_val([6, 4].into(), 7).unwrap();
/// let rotated = rotate_pair(&image, 90.0).unwrap();
///
/// assert_eq!(rotated.left.size(), image.size());
/// assert_eq!(rotated.right.size(), image.size());
/// ```
pub fn rotate_pair<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    angle: f32,
) -> Result<RotatedPair<T, C>, ImageError> {
    log::debug!("rotating {} by +/-{angle} degrees", src.size());

    Ok(RotatedPair {
        left: rotate(src, angle, InterpolationMode::Bilinear)?,
        right: rotate(src, -angle, InterpolationMode::Bilinear)?,
    })
}

/// Shift an image by whole pixels.
///
/// Content shifted out of frame is lost and uncovered pixels are zero.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `x_shift` - Horizontal offset, positive moves the content right.
/// * `y_shift` - Vertical offset, positive moves the content down.
/// * `interpolation` - The interpolation mode to use.
pub fn translate<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    x_shift: i32,
    y_shift: i32,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError> {
    let m = get_translation_matrix2d(x_shift as f32, y_shift as f32);

    let mut dst = Image::from_size_val(src.size(), T::default())?;
    warp_affine(src, &mut dst, &m, interpolation)?;

    Ok(dst)
}

/// Shift an image horizontally by `x_shift` and, separately, vertically by `y_shift`.
pub fn translate_pair<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    x_shift: i32,
    y_shift: i32,
) -> Result<ShiftedPair<T, C>, ImageError> {
    log::debug!("shifting {} by x={x_shift} and y={y_shift}", src.size());

    Ok(ShiftedPair {
        x_shifted: translate(src, x_shift, 0, InterpolationMode::Bilinear)?,
        y_shifted: translate(src, 0, y_shift, InterpolationMode::Bilinear)?,
    })
}

#[cfg(test)]
mod tests {
    use imxform_image::{Image, ImageError, ImageSize};

    fn gradient(size: ImageSize) -> Result<Image<u8, 1>, ImageError> {
        let data = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| (x + 2 * y) as u8))
            .collect();
        Image::new(size, data)
    }

    #[test]
    fn rotate_pair_keeps_shape() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([30, 20].into(), 9)?;
        let rotated = super::rotate_pair(&image, 90.0)?;

        for out in [&rotated.left, &rotated.right] {
            assert_eq!(out.size(), image.size());
            assert_eq!(out.num_channels(), 3);
        }

        Ok(())
    }

    #[test]
    fn rotate_left_is_counter_clockwise() -> Result<(), ImageError> {
        // a single bright pixel to the right of the center
        let size = ImageSize {
            width: 8,
            height: 8,
        };
        let mut image = Image::<u8, 1>::from_size_val(size, 0)?;
        image.set_pixel(6, 4, 0, 255)?;

        let rotated = super::rotate_pair(&image, 90.0)?;

        // counter-clockwise moves it above the center, clockwise below
        assert_eq!(rotated.left.get_pixel(4, 2, 0)?, &255);
        assert_eq!(rotated.right.get_pixel(4, 6, 0)?, &255);

        Ok(())
    }

    #[test]
    fn rotate_back_and_forth_recovers_interior() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 64,
            height: 64,
        };
        let image = gradient(size)?;

        let rotated = super::rotate_pair(&image, 90.0)?;
        let recovered = super::rotate(&rotated.left, -90.0, super::InterpolationMode::Bilinear)?;

        for y in 2..62 {
            for x in 2..62 {
                let expected = *image.get_pixel(x, y, 0)? as i32;
                let actual = *recovered.get_pixel(x, y, 0)? as i32;
                assert!(
                    (expected - actual).abs() <= 1,
                    "pixel ({x}, {y}): {actual} != {expected}"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn rotate_pair_quarter_turn_leaves_one_background_line() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 200,
            height: 200,
        };
        let image = Image::<u8, 3>::from_size_val(size, 128)?;
        let rotated = super::rotate_pair(&image, 90.0)?;

        let zero_rows = |img: &Image<u8, 3>| {
            (0..size.height)
                .filter(|&y| (0..size.width).all(|x| img.get_pixel(x, y, 0) == Ok(&0)))
                .count()
        };
        let zero_cols = |img: &Image<u8, 3>| {
            (0..size.width)
                .filter(|&x| (0..size.height).all(|y| img.get_pixel(x, y, 0) == Ok(&0)))
                .count()
        };

        assert_eq!(zero_rows(&rotated.left), 1);
        assert_eq!(zero_cols(&rotated.left), 0);
        assert_eq!(zero_cols(&rotated.right), 1);
        assert_eq!(zero_rows(&rotated.right), 0);

        let count_zeros = |img: &Image<u8, 3>| img.as_slice().iter().filter(|&&v| v == 0).count();
        assert_eq!(count_zeros(&rotated.left), 200 * 3);
        assert_eq!(count_zeros(&rotated.right), 200 * 3);

        Ok(())
    }

    #[test]
    fn translate_zero_is_identity() -> Result<(), ImageError> {
        let image = gradient([13, 7].into())?;
        let shifted = super::translate_pair(&image, 0, 0)?;

        assert_eq!(shifted.x_shifted, image);
        assert_eq!(shifted.y_shifted, image);

        Ok(())
    }

    #[test]
    fn translate_pair_moves_content() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (1..=12).collect(),
        )?;

        let shifted = super::translate_pair(&image, 1, 2)?;

        assert_eq!(
            shifted.x_shifted.as_slice(),
            &[0, 1, 2, 3, 0, 5, 6, 7, 0, 9, 10, 11]
        );
        assert_eq!(
            shifted.y_shifted.as_slice(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4]
        );

        Ok(())
    }

    #[test]
    fn translate_negative_shift() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([3, 1].into(), vec![1, 2, 3])?;
        let shifted = super::translate(&image, -2, 0, super::InterpolationMode::Nearest)?;
        assert_eq!(shifted.as_slice(), &[3, 0, 0]);
        Ok(())
    }
}
