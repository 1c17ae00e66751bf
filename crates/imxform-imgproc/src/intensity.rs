//! Localized brightness boost around the image center.
//!
//! Every pixel strictly inside the square of half-side [`INTENSITY_MARGIN`] centered on the
//! image midpoint is scaled by `1 + (margin - d) / 100`, where `d` is the Chebyshev distance
//! to the center. The factor is 1.5 at the center and falls to 1.0 at the border of the square.

use imxform_image::{Image, ImageError};

/// Half-side of the brightened square, in pixels.
pub const INTENSITY_MARGIN: usize = 50;

/// Divisor turning the remaining margin into a gain.
pub const INTENSITY_DIVISOR: f64 = 100.0;

/// Diagnostic reported when the image cannot hold the whole square.
pub const TOO_SMALL_MESSAGE: &str = "The image is not big enough to perform this operation!!!!";

/// How a scaled sample that no longer fits in 8 bits is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Clamp the product to 255.
    #[default]
    Saturate,
    /// Keep the low 8 bits of the product, as an unchecked 8-bit store does.
    Wrap,
}

/// Result of [`modify_intensity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    /// The square was brightened.
    Applied,
    /// The image center is too close to an edge; the output is an unmodified copy.
    TooSmall {
        /// Integer x coordinate of the image center.
        center_x: usize,
        /// Integer y coordinate of the image center.
        center_y: usize,
    },
}

/// Chebyshev-distance gain for a pixel at offset `(dx, dy)` from the center.
fn gain(dx: usize, dy: usize) -> f64 {
    let change = INTENSITY_MARGIN - dx.max(dy);
    1.0 + change as f64 / INTENSITY_DIVISOR
}

fn scale_sample(val: u8, gain: f64, policy: OverflowPolicy) -> u8 {
    let scaled = (val as f64 * gain).trunc();
    match policy {
        OverflowPolicy::Saturate => scaled.min(255.0) as u8,
        OverflowPolicy::Wrap => (scaled as u32 % 256) as u8,
    }
}

/// Brighten a square region around the image center.
///
/// The input is left untouched; the result is a modified copy. When `width / 2` or
/// `height / 2` is not larger than [`INTENSITY_MARGIN`] nothing is modified and
/// [`PatchStatus::TooSmall`] is returned alongside the copy.
///
/// Products are truncated toward zero before `policy` is applied.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `policy` - How to store products above 255.
///
/// # Example
///
/// ```
/// use imxform_image::Image;
/// use imxform_imgproc::intensity::{modify_intensity, OverflowPolicy, PatchStatus};
///
/// let image = Image::<u8, 3>::from_size_val([200, 200].into(), 128).unwrap();
/// let (out, status) = modify_intensity(&image, OverflowPolicy::Saturate).unwrap();
///
/// assert_eq!(status, PatchStatus::Applied);
/// assert_eq!(out.get_pixel(100, 100, 0).unwrap(), &192);
/// assert_eq!(out.get_pixel(0, 0, 0).unwrap(), &128);
/// ```
pub fn modify_intensity<const C: usize>(
    src: &Image<u8, C>,
    policy: OverflowPolicy,
) -> Result<(Image<u8, C>, PatchStatus), ImageError> {
    let mut dst = src.clone();

    let center_x = src.width() / 2;
    let center_y = src.height() / 2;

    if center_x <= INTENSITY_MARGIN || center_y <= INTENSITY_MARGIN {
        log::warn!("{TOO_SMALL_MESSAGE} (size: {})", src.size());
        return Ok((dst, PatchStatus::TooSmall { center_x, center_y }));
    }

    log::debug!(
        "brightening {}x{} square at ({center_x}, {center_y}) with {policy:?}",
        2 * INTENSITY_MARGIN - 1,
        2 * INTENSITY_MARGIN - 1,
    );

    let stride = src.width() * C;
    let data = dst.as_slice_mut();

    for i in (center_y - INTENSITY_MARGIN + 1)..(center_y + INTENSITY_MARGIN) {
        let row = &mut data[i * stride..(i + 1) * stride];
        let dy = center_y.abs_diff(i);

        for j in (center_x - INTENSITY_MARGIN + 1)..(center_x + INTENSITY_MARGIN) {
            let factor = gain(center_x.abs_diff(j), dy);
            for sample in row[j * C..(j + 1) * C].iter_mut() {
                *sample = scale_sample(*sample, factor, policy);
            }
        }
    }

    Ok((dst, PatchStatus::Applied))
}
