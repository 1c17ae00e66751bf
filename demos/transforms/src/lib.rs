//! Load one image, rotate, shift and brighten it, and write the five results next to it.

use std::path::{Path, PathBuf};

use imxform::image::{Image, ImageError, ImageSize};
use imxform::imgproc::intensity::{modify_intensity, OverflowPolicy};
use imxform::imgproc::transform::{rotate_pair, translate_pair, RotatedPair, ShiftedPair};
use imxform::io::{error::IoError, functional as F};

pub use imxform::imgproc::intensity::{PatchStatus, TOO_SMALL_MESSAGE};

/// Errors raised while running the demo.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Reading or writing an image failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// A transformation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// File names of the five results.
#[derive(Debug, Clone)]
pub struct OutputNames {
    /// Image rotated by `+angle`.
    pub left_rotation: String,
    /// Image rotated by `-angle`.
    pub right_rotation: String,
    /// Image shifted along x.
    pub x_shifted: String,
    /// Image shifted along y.
    pub y_shifted: String,
    /// Image with the brightened center.
    pub modified_intensity: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            left_rotation: "left_rotation_image.jpg".into(),
            right_rotation: "right_rotation_image.jpg".into(),
            x_shifted: "x_shifted_image.jpg".into(),
            y_shifted: "y_shifted_image.jpg".into(),
            modified_intensity: "Modified_intensity.jpg".into(),
        }
    }
}

/// Fixed parameters of the demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Name of the input image inside the input directory.
    pub input_file: String,
    /// Rotation angle in degrees.
    pub rotation_angle: f32,
    /// Shift as a fraction of the image width (x) and height (y).
    pub shift_ratio: f64,
    /// Quality used for the JPEG outputs.
    pub jpeg_quality: u8,
    /// How brightened samples above 255 are stored.
    pub overflow: OverflowPolicy,
    /// Output file names.
    pub outputs: OutputNames,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input_file: "image.jpg".into(),
            rotation_angle: 90.0,
            shift_ratio: 0.25,
            jpeg_quality: 95,
            overflow: OverflowPolicy::Saturate,
            outputs: OutputNames::default(),
        }
    }
}

/// The five transformed images.
#[derive(Debug, Clone)]
pub struct Outputs {
    /// Rotations by `+angle` and `-angle`.
    pub rotated: RotatedPair<u8, 3>,
    /// Shifts along x and along y.
    pub shifted: ShiftedPair<u8, 3>,
    /// Image with the brightened center.
    pub intensity: Image<u8, 3>,
    /// Whether the brightening was applied.
    pub intensity_status: PatchStatus,
}

/// Pixel shifts for an image: `floor(width * ratio)` and `floor(height * ratio)`.
pub fn shifts_for(size: ImageSize, ratio: f64) -> (i32, i32) {
    let x_shift = (size.width as f64 * ratio).floor() as i32;
    let y_shift = (size.height as f64 * ratio).floor() as i32;
    (x_shift, y_shift)
}

/// Message the driver prints for an intensity status, if any.
pub fn intensity_diagnostic(status: PatchStatus) -> Option<&'static str> {
    match status {
        PatchStatus::Applied => None,
        PatchStatus::TooSmall { .. } => Some(TOO_SMALL_MESSAGE),
    }
}

/// Decode the configured input image from `input_dir`.
pub fn load_input(config: &DemoConfig, input_dir: &Path) -> Result<Image<u8, 3>, DemoError> {
    let path = input_dir.join(&config.input_file);
    log::info!("reading {}", path.display());
    Ok(F::read_image_any_rgb8(path)?)
}

/// Apply the rotator, the translator and the intensity adjuster to `image`.
pub fn transform(image: &Image<u8, 3>, config: &DemoConfig) -> Result<Outputs, DemoError> {
    let (x_shift, y_shift) = shifts_for(image.size(), config.shift_ratio);

    let rotated = rotate_pair(image, config.rotation_angle)?;
    let shifted = translate_pair(image, x_shift, y_shift)?;
    let (intensity, intensity_status) = modify_intensity(image, config.overflow)?;

    Ok(Outputs {
        rotated,
        shifted,
        intensity,
        intensity_status,
    })
}

/// Write the five results into `output_dir` and return their paths in write order.
pub fn save_outputs(
    outputs: &Outputs,
    config: &DemoConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, DemoError> {
    let names = &config.outputs;
    let files = [
        (&names.left_rotation, &outputs.rotated.left),
        (&names.right_rotation, &outputs.rotated.right),
        (&names.x_shifted, &outputs.shifted.x_shifted),
        (&names.y_shifted, &outputs.shifted.y_shifted),
        (&names.modified_intensity, &outputs.intensity),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, image) in files {
        let path = output_dir.join(name);
        F::write_image_any_rgb8(&path, image, config.jpeg_quality)?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_are_a_quarter() {
        let size = ImageSize {
            width: 258,
            height: 195,
        };
        assert_eq!(shifts_for(size, 0.25), (64, 48));
    }

    #[test]
    fn default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.input_file, "image.jpg");
        assert_eq!(config.rotation_angle, 90.0);
        assert_eq!(config.overflow, OverflowPolicy::Saturate);
        assert_eq!(config.outputs.modified_intensity, "Modified_intensity.jpg");
    }
}
