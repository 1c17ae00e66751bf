//! Geometric image transformations using affine warps.
//!
//! - Rotation and translation matrix generation
//! - Affine transform inversion
//! - Affine resampling of whole images
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use imxform_image::{Image, ImageSize};
//! use imxform_imgproc::interpolation::InterpolationMode;
//! use imxform_imgproc::warp::{get_rotation_matrix2d, warp_affine};
//!
//! let size = ImageSize { width: 8, height: 8 };
//! let src = Image::<u8, 3>::from_size_val(size, 10).unwrap();
//! let mut dst = Image::<u8, 3>::from_size_val(size, 0).unwrap();
//!
//! let m = get_rotation_matrix2d((4.0, 4.0), 45.0, 1.0);
//! warp_affine(&src, &mut dst, &m, InterpolationMode::Bilinear).unwrap();
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, get_translation_matrix2d, invert_affine_transform, warp_affine,
};
