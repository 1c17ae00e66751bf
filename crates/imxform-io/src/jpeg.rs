use crate::error::IoError;
use imxform_image::{Image, ImageSize};
use jpeg_encoder::{ColorType, Encoder};
use std::{fs, path::Path};

/// Writes the given JPEG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `image` - The image containing the rgb8 data.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn write_image_jpeg_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
    quality: u8,
) -> Result<(), IoError> {
    let image_size = image.size();
    let (width, height) = match (
        u16::try_from(image_size.width),
        u16::try_from(image_size.height),
    ) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::InvalidImageDimensions(
                image_size.width,
                image_size.height,
            ))
        }
    };

    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(image.as_slice(), width, height, ColorType::Rgb)?;
    Ok(())
}

/// Read a JPEG image with three channels _(rgb8)_.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// A RGB image with three channels _(rgb8)_.
pub fn read_image_jpeg_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg")
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    let mut decoder = zune_jpeg::JpegDecoder::new(jpeg_data.as_slice());
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    Ok(Image::new(image_size, img_data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Result<Image<u8, 3>, IoError> {
        let size = ImageSize {
            width: 32,
            height: 24,
        };
        let data = (0..size.height)
            .flat_map(|y| {
                (0..size.width).map(move |x| if (x / 8 + y / 8) % 2 == 0 { 32 } else { 224 })
            })
            .flat_map(|v| [v, v, v])
            .collect();
        Ok(Image::new(size, data)?)
    }

    #[test]
    fn read_write_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let file_path = tmp_dir.path().join("board.jpg");
        let image = checkerboard()?;
        write_image_jpeg_rgb8(&file_path, &image, 100)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_jpeg_rgb8(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.num_channels(), 3);

        let max_err = image
            .as_slice()
            .iter()
            .zip(image_back.as_slice())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0);
        assert!(max_err < 48, "jpeg error too large: {max_err}");

        Ok(())
    }

    #[test]
    fn read_rejects_bad_paths() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let missing = tmp_dir.path().join("missing.jpg");
        assert!(matches!(
            read_image_jpeg_rgb8(&missing),
            Err(IoError::FileDoesNotExist(_))
        ));

        let png = tmp_dir.path().join("not_a.png");
        std::fs::write(&png, b"data")?;
        assert!(matches!(
            read_image_jpeg_rgb8(&png),
            Err(IoError::InvalidFileExtension(_))
        ));

        Ok(())
    }

    #[test]
    fn write_rejects_oversized() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = Image::<u8, 3>::from_size_val([70_000, 1].into(), 0)?;
        assert!(matches!(
            write_image_jpeg_rgb8(tmp_dir.path().join("wide.jpg"), &image, 90),
            Err(IoError::InvalidImageDimensions(70_000, 1))
        ));
        Ok(())
    }
}
