use std::path::Path;

use imxform_image::{Image, ImageSize};

use crate::{error::IoError, jpeg};

/// Reads an image from the given file path as 8-bit RGB.
///
/// The method tries to read from any image format supported by the image crate; grayscale
/// and alpha images are converted to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image containing the image data.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    // SAFETY: the mapping is read-only and dropped before this function returns.
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap[..]))
        .with_guessed_format()?
        .decode()?;

    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    log::debug!("decoded {} from {}", size, file_path.display());

    Ok(Image::new(size, rgb.into_raw())?)
}

/// Writes an 8-bit RGB image, choosing the encoder from the file extension.
///
/// `jpg`/`jpeg` files go through the JPEG encoder with the given `quality`; any other
/// extension supported by the image crate (e.g. `png`) is encoded losslessly by it.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to write.
/// * `quality` - JPEG quality, ignored for other formats.
pub fn write_image_any_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
    quality: u8,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let is_jpeg = file_path.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
    });
    if is_jpeg {
        return jpeg::write_image_jpeg_rgb8(file_path, image, quality);
    }

    if file_path.extension().is_none() {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let size = image.size();
    let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height)) else {
        return Err(IoError::InvalidImageDimensions(size.width, size.height));
    };

    let buffer = image::RgbImage::from_raw(width, height, image.as_slice().to_vec())
        .ok_or(IoError::InvalidImageDimensions(size.width, size.height))?;
    buffer.save(file_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use crate::functional::{read_image_any_rgb8, write_image_any_rgb8};
    use imxform_image::{Image, ImageSize};

    fn ramp() -> Result<Image<u8, 3>, IoError> {
        let size = ImageSize {
            width: 5,
            height: 4,
        };
        Ok(Image::new(size, (0..5 * 4 * 3).map(|v| v as u8).collect())?)
    }

    #[test]
    fn png_roundtrip_is_lossless() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("ramp.png");

        let image = ramp()?;
        write_image_any_rgb8(&file_path, &image, 95)?;

        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_any_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("ramp.jpg");

        write_image_any_rgb8(&file_path, &ramp()?, 95)?;

        let image = read_image_any_rgb8(&file_path)?;
        assert_eq!(image.size().width, 5);
        assert_eq!(image.size().height, 4);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let res = read_image_any_rgb8("does/not/exist.jpg");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_any_corrupt_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.jpg");
        std::fs::write(&file_path, b"definitely not an image")?;

        assert!(read_image_any_rgb8(&file_path).is_err());
        Ok(())
    }
}
