use crate::types::*;
use anyhow::Result;
use image::{GenericImageView, ImageFormat};
use std::path::Path;

/// Resizes the image at `input` to exactly `size` and writes it to `output` as PNG.
///
/// The aspect ratio is not preserved. Returns the dimensions of the source image.
pub fn resize_image(
    input: &Path,
    output: &Path,
    size: TargetSize,
    filter: ResizeFilter,
) -> Result<(u32, u32)> {
    if size.width == 0 || size.height == 0 {
        return Err(anyhow::anyhow!("Invalid target size: {}", size));
    }
    let data = crate::utils::files::read_file(input)?;
    let img = image::load_from_memory(&data)
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", input.display(), e))?;
    let source = img.dimensions();
    let resized = img.resize_exact(size.width, size.height, filter.into());
    crate::utils::files::make_sure_dir_exists(output)?;
    resized.save_with_format(output, ImageFormat::Png)?;
    log::debug!(
        "Resized {} from {}x{} to {}",
        input.display(),
        source.0,
        source.1,
        size
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_resize_to_exact_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out").join("screenshot_1.png");
        ImageBuffer::from_pixel(120, 260, Rgba([10u8, 20, 30, 255]))
            .save_with_format(&input, ImageFormat::Png)
            .unwrap();

        let size = TargetSize {
            width: 43,
            height: 93,
        };
        let source = resize_image(&input, &output, size, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(source, (120, 260));

        let resized = image::open(&output).unwrap();
        assert_eq!(resized.dimensions(), (43, 93));
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wide.png");
        let output = dir.path().join("tall.png");
        ImageBuffer::from_pixel(64, 16, Rgba([200u8, 10, 10, 255]))
            .save_with_format(&input, ImageFormat::Png)
            .unwrap();

        let size = TargetSize {
            width: 10,
            height: 50,
        };
        resize_image(&input, &output, size, ResizeFilter::Triangle).unwrap();
        assert_eq!(image::open(&output).unwrap().dimensions(), (10, 50));
    }

    #[test]
    fn test_resize_rejects_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not an image").unwrap();
        let output = dir.path().join("out.png");
        let size = TargetSize {
            width: 10,
            height: 10,
        };
        assert!(resize_image(&input, &output, size, ResizeFilter::Nearest).is_err());
        assert!(!output.exists());
    }
}
