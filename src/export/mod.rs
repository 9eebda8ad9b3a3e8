//! Copies the selected area out of the source image.

use std::path::Path;

use image::DynamicImage;
use thiserror::Error;

use crate::crop::{contain_crop, is_valid_rectangle, Rectangle};
use crate::geometry::ContainerBounds;

pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("displayed size {width}x{height} cannot be mapped onto the image")]
    InvalidDisplaySize { width: f64, height: f64 },
    #[error("crop has no area inside the image")]
    InvalidCrop,
    #[error("failed to write cropped image: {0}")]
    Image(#[from] image::ImageError),
}

/// Region of the source image, in natural pixels, covered by a displayed crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Maps a crop made over the displayed image onto the natural image size.
pub fn source_region(
    crop: &Rectangle,
    displayed: ContainerBounds,
    natural_width: u32,
    natural_height: u32,
) -> ExportResult<SourceRegion> {
    if !(displayed.width > 0.0 && displayed.height > 0.0)
        || !displayed.width.is_finite()
        || !displayed.height.is_finite()
    {
        return Err(ExportError::InvalidDisplaySize {
            width: displayed.width,
            height: displayed.height,
        });
    }
    let contained = contain_crop(crop, displayed);
    if !is_valid_rectangle(Some(&contained)) || natural_width == 0 || natural_height == 0 {
        return Err(ExportError::InvalidCrop);
    }

    let scale_x = f64::from(natural_width) / displayed.width;
    let scale_y = f64::from(natural_height) / displayed.height;
    let x = scaled(contained.x, scale_x, natural_width - 1);
    let y = scaled(contained.y, scale_y, natural_height - 1);
    let width = scaled(contained.width, scale_x, natural_width - x).max(1);
    let height = scaled(contained.height, scale_y, natural_height - y).max(1);

    Ok(SourceRegion {
        x,
        y,
        width,
        height,
    })
}

fn scaled(value: f64, scale: f64, max: u32) -> u32 {
    let scaled = (value * scale).round().clamp(0.0, f64::from(max));
    scaled as u32
}

/// Returns a copy of the part of `image` selected by `crop`.
pub fn crop_image(
    image: &DynamicImage,
    crop: &Rectangle,
    displayed: ContainerBounds,
) -> ExportResult<DynamicImage> {
    let region = source_region(crop, displayed, image.width(), image.height())?;
    tracing::debug!(?region, "cropping source image");
    Ok(image.crop_imm(region.x, region.y, region.width, region.height))
}

/// Crops `image` and writes the result, format chosen by the path's extension.
pub fn save_cropped_image(
    image: &DynamicImage,
    crop: &Rectangle,
    displayed: ContainerBounds,
    path: &Path,
) -> ExportResult<()> {
    let cropped = crop_image(image, crop, displayed)?;
    cropped.save(path)?;
    tracing::info!(?path, "saved cropped image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    #[test]
    fn source_region_scales_displayed_crop_to_natural_size() {
        let region = source_region(
            &Rectangle::pixels(10.0, 20.0, 50.0, 25.0),
            ContainerBounds::new(100.0, 100.0),
            400,
            200,
        )
        .expect("region should map");
        assert_eq!(
            region,
            SourceRegion {
                x: 40,
                y: 40,
                width: 200,
                height: 50,
            }
        );
    }

    #[test]
    fn source_region_accepts_percent_crops() {
        let region = source_region(
            &Rectangle::percent(50.0, 50.0, 50.0, 50.0),
            ContainerBounds::new(300.0, 150.0),
            600,
            300,
        )
        .expect("region should map");
        assert_eq!(
            region,
            SourceRegion {
                x: 300,
                y: 150,
                width: 300,
                height: 150,
            }
        );
    }

    #[test]
    fn source_region_rejects_empty_crop_and_zero_display() {
        let empty = Rectangle::pixels(10.0, 10.0, 0.0, 5.0);
        assert!(matches!(
            source_region(&empty, ContainerBounds::new(100.0, 100.0), 100, 100),
            Err(ExportError::InvalidCrop)
        ));
        let crop = Rectangle::pixels(0.0, 0.0, 5.0, 5.0);
        assert!(matches!(
            source_region(&crop, ContainerBounds::new(0.0, 100.0), 100, 100),
            Err(ExportError::InvalidDisplaySize { .. })
        ));
    }

    #[test]
    fn crop_image_copies_selected_pixels() {
        let mut source = RgbaImage::new(4, 4);
        source.put_pixel(2, 1, Rgba([255, 0, 0, 255]));
        let image = DynamicImage::ImageRgba8(source);

        let cropped = crop_image(
            &image,
            &Rectangle::pixels(2.0, 1.0, 2.0, 2.0),
            ContainerBounds::new(4.0, 4.0),
        )
        .expect("crop should succeed");
        assert_eq!(cropped.dimensions(), (2, 2));
        assert_eq!(cropped.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn save_cropped_image_writes_png() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let path = std::env::temp_dir().join(format!("cropframe-export-{}.png", std::process::id()));

        save_cropped_image(
            &image,
            &Rectangle::percent(0.0, 0.0, 50.0, 25.0),
            ContainerBounds::new(8.0, 8.0),
            &path,
        )
        .expect("cropped image should be written");
        let written = image::open(&path).expect("written image should decode");
        let _ = std::fs::remove_file(&path);
        assert_eq!(written.dimensions(), (4, 2));
    }
}
