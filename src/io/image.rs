//! Source image decoding and collage export with format dispatch

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{CollageError, Result, WithPath};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// A decoded source image paired with the path it was loaded from
///
/// The path is retained so later failures and diagnostics can name the
/// offending file.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    /// Wrap an already decoded image with its origin path
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Path the image was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Copy of the pixel data as an RGB buffer
    ///
    /// Alpha channels are discarded; the collage canvas is opaque.
    pub fn to_rgb(&self) -> RgbImage {
        self.image.to_rgb8()
    }
}

/// Decode a single image from disk
///
/// # Errors
///
/// Returns `ImageLoad` naming the path if the file cannot be opened or
/// decoded as an image.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    let image = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(SourceImage::new(path, image))
}

/// Decode every path into a source image, preserving input order
///
/// Loading stops at the first failure so a bad path aborts the whole build
/// before anything is written.
///
/// # Errors
///
/// Returns `ImageLoad` naming the first path that cannot be decoded.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceImage>> {
    paths.iter().map(|path| load_source(path)).collect()
}

/// Encode the finished canvas to the output path
///
/// The format follows the path's extension. JPEG output is written at
/// quality 95; other formats use their codec defaults. The parent directory
/// is created recursively when missing.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not map to a supported image format
/// - The parent directory cannot be created
/// - The file cannot be created or the encode fails
pub fn save_collage(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(output_path).map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_operation("create directory", parent)?;
        }
    }

    if format == ImageFormat::Jpeg {
        let file =
            File::create(output_path).with_operation("create file", output_path)?;
        let writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
        canvas
            .write_with_encoder(encoder)
            .map_err(|e| CollageError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
    } else {
        canvas
            .save(output_path)
            .map_err(|e| CollageError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
    }

    Ok(())
}
