//! Immutable build request and parameter validation

use crate::io::configuration::{DEFAULT_MARGIN, DEFAULT_TARGET_WIDTH};
use crate::io::error::{CollageError, Result, invalid_parameter};
use std::path::PathBuf;

/// Everything one build call needs, fixed up front
///
/// The builder holds no ambient state; callers construct a request and
/// pass it to [`crate::builder::build()`]. Fields are plain so callers can
/// adjust individual parameters after [`CollageRequest::new`].
#[derive(Debug, Clone)]
pub struct CollageRequest {
    /// Source images in placement order
    pub image_paths: Vec<PathBuf>,
    /// Where to write the collage; format follows the extension
    pub output_path: PathBuf,
    /// Gap between tiles and around the border, in pixels
    pub margin: u32,
    /// Nominal tile width, in pixels
    pub target_width: u32,
    /// Size the canvas from actual tile widths instead of the nominal width
    pub strict_width: bool,
}

impl CollageRequest {
    /// Create a request with default margin and tile width
    pub fn new(image_paths: Vec<PathBuf>, output_path: PathBuf) -> Self {
        Self {
            image_paths,
            output_path,
            margin: DEFAULT_MARGIN,
            target_width: DEFAULT_TARGET_WIDTH,
            strict_width: false,
        }
    }

    /// Check the request before any file is touched
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when no image paths were supplied, and
    /// `InvalidParameter` when the target width is zero. Any positive
    /// width is accepted here; range limits are the caller's concern.
    pub fn validate(&self) -> Result<()> {
        if self.image_paths.is_empty() {
            return Err(CollageError::EmptyInput);
        }

        if self.target_width == 0 {
            return Err(invalid_parameter(
                "target_width",
                &self.target_width,
                &"tile width must be positive",
            ));
        }

        Ok(())
    }
}
