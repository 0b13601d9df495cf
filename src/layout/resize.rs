//! Aspect-preserving tile resize with a fixed height cap

use crate::io::configuration::{MAX_TILE_HEIGHT, MIN_TILE_DIMENSION};
use crate::io::image::SourceImage;
use image::RgbImage;
use image::imageops::{self, FilterType};

/// A source image resized for placement on the collage canvas
#[derive(Debug, Clone)]
pub struct Tile {
    image: RgbImage,
}

impl Tile {
    /// Wrap an already resized pixel buffer
    pub const fn from_image(image: RgbImage) -> Self {
        Self { image }
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

    /// The resized pixel data
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// Compute the resized dimensions for one tile
///
/// The image is scaled to `target_width` preserving its aspect ratio. When
/// that would make the tile taller than [`MAX_TILE_HEIGHT`], the cap wins:
/// the height is pinned to the cap and the width shrinks to keep the ratio.
/// Both dimensions are floored at one pixel so extreme ratios cannot
/// produce an empty tile.
pub fn scaled_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    let aspect_ratio = f64::from(width) / f64::from(height);
    let new_height = (f64::from(target_width) / aspect_ratio).round() as u32;

    if new_height > MAX_TILE_HEIGHT {
        let capped_width = (f64::from(MAX_TILE_HEIGHT) * aspect_ratio).round() as u32;
        (capped_width.max(MIN_TILE_DIMENSION), MAX_TILE_HEIGHT)
    } else {
        (target_width, new_height.max(MIN_TILE_DIMENSION))
    }
}

/// Resize a source image into a tile
///
/// Resampling uses the Lanczos3 filter; the smoothing matters for the
/// downscales this tool mostly performs.
pub fn resize_tile(source: &SourceImage, target_width: u32) -> Tile {
    let (new_width, new_height) =
        scaled_dimensions(source.width(), source.height(), target_width);
    let resized = imageops::resize(
        &source.to_rgb(),
        new_width,
        new_height,
        FilterType::Lanczos3,
    );

    Tile::from_image(resized)
}
