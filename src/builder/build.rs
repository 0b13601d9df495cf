//! The load, layout, composite, and save sequence

use crate::builder::request::CollageRequest;
use crate::compose::canvas::render;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{SourceImage, load_sources, save_collage};
use crate::layout::grid::{GridShape, grid_shape};
use crate::layout::plan::LayoutPlan;
use crate::layout::resize::{Tile, resize_tile};
use image::RgbImage;
use std::path::PathBuf;

/// What a successful build produced
#[derive(Debug, Clone)]
pub struct CollageSummary {
    /// Grid shape the images were arranged in
    pub shape: GridShape,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Number of tiles placed
    pub tile_count: usize,
    /// Path the collage was written to
    pub output_path: PathBuf,
}

/// Lay out and composite already loaded sources into a canvas
///
/// This is the pure middle of the build: grid shape selection, per-image
/// resize, canvas planning, and the paste walk. Nothing is written; the
/// caller decides what to do with the canvas. The CLI drives this
/// directly so it can report progress around the load stage it owns
/// instead of going through [`build()`].
///
/// # Errors
///
/// Returns `EmptyInput` when `sources` is empty and `InvalidParameter`
/// when `target_width` is zero.
pub fn assemble(
    sources: &[SourceImage],
    margin: u32,
    target_width: u32,
    strict_width: bool,
) -> Result<(LayoutPlan, RgbImage)> {
    if target_width == 0 {
        return Err(invalid_parameter(
            "target_width",
            &target_width,
            &"tile width must be positive",
        ));
    }

    let shape = grid_shape(sources.len())?;

    let tiles: Vec<Tile> = sources
        .iter()
        .map(|source| resize_tile(source, target_width))
        .collect();
    let tile_dims: Vec<(u32, u32)> = tiles.iter().map(Tile::dimensions).collect();

    let plan = LayoutPlan::new(shape, &tile_dims, margin, target_width, strict_width);
    let canvas = render(&plan, &tiles);

    Ok((plan, canvas))
}

/// Build a collage from source paths and write it to disk
///
/// One blocking call: validate, decode every source in order, lay out,
/// composite, and save. Decoding happens strictly before the canvas is
/// allocated, so a bad source never leaves a partial output file behind.
///
/// # Errors
///
/// Returns an error if:
/// - The request fails validation (`EmptyInput`, `InvalidParameter`)
/// - Any source cannot be decoded (`ImageLoad`, naming the path)
/// - The output cannot be written (`FileSystem`, `ImageExport`)
pub fn build(request: &CollageRequest) -> Result<CollageSummary> {
    request.validate()?;

    let sources = load_sources(&request.image_paths)?;
    let (plan, canvas) = assemble(
        &sources,
        request.margin,
        request.target_width,
        request.strict_width,
    )?;

    save_collage(&canvas, &request.output_path)?;

    Ok(CollageSummary {
        shape: plan.shape(),
        canvas_width: plan.canvas_width(),
        canvas_height: plan.canvas_height(),
        tile_count: sources.len(),
        output_path: request.output_path.clone(),
    })
}
