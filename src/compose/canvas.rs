//! White canvas allocation and the tile paste walk

use crate::io::configuration::BACKGROUND_COLOR;
use crate::layout::plan::LayoutPlan;
use crate::layout::resize::Tile;
use image::{Rgb, RgbImage, imageops};

/// Composite resized tiles onto a fresh canvas
///
/// Allocates a canvas of the plan's dimensions filled with the background
/// color, then pastes each tile at its planned position. Tiles keep their
/// actual, possibly cap-adjusted, sizes; they are never stretched to fill
/// a uniform cell, so a narrow tile leaves background visible before the
/// next column.
pub fn render(plan: &LayoutPlan, tiles: &[Tile]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        plan.canvas_width(),
        plan.canvas_height(),
        Rgb(BACKGROUND_COLOR),
    );

    for (tile, &(x, y)) in tiles.iter().zip(plan.positions()) {
        imageops::replace(&mut canvas, tile.image(), i64::from(x), i64::from(y));
    }

    canvas
}
