//! Canvas metrics and tile placement positions

use crate::layout::grid::GridShape;

/// Derived layout for one collage: row heights, canvas size, and the
/// top-left position of every tile
///
/// Built once per build call from the resized tile dimensions; never
/// persisted. Positions follow input order, left-to-right then
/// top-to-bottom.
#[derive(Debug, Clone)]
pub struct LayoutPlan {
    shape: GridShape,
    row_heights: Vec<u32>,
    positions: Vec<(u32, u32)>,
    canvas_width: u32,
    canvas_height: u32,
    margin: u32,
}

impl LayoutPlan {
    /// Compute the layout for resized tiles of the given dimensions
    ///
    /// `tile_dims` must be in input order; it is chunked into rows of
    /// `shape.cols` entries. The canvas width normally assumes the nominal
    /// `target_width` per column even when the height cap shrank a tile
    /// below it, leaving a gap before the next column. `strict_width`
    /// instead sizes the canvas from the widest actual row content.
    pub fn new(
        shape: GridShape,
        tile_dims: &[(u32, u32)],
        margin: u32,
        target_width: u32,
        strict_width: bool,
    ) -> Self {
        let cols = shape.cols.max(1);

        let mut row_heights = Vec::with_capacity(shape.rows);
        let mut positions = Vec::with_capacity(tile_dims.len());
        let mut cursor_y = margin;

        for row in tile_dims.chunks(cols) {
            let row_height = row.iter().map(|&(_, height)| height).max().unwrap_or(0);

            let mut cursor_x = margin;
            for &(width, _) in row {
                positions.push((cursor_x, cursor_y));
                cursor_x += width + margin;
            }

            row_heights.push(row_height);
            cursor_y += row_height + margin;
        }

        let rows = row_heights.len() as u32;
        let canvas_height = row_heights.iter().sum::<u32>() + margin * (rows + 1);

        let col_count = cols as u32;
        let canvas_width = if strict_width {
            tile_dims
                .chunks(cols)
                .map(|row| {
                    row.iter().map(|&(width, _)| width).sum::<u32>()
                        + margin * (row.len() as u32 + 1)
                })
                .max()
                .unwrap_or(margin * 2)
        } else {
            target_width * col_count + margin * (col_count + 1)
        };

        Self {
            shape,
            row_heights,
            positions,
            canvas_width,
            canvas_height,
            margin,
        }
    }

    /// The grid shape this plan was built for
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Tallest tile height per row, in row order
    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Top-left corner of every tile, in input order
    pub fn positions(&self) -> &[(u32, u32)] {
        &self.positions
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Gap between tiles and around the border, in pixels
    pub const fn margin(&self) -> u32 {
        self.margin
    }
}
