//! Tests for canvas allocation and the tile paste walk

#[cfg(test)]
mod tests {
    use gridcollage::compose::canvas::render;
    use gridcollage::layout::grid::GridShape;
    use gridcollage::layout::plan::LayoutPlan;
    use gridcollage::layout::resize::Tile;
    use image::{Rgb, RgbImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn flat_tile(width: u32, height: u32, color: Rgb<u8>) -> Tile {
        Tile::from_image(RgbImage::from_pixel(width, height, color))
    }

    // Tests canvas dimensions and the white fill where no tile lands
    // Verified by filling with black instead
    #[test]
    fn test_background_is_white_where_no_tile() {
        let tiles = [flat_tile(4, 4, RED), flat_tile(4, 4, BLUE)];
        let dims = [(4, 4), (4, 4)];
        let shape = GridShape { rows: 1, cols: 2 };
        let plan = LayoutPlan::new(shape, &dims, 2, 4, false);

        let canvas = render(&plan, &tiles);
        assert_eq!(canvas.dimensions(), (14, 8));

        // Border and inter-tile gap pixels are untouched background
        assert_eq!(canvas.get_pixel(0, 0), &WHITE);
        assert_eq!(canvas.get_pixel(13, 7), &WHITE);
        assert_eq!(canvas.get_pixel(6, 3), &WHITE);
        assert_eq!(canvas.get_pixel(3, 0), &WHITE);
    }

    // Tests tiles land at their planned positions with original pixels
    // Verified by transposing the paste coordinates
    #[test]
    fn test_tiles_pasted_at_planned_positions() {
        let tiles = [flat_tile(4, 4, RED), flat_tile(4, 4, BLUE)];
        let dims = [(4, 4), (4, 4)];
        let shape = GridShape { rows: 1, cols: 2 };
        let plan = LayoutPlan::new(shape, &dims, 2, 4, false);

        let canvas = render(&plan, &tiles);

        assert_eq!(plan.positions(), &[(2, 2), (8, 2)]);
        assert_eq!(canvas.get_pixel(2, 2), &RED);
        assert_eq!(canvas.get_pixel(5, 5), &RED);
        assert_eq!(canvas.get_pixel(8, 2), &BLUE);
        assert_eq!(canvas.get_pixel(11, 5), &BLUE);
    }

    // Tests a narrow tile keeps its size and leaves background before the
    // next column instead of stretching to fill the cell
    // Verified by stretching tiles to the nominal width
    #[test]
    fn test_narrow_tile_leaves_gap_before_next_column() {
        let tiles = [flat_tile(2, 2, RED), flat_tile(4, 4, BLUE)];
        let dims = [(2, 2), (4, 4)];
        let shape = GridShape { rows: 1, cols: 2 };
        let plan = LayoutPlan::new(shape, &dims, 1, 4, false);

        let canvas = render(&plan, &tiles);
        assert_eq!(canvas.dimensions(), (11, 6));

        assert_eq!(plan.positions(), &[(1, 1), (4, 1)]);
        assert_eq!(canvas.get_pixel(1, 1), &RED);
        assert_eq!(canvas.get_pixel(2, 2), &RED);
        // The gap column between the narrow tile and the next
        assert_eq!(canvas.get_pixel(3, 1), &WHITE);
        assert_eq!(canvas.get_pixel(4, 1), &BLUE);
        // Below the short tile the background shows through
        assert_eq!(canvas.get_pixel(1, 4), &WHITE);
    }
}
