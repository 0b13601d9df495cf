//! Tests for grid shape selection across image counts

#[cfg(test)]
mod tests {
    use gridcollage::CollageError;
    use gridcollage::layout::grid::{GridShape, grid_shape};

    // Tests zero images are rejected before any layout happens
    // Verified by returning a 0x0 shape instead of an error
    #[test]
    fn test_zero_images_is_empty_input() {
        match grid_shape(0) {
            Err(CollageError::EmptyInput) => {}
            other => unreachable!("Expected EmptyInput, got {other:?}"),
        }
    }

    // Tests one and two images sit side by side, never stacked
    // Verified by applying the square-root rule to small counts
    #[test]
    fn test_small_counts_stay_in_a_single_row() {
        assert_eq!(grid_shape(1).ok(), Some(GridShape { rows: 1, cols: 1 }));
        assert_eq!(grid_shape(2).ok(), Some(GridShape { rows: 1, cols: 2 }));
    }

    // Tests the first count that leaves a partial trailing row
    // Verified by swapping the rows and cols derivation order
    #[test]
    fn test_three_images_use_two_by_two() {
        assert_eq!(grid_shape(3).ok(), Some(GridShape { rows: 2, cols: 2 }));
    }

    // Tests perfect squares fill their grid exactly
    // Verified by off-by-one in the ceiling of the square root
    #[test]
    fn test_perfect_squares_fill_the_grid() {
        assert_eq!(grid_shape(4).ok(), Some(GridShape { rows: 2, cols: 2 }));
        assert_eq!(grid_shape(9).ok(), Some(GridShape { rows: 3, cols: 3 }));
        assert_eq!(grid_shape(16).ok(), Some(GridShape { rows: 4, cols: 4 }));
    }

    // Tests columns are chosen first so the remainder lands in the last row
    // Verified by computing rows before cols
    #[test]
    fn test_remainder_lands_in_last_row() {
        assert_eq!(grid_shape(5).ok(), Some(GridShape { rows: 2, cols: 3 }));
        assert_eq!(grid_shape(7).ok(), Some(GridShape { rows: 3, cols: 3 }));
        assert_eq!(grid_shape(10).ok(), Some(GridShape { rows: 3, cols: 4 }));
        assert_eq!(grid_shape(12).ok(), Some(GridShape { rows: 3, cols: 4 }));
    }

    // Tests the shape invariants over a range of counts: capacity covers
    // every image and no fully empty trailing row exists
    // Verified by loosening either bound
    #[test]
    fn test_capacity_invariants_hold() {
        for count in 1..=100 {
            let shape = match grid_shape(count) {
                Ok(shape) => shape,
                Err(error) => unreachable!("Shape failed for {count}: {error}"),
            };

            assert!(shape.rows >= 1);
            assert!(shape.cols >= 1);
            assert!(
                shape.capacity() >= count,
                "{count} images do not fit {shape:?}"
            );
            assert!(
                (shape.rows - 1) * shape.cols < count,
                "empty trailing row for {count} images in {shape:?}"
            );

            if count <= 2 {
                assert_eq!(shape.rows, 1);
            }
        }
    }
}
