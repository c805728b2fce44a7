//! Tests for grid derivation, cell addressing and tile geometry validation

#[cfg(test)]
mod tests {
    use grhtile::TilerError;
    use grhtile::spatial::grid::{Cell, Grid, ImageMetrics, TileSpec, cell_at};

    fn grid(width: u32, height: u32, spec: TileSpec) -> Grid {
        let image = ImageMetrics::new(width, height).unwrap();
        Grid::compute(image, spec).unwrap()
    }

    // Tests a 64x32 sheet with 32px tiles yields two cells on one row
    #[test]
    fn test_compute_two_by_one_grid() {
        let grid = grid(64, 32, TileSpec::new(32, 32));

        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.rows(), 1);
        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            vec![Cell::new(0, 0), Cell::new(32, 0)]
        );
    }

    // Tests ceiling division covers the whole image for a range of sizes
    // Verified by replacing div_ceil with plain division
    #[test]
    fn test_grid_covers_image() {
        for (width, height) in [(1, 1), (31, 33), (64, 64), (65, 7), (100, 250)] {
            for (tile_width, tile_height) in [(4, 4), (5, 9), (32, 16), (64, 64)] {
                let grid = grid(width, height, TileSpec::new(tile_width, tile_height));

                assert_eq!(grid.cols(), width.div_ceil(tile_width));
                assert_eq!(grid.rows(), height.div_ceil(tile_height));
                assert!(grid.cols() * tile_width >= width);
                assert!(grid.rows() * tile_height >= height);
                assert_eq!(grid.cell_count(), u64::from(grid.cols() * grid.rows()));
            }
        }
    }

    // Tests a trailing partial tile is kept as a full cell
    #[test]
    fn test_partial_tile_is_full_cell() {
        let grid = grid(65, 32, TileSpec::new(32, 32));

        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell_at(2, 0), Some(Cell::new(64, 0)));
    }

    // Tests offsets shift pixel coordinates, including negative offsets
    #[test]
    fn test_cell_at_applies_offset() {
        let spec = TileSpec::new(16, 8).with_offset(-4, 3);

        assert_eq!(cell_at(0, 0, &spec), Cell::new(-4, 3));
        assert_eq!(cell_at(2, 5, &spec), Cell::new(28, 43));
    }

    // Tests cell lookup outside the grid returns nothing
    #[test]
    fn test_cell_at_out_of_range() {
        let grid = grid(64, 32, TileSpec::new(32, 32));

        assert_eq!(grid.cell_at(1, 0), Some(Cell::new(32, 0)));
        assert_eq!(grid.cell_at(2, 0), None);
        assert_eq!(grid.cell_at(0, 1), None);
    }

    // Tests cells iterate row by row
    #[test]
    fn test_cells_raster_order() {
        let grid = grid(8, 8, TileSpec::new(4, 4).with_offset(1, 2));

        assert_eq!(
            grid.cells().collect::<Vec<_>>(),
            vec![
                Cell::new(1, 2),
                Cell::new(5, 2),
                Cell::new(1, 6),
                Cell::new(5, 6)
            ]
        );
    }

    // Tests locate inverts cell_at and rejects misaligned or foreign cells
    // Verified by dropping the remainder check in axis_index
    #[test]
    fn test_locate_and_contains() {
        let grid = grid(64, 64, TileSpec::new(16, 32).with_offset(-3, 5));

        for col in 0..grid.cols() {
            for row in 0..grid.rows() {
                let cell = cell_at(col, row, grid.spec());
                assert_eq!(grid.locate(cell), Some((col, row)));
            }
        }

        assert!(!grid.contains(Cell::new(-2, 5)), "misaligned x");
        assert!(!grid.contains(Cell::new(-3, 6)), "misaligned y");
        assert!(!grid.contains(Cell::new(-19, 5)), "left of grid");
        assert!(!grid.contains(Cell::new(61, 5)), "right of grid");
        assert!(!grid.contains(Cell::new(-3, 69)), "below grid");
    }

    // Tests tile sizes below the floor are rejected before any division
    #[test]
    fn test_compute_rejects_small_tiles() {
        let image = ImageMetrics::new(64, 64).unwrap();

        for spec in [TileSpec::new(0, 32), TileSpec::new(3, 32)] {
            match Grid::compute(image, spec) {
                Err(TilerError::InvalidGeometry {
                    parameter, minimum, ..
                }) => {
                    assert_eq!(parameter, "tile_width");
                    assert_eq!(minimum, 4);
                }
                other => unreachable!("Expected InvalidGeometry, got {other:?}"),
            }
        }

        assert!(matches!(
            Grid::compute(image, TileSpec::new(32, 2)),
            Err(TilerError::InvalidGeometry {
                parameter: "tile_height",
                ..
            })
        ));
        assert!(Grid::compute(image, TileSpec::new(4, 4)).is_ok());
    }

    // Tests zero-sized images cannot be represented
    #[test]
    fn test_image_metrics_rejects_zero() {
        assert!(matches!(
            ImageMetrics::new(0, 10),
            Err(TilerError::InvalidImage { .. })
        ));
        assert!(matches!(
            ImageMetrics::new(10, 0),
            Err(TilerError::InvalidImage { .. })
        ));

        let metrics = ImageMetrics::new(10, 20).unwrap();
        assert_eq!((metrics.width(), metrics.height()), (10, 20));
    }

    // Tests partial control documents fill in defaults
    #[test]
    fn test_tile_spec_partial_document() {
        let spec: TileSpec = serde_json::from_str(r#"{"tile_width": 16, "offset_y": -2}"#).unwrap();

        assert_eq!(spec, TileSpec::new(16, 32).with_offset(0, -2));
        assert!(spec.same_tile_size(&TileSpec::new(16, 32)));
        assert!(!spec.same_tile_size(&TileSpec::default()));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(-4, 12).to_string(), "(-4, 12)");
        assert_eq!(Cell::new(1, 2).translated(3, -2), Cell::new(4, 0));
    }
}
