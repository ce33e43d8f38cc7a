//! Tests for layout rendering, probe outlines and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;
    use wangtile::TilingError;
    use wangtile::algorithm::filler::{NeighborProbe, WangFiller};
    use wangtile::algorithm::random::ScriptedChooser;
    use wangtile::analysis::catalog::Catalog;
    use wangtile::io::configuration::{BACKGROUND_COLOR, NORTH_PROBE_COLOR, WEST_PROBE_COLOR};
    use wangtile::io::image::{draw_probe, export_png, render_layout};
    use wangtile::io::tileset::{TilePalette, catalog_from_masks};
    use wangtile::spatial::edges::EdgeMask;
    use wangtile::spatial::grid::Grid;
    use wangtile::spatial::tiles::TileId;

    fn uniform_catalog(size: u32) -> Catalog {
        catalog_from_masks(&[EdgeMask::default()], size, size, TilePalette::default()).unwrap()
    }

    #[test]
    fn test_render_unsettled_grid() {
        let catalog = uniform_catalog(8);
        let mut grid = Grid::new(2, 2).unwrap();
        grid.place(0, TileId(0)).unwrap();

        assert!(matches!(
            render_layout(&grid, &catalog, (16, 16), BACKGROUND_COLOR),
            Err(TilingError::IncompleteLayout)
        ));
    }

    // Tests tiles land at column/row multiples of the tile size
    // Verified by drawing every tile at the origin
    #[test]
    fn test_render_places_tiles() {
        let catalog = uniform_catalog(8);
        let mut grid = Grid::new(2, 1).unwrap();
        WangFiller::new(ScriptedChooser::first())
            .fill_all(&mut grid, &catalog)
            .unwrap();

        let canvas = render_layout(&grid, &catalog, (20, 10), BACKGROUND_COLOR).unwrap();
        let other = TilePalette::default().other;
        assert_eq!(canvas.dimensions(), (20, 10));
        assert_eq!(*canvas.get_pixel(0, 0), other);
        assert_eq!(*canvas.get_pixel(15, 7), other);
        // Uncovered strip keeps the background
        assert_eq!(*canvas.get_pixel(17, 3), Rgba(BACKGROUND_COLOR));
        assert_eq!(*canvas.get_pixel(3, 9), Rgba(BACKGROUND_COLOR));
    }

    #[test]
    fn test_draw_probe_outlines_neighbors() {
        let catalog = uniform_catalog(16);
        let mut grid = Grid::new(2, 2).unwrap();
        let mut filler = WangFiller::new(ScriptedChooser::first());
        filler.fill_all(&mut grid, &catalog).unwrap();
        let probe: NeighborProbe = filler.last_probe().copied().unwrap();

        let mut canvas = render_layout(&grid, &catalog, (32, 32), BACKGROUND_COLOR).unwrap();
        draw_probe(&mut canvas, &probe, 16, 16);

        let other = TilePalette::default().other;
        // West neighbor is cell 2 at (0, 16), north neighbor is cell 1 at (16, 0)
        assert_eq!(*canvas.get_pixel(0, 16), Rgba(WEST_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(15, 31), Rgba(WEST_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(4, 24), Rgba(WEST_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(16, 0), Rgba(NORTH_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(31, 15), Rgba(NORTH_PROBE_COLOR));
        // Only the border is drawn
        assert_eq!(*canvas.get_pixel(8, 24), other);
        assert_eq!(*canvas.get_pixel(24, 8), other);
        assert_eq!(*canvas.get_pixel(3, 3), other);
        assert_eq!(*canvas.get_pixel(24, 24), other);
    }

    // Tests the outline never exceeds half a small tile
    // Verified by drawing the fixed five pixel border on 9 pixel tiles
    #[test]
    fn test_draw_probe_small_tiles() {
        let catalog = uniform_catalog(9);
        let mut grid = Grid::new(2, 1).unwrap();
        let mut filler = WangFiller::new(ScriptedChooser::first());
        filler.fill_all(&mut grid, &catalog).unwrap();
        let probe = filler.last_probe().copied().unwrap();

        let mut canvas = render_layout(&grid, &catalog, (18, 9), BACKGROUND_COLOR).unwrap();
        draw_probe(&mut canvas, &probe, 9, 9);

        let other = TilePalette::default().other;
        assert_eq!(*canvas.get_pixel(3, 3), Rgba(WEST_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(5, 5), Rgba(WEST_PROBE_COLOR));
        assert_eq!(*canvas.get_pixel(4, 4), other);
        assert_eq!(*canvas.get_pixel(13, 4), other);
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("layout.png");
        let image = image::RgbaImage::from_pixel(4, 4, Rgba(BACKGROUND_COLOR));

        export_png(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_export_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("layout.unknown");
        let image = image::RgbaImage::new(2, 2);

        assert!(matches!(
            export_png(&image, &path),
            Err(TilingError::ImageExport { .. })
        ));
    }
}
