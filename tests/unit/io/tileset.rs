//! Tests for painted demo tiles

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tempfile::TempDir;
    use wangtile::TilingError;
    use wangtile::analysis::sampling::EdgeSamples;
    use wangtile::io::tileset::{
        TilePalette, catalog_from_masks, demo_masks, paint_tile, write_tileset,
    };
    use wangtile::spatial::edges::EdgeMask;

    #[test]
    fn test_demo_masks_cover_every_combination() {
        let masks = demo_masks();
        assert_eq!(masks.len(), usize::from(EdgeMask::COMBINATIONS));
        assert_eq!(masks[0], EdgeMask::new(true, true, true, true));
        assert_eq!(masks[15], EdgeMask::default());

        let unique: HashSet<EdgeMask> = masks.into_iter().collect();
        assert_eq!(unique.len(), usize::from(EdgeMask::COMBINATIONS));
    }

    // Tests painted bands land on exactly the flagged sample points
    // Verified by extending bands across the whole edge
    #[test]
    fn test_painted_tiles_classify_back() {
        let palette = TilePalette::default();
        for size in [8, 13, 32] {
            for edges in demo_masks() {
                let tile = paint_tile(edges, size, size + 3, palette).unwrap();
                let samples = EdgeSamples::from_image(&tile).unwrap();
                assert_eq!(samples.classify(palette.matching), edges);
            }
        }
    }

    #[test]
    fn test_paint_rejects_small_tiles() {
        let result = paint_tile(EdgeMask::default(), 16, 7, TilePalette::default());
        assert!(matches!(
            result,
            Err(TilingError::InvalidParameter {
                parameter: "tile_height",
                ..
            })
        ));
    }

    #[test]
    fn test_catalog_from_masks_keeps_order() {
        let masks = [
            EdgeMask::new(false, true, false, false),
            EdgeMask::new(true, false, false, true),
        ];
        let catalog = catalog_from_masks(&masks, 10, 12, TilePalette::default()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!((catalog.tile_width(), catalog.tile_height()), (10, 12));
        let edges: Vec<EdgeMask> = catalog.iter().map(|(_, variant)| variant.edges()).collect();
        assert_eq!(edges, masks);
        assert!(catalog_from_masks(&[], 10, 12, TilePalette::default()).is_err());
    }

    #[test]
    fn test_write_tileset() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("tiles");

        let written = write_tileset(&target, 8, 8, TilePalette::default()).unwrap();
        assert_eq!(written.len(), 16);
        assert_eq!(written[0], target.join("0.png"));
        assert!(written.iter().all(|path| path.exists()));
    }
}
