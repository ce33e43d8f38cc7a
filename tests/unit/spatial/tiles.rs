//! Tests for tile variants and ids

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use std::path::{Path, PathBuf};
    use wangtile::spatial::edges::EdgeMask;
    use wangtile::spatial::tiles::{TileId, TileVariant};

    #[test]
    fn test_variant_accessors() {
        let edges = EdgeMask::new(true, false, true, false);
        let variant = TileVariant::new(PathBuf::from("tiles/3.png"), RgbaImage::new(12, 10), edges);

        assert_eq!(variant.source(), Path::new("tiles/3.png"));
        assert_eq!(variant.edges(), edges);
        assert_eq!(variant.dimensions(), (12, 10));
        assert_eq!(variant.surface().width(), 12);
    }

    #[test]
    fn test_tile_id() {
        let id = TileId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "#7");
        assert!(TileId(2) < TileId(3));
    }
}
