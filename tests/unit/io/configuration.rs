//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use wangtile::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_VIEWPORT_HEIGHT,
        DEFAULT_VIEWPORT_WIDTH, NORTH_PROBE_COLOR, WEST_PROBE_COLOR,
    };

    // Tests the default viewport holds a whole number of default tiles
    // Verified by changing the viewport to a non-multiple of the tile size
    #[test]
    fn test_default_viewport_is_tile_aligned() {
        assert_eq!(DEFAULT_VIEWPORT_WIDTH % DEFAULT_TILE_WIDTH, 0);
        assert_eq!(DEFAULT_VIEWPORT_HEIGHT % DEFAULT_TILE_HEIGHT, 0);
        assert_eq!(DEFAULT_VIEWPORT_WIDTH / DEFAULT_TILE_WIDTH, 60);
        assert_eq!(DEFAULT_VIEWPORT_HEIGHT / DEFAULT_TILE_HEIGHT, 30);
    }

    #[test]
    fn test_colors_are_distinct() {
        assert_ne!(WEST_PROBE_COLOR, NORTH_PROBE_COLOR);
        assert_ne!(BACKGROUND_COLOR, WEST_PROBE_COLOR);
        assert_eq!(BACKGROUND_COLOR, [50, 50, 50, 255]);
    }
}
