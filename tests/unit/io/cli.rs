//! Tests for argument parsing and the generate/tileset operations

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wangtile::TilingError;
    use wangtile::algorithm::random::ScriptedChooser;
    use wangtile::interaction::session::Session;
    use wangtile::io::cli::{Cli, Command, generate, run, settle_layout};
    use wangtile::io::configuration::{DEFAULT_ATTEMPTS, DEFAULT_OUTPUT, DEFAULT_TILE_COUNT};
    use wangtile::io::progress::LayoutProgress;
    use wangtile::io::tileset::{TilePalette, catalog_from_masks};
    use wangtile::spatial::edges::EdgeMask;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["wangtile", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };
        assert_eq!(args.count, DEFAULT_TILE_COUNT);
        assert_eq!(args.attempts, DEFAULT_ATTEMPTS);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.seed, None);
        assert!(!args.overlay);
        assert_eq!(args.layout_path(0), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "wangtile", "generate", "-t", "tiles", "--tile-width", "16", "-c", "4", "-W", "64",
            "-H", "48", "-s", "9", "-l", "3", "-o", "out/layout.png", "--overlay", "-q",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };

        let config = args.tiling_config();
        assert_eq!(config.tile_directory, PathBuf::from("tiles"));
        assert_eq!(config.tile_width, 16);
        assert_eq!(config.tile_count, 4);
        assert_eq!((config.viewport_width, config.viewport_height), (64, 48));
        assert_eq!(args.seed, Some(9));
        assert!(args.overlay);
        assert!(args.quiet);
    }

    // Tests multi-layout runs number their files
    // Verified by writing every layout to the same path
    #[test]
    fn test_layout_paths_are_numbered() {
        let cli =
            Cli::try_parse_from(["wangtile", "generate", "-l", "2", "-o", "out/layout.png"])
                .unwrap();
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };
        assert_eq!(args.layout_path(0), PathBuf::from("out/layout_0.png"));
        assert_eq!(args.layout_path(1), PathBuf::from("out/layout_1.png"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["wangtile", "render"]).is_err());
        assert!(Cli::try_parse_from(["wangtile"]).is_err());
    }

    // Tests the full pipeline from demo tiles to numbered PNGs
    // Verified by skipping export when more than one layout is requested
    #[test]
    fn test_tileset_then_generate() {
        let dir = TempDir::new().unwrap();
        let tiles = dir.path().join("tiles");
        let output = dir.path().join("render").join("layout.png");

        let tileset = Cli::try_parse_from([
            "wangtile",
            "tileset",
            "-d",
            tiles.to_str().unwrap(),
            "--tile-width",
            "8",
            "--tile-height",
            "8",
        ])
        .unwrap();
        run(tileset).unwrap();
        assert!(tiles.join("15.png").exists());

        let cli = Cli::try_parse_from([
            "wangtile",
            "generate",
            "-t",
            tiles.to_str().unwrap(),
            "--tile-width",
            "8",
            "--tile-height",
            "8",
            "-W",
            "32",
            "-H",
            "24",
            "-s",
            "11",
            "-l",
            "2",
            "-q",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();

        for index in 0..2 {
            let path = dir.path().join("render").join(format!("layout_{index}.png"));
            let image = image::open(&path).unwrap();
            assert_eq!((image.width(), image.height()), (32, 24));
        }
    }

    #[test]
    fn test_generate_rejects_zero_attempts() {
        let cli = Cli::try_parse_from(["wangtile", "generate", "-a", "0"]).unwrap();
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };
        assert!(matches!(
            generate(&args),
            Err(TilingError::InvalidParameter {
                parameter: "attempts",
                ..
            })
        ));
    }

    #[test]
    fn test_generate_rejects_zero_layouts() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("layout.png");
        let cli = Cli::try_parse_from([
            "wangtile",
            "generate",
            "-l",
            "0",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };
        assert!(matches!(
            generate(&args),
            Err(TilingError::InvalidParameter {
                parameter: "layouts",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests a catalog that can never settle fails after the last attempt
    // Verified by retrying without bound
    #[test]
    fn test_settle_layout_gives_up() {
        let catalog = catalog_from_masks(
            &[EdgeMask::new(false, true, false, false)],
            8,
            8,
            TilePalette::default(),
        )
        .unwrap();
        let mut session =
            Session::with_catalog(catalog, (16, 8), ScriptedChooser::first()).unwrap();
        let mut progress = LayoutProgress::new(1, false);

        let err = settle_layout(&mut session, 3, &mut progress).unwrap_err();
        assert!(err.is_unsatisfiable());
        assert_eq!(progress.failed_passes(), 2);
        assert_eq!(session.layouts_generated(), 0);
    }

    // Tests a stuck pass is retried until one settles
    // Verified by returning the first pass's error
    #[test]
    fn test_settle_layout_retries() {
        let catalog = catalog_from_masks(
            &[
                EdgeMask::new(false, true, false, false),
                EdgeMask::new(false, false, false, false),
            ],
            8,
            8,
            TilePalette::default(),
        )
        .unwrap();
        // First pass picks tile 0 and gets stuck, second pass picks tile 1
        let chooser = ScriptedChooser::new(vec![0, 1, 0]);
        let mut session = Session::with_catalog(catalog, (16, 8), chooser).unwrap();
        let mut progress = LayoutProgress::new(1, false);

        settle_layout(&mut session, 2, &mut progress).unwrap();
        assert_eq!(progress.failed_passes(), 1);
        assert_eq!(session.layouts_generated(), 1);
        assert!(session.grid().is_settled());
    }
}
