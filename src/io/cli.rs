//! Command-line interface for generating layouts and demo tile sets

use crate::algorithm::random::{RandomChooser, TileChooser};
use crate::interaction::pointer::PointerState;
use crate::interaction::session::{FrameOutcome, Session, TilingConfig};
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_LAYOUTS, DEFAULT_OUTPUT, DEFAULT_TILE_COUNT, DEFAULT_TILE_DIRECTORY,
    DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::LayoutProgress;
use crate::io::tileset::{TilePalette, write_tileset};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wangtile")]
#[command(
    author,
    version,
    about = "Tile a viewport with randomly chosen, edge-matched Wang tiles"
)]
/// Command-line arguments
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill a viewport-sized grid and save each layout as PNG
    Generate(GenerateArgs),
    /// Write a demo tile set covering all sixteen edge combinations
    Tileset(TilesetArgs),
}

/// Arguments of `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory holding 0.png, 1.png, ...
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Number of tiles to load
    #[arg(short, long, default_value_t = DEFAULT_TILE_COUNT)]
    pub count: usize,

    /// Viewport width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: u32,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: u32,

    /// Random seed for reproducible layouts (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of layouts, one regeneration click each
    #[arg(short, long, default_value_t = DEFAULT_LAYOUTS)]
    pub layouts: usize,

    /// Fill passes attempted per layout before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Output PNG path; numbered when more than one layout is generated
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Outline the neighbors consulted for the last cell
    #[arg(long)]
    pub overlay: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Catalog and viewport settings
    pub fn tiling_config(&self) -> TilingConfig {
        TilingConfig {
            tile_directory: self.tiles.clone(),
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            tile_count: self.count,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
        }
    }

    /// Output path of the `index`-th layout
    pub fn layout_path(&self, index: usize) -> PathBuf {
        if self.layouts <= 1 {
            return self.output.clone();
        }
        numbered_path(&self.output, index)
    }
}

/// Arguments of `tileset`
#[derive(Args, Debug, Clone)]
pub struct TilesetArgs {
    /// Destination directory
    #[arg(short, long, default_value = DEFAULT_TILE_DIRECTORY)]
    pub directory: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,
}

/// Run the selected operation
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a layout stays
/// unsatisfiable after every attempt, or an image cannot be written
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Tileset(args) => {
            write_tileset(
                &args.directory,
                args.tile_width,
                args.tile_height,
                TilePalette::default(),
            )?;
            Ok(())
        }
    }
}

/// Generate and save `args.layouts` layouts
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a layout stays
/// unsatisfiable after every attempt, or an image cannot be written
pub fn generate(args: &GenerateArgs) -> Result<()> {
    if args.layouts == 0 {
        return Err(invalid_parameter(
            "layouts",
            &args.layouts,
            &"at least one layout is needed",
        ));
    }
    if args.attempts == 0 {
        return Err(invalid_parameter(
            "attempts",
            &args.attempts,
            &"at least one fill pass is needed",
        ));
    }

    let chooser = args
        .seed
        .map_or_else(RandomChooser::from_os_entropy, RandomChooser::seeded);
    let mut session = Session::open(&args.tiling_config(), chooser)?;
    info!(
        "Grid of {}x{} cells for a {}x{} viewport",
        session.grid().width(),
        session.grid().height(),
        args.viewport_width,
        args.viewport_height
    );

    let start_time = Instant::now();
    let mut progress = LayoutProgress::new(args.layouts, !args.quiet);

    for index in 0..args.layouts {
        settle_layout(&mut session, args.attempts, &mut progress)?;
        let path = args.layout_path(index);
        export_png(&session.render(args.overlay)?, &path)?;
        info!("Saved layout {} to {}", index + 1, path.display());
        progress.complete_layout();
    }

    progress.finish();
    info!(
        "Generated {} layouts in {:.2?} ({} fill passes retried)",
        session.layouts_generated(),
        start_time.elapsed(),
        progress.failed_passes()
    );
    Ok(())
}

/// Deliver one click with no widget under the pointer, retrying stuck passes
///
/// # Errors
///
/// Returns the last fill error once `attempts` passes have failed, or any
/// error that retrying cannot fix
pub fn settle_layout<C: TileChooser>(
    session: &mut Session<C>,
    attempts: usize,
    progress: &mut LayoutProgress,
) -> Result<()> {
    let click = PointerState::click_at((0, 0));
    let mut outcome = session.handle_frame(&click);

    for attempt in 1..attempts {
        match outcome {
            Err(err) if err.is_unsatisfiable() => {
                warn!("Fill pass {attempt}/{attempts} failed: {err}");
                progress.record_failed_pass();
                outcome = session.regenerate().map(|()| FrameOutcome::Regenerated);
            }
            _ => break,
        }
    }

    outcome.map(|_| ())
}

fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let name = path.extension().map_or_else(
        || format!("{}_{index}", stem.to_string_lossy()),
        |extension| {
            format!(
                "{}_{index}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        },
    );

    path.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
