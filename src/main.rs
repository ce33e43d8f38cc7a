//! CLI entry point for Wang tile layout generation

use clap::Parser;
use wangtile::io::cli::{Cli, run};

fn main() -> wangtile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Cli::parse())
}
