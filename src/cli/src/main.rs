mod config;
mod net;
mod turn;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use config::CliConfig;
use cube_state::CubeState;
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug, info};
use turn::Turn;

const DEFAULT_SIZE: usize = 3;

/// Applies layer turns to an N×N×N cube and prints the resulting faces
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Side length of the cube. Overrides the configuration file; defaults to 3.
    #[arg(short, long)]
    size: Option<usize>,
    /// TOML file with a default size and a sticker palette
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print sticker numbers instead of coloured stickers
    #[arg(long)]
    no_color: bool,
    /// The level of logging to send to stderr. Can be set zero to three times.
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    /// Turns to apply in order, each as `face:depth` or `face:depth:ccw`
    turns: Vec<Turn>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    debug!("Loaded configuration: {config:?}");

    let size = cli.size.or(config.size).unwrap_or(DEFAULT_SIZE);
    let mut cube = CubeState::new(size)?;

    for turn in &cli.turns {
        turn.apply(&mut cube)?;
        info!("Applied {turn:?}");
    }

    let palette = (!cli.no_color).then_some(&config.palette);
    print!("{}", net::render(&cube, palette));

    if cube.is_solved() {
        info!("The cube is solved");
    }

    Ok(())
}
