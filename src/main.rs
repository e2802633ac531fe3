//! Command-line front-end of the hotseat chess board.

use std::io;

use clap::Parser;
use hotseat::Engine;
use log::LevelFilter;

/// Plays chess on one board for two local players: type a square to select a
/// piece, then a destination to move it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Render pieces as Unicode figurines.
    #[arg(long)]
    figurines: bool,
    /// Increase logging verbosity (-v: debug, -vv: trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Do not print version information on startup.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(match config.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()?;
    log::debug!("{config:?}");

    if !config.quiet {
        hotseat::print_engine_info();
    }
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(&mut input, &mut output)
        .with_figurines(config.figurines)
        .run()
}
