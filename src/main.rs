#![warn(clippy::pedantic)]

use std::{io::stdin, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use cube3::{Color, Cube3};
use log::{LevelFilter, debug, info, warn};
use serde::Deserialize;

/// Settings for the interactive loop.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReplConfig {
    /// Moves applied to the solved cube before reading any input
    moves: String,
    /// Print the net after every line of input instead of only on exit
    print_every_move: bool,
    /// Print which letter stands for which color before starting
    show_legend: bool,
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A configuration file for the interactive loop, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Moves to apply before reading input, e.g. "RUrM"
    #[arg(long, short = 'm')]
    moves: Option<String>,

    /// Only print the final state
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Increase the log level; may be given up to three times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
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
        .init();

    let mut config = match &cli.config {
        Some(path) => toml::from_str::<ReplConfig>(
            &std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        )
        .wrap_err("Failed to parse the configuration file")?,
        None => ReplConfig::default(),
    };
    if let Some(moves) = cli.moves {
        config.moves = moves;
    }
    if cli.quiet {
        config.print_every_move = false;
    }
    debug!("{config:?}");

    if config.show_legend && !cli.quiet {
        for color in Color::ALL {
            println!("{} = {color}", color.code());
        }
        println!();
    }

    let mut cube = Cube3::solved()
        .apply_str(&config.moves)
        .wrap_err("Invalid start-up moves")?;

    if config.print_every_move {
        println!("{cube}\n");
    }

    loop {
        // interpreter loop
        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        match input {
            "exit" => break,
            "reset" => {
                info!("Resetting to the solved cube");
                cube = Cube3::solved();
            }
            _ => match cube.apply_str(input) {
                Ok(turned) => cube = turned,
                Err(err) => {
                    warn!("Ignoring `{input}`");
                    eprintln!("{err}");
                    continue;
                }
            },
        }

        if config.print_every_move {
            println!("{cube}\n");
        }
    }

    if !config.print_every_move {
        println!("{cube}");
    }
    info!("Solved: {}", cube.is_solved());

    Ok(())
}
