mod board;
mod commands;
mod input;
mod screen;
mod shutdown;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simon_core::{GameConfig, Mode, ScoreStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::play::SessionOutcome;
use crate::screen::Screen;
use crate::shutdown::QuitSignal;

#[derive(Parser)]
#[command(name = "simon")]
#[command(about = "Simon Says memory game for the terminal")]
struct Args {
    /// High-score file
    #[arg(long, default_value = "high_scores.txt")]
    scores: PathBuf,

    /// Seed for the pattern generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game in the given mode, skipping the menu
    Play {
        /// Game mode: 1 = 4 tiles, 2 = 6 tiles, 3 = 9 tiles
        #[arg(long)]
        mode: u8,
    },
    /// Print the high-score table
    Scores {
        /// Print the raw JSON collection instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay off the alternate screen's stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("simon=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("simon {}", env!("CARGO_PKG_VERSION"));

    let store = ScoreStore::new(args.scores);
    let config = GameConfig::default();
    let mut rng = match args.seed {
        Some(seed) => {
            debug!("Seeding pattern generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    match args.command {
        Some(Command::Scores { json }) => commands::scores::run(&store, json),
        Some(Command::Play { mode }) => {
            let mode = Mode::try_from(mode)?;
            let quit = install_quit_handler()?;

            println!("Now starting my AMAZING game!");
            let outcome = {
                let _screen = Screen::enter()?;
                commands::play::run_session(mode, &store, &config, &mut rng, &quit)?
            };
            if let SessionOutcome::Finished(score) = outcome {
                println!("Final score: {}", score);
            }
            println!("You seem to be done for now. Good Bye!");
            Ok(())
        }
        None => {
            let quit = install_quit_handler()?;

            println!("Now starting my AMAZING game!");
            {
                let _screen = Screen::enter()?;
                commands::home::run(&store, &config, &mut rng, &quit)?;
            }
            println!("You seem to be done for now. Good Bye!");
            Ok(())
        }
    }
}

/// Route Ctrl+C (as a signal, for the rare cooked-mode stretches) into the
/// shared quit flag the game loops watch.
fn install_quit_handler() -> Result<Arc<QuitSignal>> {
    let quit = Arc::new(QuitSignal::new());
    let handler = Arc::clone(&quit);
    ctrlc::set_handler(move || {
        info!("Received interrupt, quitting");
        handler.trigger();
    })?;
    Ok(quit)
}
