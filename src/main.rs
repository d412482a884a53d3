mod config;
mod food;
mod game;
mod grid;
mod highscore;
mod input;
mod obstacle;
mod screen;
mod snake;
mod term;

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{Config, WriteLogger};

use config::{BorderMode, Difficulty, GameConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use game::SnakeGame;
use highscore::{HighScoreFile, HIGH_SCORE_FILE};
use term::{TermManager, Terminal};

/// Classic snake in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Border behaviour. Asked interactively when omitted.
    #[arg(long, value_enum)]
    mode: Option<BorderMode>,
    /// Starting speed and obstacles. Asked interactively when omitted.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Number of columns in the playfield.
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(i32).range(5..=500))]
    width: i32,
    /// Number of rows in the playfield.
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(i32).range(5..=500))]
    height: i32,
    /// File holding the best score.
    #[arg(long, value_name = "PATH", default_value = HIGH_SCORE_FILE)]
    high_score_file: PathBuf,
    /// Where log output goes while the terminal is in use.
    #[arg(long, value_name = "PATH", default_value = "term-snake.log")]
    log_file: PathBuf,
    /// Log debug messages too.
    #[arg(short, long)]
    verbose: bool,
    /// Seed for food and obstacle placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let mut term = TermManager::new().context("Error reading terminal size")?;
    term.setup().context("Error setting up terminal")?;

    let res = play(&args, &mut term);

    // Restore even when the game failed
    let restored = term.restore().context("Error restoring terminal");
    res?;
    restored
}

fn play(args: &Args, term: &mut TermManager) -> Result<()> {
    let border = match args.mode {
        Some(mode) => mode,
        None => config::prompt_border_mode(term).context("Error reading game mode")?,
    };
    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => config::prompt_difficulty(term).context("Error reading difficulty")?,
    };

    let config = GameConfig { width: args.width, height: args.height, ..GameConfig::new(border, difficulty) };
    info!("Starting game with {:?}", config);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = SnakeGame::new(config, term, rng, HighScoreFile::new(&args.high_score_file));
    game.run().context("Error while playing")?;
    info!("Finished ({:?}) with score {}", game.state(), game.score());

    Ok(())
}

fn init_logging(args: &Args) {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };

    // The game runs without logs if the file can't be created
    match File::create(&args.log_file) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Error initializing logger: {}", e);
            }
        }
        Err(e) => eprintln!("Error creating log file {}: {}", args.log_file.display(), e),
    }
}
