use std::{io, time::Duration};

use clap::ValueEnum;

use crate::grid::Grid;
use crate::input::key_char;
use crate::term::Terminal;

pub const DEFAULT_WIDTH: i32 = 60;
pub const DEFAULT_HEIGHT: i32 = 20;
pub const OBSTACLE_COUNT: usize = 20;

pub const SPEEDUP_STEP: Duration = Duration::from_millis(2);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(40);

/// What happens when the snake leaves the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BorderMode {
    /// Touching the border ends the game
    Walled,
    /// The snake re-enters from the opposite edge
    Wrap,
}

impl BorderMode {
    pub fn from_choice(choice: char) -> Self {
        match choice {
            '1' => BorderMode::Walled,
            _ => BorderMode::Wrap,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    /// Faster start and a field of obstacles
    Hard,
}

impl Difficulty {
    pub fn from_choice(choice: char) -> Self {
        match choice {
            '1' => Difficulty::Easy,
            '3' => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(130),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(90),
        }
    }

    pub fn has_obstacles(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

/// Everything a session needs to know before it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub border: BorderMode,
    pub difficulty: Difficulty,
    pub obstacle_count: usize,
}

impl GameConfig {
    pub fn new(border: BorderMode, difficulty: Difficulty) -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            border,
            difficulty,
            obstacle_count: OBSTACLE_COUNT,
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn hard_mode(&self) -> bool {
        self.difficulty.has_obstacles()
    }
}

/// Interval after one more food has been eaten.
pub fn next_tick_interval(current: Duration) -> Duration {
    current.saturating_sub(SPEEDUP_STEP).max(MIN_TICK_INTERVAL)
}

pub fn prompt_border_mode<T: Terminal>(term: &mut T) -> io::Result<BorderMode> {
    let choice = prompt_choice(term, &[
        "Choose Game Mode:",
        "1. Border Mode (hit wall = game over)",
        "2. No Borders (snake wraps around)",
        "",
        "Enter choice (1 or 2)",
    ])?;

    Ok(BorderMode::from_choice(choice))
}

pub fn prompt_difficulty<T: Terminal>(term: &mut T) -> io::Result<Difficulty> {
    let choice = prompt_choice(term, &[
        "Select Difficulty:",
        "1. Easy",
        "2. Medium",
        "3. Hard (with obstacles)",
        "",
        "Enter choice (1/2/3)",
    ])?;

    Ok(Difficulty::from_choice(choice))
}

fn prompt_choice<T: Terminal>(term: &mut T, lines: &[&str]) -> io::Result<char> {
    term.show_message(lines)?;
    let key = term.read_key_blocking()?;
    term.hide_message()?;

    // Non-character keys fall through to the default choice
    Ok(key_char(&key).unwrap_or(' '))
}
