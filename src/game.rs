use std::{io, time::Duration};

use log::{debug, info};
use rand::Rng;

use crate::config::{next_tick_interval, BorderMode, GameConfig};
use crate::food::Food;
use crate::grid::Grid;
use crate::highscore::HighScoreFile;
use crate::input::Command;
use crate::obstacle::Obstacles;
use crate::screen;
use crate::snake::{Direction, Snake};
use crate::term::Terminal;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    HitWall,
    HitSelf,
    HitObstacle,
    BoardFilled,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Configuring,
    Running,
    GameOver(EndReason),
}

pub struct SnakeGame<T: Terminal, R: Rng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    obstacles: Obstacles,
    tick_interval: Duration,
    score: u32,
    high_score: u32,
    scores: HighScoreFile,
    state: GameState,
    paused: bool,
    term: T,
    rng: R,
}

impl<T: Terminal, R: Rng> SnakeGame<T, R> {
    pub fn new(config: GameConfig, term: T, rng: R, scores: HighScoreFile) -> Self {
        let grid = config.grid();
        let high_score = scores.load();

        SnakeGame {
            snake: Snake::new(grid.center()),
            food: Food::new(),
            obstacles: Obstacles::new(),
            tick_interval: config.difficulty.tick_interval(),
            score: 0,
            high_score,
            scores,
            state: GameState::Configuring,
            paused: false,
            config,
            grid,
            term,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Places the snake, the food and, in hard mode, the obstacles, and starts the game.
    pub fn setup(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.food.spawn(&self.grid, &self.snake, &mut self.rng);
        self.obstacles = Obstacles::new();
        if self.config.hard_mode() {
            self.obstacles.spawn(&self.grid, &self.snake, &self.food, self.config.obstacle_count, &mut self.rng);
        }

        self.score = 0;
        self.tick_interval = self.config.difficulty.tick_interval();
        self.paused = false;
        self.state = GameState::Running;

        info!(
            "Game set up: {}x{} grid, {:?} borders, {:?} difficulty, food at {:?}, {} obstacles",
            self.grid.width(),
            self.grid.height(),
            self.config.border,
            self.config.difficulty,
            self.food.position(),
            self.obstacles.blocks().len()
        );
    }

    /// Plays a whole session: intro, game loop, game over screen.
    pub fn run(&mut self) -> io::Result<()> {
        self.setup();
        self.term.clear()?;
        self.render()?;

        self.term.show_message(&["Press any key to start..."])?;
        let key = self.term.read_key_blocking()?;
        if Command::from_key(&key) == Some(Command::Quit) {
            self.end(EndReason::Quit);
        }
        self.term.hide_message()?;

        while self.state == GameState::Running {
            self.render()?;
            self.tick()?;
            self.term.sleep(self.tick_interval);
        }

        self.finish()
    }

    /// Handles at most one pending key press, then advances the game by one step.
    pub fn tick(&mut self) -> io::Result<()> {
        let was_paused = self.paused;

        if let Some(key) = self.term.poll_key()? {
            if let Some(cmd) = Command::from_key(&key) {
                self.apply(cmd);
            }
        }

        if self.paused != was_paused {
            info!("Game {}", if self.paused { "paused" } else { "resumed" });
            if self.paused {
                self.term.show_message(&["Paused", "Press Esc to resume", "or X to quit"])?;
            } else {
                self.term.hide_message()?;
            }
        }

        self.update();
        Ok(())
    }

    pub fn apply(&mut self, cmd: Command) {
        if self.state != GameState::Running {
            return;
        }

        match cmd {
            Command::Turn(dir) if !self.paused => {
                if !self.snake.set_direction(dir) {
                    debug!("Rejected reversal to {:?}", dir);
                }
            }
            Command::Turn(_) => {}
            Command::Pause => self.paused = !self.paused,
            Command::Quit => self.end(EndReason::Quit),
        }
    }

    /// Moves the snake one cell and resolves wall, self, obstacle and food, in that order.
    pub fn update(&mut self) {
        if self.state != GameState::Running || self.paused {
            return;
        }

        let direction = self.snake.direction();
        if direction == Direction::None {
            return;
        }

        let mut new_head = self.snake.head().offset(direction.delta());
        match self.config.border {
            BorderMode::Walled => {
                if !self.grid.contains(new_head) {
                    self.end(EndReason::HitWall);
                    return;
                }
            }
            BorderMode::Wrap => new_head = self.grid.wrap(new_head),
        }

        if self.snake.has_self_collision(new_head) {
            self.end(EndReason::HitSelf);
            return;
        }

        if self.config.hard_mode() && self.obstacles.is_hit(new_head) {
            self.end(EndReason::HitObstacle);
            return;
        }

        let ate_food = new_head == self.food.position();
        self.snake.advance(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.tick_interval = next_tick_interval(self.tick_interval);
            debug!(
                "Ate food at {:?}. Score: {}, tick interval: {:?}",
                new_head, self.score, self.tick_interval
            );

            if !self.food.spawn(&self.grid, &self.snake, &mut self.rng) {
                self.end(EndReason::BoardFilled);
            }
        }
    }

    pub fn render(&mut self) -> io::Result<()> {
        let frame = screen::compose(&self.grid, &self.snake, &self.food, &self.obstacles, self.score, self.high_score);
        self.term.blit(&frame)
    }

    /// Shows the final score and stores it if it beat the high score.
    pub fn finish(&mut self) -> io::Result<()> {
        self.term.clear()?;

        let final_score = format!("Final Score: {}", self.score);
        let record = if self.score > self.high_score {
            self.high_score = self.score;
            self.scores.save(self.score);
            "*** New High Score! ***".to_string()
        } else {
            format!("Highest Score: {}", self.high_score)
        };

        self.term.show_message(&[
            "#########################",
            "#      GAME OVER!       #",
            "#########################",
            final_score.as_str(),
            record.as_str(),
            "",
            "Press any key to exit...",
        ])?;
        self.term.read_key_blocking()?;
        Ok(())
    }

    fn end(&mut self, reason: EndReason) {
        info!("Game over ({:?}) with score {}", reason, self.score);
        debug!("Final snake: {:?}", self.snake.body());
        self.state = GameState::GameOver(reason);
    }
}
