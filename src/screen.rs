use crossterm::style::Color;

use crate::food::Food;
use crate::grid::{Grid, Position};
use crate::obstacle::Obstacles;
use crate::snake::Snake;

const BORDER_ROW_CHAR: char = '-';
const BORDER_SIDE_CHAR: char = '|';
const SNAKE_BODY_CHAR: char = 'o';
const FOOD_CHAR: char = '*';
const OBSTACLE_CHAR: char = '#';

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const OBSTACLE_COLOR: Color = Color::DarkGrey;
const DEFAULT_COLOR: Color = Color::Grey;

const CONTROLS_HINT: &str = "Use W/A/S/D to move. Press X to quit.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub fn new(glyph: char, color: Color) -> Self {
        Cell { glyph, color }
    }

    pub fn blank() -> Self {
        Cell::new(' ', DEFAULT_COLOR)
    }
}

/// A full screen image, handed to the terminal in one piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Frame { width, height, cells: vec![Cell::blank(); width as usize * height as usize] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.glyph).collect()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Writes `text` from the start of row `y`, cut off at the frame width.
    pub fn put_str(&mut self, y: u16, text: &str) {
        for (x, ch) in text.chars().take(self.width as usize).enumerate() {
            self.set(x as u16, y, Cell::new(ch, DEFAULT_COLOR));
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        self.width as usize * y as usize + x as usize
    }
}

/// Draws the playfield inside a border, followed by the status and controls lines.
pub fn compose(grid: &Grid, snake: &Snake, food: &Food, obstacles: &Obstacles, score: u32, high_score: u32) -> Frame {
    let total_width = grid.width() as u16 + 2;
    let total_height = grid.height() as u16 + 4;
    let mut frame = Frame::new(total_width, total_height);

    let border_row = Cell::new(BORDER_ROW_CHAR, DEFAULT_COLOR);
    for x in 0..total_width {
        frame.set(x, 0, border_row);
        frame.set(x, grid.height() as u16 + 1, border_row);
    }

    let border_side = Cell::new(BORDER_SIDE_CHAR, DEFAULT_COLOR);
    for y in 0..grid.height() {
        let row = y as u16 + 1;
        frame.set(0, row, border_side);
        frame.set(total_width - 1, row, border_side);

        for x in 0..grid.width() {
            let cell = cell_at(Position::new(x, y), snake, food, obstacles);
            frame.set(x as u16 + 1, row, cell);
        }
    }

    frame.put_str(total_height - 2, &format!("Score: {}   High: {}", score, high_score));
    frame.put_str(total_height - 1, CONTROLS_HINT);

    frame
}

// First match wins: head, body, food, obstacle
fn cell_at(pos: Position, snake: &Snake, food: &Food, obstacles: &Obstacles) -> Cell {
    if pos == snake.head() {
        Cell::new(snake.head_char(), SNAKE_COLOR)
    } else if snake.contains(pos) {
        Cell::new(SNAKE_BODY_CHAR, SNAKE_COLOR)
    } else if pos == food.position() {
        Cell::new(FOOD_CHAR, FOOD_COLOR)
    } else if obstacles.is_hit(pos) {
        Cell::new(OBSTACLE_CHAR, OBSTACLE_COLOR)
    } else {
        Cell::blank()
    }
}
