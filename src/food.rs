use rand::Rng;

use crate::grid::{Grid, Position};
use crate::snake::Snake;

pub struct Food {
    pos: Position,
}

impl Food {
    pub fn new() -> Self {
        Food { pos: Position::new(0, 0) }
    }

    #[cfg(test)]
    pub fn at(pos: Position) -> Self {
        Food { pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Moves the food to a random cell the snake does not occupy.
    /// Returns false, leaving the food where it was, when the snake fills the grid.
    pub fn spawn<R: Rng>(&mut self, grid: &Grid, snake: &Snake, rng: &mut R) -> bool {
        if snake.len() >= grid.area() {
            return false;
        }

        let mut candidate = grid.random_cell(rng);
        while snake.contains(candidate) {
            candidate = grid.random_cell(rng);
        }

        self.pos = candidate;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spawn_never_lands_on_snake() {
        let grid = Grid::new(4, 3);
        let body: Vec<Position> = (0..4).map(|x| Position::new(x, 0))
            .chain((0..4).rev().map(|x| Position::new(x, 1)))
            .collect();
        let snake = Snake::from_body(&body, Direction::Left);
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::new();

        for _ in 0..200 {
            assert!(food.spawn(&grid, &snake, &mut rng));
            assert_eq!(food.position().y, 2);
            assert!(!snake.contains(food.position()));
        }
    }

    #[test]
    fn test_spawn_finds_the_last_free_cell() {
        let grid = Grid::new(2, 2);
        let snake = Snake::from_body(
            &[Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)],
            Direction::Down,
        );
        let mut rng = StdRng::seed_from_u64(99);
        let mut food = Food::new();

        assert!(food.spawn(&grid, &snake, &mut rng));
        assert_eq!(food.position(), Position::new(0, 1));
    }

    #[test]
    fn test_spawn_on_full_grid_gives_up() {
        let grid = Grid::new(2, 1);
        let snake = Snake::from_body(&[Position::new(0, 0), Position::new(1, 0)], Direction::Left);
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new();

        assert!(!food.spawn(&grid, &snake, &mut rng));
        assert_eq!(food.position(), Position::new(0, 0));
    }
}
