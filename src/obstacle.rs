use rand::Rng;

use crate::food::Food;
use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// Static blocking cells, only populated in hard mode.
pub struct Obstacles {
    blocks: Vec<Position>,
}

impl Obstacles {
    pub fn new() -> Self {
        Obstacles { blocks: vec![] }
    }

    #[cfg(test)]
    pub fn from_blocks(blocks: &[Position]) -> Self {
        Obstacles { blocks: blocks.to_vec() }
    }

    pub fn blocks(&self) -> &[Position] {
        &self.blocks
    }

    /// Replaces the current set with `count` random cells clear of the snake and the food.
    /// Accepted cells are not checked against each other, so the same cell may be drawn twice.
    pub fn spawn<R: Rng>(&mut self, grid: &Grid, snake: &Snake, food: &Food, count: usize, rng: &mut R) {
        self.blocks.clear();

        let is_free = |pos: Position| !snake.contains(pos) && pos != food.position();

        let has_free_cell = (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| Position::new(x, y)))
            .any(is_free);
        if !has_free_cell {
            return;
        }

        while self.blocks.len() < count {
            let candidate = grid.random_cell(rng);
            if is_free(candidate) {
                self.blocks.push(candidate);
            }
        }
    }

    pub fn is_hit(&self, head: Position) -> bool {
        self.blocks.contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spawn_collects_exact_count_clear_of_snake_and_food() {
        let grid = Grid::new(60, 20);
        let snake = Snake::new(grid.center());
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new();
        food.spawn(&grid, &snake, &mut rng);
        let mut obstacles = Obstacles::new();

        obstacles.spawn(&grid, &snake, &food, 20, &mut rng);

        assert_eq!(obstacles.blocks().len(), 20);
        for block in obstacles.blocks() {
            assert!(grid.contains(*block));
            assert!(!snake.contains(*block));
            assert_ne!(*block, food.position());
        }
    }

    #[test]
    fn test_spawn_may_repeat_cells_on_crowded_grid() {
        // One of the two cells right of the snake holds the food, the other is the only free cell
        let grid = Grid::new(4, 1);
        let snake = Snake::from_body(&[Position::new(1, 0), Position::new(0, 0)], Direction::Right);
        let mut rng = StdRng::seed_from_u64(5);
        let mut food = Food::new();
        assert!(food.spawn(&grid, &snake, &mut rng));
        let mut obstacles = Obstacles::new();

        obstacles.spawn(&grid, &snake, &food, 5, &mut rng);

        assert_eq!(obstacles.blocks().len(), 5);
        let free = if food.position().x == 2 { 3 } else { 2 };
        assert!(obstacles.blocks().iter().all(|b| *b == Position::new(free, 0)));
    }

    #[test]
    fn test_spawn_replaces_previous_set() {
        let grid = Grid::new(10, 10);
        let snake = Snake::new(grid.center());
        let mut rng = StdRng::seed_from_u64(8);
        let food = Food::new();
        let mut obstacles = Obstacles::new();

        obstacles.spawn(&grid, &snake, &food, 7, &mut rng);
        obstacles.spawn(&grid, &snake, &food, 3, &mut rng);

        assert_eq!(obstacles.blocks().len(), 3);
    }

    #[test]
    fn test_spawn_without_free_cells_leaves_set_empty() {
        let grid = Grid::new(2, 1);
        let snake = Snake::from_body(&[Position::new(1, 0)], Direction::None);
        let food = Food::new(); // sits on (0, 0)
        let mut rng = StdRng::seed_from_u64(0);
        let mut obstacles = Obstacles::new();

        obstacles.spawn(&grid, &snake, &food, 4, &mut rng);

        assert!(obstacles.blocks().is_empty());
    }

    #[test]
    fn test_is_hit() {
        let grid = Grid::new(2, 1);
        let snake = Snake::from_body(&[Position::new(0, 0)], Direction::None);
        let food = Food::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut obstacles = Obstacles::new();

        obstacles.spawn(&grid, &snake, &food, 1, &mut rng);

        assert!(obstacles.is_hit(Position::new(1, 0)));
        assert!(!obstacles.is_hit(Position::new(0, 0)));
    }
}
