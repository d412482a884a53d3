use std::collections::VecDeque;

use crate::grid::Position;

const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Heading of the snake. `None` is the state before the first key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

pub struct Snake {
    body: VecDeque<Position>, // head first
    direction: Direction,
}

impl Snake {
    /// Lays the snake out horizontally with the head at `head` and the tail trailing to the left.
    pub fn new(head: Position) -> Self {
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Snake { body, direction: Direction::None }
    }

    #[cfg(test)]
    pub fn from_body(body: &[Position], direction: Direction) -> Self {
        assert!(!body.is_empty());
        Snake { body: body.iter().copied().collect(), direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns false when the change was rejected for reversing the current heading.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(&self.direction) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    /// Puts `new_head` in front of the body. The tail is kept only when the snake grew.
    pub fn advance(&mut self, new_head: Position, grew: bool) {
        self.body.push_front(new_head);

        if !grew {
            self.body.pop_back();
        }
    }

    /// Tests against the body as it is before moving, tail included.
    pub fn has_self_collision(&self, candidate_head: Position) -> bool {
        self.contains(candidate_head)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Direction::None => 'O',
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_new_snake_is_horizontal_and_idle() {
        let snake = Snake::new(p(30, 10));

        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![p(30, 10), p(29, 10), p(28, 10)]);
        assert_eq!(snake.head(), p(30, 10));
        assert_eq!(snake.direction(), Direction::None);
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(p(30, 10));

        snake.advance(p(31, 10), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), p(31, 10));
        assert!(!snake.contains(p(28, 10)));
    }

    #[test]
    fn test_advance_with_growth_adds_one_segment() {
        let mut snake = Snake::new(p(30, 10));

        snake.advance(p(31, 10), true);
        snake.advance(p(32, 10), true);

        assert_eq!(snake.len(), 5);
        assert_eq!(*snake.body().back().unwrap(), p(28, 10));
    }

    #[test]
    fn test_self_collision_includes_current_tail() {
        let snake = Snake::from_body(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right);

        assert!(snake.has_self_collision(p(5, 5)));
        assert!(snake.has_self_collision(p(4, 5)));
        assert!(snake.has_self_collision(p(3, 5)));
        assert!(!snake.has_self_collision(p(6, 5)));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::from_body(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right);

        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.set_direction(Direction::Up));
        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_idle_snake_accepts_any_direction() {
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let mut snake = Snake::new(p(30, 10));
            assert!(snake.set_direction(dir));
            assert_eq!(snake.direction(), dir);
        }
    }

    #[test]
    fn test_head_char_follows_direction() {
        let mut snake = Snake::new(p(30, 10));
        assert_eq!(snake.head_char(), 'O');

        snake.set_direction(Direction::Up);
        assert_eq!(snake.head_char(), '^');
    }
}
