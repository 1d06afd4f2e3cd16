//! The snake and its target
//!
//! Edge policy: the snake wraps around the grid, so every body cell stays in
//! bounds. Reversing straight into the neck is ignored once the snake has a
//! body; biting itself shrinks it back to a single cell at its spawn point.

use rand::Rng;

use super::direction::{Direction, advance};
use super::grid::{Cell, GridSpace, collides};

/// Outcome of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeMove {
    Moved,
    Grew,
    BitItself,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
    pub direction: Direction,
    /// Heading of the last completed step; reversal is judged against it
    moved: Direction,
    spawn: Cell,
    spawn_direction: Direction,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            moved: direction,
            spawn: head,
            spawn_direction: direction,
        }
    }

    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All segments, head first
    #[inline]
    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: the snake always keeps its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|&c| collides(c, cell))
    }

    /// Assign a new heading
    ///
    /// Returns false when the turn was refused (reversal into the neck).
    /// Several turns may land between two steps, so the check uses the
    /// heading the snake last moved in rather than the pending one.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.len() > 1 && self.moved.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Cell the head will enter on the next tick
    pub fn next_head(&self, grid: &GridSpace) -> Cell {
        grid.wrap(advance(self.head(), self.direction))
    }

    /// Advance one cell, growing when `grow` is set
    pub fn step(&mut self, grid: &GridSpace, grow: bool) -> SnakeMove {
        let next = self.next_head(grid);

        // The tail cell is vacated this tick unless the snake grows
        let check = if grow {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        if check.iter().any(|&c| collides(c, next)) {
            self.reset();
            return SnakeMove::BitItself;
        }

        self.body.insert(0, next);
        self.moved = self.direction;
        if grow {
            SnakeMove::Grew
        } else {
            self.body.pop();
            SnakeMove::Moved
        }
    }

    /// Shrink back to a single cell at the spawn point
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.spawn);
        self.direction = self.spawn_direction;
        self.moved = self.spawn_direction;
    }
}

impl std::fmt::Display for Snake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snake{} len={} {:?}", self.head(), self.len(), self.direction)
    }
}

/// The randomly placed target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub cell: Cell,
}

impl Apple {
    /// Place an apple on a random cell not covered by the snake
    ///
    /// Returns `None` only when the snake fills the whole grid.
    pub fn spawn<R: Rng>(grid: &GridSpace, snake: &Snake, rng: &mut R) -> Option<Self> {
        if snake.len() as u64 >= grid.cell_count() {
            return None;
        }
        loop {
            let cell = grid.random_cell(rng);
            if !snake.occupies(cell) {
                return Some(Self { cell });
            }
        }
    }
}

impl std::fmt::Display for Apple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Apple{}", self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn grid() -> GridSpace {
        GridSpace::new(10, 10, 30).unwrap()
    }

    #[test]
    fn test_step_moves_head() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        assert_eq!(snake.step(&g, false), SnakeMove::Moved);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_wraps_at_edges() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(9, 0), Direction::Right);
        snake.step(&g, false);
        assert_eq!(snake.head(), Cell::new(0, 0));

        snake.steer(Direction::Up);
        snake.step(&g, false);
        assert_eq!(snake.head(), Cell::new(0, 9));
    }

    #[test]
    fn test_growth() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Down);
        assert_eq!(snake.step(&g, true), SnakeMove::Grew);
        assert_eq!(snake.segments(), &[Cell::new(2, 3), Cell::new(2, 2)]);
    }

    #[test]
    fn test_reversal_refused_with_body() {
        let g = grid();
        let mut single = Snake::new(Cell::new(2, 2), Direction::Right);
        // A lone head may turn around freely
        assert!(single.steer(Direction::Left));

        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right);
        snake.step(&g, true);
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.direction, Direction::Right);
        assert!(snake.steer(Direction::Up));
    }

    #[test]
    fn test_two_turns_between_steps_cannot_reverse() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(3, 5), Direction::Right);
        snake.step(&g, true);
        snake.step(&g, true);
        assert_eq!(snake.len(), 3);

        // Up is fine, but Left would still fold back onto the neck
        assert!(snake.steer(Direction::Up));
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.direction, Direction::Up);

        assert_eq!(snake.step(&g, false), SnakeMove::Moved);
        assert_eq!(snake.head(), Cell::new(5, 4));
        assert_eq!(snake.len(), 3);

        // After moving Up, Left is a normal turn
        assert!(snake.steer(Direction::Left));
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        // Grow to a 2x2 loop: (5,5) -> (6,5) -> (6,6) -> (5,6)
        snake.step(&g, true);
        snake.steer(Direction::Down);
        snake.step(&g, true);
        snake.steer(Direction::Left);
        snake.step(&g, true);
        assert_eq!(snake.len(), 4);

        // Head enters the cell the tail leaves this tick
        snake.steer(Direction::Up);
        assert_eq!(snake.step(&g, false), SnakeMove::Moved);
        assert_eq!(snake.head(), Cell::new(5, 5));
    }

    #[test]
    fn test_bite_resets() {
        let g = grid();
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.step(&g, true);
        snake.steer(Direction::Down);
        snake.step(&g, true);
        snake.steer(Direction::Left);
        snake.step(&g, true);

        // Growing into the old tail is a bite
        snake.steer(Direction::Up);
        assert_eq!(snake.step(&g, true), SnakeMove::BitItself);
        assert_eq!(snake.segments(), &[Cell::new(5, 5)]);
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_apple_avoids_snake() {
        let g = GridSpace::new(2, 1, 10).unwrap();
        let snake = Snake::new(Cell::new(0, 0), Direction::Right);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..16 {
            let apple = Apple::spawn(&g, &snake, &mut rng).unwrap();
            assert_eq!(apple.cell, Cell::new(1, 0));
        }
    }

    #[test]
    fn test_apple_on_full_grid() {
        let g = GridSpace::new(1, 1, 10).unwrap();
        let snake = Snake::new(Cell::new(0, 0), Direction::Right);
        let mut rng = Pcg32::seed_from_u64(3);
        assert!(Apple::spawn(&g, &snake, &mut rng).is_none());
    }
}
