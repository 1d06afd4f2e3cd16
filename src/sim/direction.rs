//! Discrete headings for grid movement

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Heading of a discretely moving entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Next cell in the given direction (no bounds checking)
#[inline]
pub fn advance(cell: Cell, direction: Direction) -> Cell {
    let (dx, dy) = direction.delta();
    Cell::new(cell.x + dx, cell.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_three_ticks_right() {
        let mut cell = Cell::new(5, 5);
        for _ in 0..3 {
            cell = advance(cell, Direction::Right);
        }
        assert_eq!(cell, Cell::new(8, 5));
    }

    #[test]
    fn test_advance_leaves_grid_unchecked() {
        assert_eq!(advance(Cell::new(0, 0), Direction::Up), Cell::new(0, -1));
    }

    proptest! {
        #[test]
        fn prop_advance_moves_one_axis(x in -100..100i32, y in -100..100i32) {
            let c = Cell::new(x, y);
            prop_assert_eq!(advance(c, Direction::Up), Cell::new(x, y - 1));
            prop_assert_eq!(advance(c, Direction::Down), Cell::new(x, y + 1));
            prop_assert_eq!(advance(c, Direction::Right), Cell::new(x + 1, y));
            prop_assert_eq!(advance(c, Direction::Left), Cell::new(x - 1, y));
        }
    }
}
