use crate::geometry::Position;

/// The single axis a vehicle moves along.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Axis {
    /// Picks the animated axis for a straight traversal. Matching y endpoints
    /// mean horizontal motion; anything else is treated as vertical, even when
    /// x differs as well.
    pub fn of_motion(start: &Position, end: &Position) -> Axis {
        if start.y == end.y {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn cross(&self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl Direction {
    pub fn of_motion(start: &Position, end: &Position) -> Direction {
        match Axis::of_motion(start, end) {
            Axis::Horizontal if end.x < start.x => Direction::Left,
            Axis::Horizontal => Direction::Right,
            Axis::Vertical if end.y < start.y => Direction::Up,
            Axis::Vertical => Direction::Down,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}
