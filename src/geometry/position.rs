use std::fmt;

use crate::direction::Axis;

/// A point in scene coordinates (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Linear interpolation between two scalars. `t` is clamped to `[0, 1]`
    /// and the end value is returned exactly once `t` reaches 1.
    pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
        if t >= 1.0 {
            to
        } else if t <= 0.0 {
            from
        } else {
            from + (to - from) * t
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_exact_at_both_ends() {
        assert_eq!(Position::lerp(50.0, 755.0, 0.0), 50.0);
        assert_eq!(Position::lerp(50.0, 755.0, 1.0), 755.0);
        assert_eq!(Position::lerp(50.0, 755.0, 1.5), 755.0);
        assert_eq!(Position::lerp(50.0, 755.0, 0.5), 402.5);
    }

    #[test]
    fn coordinate_picks_the_axis() {
        let p = Position::new(3.0, 4.0);
        assert_eq!(p.coordinate(Axis::Horizontal), 3.0);
        assert_eq!(p.coordinate(Axis::Vertical), 4.0);
    }
}
