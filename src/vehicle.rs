use std::fmt;
use std::time::Duration;

use crate::direction::{Axis, Direction};
use crate::geometry::{Position, Route};
use crate::intersection::Lane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u64);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One car crossing the scene along a single axis at constant speed.
///
/// The coordinate across the axis of motion is pinned to the end point's
/// value for the whole traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    lane: Option<Lane>,
    axis: Axis,
    heading: Direction,
    start: Position,
    end: Position,
    fixed: f64,
    elapsed: Duration,
    duration: Duration,
}

impl Vehicle {
    pub fn new(id: VehicleId, route: Route, duration: Duration, lane: Option<Lane>) -> Self {
        let Route { start, end } = route;
        let axis = Axis::of_motion(&start, &end);
        let fixed = end.coordinate(axis.cross());

        if start.coordinate(axis.cross()) != fixed {
            tracing::warn!(
                vehicle = %id,
                %start,
                %end,
                ?axis,
                "route moves along both axes; animating {axis:?} only"
            );
        }

        Vehicle {
            id,
            lane,
            axis,
            heading: Direction::of_motion(&start, &end),
            start,
            end,
            fixed,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn lane(&self) -> Option<Lane> {
        self.lane
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Moves the animation clock forward, never past `duration`.
    /// Returns whether the traversal is finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn position(&self) -> Position {
        let moving = Position::lerp(
            self.start.coordinate(self.axis),
            self.end.coordinate(self.axis),
            self.progress(),
        );
        match self.axis {
            Axis::Horizontal => Position::new(moving, self.fixed),
            Axis::Vertical => Position::new(self.fixed, moving),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn horizontal() -> Vehicle {
        let route = Route::new(Position::new(50.0, 257.0), Position::new(755.0, 257.0));
        Vehicle::new(VehicleId(1), route, ms(2000), None)
    }

    #[test]
    fn moves_linearly_along_x() {
        let mut car = horizontal();
        assert_eq!(car.axis(), Axis::Horizontal);
        assert_eq!(car.position(), Position::new(50.0, 257.0));

        assert!(!car.advance(ms(500)));
        assert_eq!(car.position(), Position::new(226.25, 257.0));

        assert!(!car.advance(ms(500)));
        assert_eq!(car.position(), Position::new(402.5, 257.0));
    }

    #[test]
    fn lands_exactly_on_end_without_overshoot() {
        let mut car = horizontal();
        assert!(car.advance(ms(2500)));
        assert_eq!(car.elapsed(), ms(2000));
        assert_eq!(car.remaining(), Duration::ZERO);
        assert_eq!(car.position(), car.end());
    }

    #[test]
    fn oversized_step_saturates() {
        let mut car = horizontal();
        car.advance(ms(10));
        assert!(car.advance(Duration::MAX));
        assert_eq!(car.position(), car.end());
    }

    #[test]
    fn vertical_route_ignores_x_delta_and_pins_end_x() {
        let route = Route::new(Position::new(587.0, 25.0), Position::new(647.0, 600.0));
        let mut car = Vehicle::new(VehicleId(2), route, ms(2000), Some(Lane::TopVertical));
        assert_eq!(car.axis(), Axis::Vertical);
        assert_eq!(car.heading(), Direction::Down);
        assert_eq!(car.position(), Position::new(647.0, 25.0));

        car.advance(ms(1000));
        assert_eq!(car.position(), Position::new(647.0, 312.5));
        car.advance(ms(1000));
        assert_eq!(car.position(), Position::new(647.0, 600.0));
    }

    #[test]
    fn upward_motion_interpolates_downward_values() {
        let route = Route::new(Position::new(187.0, 460.0), Position::new(187.0, -155.0));
        let mut car = Vehicle::new(VehicleId(3), route, ms(2000), Some(Lane::BottomVertical));
        assert_eq!(car.heading(), Direction::Up);
        car.advance(ms(1000));
        assert_eq!(car.position(), Position::new(187.0, 152.5));
    }
}
