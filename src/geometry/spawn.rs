use crate::constants::*;
use crate::geometry::position::Position;
use crate::intersection::Lane;

/// Endpoints of one straight traversal across the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub start: Position,
    pub end: Position,
}

impl Route {
    pub const fn new(start: Position, end: Position) -> Self {
        Route { start, end }
    }
}

/// Routes spawned by one firing of a lane timer. Horizontal lanes carry a
/// single car; vertical lanes spawn one per sub-lane.
pub fn get_spawn_routes(lane: Lane) -> Vec<Route> {
    match lane {
        Lane::LeftHorizontal => {
            let (from, to) = LEFT_LANE_SPAN;
            vec![Route::new(
                Position::new(from, LEFT_LANE_Y),
                Position::new(to, LEFT_LANE_Y),
            )]
        }
        Lane::RightHorizontal => {
            let (from, to) = RIGHT_LANE_SPAN;
            vec![Route::new(
                Position::new(from, RIGHT_LANE_Y),
                Position::new(to, RIGHT_LANE_Y),
            )]
        }
        Lane::TopVertical => {
            let (from, to) = TOP_LANE_SPAN;
            TOP_LANE_XS
                .iter()
                .map(|&x| Route::new(Position::new(x, from), Position::new(x, to)))
                .collect()
        }
        Lane::BottomVertical => {
            let (from, to) = BOTTOM_LANE_SPAN;
            BOTTOM_LANE_XS
                .iter()
                .map(|&x| Route::new(Position::new(x, from), Position::new(x, to)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn vertical_lanes_spawn_two_cars() {
        assert_eq!(get_spawn_routes(Lane::TopVertical).len(), 2);
        assert_eq!(get_spawn_routes(Lane::BottomVertical).len(), 2);
        assert_eq!(get_spawn_routes(Lane::LeftHorizontal).len(), 1);
        assert_eq!(get_spawn_routes(Lane::RightHorizontal).len(), 1);
    }

    #[test]
    fn every_route_heads_the_lane_way() {
        let expected = [
            (Lane::LeftHorizontal, Direction::Right),
            (Lane::RightHorizontal, Direction::Left),
            (Lane::TopVertical, Direction::Down),
            (Lane::BottomVertical, Direction::Up),
        ];
        for (lane, heading) in expected {
            for route in get_spawn_routes(lane) {
                assert_eq!(Direction::of_motion(&route.start, &route.end), heading, "{lane:?}");
            }
        }
    }

    #[test]
    fn routes_move_along_one_axis_only() {
        for lane in Lane::ALL {
            for route in get_spawn_routes(lane) {
                let dx = route.start.x != route.end.x;
                let dy = route.start.y != route.end.y;
                assert!(dx ^ dy, "{lane:?} route is not straight: {route:?}");
            }
        }
    }
}
