use std::time::Duration;

use crate::geometry::Position;

pub const WINDOW_SIZE: u32 = 800;
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / 60);

pub const ALTERNATION_PERIOD: Duration = Duration::from_millis(7000);
pub const MIN_SPAWN_INTERVAL: Duration = Duration::from_millis(1000);
// exclusive
pub const MAX_SPAWN_INTERVAL: Duration = Duration::from_millis(6000);
pub const VEHICLE_TRAVEL_TIME: Duration = Duration::from_millis(2000);

// Scene coordinates of the road centre lines, derived from the 800x800 backdrop.
const HALF_WIDTH: f64 = 387.0;
const HALF_HEIGHT: f64 = 325.0;

pub const LEFT_LANE_Y: f64 = 251.0;
pub const RIGHT_LANE_Y: f64 = HALF_HEIGHT - 295.0;
pub const TOP_LANE_XS: [f64; 2] = [HALF_WIDTH + 260.0, HALF_WIDTH - 145.0];
pub const BOTTOM_LANE_XS: [f64; 2] = [HALF_WIDTH + 200.0, HALF_WIDTH - 200.0];

pub const LEFT_LANE_SPAN: (f64, f64) = (50.0, 755.0);
pub const RIGHT_LANE_SPAN: (f64, f64) = (775.0, -775.0);
pub const TOP_LANE_SPAN: (f64, f64) = (HALF_HEIGHT - 300.0, 600.0);
pub const BOTTOM_LANE_SPAN: (f64, f64) = (HALF_HEIGHT + 135.0, HALF_HEIGHT - 480.0);

/// Where the four signal posts stand, in construction order.
pub const SIGNAL_POSTS: [Position; 4] = [
    Position { x: 675.0, y: 200.0 },
    Position { x: 120.0, y: 190.0 },
    Position { x: 270.0, y: 195.0 },
    Position { x: 525.0, y: 190.0 },
];
