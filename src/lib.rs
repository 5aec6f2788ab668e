//! Four-way intersection scheduler.
//!
//! Two signal pairs trade right-of-way on a fixed period. While a lane group
//! holds green its two lane timers spawn vehicles at randomized intervals;
//! each vehicle crosses the scene in a straight line and is removed on
//! arrival. Everything runs on one virtual clock, driven through [`Scene`].

pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod random;
pub mod scene;
pub mod signal;
pub mod statistics;
pub mod surface;
pub mod timer;
pub mod vehicle;
pub mod vehicle_manager;

#[cfg(feature = "window")]
pub mod renderer;

pub use config::SimulationConfig;
pub use error::{Result, SceneError};
pub use intersection::{IntersectionController, Lane, LaneGroup, RightOfWay};
pub use random::{IntervalSource, ScriptedIntervals, SimRng};
pub use scene::Scene;
pub use signal::{Signal, SignalId, SignalState};
pub use surface::{EntityHandle, RecordingSurface, RenderSurface, TraceSurface};
pub use vehicle::{Vehicle, VehicleId};
