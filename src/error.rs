use thiserror::Error;

use crate::vehicle::VehicleId;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SceneError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The vehicle finished its traversal and was dropped from the arena.
    #[error("vehicle {0} does not exist or has already been removed")]
    UnknownVehicle(VehicleId),

    #[error("render backend error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
