pub mod position;
pub mod spawn;

pub use position::Position;
pub use spawn::{get_spawn_routes, Route};
