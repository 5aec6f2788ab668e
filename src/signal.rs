use std::fmt;

use crate::geometry::Position;
use crate::intersection::LaneGroup;
use crate::surface::{EntityHandle, RenderSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(pub usize);

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalState {
    #[default]
    Stop,
    Go,
}

/// A traffic light guarding one lane group. Everything a surface needs to
/// draw it follows from `state`.
#[derive(Debug, Clone)]
pub struct Signal {
    id: SignalId,
    group: LaneGroup,
    post: Position,
    state: SignalState,
}

impl Signal {
    /// Creates a signal showing `Stop` and registers it with the surface.
    pub fn new(
        id: SignalId,
        group: LaneGroup,
        post: Position,
        surface: &mut dyn RenderSurface,
    ) -> Self {
        surface.add_entity(EntityHandle::Signal(id));
        Signal {
            id,
            group,
            post,
            state: SignalState::Stop,
        }
    }

    pub fn set_state(&mut self, state: SignalState, surface: &mut dyn RenderSurface) {
        self.state = state;
        surface.signal_changed(self.id, state);
    }

    pub fn state(&self) -> SignalState {
        self.state
    }

    pub fn id(&self) -> SignalId {
        self.id
    }

    pub fn group(&self) -> LaneGroup {
        self.group
    }

    pub fn post(&self) -> Position {
        self.post
    }
}
