//! The render surface the scheduler reports to.
//!
//! The scheduler never draws. It tells a [`RenderSurface`] when entities come
//! and go and when a signal swaps its lamp; the surface decides what that
//! looks like. Surfaces are passed in per call, never stored.

use std::collections::BTreeSet;
use std::fmt;

use crate::signal::{SignalId, SignalState};
use crate::vehicle::VehicleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityHandle {
    Signal(SignalId),
    Vehicle(VehicleId),
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityHandle::Signal(id) => write!(f, "signal {id}"),
            EntityHandle::Vehicle(id) => write!(f, "vehicle {id}"),
        }
    }
}

pub trait RenderSurface {
    fn add_entity(&mut self, handle: EntityHandle);
    fn remove_entity(&mut self, handle: EntityHandle);
    fn signal_changed(&mut self, id: SignalId, state: SignalState);
}

/// Logs every notification at debug level. Used by the headless runner.
#[derive(Debug, Default)]
pub struct TraceSurface {
    live: usize,
}

impl RenderSurface for TraceSurface {
    fn add_entity(&mut self, handle: EntityHandle) {
        self.live += 1;
        tracing::debug!(%handle, live = self.live, "entity added");
    }

    fn remove_entity(&mut self, handle: EntityHandle) {
        self.live = self.live.saturating_sub(1);
        tracing::debug!(%handle, live = self.live, "entity removed");
    }

    fn signal_changed(&mut self, id: SignalId, state: SignalState) {
        tracing::debug!(signal = %id, ?state, "signal lamp swapped");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Added(EntityHandle),
    Removed(EntityHandle),
    SignalChanged(SignalId, SignalState),
}

/// Keeps every notification it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    live: BTreeSet<EntityHandle>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self, handle: EntityHandle) -> bool {
        self.live.contains(&handle)
    }

    pub fn live_vehicles(&self) -> usize {
        self.live
            .iter()
            .filter(|handle| matches!(handle, EntityHandle::Vehicle(_)))
            .count()
    }

    pub fn additions_of(&self, handle: EntityHandle) -> usize {
        self.count(SurfaceEvent::Added(handle))
    }

    pub fn removals_of(&self, handle: EntityHandle) -> usize {
        self.count(SurfaceEvent::Removed(handle))
    }

    fn count(&self, event: SurfaceEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl RenderSurface for RecordingSurface {
    fn add_entity(&mut self, handle: EntityHandle) {
        self.live.insert(handle);
        self.events.push(SurfaceEvent::Added(handle));
    }

    fn remove_entity(&mut self, handle: EntityHandle) {
        self.live.remove(&handle);
        self.events.push(SurfaceEvent::Removed(handle));
    }

    fn signal_changed(&mut self, id: SignalId, state: SignalState) {
        self.events.push(SurfaceEvent::SignalChanged(id, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_tracks_live_entities() {
        let mut surface = RecordingSurface::new();
        let car = EntityHandle::Vehicle(VehicleId(3));
        surface.add_entity(EntityHandle::Signal(SignalId(0)));
        surface.add_entity(car);
        assert_eq!(surface.live_vehicles(), 1);

        surface.remove_entity(car);
        assert!(!surface.is_live(car));
        assert_eq!(surface.additions_of(car), 1);
        assert_eq!(surface.removals_of(car), 1);
        assert_eq!(surface.live_vehicles(), 0);
    }
}
