use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Result, SceneError};
use crate::geometry::Route;
use crate::intersection::Lane;
use crate::surface::{EntityHandle, RenderSurface};
use crate::vehicle::{Vehicle, VehicleId};

/// Arena owning every vehicle in flight.
///
/// A vehicle lives here from spawn until the purge pass that follows its
/// arrival. The purge moves it out of the map, deregisters it from the surface
/// and hands it back to the caller, so removal happens exactly once and a
/// stale `VehicleId` can only ever resolve to `UnknownVehicle`.
#[derive(Debug, Default)]
pub struct VehicleManager {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    next_id: u64,
}

impl VehicleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_vehicle(
        &mut self,
        route: Route,
        travel_time: Duration,
        lane: Option<Lane>,
        surface: &mut dyn RenderSurface,
    ) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;

        let vehicle = Vehicle::new(id, route, travel_time, lane);
        tracing::debug!(
            vehicle = %id,
            ?lane,
            heading = ?vehicle.heading(),
            start = %route.start,
            end = %route.end,
            "vehicle spawned"
        );
        self.vehicles.insert(id, vehicle);
        surface.add_entity(EntityHandle::Vehicle(id));
        id
    }

    pub fn update_vehicles(&mut self, dt: Duration) {
        for vehicle in self.vehicles.values_mut() {
            vehicle.advance(dt);
        }
    }

    /// Removes every vehicle that has reached its end point.
    pub fn purge_completed(&mut self, surface: &mut dyn RenderSurface) -> Vec<Vehicle> {
        let finished: Vec<VehicleId> = self
            .vehicles
            .values()
            .filter(|v| v.is_complete())
            .map(|v| v.id())
            .collect();

        let mut removed = Vec::with_capacity(finished.len());
        for id in finished {
            if let Some(vehicle) = self.vehicles.remove(&id) {
                surface.remove_entity(EntityHandle::Vehicle(id));
                tracing::debug!(vehicle = %id, end = %vehicle.end(), "vehicle arrived");
                removed.push(vehicle);
            }
        }
        removed
    }

    /// Absolute time of the earliest arrival, given the current clock.
    pub fn next_completion(&self, now: Duration) -> Option<Duration> {
        self.vehicles
            .values()
            .map(|v| now.saturating_add(v.remaining()))
            .min()
    }

    pub fn get_vehicle(&self, id: VehicleId) -> Result<&Vehicle> {
        self.vehicles.get(&id).ok_or(SceneError::UnknownVehicle(id))
    }

    pub fn get_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
