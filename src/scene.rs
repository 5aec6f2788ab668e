use std::time::Duration;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::geometry::{get_spawn_routes, Route};
use crate::intersection::IntersectionController;
use crate::random::IntervalSource;
use crate::statistics::Statistics;
use crate::surface::RenderSurface;
use crate::vehicle::{Vehicle, VehicleId};
use crate::vehicle_manager::VehicleManager;

/// The intersection plus everything on the road, driven by a virtual clock.
///
/// `advance` walks the clock forward and handles every due event in time
/// order: vehicle arrivals, the alternation tick, then lane spawns. Traffic
/// keeps moving after `stop`; only new spawns and the signal cycle halt.
pub struct Scene<R> {
    now: Duration,
    travel_time: Duration,
    controller: IntersectionController<R>,
    traffic: VehicleManager,
    statistics: Statistics,
}

impl<R: IntervalSource> Scene<R> {
    pub fn new(
        config: SimulationConfig,
        intervals: R,
        surface: &mut dyn RenderSurface,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Scene {
            now: Duration::ZERO,
            travel_time: config.travel_time,
            controller: IntersectionController::new(&config, intervals, surface),
            traffic: VehicleManager::new(),
            statistics: Statistics::new(),
        })
    }

    pub fn start(&mut self) {
        self.controller.start(self.now);
    }

    pub fn stop(&mut self, surface: &mut dyn RenderSurface) {
        self.controller.stop(surface);
    }

    pub fn advance(&mut self, dt: Duration, surface: &mut dyn RenderSurface) {
        let target = self.now.saturating_add(dt);
        while let Some(next) = self.next_event() {
            if next > target {
                break;
            }
            self.step_to(next, surface);
        }
        self.step_to(target, surface);
    }

    /// Puts a vehicle on the road outside of any lane timer.
    pub fn spawn_vehicle(
        &mut self,
        route: Route,
        travel_time: Duration,
        surface: &mut dyn RenderSurface,
    ) -> VehicleId {
        self.statistics.record_vehicle_spawn(None);
        self.traffic.spawn_vehicle(route, travel_time, None, surface)
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn controller(&self) -> &IntersectionController<R> {
        &self.controller
    }

    pub fn vehicle(&self, id: VehicleId) -> Result<&Vehicle> {
        self.traffic.get_vehicle(id)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.traffic.get_vehicles()
    }

    pub fn active_vehicles(&self) -> usize {
        self.traffic.len()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn next_event(&self) -> Option<Duration> {
        let arrival = self.traffic.next_completion(self.now);
        let timer = self.controller.next_deadline();
        arrival.into_iter().chain(timer).min()
    }

    fn step_to(&mut self, at: Duration, surface: &mut dyn RenderSurface) {
        self.traffic.update_vehicles(at.saturating_sub(self.now));
        self.now = at;

        for _ in self.traffic.purge_completed(surface) {
            self.statistics.record_vehicle_completion();
        }

        let firing = self.controller.fire_due(at, surface);
        if let Some(phase) = firing.alternated {
            self.statistics.record_alternation(phase);
        }
        for lane in firing.lanes {
            for route in get_spawn_routes(lane) {
                self.statistics.record_vehicle_spawn(Some(lane));
                self.traffic
                    .spawn_vehicle(route, self.travel_time, Some(lane), surface);
            }
        }

        self.statistics.update(self.now, self.traffic.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::intersection::{Lane, RightOfWay};
    use crate::random::SimRng;
    use crate::surface::{EntityHandle, RecordingSurface};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn scene(surface: &mut RecordingSurface) -> Scene<SimRng> {
        Scene::new(SimulationConfig::default(), SimRng::from_seed_u64(5), surface).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut surface = RecordingSurface::new();
        let config = SimulationConfig {
            travel_time: Duration::ZERO,
            ..SimulationConfig::default()
        };
        assert!(Scene::new(config, SimRng::default(), &mut surface).is_err());
    }

    #[test]
    fn nothing_spawns_before_the_first_tick() {
        let mut surface = RecordingSurface::new();
        let mut scene = scene(&mut surface);
        scene.start();
        scene.advance(ms(6999), &mut surface);
        assert_eq!(scene.active_vehicles(), 0);
        assert_eq!(scene.controller().right_of_way(), None);
    }

    #[test]
    fn one_large_step_equals_many_small_ones() {
        let mut surface_a = RecordingSurface::new();
        let mut a = scene(&mut surface_a);
        a.start();
        a.advance(ms(60_000), &mut surface_a);

        let mut surface_b = RecordingSurface::new();
        let mut b = scene(&mut surface_b);
        b.start();
        for _ in 0..3600 {
            b.advance(ms(1000) / 60, &mut surface_b);
        }
        b.advance(ms(60_000) - b.now(), &mut surface_b);

        assert_eq!(a.now(), b.now());
        assert_eq!(a.statistics(), b.statistics());
        assert_eq!(surface_a.events, surface_b.events);
    }

    #[test]
    fn vertical_lanes_spawn_in_pairs() {
        let mut surface = RecordingSurface::new();
        let mut scene = scene(&mut surface);
        scene.start();
        scene.advance(ms(14_000), &mut surface);

        let stats = scene.statistics();
        assert_eq!(stats.vertical_phases, 1);
        assert_eq!(stats.horizontal_phases, 1);
        assert!(stats.spawned_on(Lane::TopVertical) > 0);
        assert_eq!(stats.spawned_on(Lane::TopVertical) % 2, 0);
        assert_eq!(stats.spawned_on(Lane::BottomVertical) % 2, 0);
        assert_eq!(stats.spawned_on(Lane::LeftHorizontal), 0);
        assert_eq!(scene.controller().right_of_way(), Some(RightOfWay::HorizontalGreen));
    }

    #[test]
    fn every_spawned_vehicle_is_removed_exactly_once() {
        let mut surface = RecordingSurface::new();
        let mut scene = scene(&mut surface);
        scene.start();
        scene.advance(ms(70_000), &mut surface);
        scene.stop(&mut surface);
        scene.advance(ms(2_000), &mut surface);

        assert_eq!(scene.active_vehicles(), 0);
        assert_eq!(surface.live_vehicles(), 0);
        let stats = scene.statistics();
        assert!(stats.total_vehicles_spawned > 0);
        assert_eq!(stats.total_vehicles_spawned, stats.vehicles_completed);
        for id in 0..stats.total_vehicles_spawned as u64 {
            let handle = EntityHandle::Vehicle(VehicleId(id));
            assert_eq!(surface.additions_of(handle), 1);
            assert_eq!(surface.removals_of(handle), 1);
        }
    }

    #[test]
    fn huge_step_saturates_the_clock() {
        let mut surface = RecordingSurface::new();
        let mut scene = scene(&mut surface);
        scene.advance(ms(10), &mut surface);
        scene.advance(Duration::MAX, &mut surface);
        assert_eq!(scene.now(), Duration::MAX);
        scene.advance(ms(1), &mut surface);
        assert_eq!(scene.now(), Duration::MAX);
    }

    #[test]
    fn manual_spawn_arrives_on_time() {
        let mut surface = RecordingSurface::new();
        let mut scene = scene(&mut surface);
        let route = Route::new(Position::new(0.0, 5.0), Position::new(10.0, 5.0));
        let id = scene.spawn_vehicle(route, ms(500), &mut surface);

        scene.advance(ms(499), &mut surface);
        assert!(scene.vehicle(id).is_ok());
        scene.advance(ms(1), &mut surface);
        assert!(scene.vehicle(id).is_err());
        assert_eq!(scene.statistics().vehicles_completed, 1);
    }
}
