use std::fmt;
use std::time::Duration;

use crate::intersection::{Lane, RightOfWay};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_vehicles_spawned: u32,
    pub vehicles_completed: u32,
    pub max_congestion: usize,
    pub vertical_phases: u32,
    pub horizontal_phases: u32,
    pub simulated: Duration,

    vehicles_by_lane: [u32; 4], // LH, RH, TV, BV
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vehicle_spawn(&mut self, lane: Option<Lane>) {
        self.total_vehicles_spawned += 1;
        if let Some(lane) = lane {
            self.vehicles_by_lane[lane.index()] += 1;
        }
    }

    pub fn record_vehicle_completion(&mut self) {
        self.vehicles_completed += 1;
    }

    pub fn record_alternation(&mut self, phase: RightOfWay) {
        match phase {
            RightOfWay::VerticalGreen => self.vertical_phases += 1,
            RightOfWay::HorizontalGreen => self.horizontal_phases += 1,
        }
    }

    pub fn update(&mut self, now: Duration, active_vehicles: usize) {
        self.simulated = now;
        self.max_congestion = self.max_congestion.max(active_vehicles);
    }

    pub fn spawned_on(&self, lane: Lane) -> u32 {
        self.vehicles_by_lane[lane.index()]
    }

    pub fn alternations(&self) -> u32 {
        self.vertical_phases + self.horizontal_phases
    }

    pub fn throughput_per_minute(&self) -> f64 {
        let secs = self.simulated.as_secs_f64();
        if secs > 0.0 {
            self.vehicles_completed as f64 * 60.0 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(f, "║                      FINAL STATISTICS                        ║")?;
        writeln!(f, "╠══════════════════════════════════════════════════════════════╣")?;
        writeln!(f, "║ Simulated Time: {:>12.1}s                                ║", self.simulated.as_secs_f64())?;
        writeln!(f, "║ Total Vehicles Spawned: {:<8}                             ║", self.total_vehicles_spawned)?;
        writeln!(f, "║ Vehicles Completed: {:<12}                             ║", self.vehicles_completed)?;
        writeln!(f, "║ Throughput: {:>16.1} veh/min                      ║", self.throughput_per_minute())?;
        writeln!(f, "╠══════════════════════════════════════════════════════════════╣")?;
        for lane in Lane::ALL {
            writeln!(f, "║ {:<18} {:>8} vehicles                       ║", format!("{lane:?}"), self.spawned_on(lane))?;
        }
        writeln!(f, "╠══════════════════════════════════════════════════════════════╣")?;
        writeln!(f, "║ Vertical Green Phases: {:<8}                              ║", self.vertical_phases)?;
        writeln!(f, "║ Horizontal Green Phases: {:<8}                            ║", self.horizontal_phases)?;
        writeln!(f, "║ Max Congestion: {:<16} vehicles                  ║", self.max_congestion)?;
        write!(f, "╚══════════════════════════════════════════════════════════════╝")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_spawns_per_lane() {
        let mut stats = Statistics::new();
        stats.record_vehicle_spawn(Some(Lane::TopVertical));
        stats.record_vehicle_spawn(Some(Lane::TopVertical));
        stats.record_vehicle_spawn(None);
        assert_eq!(stats.total_vehicles_spawned, 3);
        assert_eq!(stats.spawned_on(Lane::TopVertical), 2);
        assert_eq!(stats.spawned_on(Lane::LeftHorizontal), 0);
    }

    #[test]
    fn throughput_is_zero_before_time_passes() {
        let mut stats = Statistics::new();
        assert_eq!(stats.throughput_per_minute(), 0.0);
        stats.vehicles_completed = 10;
        stats.update(Duration::from_secs(30), 4);
        assert_eq!(stats.throughput_per_minute(), 20.0);
        stats.update(Duration::from_secs(31), 2);
        assert_eq!(stats.max_congestion, 4);
    }

    #[test]
    fn table_mentions_every_lane() {
        let mut stats = Statistics::new();
        stats.record_alternation(RightOfWay::VerticalGreen);
        stats.record_alternation(RightOfWay::HorizontalGreen);
        assert_eq!(stats.alternations(), 2);
        let table = stats.to_string();
        for lane in Lane::ALL {
            assert!(table.contains(&format!("{lane:?}")));
        }
    }
}
