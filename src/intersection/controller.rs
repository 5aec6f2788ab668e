use std::ops::Range;
use std::time::Duration;

use crate::config::SimulationConfig;
use crate::constants::SIGNAL_POSTS;
use crate::intersection::{Lane, LaneGroup, RightOfWay};
use crate::random::IntervalSource;
use crate::signal::{Signal, SignalId, SignalState};
use crate::surface::RenderSurface;
use crate::timer::Timer;

const SIGNAL_GROUPS: [LaneGroup; 4] = [
    LaneGroup::Vertical,
    LaneGroup::Horizontal,
    LaneGroup::Vertical,
    LaneGroup::Horizontal,
];

/// What became due at one instant of the simulation clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Firing {
    /// Phase applied by an alternation tick, if one fired.
    pub alternated: Option<RightOfWay>,
    /// Lanes whose spawn timers fired, in lane order.
    pub lanes: Vec<Lane>,
}

/// Owns the signals, the alternation timer and the four lane spawn timers.
///
/// Nothing is armed until `start`. The first alternation tick grants
/// `VerticalGreen`; until then every signal shows `Stop` and no lane spawns.
pub struct IntersectionController<R> {
    alternation_period: Duration,
    spawn_bounds: Range<Duration>,
    alternation: Timer,
    lane_timers: [Timer; 4],
    signals: Vec<Signal>,
    right_of_way: Option<RightOfWay>,
    pending: RightOfWay,
    intervals: R,
}

impl<R: IntervalSource> IntersectionController<R> {
    pub fn new(config: &SimulationConfig, intervals: R, surface: &mut dyn RenderSurface) -> Self {
        let signals = SIGNAL_POSTS
            .iter()
            .zip(SIGNAL_GROUPS)
            .enumerate()
            .map(|(i, (&post, group))| Signal::new(SignalId(i), group, post, surface))
            .collect();

        IntersectionController {
            alternation_period: config.alternation_period,
            spawn_bounds: config.min_spawn_interval..config.max_spawn_interval,
            alternation: Timer::new(),
            lane_timers: Default::default(),
            signals,
            right_of_way: None,
            pending: RightOfWay::VerticalGreen,
            intervals,
        }
    }

    /// Arms the alternation timer. A running controller keeps its phase.
    pub fn start(&mut self, now: Duration) {
        if self.alternation.is_armed() {
            tracing::debug!("start ignored, alternation already running");
            return;
        }
        self.alternation.arm(now, self.alternation_period);
        tracing::info!(
            period_ms = self.alternation_period.as_millis() as u64,
            next = ?self.pending,
            "intersection started"
        );
    }

    /// Disarms all five timers and turns every signal to `Stop`.
    /// Vehicles already on the road are not affected.
    pub fn stop(&mut self, surface: &mut dyn RenderSurface) {
        let was_running = self.is_running();
        for signal in &mut self.signals {
            signal.set_state(SignalState::Stop, surface);
        }
        self.alternation.disarm();
        for timer in &mut self.lane_timers {
            timer.disarm();
        }
        self.right_of_way = None;
        if was_running {
            tracing::info!(next = ?self.pending, "intersection stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.alternation.is_armed()
    }

    /// Phase currently in force; `None` before the first tick and after `stop`.
    pub fn right_of_way(&self) -> Option<RightOfWay> {
        self.right_of_way
    }

    /// Phase the next alternation tick will apply.
    pub fn pending(&self) -> RightOfWay {
        self.pending
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn signal(&self, id: SignalId) -> Option<&Signal> {
        self.signals.get(id.0)
    }

    /// State shown by the signals of `group`, or `None` if they disagree.
    pub fn group_state(&self, group: LaneGroup) -> Option<SignalState> {
        let mut states = self
            .signals
            .iter()
            .filter(|s| s.group() == group)
            .map(|s| s.state());
        let first = states.next()?;
        states.all(|s| s == first).then_some(first)
    }

    pub fn alternation_timer(&self) -> &Timer {
        &self.alternation
    }

    pub fn lane_timer(&self, lane: Lane) -> &Timer {
        &self.lane_timers[lane.index()]
    }

    pub fn armed_timers(&self) -> usize {
        self.lane_timers
            .iter()
            .chain(std::iter::once(&self.alternation))
            .filter(|t| t.is_armed())
            .count()
    }

    /// Earliest deadline over all armed timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.lane_timers
            .iter()
            .chain(std::iter::once(&self.alternation))
            .filter_map(|t| t.deadline())
            .min()
    }

    /// Fires every timer due at `now`. The alternation tick goes first, so a
    /// lane it disarms at this instant does not spawn.
    pub fn fire_due(&mut self, now: Duration, surface: &mut dyn RenderSurface) -> Firing {
        let mut firing = Firing::default();
        if self.alternation.fire(now) {
            firing.alternated = Some(self.alternate(now, surface));
        }
        for lane in Lane::ALL {
            if self.lane_timers[lane.index()].fire(now) {
                firing.lanes.push(lane);
            }
        }
        firing
    }

    fn alternate(&mut self, now: Duration, surface: &mut dyn RenderSurface) -> RightOfWay {
        let phase = self.pending;
        let green = phase.green_group();
        let [lead, trail] = green.lanes();
        let first = self.draw_interval(lead);
        let second = self.draw_interval(trail);

        // Signals settle before any timer changes.
        for signal in &mut self.signals {
            let state = if signal.group() == green {
                SignalState::Go
            } else {
                SignalState::Stop
            };
            signal.set_state(state, surface);
        }

        for lane in green.other().lanes() {
            self.lane_timers[lane.index()].disarm();
        }
        self.lane_timers[lead.index()].arm(now, first);
        self.lane_timers[trail.index()].arm(now, second);

        self.right_of_way = Some(phase);
        self.pending = phase.flipped();

        tracing::info!(
            ?phase,
            at_ms = now.as_millis() as u64,
            lead = ?lead,
            lead_ms = first.as_millis() as u64,
            trail = ?trail,
            trail_ms = second.as_millis() as u64,
            "right of way changed"
        );
        phase
    }

    /// Draws the next period for `lane`, clamped into `[min, max)`.
    fn draw_interval(&mut self, lane: Lane) -> Duration {
        let bounds = self.spawn_bounds.clone();
        let drawn = self.intervals.next_interval(bounds.clone());
        if bounds.contains(&drawn) {
            return drawn;
        }
        let ceiling = bounds
            .end
            .saturating_sub(Duration::from_millis(1))
            .max(bounds.start);
        let clamped = drawn.clamp(bounds.start, ceiling);
        tracing::warn!(
            ?lane,
            drawn_ms = drawn.as_millis() as u64,
            clamped_ms = clamped.as_millis() as u64,
            "spawn interval out of range, clamped"
        );
        clamped
    }
}
