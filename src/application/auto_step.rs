/// Periodic trigger for auto-stepping, driven by frame time.
///
/// It only decides *when* a generation is due; the caller owns the grid and
/// runs the step itself, so nothing here holds on to board state.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoStepper {
    interval_ms: u64,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Stopped,
    /// Waiting out a hold delay before running
    Armed { remaining: f32 },
    Running { timer: f32 },
}

pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 2000;

impl AutoStepper {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS),
            phase: Phase::Stopped,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    }

    /// Start firing every `interval_ms`
    pub fn start(&mut self, interval_ms: u64) {
        self.set_interval_ms(interval_ms);
        self.phase = Phase::Running { timer: 0.0 };
    }

    /// Start running once `delay_ms` has elapsed, unless stopped first
    pub fn arm(&mut self, delay_ms: u64) {
        if !self.is_running() {
            self.phase = Phase::Armed { remaining: delay_ms as f32 / 1000.0 };
        }
    }

    /// Suppress all future firings
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    /// Advance the clock by `delta_time` seconds; true if a generation is due
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let interval = self.interval_ms as f32 / 1000.0;
        match &mut self.phase {
            Phase::Stopped => false,
            Phase::Armed { remaining } => {
                *remaining -= delta_time;
                if *remaining <= 0.0 {
                    self.phase = Phase::Running { timer: 0.0 };
                }
                false
            }
            Phase::Running { timer } => {
                *timer += delta_time;
                if *timer >= interval {
                    *timer = 0.0;
                    true
                } else {
                    false
                }
            }
        }
    }
}
