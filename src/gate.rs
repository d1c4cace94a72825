use crate::filter::EmaFilter;
use crate::flags::StatusFlags;
use crate::fsm::{self, Latch, Mode};

/// Owns the filter and mode state for one sensor channel.
///
/// Single-threaded by design: nothing blocks or suspends, and the caller
/// is expected to drive `process` from exactly one execution context, once
/// per control cycle. Before `init` every `process` call is a silent no-op.
pub struct ModeGate {
    mode: Mode,
    flags: StatusFlags,
    filter: EmaFilter,
    last_filtered: i16,
}

impl ModeGate {
    /// Create an uninitialized gate. `init` must run before the first
    /// `process` call has any effect.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Idle,
            flags: StatusFlags::empty(),
            filter: EmaFilter::new(),
            last_filtered: 0,
        }
    }

    /// Reset all state and derive the starting mode from `seed`.
    ///
    /// The seed preloads the filter readback (so `filtered_value` returns
    /// it until the first real update) and runs through the same transition
    /// table a per-cycle step uses, from Idle — a seed at or above the high
    /// threshold therefore starts in Alert with the latch already set.
    pub fn init(&mut self, seed: i16) {
        self.flags = StatusFlags::empty();
        self.filter.reset();
        self.filter.seed(seed);
        self.last_filtered = seed;

        let (mode, latch) = fsm::transition(Mode::Idle, seed);
        self.mode = mode;
        self.apply_latch(latch);

        self.flags.insert(StatusFlags::INITIALIZED);
    }

    /// Advance by one sample.
    ///
    /// Ordering matters: the crossed latch is pre-cleared (unless currently
    /// in Alert) before the filter runs, and the machine step may re-set it
    /// within the same call.
    pub fn process(&mut self, raw: i16) {
        if !self.flags.contains(StatusFlags::INITIALIZED) {
            return;
        }

        if self.mode != Mode::Alert {
            self.flags.remove(StatusFlags::THRESHOLD_CROSSED);
        }

        self.last_filtered = self.filter.update(raw);
        if self.filter.is_stable() {
            self.flags.insert(StatusFlags::FILTER_STABLE);
        }

        let (mode, latch) = fsm::transition(self.mode, self.last_filtered);
        self.mode = mode;
        self.apply_latch(latch);
    }

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current status flags.
    pub fn status(&self) -> StatusFlags {
        self.flags
    }

    /// Last filtered sample (the seed value until the first update).
    pub fn filtered_value(&self) -> i16 {
        self.last_filtered
    }

    fn apply_latch(&mut self, latch: Latch) {
        match latch {
            Latch::None => {}
            Latch::Set => self.flags.insert(StatusFlags::THRESHOLD_CROSSED),
            Latch::Clear => self.flags.remove(StatusFlags::THRESHOLD_CROSSED),
        }
    }
}

impl Default for ModeGate {
    fn default() -> Self {
        Self::new()
    }
}
