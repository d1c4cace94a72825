use crate::config::{ACTIVE_THRESHOLD, ALERT_HIGH, ALERT_LOW};

/// Operating mode derived from the filtered signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Active,
    Alert,
}

/// Effect a transition has on the threshold-crossed latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latch {
    /// Leave the latch as it is.
    None,
    /// Latch the crossing (Alert entered through the high threshold).
    Set,
    /// Release the latch (Alert left through the low threshold).
    Clear,
}

/// One row of the transition table: while in `from`, a filtered value
/// inside `lo..=hi` moves the machine to `to` with latch effect `latch`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub from: Mode,
    pub lo: i16,
    pub hi: i16,
    pub to: Mode,
    pub latch: Latch,
}

/// The transition table, scanned top to bottom; the first matching row
/// wins, so the Alert entry rows shadow the wider Active band below them.
///
/// Values matched by no row leave the mode unchanged. That default covers
/// the three hold cases (Idle below the active threshold, Active inside
/// its band, Alert anywhere at or above `ALERT_LOW` — the dead band that
/// stops chatter at the Alert boundary) and doubles as the defensive
/// fallback for anything else.
pub const RULES: [Rule; 6] = [
    Rule { from: Mode::Idle, lo: ALERT_HIGH, hi: i16::MAX, to: Mode::Alert, latch: Latch::Set },
    Rule { from: Mode::Idle, lo: ACTIVE_THRESHOLD, hi: i16::MAX, to: Mode::Active, latch: Latch::None },
    Rule { from: Mode::Active, lo: ALERT_HIGH, hi: i16::MAX, to: Mode::Alert, latch: Latch::Set },
    Rule { from: Mode::Active, lo: i16::MIN, hi: ACTIVE_THRESHOLD - 1, to: Mode::Idle, latch: Latch::None },
    Rule { from: Mode::Alert, lo: ACTIVE_THRESHOLD, hi: ALERT_LOW - 1, to: Mode::Active, latch: Latch::Clear },
    Rule { from: Mode::Alert, lo: i16::MIN, hi: ACTIVE_THRESHOLD - 1, to: Mode::Idle, latch: Latch::Clear },
];

/// Evaluate one step of the machine for a filtered value.
///
/// Total over the input domain: every `(Mode, i16)` pair yields a next
/// mode and a latch effect, with no failure path.
pub fn transition(from: Mode, value: i16) -> (Mode, Latch) {
    for rule in &RULES {
        if rule.from == from && rule.lo <= value && value <= rule.hi {
            return (rule.to, rule.latch);
        }
    }
    (from, Latch::None)
}
