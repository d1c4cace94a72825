/// Q15 smoothing weight for new samples. Smaller = smoother and slower.
/// 3277 / 32768 ≈ 0.1.
pub const EMA_ALPHA_Q15: i32 = 3277;

/// One in Q15 fixed point.
pub const Q15_ONE: i32 = 1 << 15;

/// Half a unit in Q15, pre-added before the final shift to round to nearest.
pub const Q15_HALF: i32 = 1 << 14;

/// Filtered values at or above this leave Idle for Active.
pub const ACTIVE_THRESHOLD: i16 = 300;

/// Filtered values at or above this enter Alert.
pub const ALERT_HIGH: i16 = 850;

/// Alert is only left once the filtered value drops below this.
/// Must sit below `ALERT_HIGH`; the gap is the Alert dead band.
pub const ALERT_LOW: i16 = 830;

// Threshold ordering the transition table relies on. Checked at compile
// time since none of these are runtime-tunable.
const _: () = {
    assert!(ALERT_LOW < ALERT_HIGH, "ALERT_LOW must sit below ALERT_HIGH");
    assert!(ACTIVE_THRESHOLD < ALERT_HIGH, "ACTIVE_THRESHOLD must sit below ALERT_HIGH");
    assert!(ACTIVE_THRESHOLD < ALERT_LOW, "Alert must exit into the Active band, not above it");
    assert!(0 < EMA_ALPHA_Q15 && EMA_ALPHA_Q15 <= Q15_ONE, "alpha must be in (0, 1] in Q15");
};
