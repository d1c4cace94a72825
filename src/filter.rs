use crate::config::{EMA_ALPHA_Q15, Q15_HALF, Q15_ONE};

/// Exponential moving average in Q15 fixed point.
///
/// The running average is held at extended precision in an `i32`
/// accumulator (sample value shifted left 15 bits); the steady-state
/// update multiplies in `i64` so the intermediate products cannot
/// overflow. No floating point anywhere, so the output sequence is
/// bit-reproducible for a given input sequence.
#[derive(Debug, Clone, Copy)]
pub struct EmaFilter {
    acc_q15: i32,
    stable: bool,
}

impl EmaFilter {
    /// Create a new filter in the cold (unstable) state.
    pub const fn new() -> Self {
        Self {
            acc_q15: 0,
            stable: false,
        }
    }

    /// Preset the accumulator without marking the filter stable.
    ///
    /// The next `update` still takes the cold path and re-seeds from its
    /// input; this only determines what `(acc + half) >> 15` would read
    /// back in the meantime.
    pub fn seed(&mut self, value: i16) {
        self.acc_q15 = (value as i32) << 15;
        self.stable = false;
    }

    /// Fold one raw sample into the average and return the rounded result.
    ///
    /// Cold path: while unstable the input passes through unchanged and
    /// becomes the new accumulator, avoiding the ramp-up transient a zero
    /// seed would cause. Afterwards the usual recurrence applies:
    /// `acc = (alpha * input + (1 - alpha) * acc) >> 15`.
    pub fn update(&mut self, input: i16) -> i16 {
        let input_q15 = (input as i32) << 15;

        if !self.stable {
            self.acc_q15 = input_q15;
            self.stable = true;
        } else {
            let new_term = EMA_ALPHA_Q15 as i64 * input_q15 as i64;
            let history = (Q15_ONE - EMA_ALPHA_Q15) as i64 * self.acc_q15 as i64;
            self.acc_q15 = ((new_term + history) >> 15) as i32;
        }

        // Round to nearest: add half a unit before dropping the fraction.
        ((self.acc_q15 + Q15_HALF) >> 15) as i16
    }

    /// Whether the accumulator holds a true running average rather than a
    /// cold seed.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Return to the cold state.
    pub fn reset(&mut self) {
        self.acc_q15 = 0;
        self.stable = false;
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new()
    }
}
