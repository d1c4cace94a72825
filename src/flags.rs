use bitflags::bitflags;

bitflags! {
    /// Observable status register of a [`crate::ModeGate`].
    ///
    /// Each flag sets and clears independently of the others.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        /// Set once by `init`, never cleared.
        const INITIALIZED = 1 << 0;

        /// Set by the first filter update after `init`, never cleared
        /// thereafter. Marks that the accumulator holds a true running
        /// average rather than a cold seed.
        const FILTER_STABLE = 1 << 1;

        /// Latched when Alert is entered through the high threshold.
        /// Cleared at the start of every cycle outside Alert, and on the
        /// cycle Alert is left through the low threshold — so it reads as
        /// "crossed this cycle" in transient states but stays up for the
        /// whole Alert dwell.
        const THRESHOLD_CROSSED = 1 << 2;
    }
}
