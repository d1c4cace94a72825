#![no_std]

mod config;
mod flags;
mod gate;
pub mod filter;
pub mod fsm;

pub use config::{ACTIVE_THRESHOLD, ALERT_HIGH, ALERT_LOW, EMA_ALPHA_Q15, Q15_HALF, Q15_ONE};
pub use filter::EmaFilter;
pub use flags::StatusFlags;
pub use fsm::{Latch, Mode, Rule, RULES, transition};
pub use gate::ModeGate;
