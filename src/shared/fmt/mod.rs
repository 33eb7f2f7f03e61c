//! Display formatting: exchange ticks, signed deltas, counts and abbreviations.
//!
//! Every function here is total. Missing or non-finite input maps to [`SENTINEL`].

pub mod decimal;
pub mod delta;
pub mod num;
pub mod tick;

pub use delta::Delta;
pub use tick::{format_signed_tick, format_tick, round_to_tick, TICK_SIZE};

/// Placeholder shown wherever a value is unavailable.
pub const SENTINEL: &str = "--";
