//! Strategy layer: prediction classification and the position state machine.

pub mod classify;
pub mod state_machine;

pub use classify::classify;
pub use state_machine::{run, run_with_sizing, step, BarState, ExitReason};
