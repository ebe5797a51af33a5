//! Core state machine types.
//!
//! This module contains the pure part of the crate:
//! - The `State` trait and the `LightState` variant set
//! - Nominal states and where a reset lands
//! - Signal readout values
//! - Bounded transition history

mod history;
mod nominal;
mod signal;
mod state;

pub use history::{StateHistory, StateTransition, Trigger, DEFAULT_HISTORY_LIMIT};
pub use nominal::NominalState;
pub use signal::{Signal, SignalLabel};
pub use state::{LightState, State};
