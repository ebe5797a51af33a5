//! Errors raised by a single light.

use crate::core::LightState;
use thiserror::Error;

/// Errors that can occur when driving a light.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LightError {
    /// `advance` was called while the light has no successor state.
    #[error("light {id} cannot advance from {state}")]
    UnsupportedTransition { id: u32, state: LightState },
}
