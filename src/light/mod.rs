//! Per-light state machine.
//!
//! A [`TrafficLight`] owns its id, its nominal wiring and exactly one
//! current state. Every operation is synchronous and runs to completion.

mod error;
mod machine;

pub use error::LightError;
pub use machine::TrafficLight;
