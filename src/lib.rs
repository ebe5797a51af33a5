//! Crossing: traffic light state machines for a four-light intersection
//!
//! Each light is a small finite state machine cycling red, yellow, green,
//! yellow. A group controller drives all lights of a crossing in lockstep
//! and can force them into a shared attention (yellow blinking) mode.
//!
//! Nothing here is time-driven: every transition happens because the
//! caller asked for it.
//!
//! # Core Concepts
//!
//! - **LightState**: the five states of a light, with successor and label
//! - **TrafficLight**: one light's state machine
//! - **LightGroup**: lights of a crossing, wired from a `Topology` table
//!
//! # Example
//!
//! ```rust
//! use crossing::{LightGroup, SignalLabel};
//!
//! let mut group = LightGroup::new();
//! group.advance_all().unwrap();
//!
//! group.attention_on_all();
//! assert!(group
//!     .emit_all()
//!     .iter()
//!     .all(|signal| signal.label == SignalLabel::YellowBlinking));
//!
//! // Advancing while blinking is a caller error.
//! assert!(group.advance_all().is_err());
//!
//! group.attention_off_all();
//! group.advance_all().unwrap();
//! ```

pub mod core;
pub mod group;
pub mod light;

// Re-export commonly used types
pub use crate::core::{LightState, NominalState, Signal, SignalLabel, State};
pub use group::{BuildError, LightGroup, Topology};
pub use light::{LightError, TrafficLight};
