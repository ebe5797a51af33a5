//! Group controller for a crossing.
//!
//! A [`LightGroup`] owns the lights of one crossing, built from a
//! [`Topology`] wiring table, and broadcasts advance, emit and attention
//! operations to all of them.

mod builder;
mod controller;
mod error;
mod topology;

pub use builder::LightGroupBuilder;
pub use controller::LightGroup;
pub use error::BuildError;
pub use topology::{LightSpec, Topology, TopologyViolation, PLUS_CROSSING};
