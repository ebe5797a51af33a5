//! Build errors for light groups.

use crate::group::topology::TopologyViolation;
use thiserror::Error;

/// Errors that can occur when building a light group.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid topology: {}", join(.0))]
    InvalidTopology(Vec<TopologyViolation>),

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,
}

fn join(violations: &[TopologyViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
