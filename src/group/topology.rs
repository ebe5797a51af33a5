//! Wiring tables describing which lights a crossing has.

use crate::core::NominalState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// One row of a wiring table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LightSpec {
    pub id: u32,
    pub nominal: NominalState,
}

/// Problems found in a wiring table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopologyViolation {
    #[error("topology has no lights")]
    Empty,

    #[error("light ids must be positive")]
    ZeroId,

    #[error("light id {id} appears more than once")]
    DuplicateId { id: u32 },
}

/// "+"-crossing: lane A (ids 1, 2) starts red, lane B (ids 3, 4) starts green.
pub const PLUS_CROSSING: [LightSpec; 4] = [
    LightSpec {
        id: 1,
        nominal: NominalState::Red,
    },
    LightSpec {
        id: 2,
        nominal: NominalState::Red,
    },
    LightSpec {
        id: 3,
        nominal: NominalState::Green,
    },
    LightSpec {
        id: 4,
        nominal: NominalState::Green,
    },
];

/// Ordered wiring table of a crossing.
///
/// Lanes are implied by nominal state: lights wired red move together,
/// as do lights wired green, and the two groups are complementary.
///
/// # Example
///
/// ```rust
/// use crossing::core::NominalState;
/// use crossing::group::Topology;
///
/// let t_crossing = Topology::new([
///     (1, NominalState::Red),
///     (2, NominalState::Green),
///     (3, NominalState::Green),
/// ]);
/// assert!(t_crossing.validate().is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    lights: Vec<LightSpec>,
}

impl Topology {
    /// Create a table from `(id, nominal)` rows, kept in the given order.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, NominalState)>,
    {
        Self {
            lights: entries
                .into_iter()
                .map(|(id, nominal)| LightSpec { id, nominal })
                .collect(),
        }
    }

    /// The four-light "+"-crossing.
    pub fn plus_crossing() -> Self {
        Self {
            lights: PLUS_CROSSING.to_vec(),
        }
    }

    /// Append one row.
    pub fn push(&mut self, id: u32, nominal: NominalState) {
        self.lights.push(LightSpec { id, nominal });
    }

    /// Rows in table order.
    pub fn lights(&self) -> &[LightSpec] {
        &self.lights
    }

    /// Number of lights in the table.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// True when the table has no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Check the table, accumulating every violation rather than stopping
    /// at the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TopologyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TopologyViolation>>> = Vec::new();

        if self.lights.is_empty() {
            checks.push(Validation::fail(TopologyViolation::Empty));
        }

        let mut seen = HashSet::with_capacity(self.lights.len());
        for spec in &self.lights {
            let check = if spec.id == 0 {
                Validation::fail(TopologyViolation::ZeroId)
            } else if !seen.insert(spec.id) {
                Validation::fail(TopologyViolation::DuplicateId { id: spec.id })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
