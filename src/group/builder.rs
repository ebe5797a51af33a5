//! Builder for constructing light groups.

use crate::core::{NominalState, DEFAULT_HISTORY_LIMIT};
use crate::group::controller::LightGroup;
use crate::group::error::BuildError;
use crate::group::topology::Topology;
use crate::light::TrafficLight;
use stillwater::validation::Validation;

/// Builder for light groups with a fluent API.
///
/// # Example
///
/// ```rust
/// use crossing::core::NominalState;
/// use crossing::group::LightGroup;
///
/// let group = LightGroup::builder()
///     .light(1, NominalState::Red)
///     .light(2, NominalState::Green)
///     .build()
///     .unwrap();
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct LightGroupBuilder {
    topology: Topology,
    history_limit: usize,
}

impl LightGroupBuilder {
    /// Create a new builder with an empty table.
    pub fn new() -> Self {
        Self {
            topology: Topology::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Replace the wiring table.
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Append one light to the wiring table.
    pub fn light(mut self, id: u32, nominal: NominalState) -> Self {
        self.topology.push(id, nominal);
        self
    }

    /// Number of transitions each light retains.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the group.
    ///
    /// Checks run in order: the topology first, reporting every violation
    /// in the table at once, then the history limit. Lights are ordered by
    /// id so group operations always visit them in id order.
    pub fn build(self) -> Result<LightGroup, BuildError> {
        if let Validation::Failure(violations) = self.topology.validate() {
            return Err(BuildError::InvalidTopology(
                violations.iter().cloned().collect(),
            ));
        }

        if self.history_limit == 0 {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let mut lights: Vec<TrafficLight> = self
            .topology
            .lights()
            .iter()
            .map(|spec| TrafficLight::with_history_limit(spec.id, spec.nominal, self.history_limit))
            .collect();
        lights.sort_by_key(TrafficLight::id);

        Ok(LightGroup::from_lights(lights))
    }
}

impl Default for LightGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
