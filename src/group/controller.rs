//! Controller broadcasting operations to a group of lights.

use crate::core::Signal;
use crate::group::builder::LightGroupBuilder;
use crate::group::topology::PLUS_CROSSING;
use crate::light::{LightError, TrafficLight};
use tracing::info;

/// A group of lights driven in lockstep.
///
/// Every group operation is applied to each light in id order. Because
/// `advance` is broadcast identically, lights wired to complementary
/// nominal states stay complementary until attention mode is engaged.
///
/// # Example
///
/// ```rust
/// use crossing::group::LightGroup;
///
/// let mut group = LightGroup::new();
/// group.advance_all().unwrap();
///
/// let lines: Vec<String> = group.emit_all().iter().map(ToString::to_string).collect();
/// assert_eq!(lines, [
///     "light 1 is Green",
///     "light 2 is Green",
///     "light 3 is Red",
///     "light 4 is Red",
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct LightGroup {
    lights: Vec<TrafficLight>,
}

impl LightGroup {
    /// The four-light "+"-crossing.
    pub fn new() -> Self {
        Self::from_lights(
            PLUS_CROSSING
                .iter()
                .map(|spec| TrafficLight::new(spec.id, spec.nominal))
                .collect(),
        )
    }

    /// Create a builder for a custom wiring table.
    pub fn builder() -> LightGroupBuilder {
        LightGroupBuilder::new()
    }

    pub(crate) fn from_lights(lights: Vec<TrafficLight>) -> Self {
        Self { lights }
    }

    /// Advance every light by one step.
    ///
    /// Stops at the first light that cannot advance and returns its error.
    /// Lights visited before it keep their new state.
    pub fn advance_all(&mut self) -> Result<(), LightError> {
        for light in &mut self.lights {
            light.advance()?;
        }
        Ok(())
    }

    /// Current signal of every light.
    pub fn emit_all(&self) -> Vec<Signal> {
        self.lights.iter().map(TrafficLight::emit_signal).collect()
    }

    /// Switch every light into attention mode.
    pub fn attention_on_all(&mut self) {
        info!(lights = self.lights.len(), "attention mode on");
        for light in &mut self.lights {
            light.enter_attention();
        }
    }

    /// Return every light to its nominal entry state.
    pub fn attention_off_all(&mut self) {
        info!(lights = self.lights.len(), "attention mode off");
        for light in &mut self.lights {
            light.exit_attention();
        }
    }

    /// True when every light is in attention mode.
    pub fn in_attention(&self) -> bool {
        !self.lights.is_empty() && self.lights.iter().all(TrafficLight::in_attention)
    }

    /// Lights in id order.
    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    /// Find a light by id.
    pub fn light(&self, id: u32) -> Option<&TrafficLight> {
        self.lights.iter().find(|light| light.id() == id)
    }

    /// Number of lights in the group.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// True when the group has no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}

impl Default for LightGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LightState, NominalState, SignalLabel};

    fn states(group: &LightGroup) -> Vec<LightState> {
        group
            .lights()
            .iter()
            .map(TrafficLight::current_state)
            .collect()
    }

    fn labels(group: &LightGroup) -> Vec<SignalLabel> {
        group.emit_all().into_iter().map(|s| s.label).collect()
    }

    const BASELINE: [LightState; 4] = [
        LightState::StoppedToMoving,
        LightState::StoppedToMoving,
        LightState::MovingToStopped,
        LightState::MovingToStopped,
    ];

    #[test]
    fn new_group_is_plus_crossing() {
        let group = LightGroup::new();

        let wiring: Vec<(u32, NominalState)> = group
            .lights()
            .iter()
            .map(|l| (l.id(), l.nominal()))
            .collect();
        assert_eq!(
            wiring,
            vec![
                (1, NominalState::Red),
                (2, NominalState::Red),
                (3, NominalState::Green),
                (4, NominalState::Green),
            ]
        );
        assert_eq!(states(&group), BASELINE);
    }

    #[test]
    fn emit_all_reports_in_id_order() {
        let group = LightGroup::new();
        let ids: Vec<u32> = group.emit_all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(labels(&group), vec![SignalLabel::Yellow; 4]);
    }

    #[test]
    fn advance_all_keeps_lanes_complementary() {
        let mut group = LightGroup::new();

        group.advance_all().unwrap();
        assert_eq!(
            labels(&group),
            vec![
                SignalLabel::Green,
                SignalLabel::Green,
                SignalLabel::Red,
                SignalLabel::Red
            ]
        );

        group.advance_all().unwrap();
        assert_eq!(labels(&group), vec![SignalLabel::Yellow; 4]);

        group.advance_all().unwrap();
        assert_eq!(
            labels(&group),
            vec![
                SignalLabel::Red,
                SignalLabel::Red,
                SignalLabel::Green,
                SignalLabel::Green
            ]
        );
    }

    #[test]
    fn attention_on_blinks_every_light() {
        let mut group = LightGroup::new();
        group.attention_on_all();

        assert!(group.in_attention());
        assert_eq!(labels(&group), vec![SignalLabel::YellowBlinking; 4]);
    }

    #[test]
    fn attention_off_restores_baseline_not_prior_state() {
        let mut group = LightGroup::new();
        group.advance_all().unwrap();
        group.attention_on_all();
        group.attention_off_all();

        assert!(!group.in_attention());
        assert_eq!(states(&group), BASELINE);
    }

    #[test]
    fn advance_all_in_attention_fails_on_first_light() {
        let mut group = LightGroup::new();
        group.attention_on_all();

        let err = group.advance_all().unwrap_err();

        assert_eq!(
            err,
            LightError::UnsupportedTransition {
                id: 1,
                state: LightState::Override,
            }
        );
        assert!(group.in_attention());
    }

    #[test]
    fn advance_all_is_not_transactional() {
        let mut group = LightGroup::builder()
            .light(1, NominalState::Red)
            .light(2, NominalState::Unassigned)
            .light(3, NominalState::Green)
            .build()
            .unwrap();

        let err = group.advance_all().unwrap_err();

        assert!(matches!(
            err,
            LightError::UnsupportedTransition { id: 2, .. }
        ));
        assert_eq!(
            states(&group),
            vec![
                LightState::Moving,
                LightState::Override,
                LightState::MovingToStopped
            ]
        );
    }

    #[test]
    fn light_lookup_by_id() {
        let group = LightGroup::new();
        assert_eq!(group.light(3).map(TrafficLight::nominal), Some(NominalState::Green));
        assert!(group.light(5).is_none());
        assert_eq!(group.len(), 4);
        assert!(!group.is_empty());
    }
}
