//! Finite state machine for one traffic light.

use crate::core::{
    LightState, NominalState, Signal, StateHistory, StateTransition, Trigger,
    DEFAULT_HISTORY_LIMIT,
};
use crate::light::error::LightError;
use chrono::Utc;
use tracing::{debug, warn};

/// A single traffic light.
///
/// Holds exactly one [`LightState`] at all times. A new light starts in
/// `Override` and is immediately reset, so it comes out of construction in
/// the entry state of its nominal wiring.
///
/// # Example
///
/// ```rust
/// use crossing::core::{LightState, NominalState};
/// use crossing::light::TrafficLight;
///
/// let mut light = TrafficLight::new(1, NominalState::Red);
/// assert_eq!(light.current_state(), LightState::StoppedToMoving);
///
/// light.advance().unwrap();
/// assert_eq!(light.emit_signal().to_string(), "light 1 is Green");
/// ```
#[derive(Clone, Debug)]
pub struct TrafficLight {
    id: u32,
    nominal: NominalState,
    current: LightState,
    history: StateHistory<LightState>,
}

impl TrafficLight {
    /// Create a light and reset it into its entry state.
    pub fn new(id: u32, nominal: NominalState) -> Self {
        Self::with_history_limit(id, nominal, DEFAULT_HISTORY_LIMIT)
    }

    /// Like [`TrafficLight::new`], retaining up to `limit` transitions.
    pub fn with_history_limit(id: u32, nominal: NominalState, limit: usize) -> Self {
        let mut light = Self {
            id,
            nominal,
            current: LightState::Override,
            history: StateHistory::with_limit(limit),
        };
        light.reset();
        light
    }

    /// Stable id of this light.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Wiring that decides where a reset lands.
    pub fn nominal(&self) -> NominalState {
        self.nominal
    }

    /// Get current state.
    pub fn current_state(&self) -> LightState {
        self.current
    }

    /// Recent transitions, including the construction reset.
    pub fn history(&self) -> &StateHistory<LightState> {
        &self.history
    }

    /// True while the light is blinking in `Override`.
    pub fn in_attention(&self) -> bool {
        self.current.is_override()
    }

    /// Move to the next state of the advance cycle.
    ///
    /// Fails with [`LightError::UnsupportedTransition`] while in `Override`;
    /// the state is left unchanged in that case.
    pub fn advance(&mut self) -> Result<LightState, LightError> {
        let Some(next) = self.current.successor() else {
            warn!(light = self.id, state = %self.current, "advance rejected");
            return Err(LightError::UnsupportedTransition {
                id: self.id,
                state: self.current,
            });
        };

        self.transition_to(next, Trigger::Advance);
        Ok(next)
    }

    /// Read the current signal.
    pub fn emit_signal(&self) -> Signal {
        Signal {
            id: self.id,
            label: self.current.label(),
        }
    }

    /// Switch to `Override` regardless of the current state.
    pub fn enter_attention(&mut self) {
        self.transition_to(LightState::Override, Trigger::AttentionOn);
    }

    /// Leave attention mode by resetting to the nominal entry state.
    pub fn exit_attention(&mut self) {
        self.reset();
    }

    /// Set the entry state of the nominal wiring, whatever the current state.
    pub fn reset(&mut self) {
        self.transition_to(self.nominal.entry_state(), Trigger::Reset);
    }

    fn transition_to(&mut self, next: LightState, trigger: Trigger) {
        let from = std::mem::replace(&mut self.current, next);
        debug!(light = self.id, %from, to = %next, ?trigger, "transition");
        self.history.record(StateTransition {
            from,
            to: next,
            trigger,
            timestamp: Utc::now(),
        });
    }
}
