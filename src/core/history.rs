//! State transition history tracking.
//!
//! Each light keeps a bounded window of its most recent transitions so a
//! long-running controller does not grow without limit.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions retained per history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// What caused a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// Regular step along the advance cycle.
    Advance,
    /// Attention mode switched on.
    AttentionOn,
    /// Reset to the nominal entry state, at construction or attention off.
    Reset,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use crossing::core::{LightState, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: LightState::Stopped,
///     to: LightState::StoppedToMoving,
///     trigger: Trigger::Advance,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, Trigger::Advance);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The operation that caused the transition
    pub trigger: Trigger,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state transitions.
///
/// Once `limit` transitions are held, recording a new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use crossing::core::{LightState, StateHistory, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: LightState::Stopped,
///     to: LightState::StoppedToMoving,
///     trigger: Trigger::Advance,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: LightState::StoppedToMoving,
///     to: LightState::Moving,
///     trigger: Trigger::Advance,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Stopped -> StoppedToMoving -> Moving
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "StoredHistory<S>")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

/// Unchecked wire form of a history; converted through the same clamp
/// and trim as a freshly built one.
#[derive(Deserialize)]
#[serde(bound = "")]
struct StoredHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> From<StoredHistory<S>> for StateHistory<S> {
    fn from(stored: StoredHistory<S>) -> Self {
        let mut history = Self::with_limit(stored.limit);
        history.transitions = stored.transitions;
        history.trim_to(history.limit);
        history
    }
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` entries.
    ///
    /// A limit of zero is raised to one so the latest transition is
    /// always available.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Maximum number of retained transitions.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, dropping the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.trim_to(self.limit - 1);
        self.transitions.push_back(transition);
    }

    fn trim_to(&mut self, len: usize) {
        while self.transitions.len() > len {
            self.transitions.pop_front();
        }
    }

    /// Get the path of states traversed within the retained window.
    ///
    /// Returns the `from` state of the oldest retained transition, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest retained transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every retained transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LightState;

    fn advance(from: LightState, to: LightState) -> StateTransition<LightState> {
        StateTransition {
            from,
            to,
            trigger: Trigger::Advance,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<LightState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, LightState::StoppedToMoving);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        history.record(advance(LightState::StoppedToMoving, LightState::Moving));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &LightState::Stopped,
                &LightState::StoppedToMoving,
                &LightState::Moving
            ]
        );
    }

    #[test]
    fn oldest_entry_is_dropped_at_limit() {
        let mut history = StateHistory::with_limit(2);
        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        history.record(advance(LightState::StoppedToMoving, LightState::Moving));
        history.record(advance(LightState::Moving, LightState::MovingToStopped));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![
                &LightState::StoppedToMoving,
                &LightState::Moving,
                &LightState::MovingToStopped
            ]
        );
    }

    #[test]
    fn zero_limit_keeps_latest_transition() {
        let mut history = StateHistory::with_limit(0);
        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        history.record(advance(LightState::StoppedToMoving, LightState::Moving));

        assert_eq!(history.limit(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, LightState::Moving);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(advance(LightState::Moving, LightState::MovingToStopped));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = StateHistory::new();
        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(8);
        history.record(StateTransition {
            from: LightState::Moving,
            to: LightState::Override,
            trigger: Trigger::AttentionOn,
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<LightState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), 8);
        assert_eq!(deserialized.last().unwrap().trigger, Trigger::AttentionOn);
    }

    #[test]
    fn deserialized_zero_limit_is_clamped() {
        let mut history: StateHistory<LightState> =
            serde_json::from_str(r#"{"transitions":[],"limit":0}"#).unwrap();

        for _ in 0..10 {
            history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        }

        assert_eq!(history.limit(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn deserialized_overfull_history_is_trimmed() {
        let mut full = StateHistory::with_limit(4);
        for state in LightState::CYCLE {
            full.record(advance(state, state.successor().unwrap()));
        }
        let json = serde_json::to_string(&full)
            .unwrap()
            .replace(r#""limit":4"#, r#""limit":2"#);

        let mut history: StateHistory<LightState> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().to, LightState::Stopped);

        history.record(advance(LightState::Stopped, LightState::StoppedToMoving));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().to, LightState::StoppedToMoving);
    }
}
