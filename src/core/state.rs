//! State trait and the traffic light state set.
//!
//! `LightState` is a closed enum: the advance cycle and the signal label
//! for each variant live in one exhaustive `match`, so adding a variant
//! without deciding its successor and label does not compile.

use super::signal::SignalLabel;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing the current
/// position of a machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: states are compared in tests and history paths
/// - `Debug`: states appear in logs and errors
/// - `Serialize` + `Deserialize`: states appear in JSON readouts
///
/// # Example
///
/// ```rust
/// use crossing::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Crosswalk {
///     DontWalk,
///     Walk,
/// }
///
/// impl State for Crosswalk {
///     fn name(&self) -> &str {
///         match self {
///             Self::DontWalk => "DontWalk",
///             Self::Walk => "Walk",
///         }
///     }
/// }
///
/// assert_eq!(Crosswalk::Walk.name(), "Walk");
/// assert!(!Crosswalk::Walk.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// The five states a single traffic light can be in.
///
/// The four operating states form the advance cycle
/// `Stopped -> StoppedToMoving -> Moving -> MovingToStopped -> Stopped`.
/// `Override` is the attention (yellow blinking) state; it has no
/// successor and is only left through a reset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LightState {
    /// Red: traffic has to stop.
    Stopped,
    /// Yellow, rising: about to switch to green.
    StoppedToMoving,
    /// Green: traffic may go.
    Moving,
    /// Yellow, falling: about to switch to red.
    MovingToStopped,
    /// Yellow blinking: normal operation is switched off.
    Override,
}

impl LightState {
    /// The four operating states in advance order.
    pub const CYCLE: [LightState; 4] = [
        LightState::Stopped,
        LightState::StoppedToMoving,
        LightState::Moving,
        LightState::MovingToStopped,
    ];

    /// Next state in the advance cycle, or `None` while in `Override`.
    pub fn successor(self) -> Option<LightState> {
        match self {
            Self::Stopped => Some(Self::StoppedToMoving),
            Self::StoppedToMoving => Some(Self::Moving),
            Self::Moving => Some(Self::MovingToStopped),
            Self::MovingToStopped => Some(Self::Stopped),
            Self::Override => None,
        }
    }

    /// Signal shown while in this state.
    pub fn label(self) -> SignalLabel {
        match self {
            Self::Stopped => SignalLabel::Red,
            Self::StoppedToMoving | Self::MovingToStopped => SignalLabel::Yellow,
            Self::Moving => SignalLabel::Green,
            Self::Override => SignalLabel::YellowBlinking,
        }
    }

    /// True for the attention (yellow blinking) state.
    pub fn is_override(self) -> bool {
        matches!(self, Self::Override)
    }
}

impl State for LightState {
    fn name(&self) -> &str {
        match self {
            Self::Stopped => "Stopped",
            Self::StoppedToMoving => "StoppedToMoving",
            Self::Moving => "Moving",
            Self::MovingToStopped => "MovingToStopped",
            Self::Override => "Override",
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
