//! Nominal (starting) state of a light and where a reset lands.

use super::state::LightState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the cycle a light is wired to start on.
///
/// Lights with complementary nominal states form the two lanes of a
/// crossing. `Unassigned` lights have no lane and reset into attention.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum NominalState {
    Red,
    Green,
    Unassigned,
}

impl NominalState {
    /// State a light enters on reset.
    ///
    /// Red and green never land on a steady state: the reset always
    /// re-announces the change with the yellow one step before it.
    ///
    /// ```rust
    /// use crossing::core::{LightState, NominalState};
    ///
    /// assert_eq!(NominalState::Red.entry_state(), LightState::StoppedToMoving);
    /// assert_eq!(NominalState::Green.entry_state(), LightState::MovingToStopped);
    /// assert_eq!(NominalState::Unassigned.entry_state(), LightState::Override);
    /// ```
    pub fn entry_state(self) -> LightState {
        match self {
            Self::Red => LightState::StoppedToMoving,
            Self::Green => LightState::MovingToStopped,
            Self::Unassigned => LightState::Override,
        }
    }
}

impl From<&str> for NominalState {
    /// Parses `red` / `green` case-insensitively; anything else is `Unassigned`.
    fn from(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("red") {
            Self::Red
        } else if tag.eq_ignore_ascii_case("green") {
            Self::Green
        } else {
            Self::Unassigned
        }
    }
}

impl fmt::Display for NominalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Unassigned => "unassigned",
        })
    }
}
