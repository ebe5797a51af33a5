//! Signal readout types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable signal shown by a light.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SignalLabel {
    Red,
    Yellow,
    Green,
    #[serde(rename = "Yellow blinking")]
    YellowBlinking,
}

impl SignalLabel {
    /// Text used in the `light <id> is <Label>` readout.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::YellowBlinking => "Yellow blinking",
        }
    }
}

impl fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One light's signal at the moment it was read.
///
/// Displays as `light <id> is <Label>`.
///
/// # Example
///
/// ```rust
/// use crossing::core::{Signal, SignalLabel};
///
/// let signal = Signal { id: 3, label: SignalLabel::YellowBlinking };
/// assert_eq!(signal.to_string(), "light 3 is Yellow blinking");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Signal {
    pub id: u32,
    pub label: SignalLabel,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light {} is {}", self.id, self.label)
    }
}
