//! Commands emitted for the robot

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A movement command relative to the robot's current heading.
///
/// The discriminants are the codes understood by the robot's command
/// interpreter and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelCmd {
    /// Stay on the current cell for one timestep.
    Wait = 0,
    /// Move one cell straight ahead.
    Forward = 1,
    /// Turn left and move one cell.
    Left = 2,
    /// Turn right and move one cell.
    Right = 4,
    /// Move one cell in the direction opposite to the heading.
    Backward = 8,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl RelCmd {
    /// The numeric code of the command.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RelCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
