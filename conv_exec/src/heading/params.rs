//! Parameters for the heading state machine

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::state::{Heading, TransitionTable};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// How the heading of each agent is chosen before its first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialHeading {
    Left,
    Top,
    Right,
    Bottom,

    /// Face the direction of the agent's first move.
    Detect,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Heading parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingParams {
    pub initial_heading: InitialHeading,

    pub transition_table: TransitionTable,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for InitialHeading {
    fn default() -> Self {
        InitialHeading::Right
    }
}

impl From<Heading> for InitialHeading {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Left => InitialHeading::Left,
            Heading::Top => InitialHeading::Top,
            Heading::Right => InitialHeading::Right,
            Heading::Bottom => InitialHeading::Bottom,
        }
    }
}

impl FromStr for InitialHeading {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("detect") {
            Ok(InitialHeading::Detect)
        } else {
            s.parse::<Heading>().map(InitialHeading::from)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_initial_heading_from_str() {
        assert_eq!("detect".parse::<InitialHeading>(), Ok(InitialHeading::Detect));
        assert_eq!("DETECT".parse::<InitialHeading>(), Ok(InitialHeading::Detect));
        assert_eq!("top".parse::<InitialHeading>(), Ok(InitialHeading::Top));
        assert!("forward".parse::<InitialHeading>().is_err());
    }
}
