//! Heading state machine
//!
//! Absolute grid directions use the solver's axes: `x` grows downwards and `y`
//! grows to the right. Clockwise, the four headings are
//! `Left -> Top -> Right -> Bottom -> Left`.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cmd::RelCmd;
use crate::grid::GridCell;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The absolute direction an agent is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Facing decreasing `y`.
    ///
    /// The legacy table does not treat every move this way, see
    /// [`TransitionTable::Legacy`].
    Left,
    /// Facing decreasing `x`.
    Top,
    /// Facing increasing `y`.
    Right,
    /// Facing increasing `x`.
    Bottom,
}

/// The absolute displacement between two consecutive cells of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

/// The rule set used to turn absolute moves into relative commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionTable {
    /// The converter's established table.
    ///
    /// Backward keeps the heading. When facing `Left` only a move to the right
    /// turns the agent: an upward move is Forward, a downward move Backward and
    /// a move to the left emits Left without rotating.
    Legacy,

    /// Pure rotation, Backward turns the agent around.
    Rotational,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Heading {
    /// The heading after a 90 degree clockwise turn.
    pub fn clockwise(self) -> Self {
        match self {
            Heading::Left => Heading::Top,
            Heading::Top => Heading::Right,
            Heading::Right => Heading::Bottom,
            Heading::Bottom => Heading::Left,
        }
    }

    /// The heading after a 90 degree counter-clockwise turn.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::Left => Heading::Bottom,
            Heading::Top => Heading::Left,
            Heading::Right => Heading::Top,
            Heading::Bottom => Heading::Right,
        }
    }

    /// The move which goes straight ahead when facing this heading.
    pub fn ahead(self) -> Move {
        match self {
            Heading::Left => Move::Left,
            Heading::Top => Move::Up,
            Heading::Right => Move::Right,
            Heading::Bottom => Move::Down,
        }
    }

    /// The heading an agent has when it just made the given move, `None` for
    /// [`Move::Stay`].
    pub fn facing(mv: Move) -> Option<Self> {
        match mv {
            Move::Up => Some(Heading::Top),
            Move::Down => Some(Heading::Bottom),
            Move::Left => Some(Heading::Left),
            Move::Right => Some(Heading::Right),
            Move::Stay => None,
        }
    }
}

impl FromStr for Heading {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Heading::Left),
            "top" => Ok(Heading::Top),
            "right" => Ok(Heading::Right),
            "bottom" => Ok(Heading::Bottom),
            _ => Err(format!("unknown heading \"{}\"", s)),
        }
    }
}

impl Move {
    /// Classify the displacement from `from` to `to`.
    ///
    /// The `x` axis takes precedence, so a diagonal displacement (which a
    /// valid solution never contains) is read as its vertical part.
    pub fn between(from: GridCell, to: GridCell) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx > 0 {
            Move::Down
        } else if dx < 0 {
            Move::Up
        } else if dy > 0 {
            Move::Right
        } else if dy < 0 {
            Move::Left
        } else {
            Move::Stay
        }
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        TransitionTable::Legacy
    }
}

impl FromStr for TransitionTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(TransitionTable::Legacy),
            "rotational" => Ok(TransitionTable::Rotational),
            _ => Err(format!("unknown transition table \"{}\"", s)),
        }
    }
}

impl TransitionTable {
    /// Translate the move from `from` to `to` for an agent facing `heading`.
    ///
    /// Returns the command to emit and the agent's new heading.
    pub fn step(self, heading: Heading, from: GridCell, to: GridCell) -> (RelCmd, Heading) {
        self.translate(heading, Move::between(from, to))
    }

    /// Translate an already classified move.
    pub fn translate(self, heading: Heading, mv: Move) -> (RelCmd, Heading) {
        match self {
            TransitionTable::Legacy => legacy(heading, mv),
            TransitionTable::Rotational => rotational(heading, mv),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Translate the move from `from` to `to` using the default
/// ([`TransitionTable::Legacy`]) table.
pub fn step(heading: Heading, from: GridCell, to: GridCell) -> (RelCmd, Heading) {
    TransitionTable::Legacy.step(heading, from, to)
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn legacy(heading: Heading, mv: Move) -> (RelCmd, Heading) {
    use Heading as H;

    match (heading, mv) {
        (h, Move::Stay) => (RelCmd::Wait, h),

        (H::Left, Move::Up) => (RelCmd::Forward, H::Left),
        (H::Left, Move::Down) => (RelCmd::Backward, H::Left),
        (H::Left, Move::Right) => (RelCmd::Right, H::Right),
        (H::Left, Move::Left) => (RelCmd::Left, H::Left),

        (H::Top, Move::Up) => (RelCmd::Forward, H::Top),
        (H::Top, Move::Down) => (RelCmd::Backward, H::Top),
        (H::Top, Move::Right) => (RelCmd::Right, H::Right),
        (H::Top, Move::Left) => (RelCmd::Left, H::Left),

        (H::Right, Move::Right) => (RelCmd::Forward, H::Right),
        (H::Right, Move::Left) => (RelCmd::Backward, H::Right),
        (H::Right, Move::Down) => (RelCmd::Right, H::Bottom),
        (H::Right, Move::Up) => (RelCmd::Left, H::Top),

        (H::Bottom, Move::Down) => (RelCmd::Forward, H::Bottom),
        (H::Bottom, Move::Up) => (RelCmd::Backward, H::Bottom),
        (H::Bottom, Move::Left) => (RelCmd::Right, H::Left),
        (H::Bottom, Move::Right) => (RelCmd::Left, H::Right),
    }
}

fn rotational(heading: Heading, mv: Move) -> (RelCmd, Heading) {
    let target = match Heading::facing(mv) {
        Some(t) => t,
        None => return (RelCmd::Wait, heading),
    };

    if mv == heading.ahead() {
        (RelCmd::Forward, heading)
    } else if target == heading.clockwise() {
        (RelCmd::Right, target)
    } else if target == heading.counter_clockwise() {
        (RelCmd::Left, target)
    } else {
        (RelCmd::Backward, target)
    }
}
