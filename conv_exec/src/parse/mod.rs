//! # Solver output parsing
//!
//! Reads the ASCII tables printed by the MAPF solver and turns the confirmed
//! solution into one [`AgentPath`](crate::grid::AgentPath) per agent.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod coords;
pub mod table;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use coords::{parse_row, InvalidCell};
pub use table::{extract, Solution, VALID_MARKER};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A malformed table row.
///
/// Line numbers are 1-based and count every line of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Line {line}: expected an \"x,y\" integer pair, found \"{segment}\"")]
    InvalidCell { line: usize, segment: String },

    #[error("Line {line}: row has {found} agent columns but the table has {expected}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Reasons the extractor could not produce a solution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Malformed solver output: {0}")]
    Parse(#[from] ParseError),

    #[error("No table in the solver output is confirmed as a valid execution")]
    NoValidSolution,
}
