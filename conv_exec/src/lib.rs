//! # Converter library.
//!
//! Converts the solution printed by a multi-agent pathfinding solver into
//! per-agent files of relative movement commands for grid-following robots.
//!
//! The pipeline is [`parse`] (solver tables into [`grid::AgentPath`]s),
//! [`heading`] (paths into relative commands) and [`output`] (command files),
//! glued together by [`convert`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Conversion pipeline - from solver output to per-agent commands
pub mod convert;

/// Grid cells and agent paths
pub mod grid;

/// Heading state machine - turns absolute moves into commands relative to the robot's heading
pub mod heading;

/// Command file writer
pub mod output;

/// Parameters for the converter executable
pub mod params;

/// Solver output parsing - extracts the confirmed solution table
pub mod parse;
