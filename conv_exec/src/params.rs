//! # Converter Executable Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::heading::{HeadingParams, InitialHeading, TransitionTable};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvExecParams {
    /// Path to the solver output to convert
    pub input_path: PathBuf,

    /// Base name of the command files, agent `i` is written to `<output_base>-<i>.txt`
    pub output_base: String,

    /// Whether the solver grid is double resolution and must be contracted
    pub contract: bool,

    /// Heading of each agent before its first move
    pub initial_heading: InitialHeading,

    /// Table used to translate absolute moves into commands
    pub transition_table: TransitionTable,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl Default for ConvExecParams {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("res.txt"),
            output_base: String::from("pathFinal"),
            contract: false,
            initial_heading: InitialHeading::default(),
            transition_table: TransitionTable::default(),
        }
    }
}

impl ConvExecParams {
    pub fn heading_params(&self) -> HeadingParams {
        HeadingParams {
            initial_heading: self.initial_heading,
            transition_table: self.transition_table,
        }
    }
}
