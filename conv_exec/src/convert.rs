//! # Conversion pipeline
//!
//! Extracts the confirmed solution from the solver output and translates the
//! path of every agent into relative commands.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{debug, info, warn};
use serde::Serialize;
use std::path::PathBuf;

use crate::heading::{Heading, HeadingParams, PathTranslator, RelCmd, Translation};
use crate::output::AgentOutput;
use crate::parse::{self, ExtractError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The translated solution.
#[derive(Debug)]
pub struct Conversion {
    /// 1-based number of the accepted table within the solver output.
    pub table_number: usize,

    /// Number of cells in each agent's path.
    pub path_lengths: Vec<usize>,

    /// Translation of each agent's path, in agent order.
    pub translations: Vec<Translation>,
}

/// Record of a conversion run, archived in the session.
#[derive(Debug, Serialize)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub contract: bool,
    pub heading: HeadingParams,
    pub table_number: usize,
    pub agents: Vec<AgentSummary>,
}

#[derive(Debug, Serialize)]
pub struct AgentSummary {
    pub agent: usize,
    pub num_cells: usize,
    pub initial_heading: Heading,
    pub final_heading: Heading,
    pub output: AgentOutput,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Convert solver output into per-agent commands.
///
/// Nothing is translated unless the output contains a confirmed table.
pub fn convert(
    text: &str,
    contract: bool,
    heading: HeadingParams,
) -> Result<Conversion, ExtractError> {
    let solution = parse::extract(text, contract)?;

    info!(
        "Using table {} (line {}) with {} agents",
        solution.table_number,
        solution.header_line,
        solution.paths.len()
    );

    let translator = PathTranslator::new(heading);

    let translations = solution
        .paths
        .iter()
        .enumerate()
        .map(|(agent, path)| {
            // Possible in contraction mode when every cell is a midpoint
            if path.is_empty() {
                warn!("Agent {} has no cells, its command file will be empty", agent);
            }

            let t = translator.translate(path);
            debug!(
                "Agent {}: {} cells, {} commands, heading {:?} -> {:?}",
                agent,
                path.len(),
                t.cmds.len(),
                t.initial_heading,
                t.final_heading
            );
            t
        })
        .collect();

    Ok(Conversion {
        table_number: solution.table_number,
        path_lengths: solution.paths.iter().map(|p| p.len()).collect(),
        translations,
    })
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Conversion {
    /// The commands of every agent, in agent order.
    pub fn agent_cmds(&self) -> Vec<Vec<RelCmd>> {
        self.translations.iter().map(|t| t.cmds.clone()).collect()
    }

    /// Build the run summary from this conversion and the written outputs.
    pub fn summarise(
        &self,
        input_path: PathBuf,
        contract: bool,
        heading: HeadingParams,
        outputs: Vec<AgentOutput>,
    ) -> ConversionSummary {
        let agents = outputs
            .into_iter()
            .zip(self.translations.iter().zip(self.path_lengths.iter()))
            .map(|(output, (t, num_cells))| AgentSummary {
                agent: output.agent,
                num_cells: *num_cells,
                initial_heading: t.initial_heading,
                final_heading: t.final_heading,
                output,
            })
            .collect();

        ConversionSummary {
            input_path,
            contract,
            heading,
            table_number: self.table_number,
            agents,
        }
    }
}
