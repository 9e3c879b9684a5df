//! Table extractor
//!
//! The solver prints one table per attempt. A table is a header row, one
//! border line and then data rows (all starting with `|`), optionally closed by
//! a bottom border. Only a table followed by [`VALID_MARKER`] holds a usable
//! solution; free text between tables is ignored.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{debug, trace};
use std::iter::Peekable;

use super::{coords::parse_row, ExtractError, ParseError};
use crate::grid::AgentPath;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Prefix of the line the solver prints after a table containing a valid solution.
pub const VALID_MARKER: &str = "A valid execution!";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The confirmed solution found in the solver output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// One path per agent, indexed by the agent's column.
    pub paths: Vec<AgentPath>,

    /// 1-based number of the table within the input.
    pub table_number: usize,

    /// 1-based line number of the table's header row.
    pub header_line: usize,
}

/// Rows of one table being accumulated into per-agent paths.
struct TableBuilder {
    contract: bool,
    columns: Option<usize>,
    paths: Vec<AgentPath>,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Extract the per-agent paths from the last confirmed table in `text`.
///
/// When `contract` is set the table is read as a double resolution grid: cells
/// with an odd coordinate are dropped and the remaining ones halved.
///
/// Any malformed row, confirmed or not, aborts the extraction.
pub fn extract(text: &str, contract: bool) -> Result<Solution, ExtractError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l)).peekable();
    let mut table_number = 0;
    let mut accepted = None;

    // Skip commentary up to the next header row
    while let Some((header_line, _)) = lines.find(|(_, l)| l.starts_with('|')) {
        table_number += 1;

        // Top border, if the input stops here the table is incomplete
        if lines.next().is_none() {
            debug!("Table {} (line {}) has no border", table_number, header_line);
            break;
        }

        let mut table = TableBuilder::new(contract);
        while let Some((line_num, line)) = lines.next_if(|(_, l)| l.starts_with('|')) {
            table.push_row(line_num, line)?;
        }

        if is_confirmed(&mut lines) {
            debug!(
                "Table {} (line {}) is a valid execution with {} agents",
                table_number,
                header_line,
                table.paths.len()
            );
            accepted = Some(Solution {
                paths: table.paths,
                table_number,
                header_line,
            });
        } else {
            debug!(
                "Table {} (line {}) is not confirmed, discarding it",
                table_number, header_line
            );
        }
    }

    accepted.ok_or(ExtractError::NoValidSolution)
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Consume the line(s) closing a table and check whether they confirm it.
///
/// A bottom border belongs to the table and the marker is looked for on the
/// line after it. That line is only consumed if it is the marker.
fn is_confirmed<'a, I>(lines: &mut Peekable<I>) -> bool
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match lines.next() {
        Some((_, line)) if is_border(line) => lines
            .next_if(|(_, l)| l.starts_with(VALID_MARKER))
            .is_some(),
        Some((_, line)) => line.starts_with(VALID_MARKER),
        None => false,
    }
}

/// A horizontal table border such as `+----+-----+` or `-------`.
fn is_border(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && line
            .chars()
            .all(|c| matches!(c, '+' | '-' | '=' | ':') || c.is_whitespace())
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TableBuilder {
    fn new(contract: bool) -> Self {
        Self {
            contract,
            columns: None,
            paths: Vec::new(),
        }
    }

    fn push_row(&mut self, line_num: usize, line: &str) -> Result<(), ParseError> {
        let cells = parse_row(line).map_err(|e| ParseError::InvalidCell {
            line: line_num,
            segment: e.0,
        })?;

        // The first row fixes the number of agents
        match self.columns {
            Some(expected) if expected != cells.len() => {
                return Err(ParseError::ColumnMismatch {
                    line: line_num,
                    expected,
                    found: cells.len(),
                })
            }
            Some(_) => (),
            None => {
                self.columns = Some(cells.len());
                self.paths = vec![AgentPath::default(); cells.len()];
            }
        }

        for (path, cell) in self.paths.iter_mut().zip(cells) {
            let cell = if self.contract {
                match cell.contract() {
                    Some(c) => c,
                    None => {
                        trace!("Line {}: dropping edge midpoint {:?}", line_num, cell);
                        continue;
                    }
                }
            } else {
                cell
            };

            path.push(cell);
        }

        Ok(())
    }
}
