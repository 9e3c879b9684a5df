//! Coordinate parser for a single table row

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use conquer_once::Lazy;
use regex::Regex;

use crate::grid::GridCell;

// ---------------------------------------------------------------------------
// STATICS
// ---------------------------------------------------------------------------

/// Matches a trimmed `x,y` segment.
static CELL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)\s*,\s*(-?\d+)$").unwrap());

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A row segment which is not an `x,y` integer pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected an \"x,y\" integer pair, found \"{0}\"")]
pub struct InvalidCell(pub String);

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Parse one data row of a solver table into the cell of each agent, in
/// column order.
///
/// Segments are separated by `|`. The first segment is the timestep label and
/// is discarded. Blank segments after the last agent column (trailing `|` or
/// whitespace) are ignored, a blank segment between agents is an error.
pub fn parse_row(line: &str) -> Result<Vec<GridCell>, InvalidCell> {
    let line = line.strip_prefix('|').unwrap_or(line);

    let mut segments: Vec<&str> = line.split('|').skip(1).map(str::trim).collect();
    while segments.last().map_or(false, |s| s.is_empty()) {
        segments.pop();
    }

    segments.into_iter().map(parse_cell).collect()
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn parse_cell(segment: &str) -> Result<GridCell, InvalidCell> {
    let invalid = || InvalidCell(segment.to_string());

    let caps = CELL_REGEX.captures(segment).ok_or_else(invalid)?;

    // Out of range values fail here
    let x = caps[1].parse().map_err(|_| invalid())?;
    let y = caps[2].parse().map_err(|_| invalid())?;

    Ok(GridCell::new(x, y))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row("|0|0,0|0,1|").unwrap(),
            vec![GridCell::new(0, 0), GridCell::new(0, 1)]
        );

        // Padded columns as printed by the solver
        assert_eq!(
            parse_row("| 12 |  3, 4 | 10,2  |   ").unwrap(),
            vec![GridCell::new(3, 4), GridCell::new(10, 2)]
        );

        // No trailing delimiter
        assert_eq!(parse_row("|5|7,8").unwrap(), vec![GridCell::new(7, 8)]);
    }

    #[test]
    fn test_parse_row_label_only() {
        assert_eq!(parse_row("|0|").unwrap(), vec![]);

        // An empty label is still the label
        assert_eq!(parse_row("| |1,1|").unwrap(), vec![GridCell::new(1, 1)]);
    }

    #[test]
    fn test_parse_row_invalid() {
        assert_eq!(parse_row("|0|x,0|"), Err(InvalidCell("x,0".into())));
        assert_eq!(parse_row("|0|1|"), Err(InvalidCell("1".into())));
        assert_eq!(parse_row("|0|1,2,3|"), Err(InvalidCell("1,2,3".into())));
        assert_eq!(parse_row("|0|1,1||2,2|"), Err(InvalidCell("".into())));
        assert_eq!(
            parse_row("|0|99999999999,0|"),
            Err(InvalidCell("99999999999,0".into()))
        );
    }
}
