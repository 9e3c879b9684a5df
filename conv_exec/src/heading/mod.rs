//! # Heading module
//!
//! Translates each agent's path of absolute grid cells into commands relative
//! to the direction the robot is facing. Every agent is tracked independently,
//! starting from its own initial heading.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use serde::Serialize;

use crate::grid::AgentPath;

pub use cmd::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The heading used when none is configured or none can be detected.
pub const DEFAULT_HEADING: Heading = Heading::Right;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Translates agent paths into relative commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathTranslator {
    params: HeadingParams,
}

/// The result of translating one agent's path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// One command per pair of consecutive cells.
    pub cmds: Vec<RelCmd>,

    /// The heading the agent started with.
    pub initial_heading: Heading,

    /// The heading the agent ends with.
    pub final_heading: Heading,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PathTranslator {
    pub fn new(params: HeadingParams) -> Self {
        Self { params }
    }

    /// Choose the starting heading for the given path.
    pub fn initial_heading(&self, path: &AgentPath) -> Heading {
        match self.params.initial_heading {
            InitialHeading::Left => Heading::Left,
            InitialHeading::Top => Heading::Top,
            InitialHeading::Right => Heading::Right,
            InitialHeading::Bottom => Heading::Bottom,
            InitialHeading::Detect => detect_heading(path).unwrap_or(DEFAULT_HEADING),
        }
    }

    /// Translate a path into relative commands.
    ///
    /// A path of `L` cells produces `L - 1` commands.
    pub fn translate(&self, path: &AgentPath) -> Translation {
        let initial_heading = self.initial_heading(path);
        let table = self.params.transition_table;

        let mut heading = initial_heading;
        let mut cmds = Vec::with_capacity(path.len().saturating_sub(1));

        for (from, to) in path.transitions() {
            let (cmd, next) = table.step(heading, from, to);
            trace!(
                "{:?} -> {:?} facing {:?}: {:?}, now facing {:?}",
                from,
                to,
                heading,
                cmd,
                next
            );
            cmds.push(cmd);
            heading = next;
        }

        Translation {
            cmds,
            initial_heading,
            final_heading: heading,
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Derive a heading from the displacement between the first two cells of the
/// path.
///
/// Returns `None` if the path has fewer than two cells or the agent does not
/// move between them.
pub fn detect_heading(path: &AgentPath) -> Option<Heading> {
    let (from, to) = path.transitions().next()?;
    Heading::facing(Move::between(from, to))
}

#[cfg(test)]
mod test {
    use super::*;

    fn translator(initial_heading: InitialHeading, transition_table: TransitionTable) -> PathTranslator {
        PathTranslator::new(HeadingParams {
            initial_heading,
            transition_table,
        })
    }

    #[test]
    fn test_default_params() {
        let params = HeadingParams::default();
        assert_eq!(params.initial_heading, InitialHeading::Right);
        assert_eq!(params.transition_table, TransitionTable::Legacy);
    }

    #[test]
    fn test_translate_default() {
        // Down, right, right, wait, up, left
        let path = AgentPath::from(vec![(0, 0), (1, 0), (1, 1), (1, 2), (1, 2), (0, 2), (0, 1)]);
        let t = PathTranslator::default().translate(&path);

        assert_eq!(t.initial_heading, Heading::Right);
        assert_eq!(
            t.cmds,
            vec![
                RelCmd::Right,
                RelCmd::Left,
                RelCmd::Forward,
                RelCmd::Wait,
                RelCmd::Left,
                RelCmd::Left,
            ]
        );
        assert_eq!(t.final_heading, Heading::Left);
    }

    #[test]
    fn test_translate_short_paths() {
        let t = PathTranslator::default();

        let single = t.translate(&AgentPath::from(vec![(4, 4)]));
        assert!(single.cmds.is_empty());
        assert_eq!(single.final_heading, Heading::Right);

        let empty = t.translate(&AgentPath::default());
        assert!(empty.cmds.is_empty());
    }

    #[test]
    fn test_repeated_waits() {
        let path = AgentPath::from(vec![(2, 2); 5]);
        let t = translator(InitialHeading::Bottom, TransitionTable::Legacy).translate(&path);

        assert_eq!(t.cmds, vec![RelCmd::Wait; 4]);
        assert_eq!(t.final_heading, Heading::Bottom);
    }

    #[test]
    fn test_detect_heading() {
        assert_eq!(detect_heading(&AgentPath::from(vec![(0, 0), (1, 0)])), Some(Heading::Bottom));
        assert_eq!(detect_heading(&AgentPath::from(vec![(1, 0), (0, 0)])), Some(Heading::Top));
        assert_eq!(detect_heading(&AgentPath::from(vec![(0, 0), (0, 1)])), Some(Heading::Right));
        assert_eq!(detect_heading(&AgentPath::from(vec![(0, 1), (0, 0)])), Some(Heading::Left));

        assert_eq!(detect_heading(&AgentPath::from(vec![(0, 0), (0, 0), (1, 0)])), None);
        assert_eq!(detect_heading(&AgentPath::from(vec![(0, 0)])), None);
    }

    #[test]
    fn test_translate_detected() {
        let t = translator(InitialHeading::Detect, TransitionTable::Legacy);

        // Starts facing down, so the first move is straight ahead
        let path = AgentPath::from(vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
        let res = t.translate(&path);
        assert_eq!(res.initial_heading, Heading::Bottom);
        assert_eq!(res.cmds, vec![RelCmd::Forward, RelCmd::Forward, RelCmd::Left]);
        assert_eq!(res.final_heading, Heading::Right);

        // Nothing to detect from, falls back to the default
        let path = AgentPath::from(vec![(0, 0), (0, 0), (0, 1)]);
        let res = t.translate(&path);
        assert_eq!(res.initial_heading, DEFAULT_HEADING);
        assert_eq!(res.cmds, vec![RelCmd::Wait, RelCmd::Forward]);
    }

    #[test]
    fn test_translate_rotational() {
        // Right then back again
        let path = AgentPath::from(vec![(0, 0), (0, 1), (0, 0), (0, 1)]);

        let legacy = translator(InitialHeading::Right, TransitionTable::Legacy).translate(&path);
        assert_eq!(
            legacy.cmds,
            vec![RelCmd::Forward, RelCmd::Backward, RelCmd::Forward]
        );
        assert_eq!(legacy.final_heading, Heading::Right);

        let rot = translator(InitialHeading::Right, TransitionTable::Rotational).translate(&path);
        assert_eq!(
            rot.cmds,
            vec![RelCmd::Forward, RelCmd::Backward, RelCmd::Backward]
        );
        assert_eq!(rot.final_heading, Heading::Right);
    }

    #[test]
    fn test_agents_are_independent() {
        let t = PathTranslator::default();
        let a = AgentPath::from(vec![(0, 0), (1, 0)]);
        let b = AgentPath::from(vec![(0, 0), (0, 1)]);

        // Translating one agent has no effect on the next one
        let first = t.translate(&a);
        let second = t.translate(&b);
        assert_eq!(first.final_heading, Heading::Bottom);
        assert_eq!(second.cmds, vec![RelCmd::Forward]);
        assert_eq!(second.initial_heading, Heading::Right);
    }
}
