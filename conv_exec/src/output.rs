//! # Output writer
//!
//! Each agent's commands are written to their own file, one numeric code per
//! line, ready to be loaded onto the robot.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{error, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::heading::RelCmd;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The outcome of writing one agent's command file.
#[derive(Debug, Serialize)]
pub struct AgentOutput {
    /// Index of the agent (its column in the solver table).
    pub agent: usize,

    /// The file the commands were written to.
    pub path: PathBuf,

    /// Number of commands in the file.
    pub num_cmds: usize,

    /// The reason the file could not be written, if it couldn't.
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create command file {0:?}: {1}")]
    CreateError(PathBuf, std::io::Error),

    #[error("Cannot write command file {0:?}: {1}")]
    WriteError(PathBuf, std::io::Error),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Path of the command file for the given agent, `<base>-<agent>.txt`.
pub fn agent_file_path(base: &str, agent: usize) -> PathBuf {
    PathBuf::from(format!("{}-{}.txt", base, agent))
}

/// Write the commands to the given file, replacing any existing content.
pub fn write_cmds<P: AsRef<Path>>(path: P, cmds: &[RelCmd]) -> Result<(), OutputError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| OutputError::CreateError(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    let write_err = |e| OutputError::WriteError(path.to_path_buf(), e);
    for cmd in cmds {
        writeln!(writer, "{}", cmd).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

/// Write the command file of every agent.
///
/// A failure only affects the agent concerned, all agents are attempted and
/// each one's outcome is returned in agent order.
pub fn write_all(base: &str, agent_cmds: &[Vec<RelCmd>]) -> Vec<AgentOutput> {
    agent_cmds
        .iter()
        .enumerate()
        .map(|(agent, cmds)| {
            let path = agent_file_path(base, agent);

            let error = match write_cmds(&path, cmds) {
                Ok(()) => {
                    info!("Agent {}: {} commands written to {:?}", agent, cmds.len(), path);
                    None
                }
                Err(e) => {
                    error!("Agent {}: {}", agent, e);
                    Some(e.to_string())
                }
            };

            AgentOutput {
                agent,
                path,
                num_cmds: cmds.len(),
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_agent_file_path() {
        assert_eq!(agent_file_path("pathFinal", 0), PathBuf::from("pathFinal-0.txt"));
        assert_eq!(
            agent_file_path("out/run", 12),
            PathBuf::from("out/run-12.txt")
        );
    }

    #[test]
    fn test_write_cmds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmds.txt");

        // Existing content is replaced
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        write_cmds(
            &path,
            &[RelCmd::Forward, RelCmd::Left, RelCmd::Wait, RelCmd::Backward, RelCmd::Right],
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n0\n8\n4\n");
    }

    #[test]
    fn test_write_cmds_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.txt");

        write_cmds(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_all_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("agent");
        let base = base.to_str().unwrap();

        // A directory in the way of agent 1's file
        fs::create_dir(agent_file_path(base, 1)).unwrap();

        let outputs = write_all(
            base,
            &[vec![RelCmd::Forward], vec![RelCmd::Wait], vec![RelCmd::Right, RelCmd::Left]],
        );

        assert_eq!(outputs.len(), 3);
        assert!(outputs[0].error.is_none());
        assert!(outputs[1].error.is_some());
        assert!(outputs[2].error.is_none());
        assert_eq!(outputs[2].num_cmds, 2);

        assert_eq!(fs::read_to_string(agent_file_path(base, 0)).unwrap(), "1\n");
        assert_eq!(fs::read_to_string(agent_file_path(base, 2)).unwrap(), "4\n2\n");
    }
}
