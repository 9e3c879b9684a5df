//! End to end conversion of solver output into command files.

use std::fs;
use std::path::Path;

use conv_lib::{
    convert::convert,
    heading::{HeadingParams, InitialHeading, TransitionTable},
    output::{agent_file_path, write_all},
    parse::{ExtractError, ParseError},
};

/// Run the whole pipeline, writing the command files under `dir`.
///
/// Returns the number of files written.
fn run(dir: &Path, text: &str, contract: bool, heading: HeadingParams) -> Result<usize, ExtractError> {
    let conversion = convert(text, contract, heading)?;
    let base = dir.join("pathFinal");
    let outputs = write_all(base.to_str().unwrap(), &conversion.agent_cmds());
    assert!(outputs.iter().all(|o| o.error.is_none()));
    Ok(outputs.len())
}

fn read_agent(dir: &Path, agent: usize) -> String {
    let base = dir.join("pathFinal");
    fs::read_to_string(agent_file_path(base.to_str().unwrap(), agent)).unwrap()
}

fn num_files(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_down_and_wait() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|a1|
|-|--|--|
|0|0,0|0,1|
|1|1,0|0,1|
A valid execution!
";

    assert_eq!(run(dir.path(), text, false, HeadingParams::default()), Ok(2));

    // Facing right, moving down is a right turn
    assert_eq!(read_agent(dir.path(), 0), "4\n");
    assert_eq!(read_agent(dir.path(), 1), "0\n");
}

#[test]
fn test_solver_log() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
Instance: 4x4 grid, 2 agents
Iteration 1
+---+-----+-----+
| t | a0  | a1  |
+---+-----+-----+
| 0 | 0,0 | 3,3 |
| 1 | 0,1 | 3,3 |
+---+-----+-----+
Conflict at t=1
Iteration 2
+---+-----+-----+
| t | a0  | a1  |
+---+-----+-----+
| 0 | 0,0 | 3,3 |
| 1 | 0,1 | 2,3 |
| 2 | 0,2 | 2,2 |
| 3 | 1,2 | 2,1 |
| 4 | 1,2 | 2,0 |
+---+-----+-----+
A valid execution!
Total cost: 8
";

    assert_eq!(run(dir.path(), text, false, HeadingParams::default()), Ok(2));

    // Right, right, down, wait
    assert_eq!(read_agent(dir.path(), 0), "1\n1\n4\n0\n");
    // Up, then left three times. Once facing left, moving left is still a Left command
    assert_eq!(read_agent(dir.path(), 1), "2\n2\n2\n2\n");
}

#[test]
fn test_contracted_grid() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|
|-|--|
|0|0,0|
|1|0,1|
|2|0,2|
|3|1,2|
|4|2,2|
A valid execution!
";

    assert_eq!(run(dir.path(), text, true, HeadingParams::default()), Ok(1));

    // (0,0) -> (0,1) -> (1,1): forward then a right turn
    assert_eq!(read_agent(dir.path(), 0), "1\n4\n");
}

#[test]
fn test_detected_heading_rotational() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|
|-|--|
|0|2,2|
|1|1,2|
|2|2,2|
|3|2,3|
A valid execution!
";
    let heading = HeadingParams {
        initial_heading: InitialHeading::Detect,
        transition_table: TransitionTable::Rotational,
    };

    assert_eq!(run(dir.path(), text, false, heading), Ok(1));

    // Facing up: forward, turn around, then down -> right is a left turn
    assert_eq!(read_agent(dir.path(), 0), "1\n8\n2\n");
}

#[test]
fn test_no_solution_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|
|-|--|
|0|0,0|
|1|0,1|
No valid execution found.
";

    assert_eq!(
        run(dir.path(), text, false, HeadingParams::default()),
        Err(ExtractError::NoValidSolution)
    );
    assert_eq!(num_files(dir.path()), 0);
}

#[test]
fn test_malformed_row_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|
|-|--|
|0|x,0|
A valid execution!
";

    assert_eq!(
        run(dir.path(), text, false, HeadingParams::default()),
        Err(ExtractError::Parse(ParseError::InvalidCell {
            line: 3,
            segment: "x,0".into()
        }))
    );
    assert_eq!(num_files(dir.path()), 0);
}

#[test]
fn test_single_timestep() {
    let dir = tempfile::tempdir().unwrap();
    let text = "\
|t|a0|a1|a2|
|-|--|--|--|
|0|0,0|1,1|2,2|
A valid execution!
";

    assert_eq!(run(dir.path(), text, false, HeadingParams::default()), Ok(3));
    for agent in 0..3 {
        assert_eq!(read_agent(dir.path(), agent), "");
    }
}
