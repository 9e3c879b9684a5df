//! Host platform utility functions

use std::env;
use std::path::PathBuf;

/// Name of the environment variable pointing at the software root.
pub const SW_ROOT_ENV_VAR: &str = "MAPF_CONV_SW_ROOT";

/// Get the software root directory.
///
/// This is the directory named by `MAPF_CONV_SW_ROOT`, or the current working
/// directory if the variable is not set.
pub fn get_sw_root() -> std::io::Result<PathBuf> {
    match env::var_os(SW_ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => env::current_dir(),
    }
}
