//! Replay of command scripts
//!
//! A script is one command per line. Blank lines and lines starting with
//! `#` are skipped. Replay stops at the first failing line or at `exit`.

use std::path::Path;

use crate::CliContext;
use crate::commands::respond;
use crate::error::ReplayError;

pub fn replay_file(path: &Path, ctx: &mut CliContext) -> Result<Vec<String>, ReplayError> {
    let script = std::fs::read_to_string(path).map_err(|source| ReplayError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(script = ?path, "replaying script");
    replay_script(&script, ctx)
}

/// Run every command in `script`, returning all output lines
pub fn replay_script(script: &str, ctx: &mut CliContext) -> Result<Vec<String>, ReplayError> {
    let mut output = Vec::new();

    for (idx, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = respond(line, ctx).map_err(|err| ReplayError::ScriptLine {
            line_number: idx + 1,
            message: err.to_string(),
        })?;
        output.extend(response.lines);
        if response.quit {
            break;
        }
    }

    Ok(output)
}
