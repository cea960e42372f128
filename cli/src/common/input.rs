//! File input and output plumbing shared by the commands.

use std::io::Read;

use crate::common::error::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Write `content` back to `path`.
pub fn write_output(path: &str, content: &str) -> CliResult<()> {
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_string(),
        source,
    })
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}
