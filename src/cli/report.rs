//! Rendering of a [`ParsedCommandLine`] for the terminal or as JSON.

use crate::cli::constants::{EXIT_DIAGNOSTICS, EXIT_SUCCESS};
use crate::options::resolve::ParsedCommandLine;

/// Diagnostics first, then one line per option, then the file names.
pub fn render_text(parsed: &ParsedCommandLine) -> String {
    let mut out = String::new();
    for diagnostic in &parsed.errors {
        out.push_str(&format!("{diagnostic}\n"));
    }
    for (key, value) in parsed.options.iter() {
        out.push_str(&format!("option {key}: {value}\n"));
    }
    for file in &parsed.file_names {
        out.push_str(&format!("file {file}\n"));
    }
    out
}

/// `{"options":{…},"fileNames":[…],"errors":[…]}`, pretty-printed.
pub fn render_json(parsed: &ParsedCommandLine) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(parsed)?)
}

/// Process exit code for a finished resolution.
pub fn exit_status(parsed: &ParsedCommandLine) -> i32 {
    if parsed.errors.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DIAGNOSTICS
    }
}
