//! Command-line interface for the `optresolve` binary.
//!
//! | Submodule         | Responsibility |
//! |-------------------|---------------|
//! | [`constants`]     | Program identity strings and exit codes. |
//! | [`args`]          | `DriverArgs` — the driver's own flags and library-file selection. |
//! | [`response_file`] | Expansion of `@file` tokens before resolution. |
//! | [`help`]          | Help text generated from the registry, version banner. |
//! | [`report`]        | Text/JSON rendering of a `ParsedCommandLine` and exit-status selection. |
//!
//! Typical call sequence: `DriverArgs::parse_from_argv` → `expand_response_files`
//! → `Registry::resolve` → `render_text` / `render_json`.

pub mod constants;
pub mod args;
pub mod response_file;
pub mod help;
pub mod report;
