//! Flags of the `optresolve` driver itself.
//!
//! Driver flags come first; the compiler command line to resolve follows.
//! A leading compiler option needs a bare `--` so that tokens such as `--help`
//! or `-v` reach the resolver instead of the driver. Once the first token has
//! been seen, everything after it is passed through unchanged:
//!
//! ```text
//! optresolve --json -- --library es5,es6 --target es5 main.ts
//! optresolve main.ts --noEmit
//! ```
//!
//! Unknown driver flags are rejected.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{init_library_files, init_library_files_from};
use crate::libdir::library_files_in;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "optresolve",
    version,
    about = "Resolve a compiler command line into options, file names and diagnostics"
)]
pub struct DriverArgs {
    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Directory holding the bundled lib.<name>.d.ts declaration files.
    #[arg(long, value_name = "DIR")]
    pub lib_dir: Option<PathBuf>,

    /// Comma-separated declaration file names (overrides OPTRESOLVE_LIB_FILES).
    #[arg(long, value_name = "LIST", conflicts_with = "lib_dir")]
    pub lib_files: Option<String>,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Compiler command-line tokens; `@file` expands a response file.
    #[arg(value_name = "TOKENS", trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

impl DriverArgs {
    /// Parse `argv` (including the program name) without exiting on error.
    pub fn parse_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(argv)
    }

    /// Declaration library files selected by `--lib-dir`, `--lib-files`,
    /// `OPTRESOLVE_LIB_FILES` or the bundled defaults, in that order.
    pub fn library_files(&self) -> anyhow::Result<Vec<String>> {
        if let Some(dir) = &self.lib_dir {
            return library_files_in(dir);
        }
        if let Some(list) = &self.lib_files {
            return Ok(init_library_files_from(Some(list.as_str())));
        }
        Ok(init_library_files())
    }
}
