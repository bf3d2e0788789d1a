// optresolve — command-line option resolver for a compiler front-end

pub mod config;
pub mod diagnostics;
pub mod options;
pub mod libdir;
pub mod logging;
pub mod cli;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use diagnostics::{Diagnostic, DiagnosticCategory};
pub use options::{resolve, CompilerOptions, OptionValue, ParsedCommandLine, Registry};
