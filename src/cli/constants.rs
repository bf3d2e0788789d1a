// cli/constants.rs — Program identity strings and exit codes.

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "optresolve";
pub const COMPILER_NAME: &str = "tsc";

/// Version banner template; `{0}` is the program name, `{1}` the version.
pub const VERSION_MESSAGE_FMT: &str = "{0} Version {1}";

// ── Exit codes ────────────────────────────────────────────────────────────────
/// Resolution succeeded with no diagnostics (or help/version was printed).
pub const EXIT_SUCCESS: i32 = 0;
/// Resolution completed but reported at least one diagnostic.
pub const EXIT_DIAGNOSTICS: i32 = 1;
/// The driver could not run the resolution (bad flags, unreadable files).
pub const EXIT_DRIVER_ERROR: i32 = 2;
