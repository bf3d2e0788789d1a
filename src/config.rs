// config.rs — Compile-time configuration constants and environment defaults.
//
// Everything the resolver treats as fixed vocabulary (prefix markers, the list
// separator, declaration-library file naming) lives here, together with the
// environment-variable hooks the driver reads at startup.

use tracing::warn;

// ── Token syntax ──────────────────────────────────────────────────────────────

/// Marker that introduces an option name (`-t`, `-target`).
pub const SHORT_PREFIX: &str = "-";

/// Marker that introduces a long option name (`--target`).
pub const LONG_PREFIX: &str = "--";

/// Separator between aliases in a multi-valued option token (`es5,es6`).
pub const LIST_SEPARATOR: char = ',';

/// Separator used in the diagnostic message when listing accepted aliases.
pub const ALIAS_LIST_JOINER: &str = ",";

/// Prefix that marks a response-file token (`@args.txt`).
pub const RESPONSE_FILE_PREFIX: char = '@';

// ── Declaration library files ─────────────────────────────────────────────────

/// Declaration library files are named `lib.<alias>.d.ts`.
pub const LIB_FILE_PREFIX: &str = "lib.";
pub const LIB_FILE_SUFFIX: &str = ".d.ts";

/// Declaration libraries bundled with the compiler, in registration order.
///
/// Used when neither `--lib-dir`, `--lib-files` nor `OPTRESOLVE_LIB_FILES`
/// supplies a list.
pub const DEFAULT_LIBRARY_FILES: &[&str] = &[
    "lib.es5.d.ts",
    "lib.es6.d.ts",
    "lib.es6.array.d.ts",
    "lib.es6.collection.d.ts",
    "lib.es6.function.d.ts",
    "lib.es6.generator.d.ts",
    "lib.es6.iterable.d.ts",
    "lib.es6.math.d.ts",
    "lib.es6.number.d.ts",
    "lib.es6.object.d.ts",
    "lib.es6.promise.d.ts",
    "lib.es6.proxy.d.ts",
    "lib.es6.reflect.d.ts",
    "lib.es6.regexp.d.ts",
    "lib.es6.string.d.ts",
    "lib.es6.symbol.d.ts",
    "lib.es6.symbol.wellknown.d.ts",
    "lib.dom.d.ts",
    "lib.dom.iterable.d.ts",
    "lib.webworker.d.ts",
    "lib.scripthost.d.ts",
];

// ── Environment ───────────────────────────────────────────────────────────────

/// Comma-separated list of declaration library file names.
pub const ENV_LIB_FILES: &str = "OPTRESOLVE_LIB_FILES";

/// `tracing` filter directive for the driver (e.g. `optresolve=debug`).
pub const ENV_LOG: &str = "OPTRESOLVE_LOG";

/// Read the declaration library file list from `OPTRESOLVE_LIB_FILES`.
///
/// Falls back to [`DEFAULT_LIBRARY_FILES`] when the variable is unset or lists
/// no file names.
pub fn init_library_files() -> Vec<String> {
    init_library_files_from(std::env::var(ENV_LIB_FILES).ok().as_deref())
}

/// Testable core of [`init_library_files`]: parse an optional raw env value.
///
/// Entries are split on [`LIST_SEPARATOR`] and trimmed; empty entries are
/// ignored.
pub fn init_library_files_from(env_val: Option<&str>) -> Vec<String> {
    if let Some(env) = env_val {
        let files: Vec<String> = env
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        if !files.is_empty() {
            return files;
        }
        warn!(
            "ignoring environment variable setting {}={:?}: no library file names",
            ENV_LIB_FILES, env
        );
    }
    default_library_files()
}

/// Owned copy of [`DEFAULT_LIBRARY_FILES`].
pub fn default_library_files() -> Vec<String> {
    DEFAULT_LIBRARY_FILES.iter().map(|s| (*s).to_owned()).collect()
}
