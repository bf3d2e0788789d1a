//! Binary entry point for the `optresolve` command-line tool.
//!
//! # Control flow
//!
//! 1. [`DriverArgs::parse_from_argv`] reads the driver's own flags.
//! 2. [`init_tracing`] installs the log subscriber.
//! 3. [`run`] selects the library files, expands response files, resolves the
//!    compiler tokens and prints the outcome. It returns the exit code.

use optresolve::cli::args::DriverArgs;
use optresolve::cli::constants::{EXIT_DRIVER_ERROR, EXIT_SUCCESS, PROGRAM_NAME};
use optresolve::cli::help::{print_help, print_version};
use optresolve::cli::report::{exit_status, render_json, render_text};
use optresolve::cli::response_file::expand_response_files;
use optresolve::logging::init_tracing;
use optresolve::Registry;
use tracing::{debug, info};

/// Execute one resolution and return the process exit code.
fn run(args: &DriverArgs) -> anyhow::Result<i32> {
    let library_files = args.library_files()?;
    info!(count = library_files.len(), "declaration libraries");

    let tokens = expand_response_files(&args.tokens)?;
    debug!(?tokens, "expanded command line");

    let registry = Registry::new(&library_files);
    let parsed = registry.resolve(&tokens);

    // Help and version short-circuit like the compiler does; diagnostics are
    // still reported so a typo next to --help is not lost.
    if parsed.options.flag("help") || parsed.options.flag("version") {
        for diagnostic in &parsed.errors {
            eprintln!("{diagnostic}");
        }
        if parsed.options.flag("help") {
            print_help(&registry);
        } else {
            print_version();
        }
        return Ok(EXIT_SUCCESS);
    }

    if args.json {
        println!("{}", render_json(&parsed)?);
    } else {
        print!("{}", render_text(&parsed));
    }
    Ok(exit_status(&parsed))
}

fn main() {
    let args = match DriverArgs::parse_from_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    init_tracing(args.verbose);

    let code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e:#}");
            EXIT_DRIVER_ERROR
        }
    };
    std::process::exit(code);
}
