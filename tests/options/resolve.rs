// Integration tests for options/resolve.rs — the resolution loop
//
// Covers:
//   - `--library` list splitting, accumulation and the trailing-separator rule
//   - single-valued enumerations (last valid occurrence wins)
//   - boolean flags, short names, prefix and case handling
//   - unknown options falling through to file names
//   - token classification invariant and idempotence

use optresolve::config::DEFAULT_LIBRARY_FILES;
use optresolve::diagnostics::DiagnosticCategory;
use optresolve::options::{resolve, OptionValue, ParsedCommandLine, Registry};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn run(tokens: &[&str]) -> ParsedCommandLine {
    resolve(tokens, DEFAULT_LIBRARY_FILES)
}

fn all_library_aliases() -> String {
    DEFAULT_LIBRARY_FILES
        .iter()
        .map(|f| f.trim_start_matches("lib.").trim_end_matches(".d.ts"))
        .collect::<Vec<_>>()
        .join(",")
}

// ─────────────────────────────────────────────────────────────────────────────
// --library
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn library_single_alias() {
    let p = run(&["--library", "es5"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts"]);
    assert!(p.errors.is_empty());
    assert!(p.file_names.is_empty());
}

#[test]
fn library_followed_by_file() {
    let p = run(&["--library", "es6", "0.ts"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es6.d.ts"]);
    assert!(p.errors.is_empty());
    assert_eq!(p.file_names, ["0.ts"]);
}

#[test]
fn library_comma_separated_list() {
    let p = run(&["--library", "es5,es6.symbol.wellknown", "0.ts"]);
    assert_eq!(
        p.options.library().unwrap(),
        ["lib.es5.d.ts", "lib.es6.symbol.wellknown.d.ts"]
    );
    assert!(p.errors.is_empty());
    assert_eq!(p.file_names, ["0.ts"]);
}

#[test]
fn library_invalid_alias_dropped_with_one_diagnostic() {
    let p = run(&["--library", "es5,es7", "0.ts"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts"]);
    assert_eq!(p.errors.len(), 1);
    let d = &p.errors[0];
    assert_eq!(d.code, 6046);
    assert_eq!(d.category, DiagnosticCategory::Error);
    assert_eq!(
        d.message_text,
        format!("Argument for '--library' option must be: {}", all_library_aliases())
    );
    assert_eq!(p.file_names, ["0.ts"]);
}

#[test]
fn library_trailing_separator_does_not_absorb_next_token() {
    let p = run(&["--library", "es5,", "es7", "0.ts"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts"]);
    assert!(p.errors.is_empty());
    assert_eq!(p.file_names, ["es7", "0.ts"]);
}

#[test]
fn library_occurrences_accumulate() {
    let p = run(&["--library", "es5", "0.ts", "--library", "es6.array,es6.symbol.wellknown"]);
    assert_eq!(
        p.options.library().unwrap(),
        ["lib.es5.d.ts", "lib.es6.array.d.ts", "lib.es6.symbol.wellknown.d.ts"]
    );
    assert!(p.errors.is_empty());
    assert_eq!(p.file_names, ["0.ts"]);
}

#[test]
fn library_each_invalid_alias_reported() {
    let p = run(&["--library", "es7,es5,esnext"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts"]);
    assert_eq!(p.errors.len(), 2);
}

#[test]
fn library_all_invalid_still_records_option() {
    let p = run(&["--library", "es7"]);
    assert_eq!(p.options.library().unwrap(), Vec::<String>::new());
    assert_eq!(p.errors.len(), 1);
}

#[test]
fn library_leading_and_doubled_separators_are_silent() {
    let p = run(&["--library", ",es5,,dom,"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts", "lib.dom.d.ts"]);
    assert!(p.errors.is_empty());
}

#[test]
fn library_aliases_are_case_insensitive() {
    let p = run(&["--library", "ES5,Dom"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts", "lib.dom.d.ts"]);
}

#[test]
fn library_duplicates_are_kept() {
    let p = run(&["--library", "es5", "--library", "es5"]);
    assert_eq!(p.options.library().unwrap(), ["lib.es5.d.ts", "lib.es5.d.ts"]);
}

#[test]
fn library_vocabulary_comes_from_supplied_files() {
    let p = resolve(&["--library", "es5,custom"], &["lib.custom.d.ts"]);
    assert_eq!(p.options.library().unwrap(), ["lib.custom.d.ts"]);
    assert_eq!(p.errors.len(), 1);
    assert_eq!(p.errors[0].message_text, "Argument for '--library' option must be: custom");
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-valued enumerations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn target_last_valid_occurrence_wins() {
    let p = run(&["--target", "es3", "--target", "es5"]);
    assert_eq!(p.options.target(), Some("ES5"));
}

#[test]
fn target_invalid_does_not_clobber_earlier_value() {
    let p = run(&["--target", "es5", "--target", "es2099", "a.ts"]);
    assert_eq!(p.options.target(), Some("ES5"));
    assert_eq!(p.errors.len(), 1);
    assert_eq!(
        p.errors[0].message_text,
        "Argument for '--target' option must be: es3,es5,es6,es2015"
    );
    assert_eq!(p.file_names, ["a.ts"]);
}

#[test]
fn target_invalid_alone_leaves_option_unset() {
    let p = run(&["--target", "es2099"]);
    assert_eq!(p.options.target(), None);
    assert!(p.options.is_empty());
}

#[test]
fn repeated_options_occupy_one_entry_each() {
    let p = run(&["--library", "es5", "--noEmit", "--library", "dom", "--noEmit"]);
    assert_eq!(p.options.len(), 2);
    assert!(!p.options.is_empty());
}

#[test]
fn module_aliases_map_to_canonical_values() {
    assert_eq!(run(&["--module", "commonjs"]).options.module(), Some("CommonJS"));
    assert_eq!(run(&["--module", "es6"]).options.module(), Some("ES2015"));
    assert_eq!(run(&["-m", "AMD"]).options.module(), Some("AMD"));
}

#[test]
fn other_enumerations() {
    let p = run(&["--newLine", "lf", "--moduleResolution", "node", "--jsx", "react"]);
    assert_eq!(p.options.single("newLine"), Some("LineFeed"));
    assert_eq!(p.options.single("moduleResolution"), Some("NodeJs"));
    assert_eq!(p.options.single("jsx"), Some("React"));
}

#[test]
fn enum_value_is_not_split_on_separator() {
    let p = run(&["--target", "es5,es6"]);
    assert_eq!(p.options.target(), None);
    assert_eq!(p.errors.len(), 1);
}

#[test]
fn missing_enum_value_at_end() {
    let p = run(&["main.ts", "--module"]);
    assert_eq!(p.options.module(), None);
    assert_eq!(p.errors.len(), 1);
    assert_eq!(p.file_names, ["main.ts"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Booleans, prefixes, short names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn boolean_flags_are_true_and_take_no_value() {
    let p = run(&["--noImplicitAny", "a.ts", "--sourceMap"]);
    assert_eq!(p.options.get("noImplicitAny"), Some(&OptionValue::Flag(true)));
    assert!(p.options.flag("sourceMap"));
    assert_eq!(p.file_names, ["a.ts"]);
}

#[test]
fn single_dash_and_mixed_case_names() {
    let p = run(&["-noemit", "-TARGET", "es5"]);
    assert!(p.options.flag("noEmit"));
    assert_eq!(p.options.target(), Some("ES5"));
}

#[test]
fn short_names_resolve_to_long_options() {
    let p = run(&["-d", "-w", "-t", "es3"]);
    assert!(p.options.flag("declaration"));
    assert!(p.options.flag("watch"));
    assert_eq!(p.options.target(), Some("ES3"));
}

#[test]
fn option_keys_in_first_appearance_order() {
    let p = run(&["--target", "es5", "--noEmit", "--library", "dom", "--target", "es3"]);
    let keys: Vec<_> = p.options.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["target", "noEmit", "library"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Unknown options and file names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_options_are_file_names() {
    let p = run(&["--frobnicate", "value", "a.ts", "--noEmit", "b.ts"]);
    assert_eq!(p.file_names, ["--frobnicate", "value", "a.ts", "b.ts"]);
    assert!(p.errors.is_empty());
    assert!(p.options.flag("noEmit"));
}

#[test]
fn bare_dashes_are_file_names() {
    let p = run(&["-", "--"]);
    assert_eq!(p.file_names, ["-", "--"]);
}

#[test]
fn option_name_without_prefix_is_a_file_name() {
    let p = run(&["library", "es5"]);
    assert_eq!(p.file_names, ["library", "es5"]);
    assert!(p.options.is_empty());
}

#[test]
fn empty_command_line() {
    let p = run(&[]);
    assert_eq!(p, ParsedCommandLine::default());
}

// ─────────────────────────────────────────────────────────────────────────────
// Invariants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_token_is_classified_once() {
    let tokens = [
        "--library", "es5,", "es7", "--target", "bogus", "-d", "x.ts", "--unknown", "--module",
    ];
    let p = run(&tokens);
    // Option names: --library, --target, -d, --module (4); values: es5, bogus (2).
    let consumed_values = 2;
    let option_names = 4;
    assert_eq!(p.file_names.len() + consumed_values + option_names, tokens.len());
    assert_eq!(p.file_names, ["es7", "x.ts", "--unknown"]);
}

#[test]
fn resolution_is_idempotent() {
    let tokens = ["--library", "es5,es7", "0.ts", "--library", "dom", "--target", "es6"];
    assert_eq!(run(&tokens), run(&tokens));
}

#[test]
fn shared_registry_gives_independent_results() {
    let registry = Registry::new(DEFAULT_LIBRARY_FILES);
    let first = registry.resolve(&["--library", "es5"]);
    let second = registry.resolve(&["--library", "es6"]);
    assert_eq!(first.options.library().unwrap(), ["lib.es5.d.ts"]);
    assert_eq!(second.options.library().unwrap(), ["lib.es6.d.ts"]);
}

#[test]
fn registry_can_be_shared_across_threads() {
    let registry = Registry::new(DEFAULT_LIBRARY_FILES);
    std::thread::scope(|s| {
        let handles: Vec<_> = ["es5", "es6", "dom", "es7"]
            .iter()
            .map(|&alias| {
                let registry = &registry;
                s.spawn(move || registry.resolve(&["--library", alias]))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0].options.library().unwrap(), ["lib.es5.d.ts"]);
        assert_eq!(results[2].options.library().unwrap(), ["lib.dom.d.ts"]);
        assert_eq!(results[3].errors.len(), 1);
    });
}
