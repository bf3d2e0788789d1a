#![no_main]
use libfuzzer_sys::fuzz_target;

use optresolve::config::DEFAULT_LIBRARY_FILES;
use optresolve::Registry;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary bytes into tokens on NUL, the way argv arrives.
    let text = String::from_utf8_lossy(data);
    let tokens: Vec<&str> = text.split('\0').collect();

    let registry = Registry::new(DEFAULT_LIBRARY_FILES);
    let parsed = registry.resolve(&tokens);

    // File names are an ordered subsequence of the input.
    let mut rest = tokens.iter();
    for file in &parsed.file_names {
        assert!(rest.any(|t| *t == file.as_str()));
    }

    // Same input, same output.
    assert_eq!(parsed, registry.resolve(&tokens));
});
