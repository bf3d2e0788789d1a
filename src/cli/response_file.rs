//! Response-file expansion.
//!
//! A token `@path` is replaced, in place, by the tokens read from `path`.
//! Tokens in the file are separated by whitespace; a double-quoted run is one
//! token with the quotes removed. Response files are not expanded recursively.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use tracing::debug;

use crate::config::RESPONSE_FILE_PREFIX;

/// Expand every `@path` token of `tokens`.
pub fn expand_response_files<T: AsRef<str>>(tokens: &[T]) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        match token.strip_prefix(RESPONSE_FILE_PREFIX) {
            Some(path) => {
                if path.is_empty() {
                    return Err(anyhow!("bad usage: '@' must be followed by a response file name"));
                }
                let expanded = read_response_file(Path::new(path))?;
                debug!(path, count = expanded.len(), "expanded response file");
                out.extend(expanded);
            }
            None => out.push(token.to_owned()),
        }
    }
    Ok(out)
}

/// Read and tokenize one response file.
pub fn read_response_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read response file {}", path.display()))?;
    tokenize_response_text(&text)
        .with_context(|| format!("in response file {}", path.display()))
}

/// Split response-file text into tokens.
pub fn tokenize_response_text(text: &str) -> anyhow::Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let body = start + 1;
            let close = text[body..]
                .find('"')
                .ok_or_else(|| anyhow!("unterminated quoted string"))?;
            tokens.push(text[body..body + close].to_owned());
            // Skip past the closing quote.
            for (i, _) in chars.by_ref() {
                if i == body + close {
                    break;
                }
            }
            continue;
        }
        let mut end = text.len();
        while let Some(&(i, ch)) = chars.peek() {
            if ch.is_whitespace() {
                end = i;
                break;
            }
            chars.next();
        }
        tokens.push(text[start..end].to_owned());
    }

    Ok(tokens)
}
