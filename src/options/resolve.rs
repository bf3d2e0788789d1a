//! The resolution loop: raw tokens in, [`ParsedCommandLine`] out.
//!
//! Tokens are consumed left to right. A token that names a registered option
//! is an option name and, for enumerations, takes the following token as its
//! value. Every other token is a file name. Invalid values are reported as
//! diagnostics and skipped; resolution never stops early.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LIST_SEPARATOR;
use crate::diagnostics::{Diagnostic, ARGUMENT_FOR_OPTION_MUST_BE};
use crate::options::registry::{OptionDescriptor, OptionKind, Registry, Vocabulary};
use crate::options::value::{CompilerOptions, OptionValue};

/// Result of resolving one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommandLine {
    pub options: CompilerOptions,
    pub file_names: Vec<String>,
    pub errors: Vec<Diagnostic>,
}

/// Build a registry over `library_files` and resolve `tokens` against it.
pub fn resolve<T, L>(tokens: &[T], library_files: &[L]) -> ParsedCommandLine
where
    T: AsRef<str>,
    L: AsRef<str>,
{
    Registry::new(library_files).resolve(tokens)
}

impl Registry {
    /// Resolve `tokens` against this registry.
    pub fn resolve<T: AsRef<str>>(&self, tokens: &[T]) -> ParsedCommandLine {
        let mut parsed = ParsedCommandLine::default();

        let mut idx = 0usize;
        while idx < tokens.len() {
            let token = tokens[idx].as_ref();
            idx += 1;

            let Some(descriptor) = self.lookup(token) else {
                trace!(token, "file name");
                parsed.file_names.push(token.to_owned());
                continue;
            };

            let strategy = descriptor.kind.merge_strategy();
            let value = match &descriptor.kind {
                OptionKind::Boolean => Some(OptionValue::Flag(true)),
                OptionKind::SingleEnum(vocabulary) => {
                    let raw = next_value(tokens, &mut idx);
                    resolve_single(descriptor, vocabulary, raw, &mut parsed.errors)
                }
                OptionKind::MultiEnum(vocabulary) => {
                    let raw = next_value(tokens, &mut idx);
                    resolve_list(descriptor, vocabulary, raw, &mut parsed.errors)
                }
            };

            if let Some(value) = value {
                debug!(option = descriptor.name, ?value, "resolved option");
                parsed.options.merge(descriptor.name, value, strategy);
            }
        }

        debug!(
            options = parsed.options.len(),
            files = parsed.file_names.len(),
            errors = parsed.errors.len(),
            "resolved command line"
        );
        parsed
    }
}

/// Take the token after an option name as its value, if there is one.
fn next_value<'t, T: AsRef<str>>(tokens: &'t [T], idx: &mut usize) -> Option<&'t str> {
    let value = tokens.get(*idx)?.as_ref();
    *idx += 1;
    Some(value)
}

fn resolve_single(
    descriptor: &OptionDescriptor,
    vocabulary: &Vocabulary,
    raw: Option<&str>,
    errors: &mut Vec<Diagnostic>,
) -> Option<OptionValue> {
    match vocabulary.lookup(raw.unwrap_or_default()) {
        Some(canonical) => Some(OptionValue::Single(canonical.to_owned())),
        None => {
            errors.push(invalid_value(descriptor, vocabulary));
            None
        }
    }
}

/// Split a comma-separated value and resolve each alias independently.
///
/// Empty pieces, such as the one after a trailing separator, are dropped
/// without a diagnostic. A missing value token is reported once.
fn resolve_list(
    descriptor: &OptionDescriptor,
    vocabulary: &Vocabulary,
    raw: Option<&str>,
    errors: &mut Vec<Diagnostic>,
) -> Option<OptionValue> {
    let Some(raw) = raw else {
        errors.push(invalid_value(descriptor, vocabulary));
        return None;
    };

    let mut values = Vec::new();
    for alias in raw.split(LIST_SEPARATOR) {
        if alias.trim().is_empty() {
            continue;
        }
        match vocabulary.lookup(alias) {
            Some(canonical) => values.push(canonical.to_owned()),
            None => {
                debug!(option = descriptor.name, alias, "alias not in vocabulary");
                errors.push(invalid_value(descriptor, vocabulary));
            }
        }
    }
    Some(OptionValue::List(values))
}

fn invalid_value(descriptor: &OptionDescriptor, vocabulary: &Vocabulary) -> Diagnostic {
    let aliases = vocabulary.alias_list();
    Diagnostic::new(&ARGUMENT_FOR_OPTION_MUST_BE, &[descriptor.name, aliases.as_str()])
}
