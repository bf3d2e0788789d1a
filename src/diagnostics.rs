//! Structured, non-fatal reports produced while resolving a command line.
//!
//! A [`Diagnostic`] carries a stable numeric code, a [`DiagnosticCategory`]
//! and a fully formatted message. Message texts come from
//! [`DiagnosticMessage`] templates whose `{0}`, `{1}`, … placeholders are
//! substituted by [`format_message`].

use std::fmt;

use serde::Serialize;

/// Severity classification of a diagnostic. Resolution only ever reports
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Error,
}

impl DiagnosticCategory {
    /// Lower-case label used when rendering (`error TS6046: …`).
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticCategory::Error => "error",
        }
    }
}

/// A message template with a stable code and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub template: &'static str,
}

/// `{0}` is the option name, `{1}` the accepted aliases joined by `,`.
pub const ARGUMENT_FOR_OPTION_MUST_BE: DiagnosticMessage = DiagnosticMessage {
    code: 6046,
    category: DiagnosticCategory::Error,
    template: "Argument for '--{0}' option must be: {1}",
};

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
}

impl Diagnostic {
    /// Instantiate `message` with positional `args`.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Diagnostic {
            code: message.code,
            category: message.category,
            message_text: format_message(message.template, args),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TS{}: {}", self.category.label(), self.code, self.message_text)
    }
}

/// Replace every `{N}` in `template` with `args[N]`.
///
/// Placeholders whose index is out of range are left verbatim.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((*arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
