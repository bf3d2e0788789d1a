// cli/help.rs — Help and version text.
//
// The option section is generated from the registry so the help never drifts
// from what the resolver accepts.

use crate::cli::constants::{COMPILER_NAME, PROGRAM_NAME, VERSION_MESSAGE_FMT};
use crate::config::LIST_SEPARATOR;
use crate::diagnostics::format_message;
use crate::options::registry::{OptionDescriptor, OptionKind, Registry};

/// Width of the option column in [`help_text`].
const OPTION_COLUMN: usize = 36;

/// Enumerations with more aliases than this are listed on a separate line.
const INLINE_ALIAS_MAX: usize = 8;

/// `optresolve Version 0.2.0`.
pub fn version_text() -> String {
    format_message(VERSION_MESSAGE_FMT, &[PROGRAM_NAME, env!("CARGO_PKG_VERSION")])
}

/// Full help text: version, syntax, examples and every registered option.
pub fn help_text(registry: &Registry) -> String {
    let mut out = String::new();
    out.push_str(&version_text());
    out.push('\n');
    out.push_str(&format!("Syntax:   {} [options] [file ...]\n\n", COMPILER_NAME));
    out.push_str(&format!("Examples: {} hello.ts\n", COMPILER_NAME));
    out.push_str(&format!("          {} --target es5 --library es5,dom main.ts\n", COMPILER_NAME));
    out.push_str(&format!("          {} @args.txt\n\n", COMPILER_NAME));
    out.push_str("Options:\n");

    for descriptor in registry.descriptors() {
        let usage = option_usage(descriptor);
        out.push_str(&format!(" {:<width$} {}\n", usage, descriptor.description, width = OPTION_COLUMN));
        if let Some(vocabulary) = descriptor.kind.vocabulary() {
            if vocabulary.len() > INLINE_ALIAS_MAX {
                out.push_str(&format!(
                    " {:<width$} Allowed: {}\n",
                    "",
                    vocabulary.aliases().collect::<Vec<_>>().join(", "),
                    width = OPTION_COLUMN
                ));
            }
        }
    }
    out.push_str(&format!(" {:<width$} Insert command line options and files from a file.\n", "@<file>", width = OPTION_COLUMN));
    out
}

/// `-t VERSION, --target VERSION` style column text.
fn option_usage(descriptor: &OptionDescriptor) -> String {
    let placeholder = match &descriptor.kind {
        OptionKind::Boolean => String::new(),
        OptionKind::SingleEnum(v) if v.len() <= INLINE_ALIAS_MAX => {
            format!(" {}", v.aliases().collect::<Vec<_>>().join("|"))
        }
        OptionKind::SingleEnum(_) => " VALUE".to_owned(),
        OptionKind::MultiEnum(v) if v.len() <= INLINE_ALIAS_MAX => {
            let sep = LIST_SEPARATOR.to_string();
            format!(" {}", v.aliases().collect::<Vec<_>>().join(&sep))
        }
        OptionKind::MultiEnum(_) => format!(" NAME[{}NAME...]", LIST_SEPARATOR),
    };
    match descriptor.short_name {
        Some(short) => format!("-{short}, --{}{placeholder}", descriptor.name),
        None => format!("--{}{placeholder}", descriptor.name),
    }
}

/// Print [`help_text`] to stdout.
pub fn print_help(registry: &Registry) {
    print!("{}", help_text(registry));
}

/// Print [`version_text`] to stdout.
pub fn print_version() {
    println!("{}", version_text());
}
