//! Option schema registry.
//!
//! A [`Registry`] is a read-only table of [`OptionDescriptor`]s. Looking up a
//! token yields either the descriptor it names or `None`, in which case the
//! resolver treats the token as a positional file name.
//!
//! The enumeration vocabularies are closed and ordered: the order in which
//! aliases are registered is the order they are listed in diagnostics.

use tracing::warn;

use crate::config::{ALIAS_LIST_JOINER, LIB_FILE_PREFIX, LIB_FILE_SUFFIX, LONG_PREFIX, SHORT_PREFIX};
use crate::options::value::MergeStrategy;

// ── Vocabulary ────────────────────────────────────────────────────────────────

/// Closed, ordered set of `(alias, canonical value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<(String, String)>,
}

impl Vocabulary {
    pub fn new<A, C>(pairs: impl IntoIterator<Item = (A, C)>) -> Self
    where
        A: Into<String>,
        C: Into<String>,
    {
        Vocabulary {
            entries: pairs.into_iter().map(|(a, c)| (a.into(), c.into())).collect(),
        }
    }

    /// Build the declaration-library vocabulary from file names of the form
    /// `lib.<alias>.d.ts`, keeping the supplied order.
    ///
    /// Names that do not follow that form are skipped.
    pub fn from_library_files<S: AsRef<str>>(files: &[S]) -> Self {
        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let file = file.as_ref();
            match library_alias(file) {
                Some(alias) => entries.push((alias.to_owned(), file.to_owned())),
                None => warn!("skipping declaration library {:?}: not named lib.<name>.d.ts", file),
            }
        }
        Vocabulary { entries }
    }

    /// Canonical value for `candidate`, matched case-insensitively after trimming.
    pub fn lookup(&self, candidate: &str) -> Option<&str> {
        let key = candidate.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| alias.to_ascii_lowercase() == key)
            .map(|(_, canonical)| canonical.as_str())
    }

    /// Declared aliases, verbatim, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// Aliases joined for the "must be one of" diagnostic.
    pub fn alias_list(&self) -> String {
        self.aliases().collect::<Vec<_>>().join(ALIAS_LIST_JOINER)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `lib.es6.array.d.ts` → `es6.array`.
pub fn library_alias(file: &str) -> Option<&str> {
    let alias = file.strip_prefix(LIB_FILE_PREFIX)?.strip_suffix(LIB_FILE_SUFFIX)?;
    (!alias.is_empty()).then_some(alias)
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// Value kind of an option, carrying the vocabulary for enumerations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Boolean,
    SingleEnum(Vocabulary),
    MultiEnum(Vocabulary),
}

impl OptionKind {
    /// Multi-valued options accumulate; everything else is last-one-wins.
    pub fn merge_strategy(&self) -> MergeStrategy {
        match self {
            OptionKind::MultiEnum(_) => MergeStrategy::Append,
            OptionKind::Boolean | OptionKind::SingleEnum(_) => MergeStrategy::Overwrite,
        }
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        match self {
            OptionKind::Boolean => None,
            OptionKind::SingleEnum(v) | OptionKind::MultiEnum(v) => Some(v),
        }
    }
}

/// Static metadata for one recognised command-line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Registered name, also the key in `CompilerOptions`.
    pub name: &'static str,
    pub short_name: Option<&'static str>,
    pub kind: OptionKind,
    pub description: &'static str,
}

impl OptionDescriptor {
    fn boolean(name: &'static str, short_name: Option<&'static str>, description: &'static str) -> Self {
        OptionDescriptor { name, short_name, kind: OptionKind::Boolean, description }
    }

    fn single(
        name: &'static str,
        short_name: Option<&'static str>,
        pairs: &[(&str, &str)],
        description: &'static str,
    ) -> Self {
        OptionDescriptor {
            name,
            short_name,
            kind: OptionKind::SingleEnum(Vocabulary::new(pairs.iter().copied())),
            description,
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Read-only table of every recognised option.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<OptionDescriptor>,
}

impl Registry {
    /// Build the option table; `library_files` supplies the `--library` vocabulary.
    pub fn new<S: AsRef<str>>(library_files: &[S]) -> Self {
        use OptionDescriptor as D;

        let descriptors = vec![
            D::boolean("help", Some("h"), "Print this message."),
            D::boolean("version", Some("v"), "Print the compiler's version."),
            D::boolean("watch", Some("w"), "Watch input files."),
            D::boolean("declaration", Some("d"), "Generates corresponding '.d.ts' file."),
            D::boolean("noImplicitAny", None, "Raise error on expressions and declarations with an implied 'any' type."),
            D::boolean("noEmit", None, "Do not emit outputs."),
            D::boolean("noEmitOnError", None, "Do not emit outputs if any errors were reported."),
            D::boolean("removeComments", None, "Do not emit comments to output."),
            D::boolean("sourceMap", None, "Generates corresponding '.map' file."),
            D::boolean("strictNullChecks", None, "Enable strict null checks."),
            D::single(
                "target",
                Some("t"),
                &[("es3", "ES3"), ("es5", "ES5"), ("es6", "ES2015"), ("es2015", "ES2015")],
                "Specify ECMAScript target version.",
            ),
            D::single(
                "module",
                Some("m"),
                &[
                    ("none", "None"),
                    ("commonjs", "CommonJS"),
                    ("amd", "AMD"),
                    ("system", "System"),
                    ("umd", "UMD"),
                    ("es6", "ES2015"),
                    ("es2015", "ES2015"),
                ],
                "Specify module code generation.",
            ),
            D::single(
                "moduleResolution",
                None,
                &[("node", "NodeJs"), ("classic", "Classic")],
                "Specify module resolution strategy.",
            ),
            D::single(
                "newLine",
                None,
                &[("crlf", "CarriageReturnLineFeed"), ("lf", "LineFeed")],
                "Specify the end of line sequence to be used when emitting files.",
            ),
            D::single(
                "jsx",
                None,
                &[("preserve", "Preserve"), ("react", "React")],
                "Specify JSX code generation.",
            ),
            OptionDescriptor {
                name: "library",
                short_name: None,
                kind: OptionKind::MultiEnum(Vocabulary::from_library_files(library_files)),
                description: "Specify library files to be included in the compilation.",
            },
        ];

        Registry { descriptors }
    }

    /// Descriptor named by `token`, or `None` when the token is not an option.
    ///
    /// One leading `--` or `-` is stripped; the remainder is matched
    /// case-insensitively against long names, then short names.
    pub fn lookup(&self, token: &str) -> Option<&OptionDescriptor> {
        let name = token
            .strip_prefix(LONG_PREFIX)
            .or_else(|| token.strip_prefix(SHORT_PREFIX))?;
        if name.is_empty() {
            return None;
        }
        self.descriptors
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .or_else(|| {
                self.descriptors
                    .iter()
                    .find(|d| d.short_name.is_some_and(|s| s.eq_ignore_ascii_case(name)))
            })
    }

    /// Registered descriptors in table order.
    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }
}
