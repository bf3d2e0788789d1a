//! Compiler option resolution.
//!
//! | Submodule    | Responsibility |
//! |--------------|---------------|
//! | [`registry`] | `Registry` of `OptionDescriptor`s and their closed `Vocabulary`s. |
//! | [`value`]    | `OptionValue`, `MergeStrategy` and the ordered `CompilerOptions` record. |
//! | [`resolve`]  | The left-to-right resolution loop producing a `ParsedCommandLine`. |

pub mod registry;
pub mod value;
pub mod resolve;

pub use registry::{OptionDescriptor, OptionKind, Registry, Vocabulary};
pub use resolve::{resolve, ParsedCommandLine};
pub use value::{CompilerOptions, MergeStrategy, OptionValue};
