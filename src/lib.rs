//! Native launcher for Java archives.
//!
//! The launcher reads a sidecar `.conf` file, splits its free-form
//! argument strings into discrete arguments, resolves the Java executable
//! and the archive, and runs
//! `java [jvm args] -jar <archive> [app args] [forwarded args]`.
//!
//! # Quick start
//!
//! ## Tokenize configuration strings
//!
//! ```
//! use jar_launcher::tokenize;
//!
//! let jvm = tokenize(r#"-Xmx512m "-Djava.library.path=./libs with spaces""#);
//! assert_eq!(jvm, ["-Xmx512m", "-Djava.library.path=./libs with spaces"]);
//! ```
//!
//! ## Render an argument vector for display
//!
//! ```
//! use jar_launcher::join_quoted;
//!
//! let line = join_quoted(&["java", "-jar", "my app.jar"]);
//! assert_eq!(line, r#"java -jar "my app.jar""#);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod args;
pub mod config;
pub mod quote;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod tokenizer;

pub use args::{SpecialFlags, build_argv, extract_special};
pub use config::{Config, ConfigError, ConfigErrorKind, ConfigSyntaxError};
pub use quote::{QuotePolicy, join_quoted, join_quoted_with, quote_arg, quote_arg_with};
pub use report::Report;
pub use resolve::{ResolveError, resolve_jar, resolve_java};
pub use runner::{RunError, run};
pub use tokenizer::{Mode, tokenize};

/// Unified error type covering every launch stage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Java executable or archive could not be found.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The child process could not be run.
    #[error(transparent)]
    Run(#[from] RunError),
}

impl Error {
    /// Process exit code the launcher reports for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 201,
            Self::Resolve(ResolveError::NotInPath(_) | ResolveError::JavaNotFound(_)) => 202,
            Self::Resolve(ResolveError::JarNotFound(_) | ResolveError::JarIsDirectory(_)) => 203,
            Self::Run(_) => 1,
        }
    }
}
