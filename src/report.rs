//! Plain-text diagnostic report shown in debug and dry-run mode.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use crate::config::env_summary;
use crate::quote::join_quoted;

/// Prefix of every report line.
pub const PREFIX: &str = "[launcher]";

/// What the launcher is about to do.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub config_path: &'a Path,
    pub java: &'a Path,
    pub jar: &'a Path,
    pub env: &'a BTreeMap<String, String>,
    pub argv: &'a [String],
}

impl Report<'_> {
    /// Write the report, one line per item.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{PREFIX} Configuration loaded from: {}",
            self.config_path.display()
        )?;
        writeln!(out, "{PREFIX} Java executable: {}", self.java.display())?;
        writeln!(out, "{PREFIX} JAR file: {}", self.jar.display())?;
        if self.env.is_empty() {
            writeln!(out, "{PREFIX} Environment variables: (none)")?;
        } else {
            writeln!(
                out,
                "{PREFIX} Environment variables: {}",
                env_summary(self.env)
            )?;
        }
        writeln!(out, "{PREFIX} Executing: {}", join_quoted(self.argv))
    }
}
