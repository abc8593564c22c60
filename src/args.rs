//! Launcher command-line handling and final argument vector assembly.

use std::path::Path;

use crate::tokenizer::tokenize;

/// Enables the diagnostic report.
pub const DEBUG_FLAG: &str = "--launcher-debug";
/// Prints the report and exits without starting Java.
pub const DRY_RUN_FLAG: &str = "--launcher-dry-run";

/// Marker placed between interpreter arguments and the archive path.
const JAR_MARKER: &str = "-jar";

/// Launcher flags split out of the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialFlags {
    pub debug: bool,
    pub dry_run: bool,
    /// Remaining arguments, in order, passed through to the application.
    pub forward: Vec<String>,
}

impl SpecialFlags {
    /// Whether the diagnostic report should be written.
    ///
    /// A dry run always reports; otherwise it would have no visible effect.
    #[must_use]
    pub const fn report(&self) -> bool {
        self.debug || self.dry_run
    }
}

/// Remove the launcher's own flags from `args`, wherever they appear.
#[must_use]
pub fn extract_special<I, S>(args: I) -> SpecialFlags
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut flags = SpecialFlags::default();
    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            DEBUG_FLAG => flags.debug = true,
            DRY_RUN_FLAG => flags.dry_run = true,
            _ => flags.forward.push(arg),
        }
    }
    flags
}

/// Assemble the full argument vector for the Java process.
///
/// The layout is `java [jvm args] -jar <jar> [app args] [forwarded args]`,
/// with both argument strings run through [`tokenize`].
#[must_use]
pub fn build_argv(
    java: &Path,
    jvm_args: &str,
    jar: &Path,
    app_args: &str,
    forward: &[String],
) -> Vec<String> {
    let jvm = tokenize(jvm_args);
    let app = tokenize(app_args);

    let mut argv = Vec::with_capacity(3 + jvm.len() + app.len() + forward.len());
    argv.push(java.to_string_lossy().into_owned());
    argv.extend(jvm);
    argv.push(JAR_MARKER.to_string());
    argv.push(jar.to_string_lossy().into_owned());
    argv.extend(app);
    argv.extend_from_slice(forward);
    argv
}
