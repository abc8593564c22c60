//! Locates the Java executable and the archive to run.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Error produced while resolving launch paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("java executable not found in PATH: {0}")]
    NotInPath(String),
    #[error("java executable not found: {}", .0.display())]
    JavaNotFound(PathBuf),
    #[error("jar file not found: {}", .0.display())]
    JarNotFound(PathBuf),
    #[error("jar path is a directory: {}", .0.display())]
    JarIsDirectory(PathBuf),
}

/// Resolve the Java executable.
///
/// With an empty `java_dir` the executable is looked up on `PATH`.
/// Otherwise it must exist at `<java_dir>/bin/<java_executable>`, where a
/// relative `java_dir` is taken relative to `exe_dir`.
///
/// # Errors
///
/// Returns `ResolveError::NotInPath` or `ResolveError::JavaNotFound` when
/// the executable does not exist.
pub fn resolve_java(
    java_dir: &str,
    java_executable: &str,
    exe_dir: &Path,
) -> Result<PathBuf, ResolveError> {
    resolve_java_with_path(
        java_dir,
        java_executable,
        exe_dir,
        std::env::var_os("PATH").as_deref(),
    )
}

/// [`resolve_java`] with an explicit `PATH` value.
///
/// # Errors
///
/// See [`resolve_java`].
pub fn resolve_java_with_path(
    java_dir: &str,
    java_executable: &str,
    exe_dir: &Path,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, ResolveError> {
    let name = executable_name(java_executable);

    if java_dir.trim().is_empty() {
        let found = path_var
            .into_iter()
            .flat_map(std::env::split_paths)
            .map(|dir| dir.join(&name))
            .find(|candidate| is_executable(candidate))
            .ok_or_else(|| ResolveError::NotInPath(name.clone()))?;
        log::debug!("found {name} on PATH at {}", found.display());
        return Ok(found);
    }

    let candidate = relative_to(exe_dir, java_dir).join("bin").join(&name);
    if !candidate.exists() {
        return Err(ResolveError::JavaNotFound(candidate));
    }
    log::debug!("using java executable {}", candidate.display());
    Ok(candidate)
}

/// Resolve the archive path and check that it is a file.
///
/// # Errors
///
/// Returns `ResolveError::JarNotFound` when nothing exists at the path and
/// `ResolveError::JarIsDirectory` when it names a directory.
pub fn resolve_jar(jar: &str, exe_dir: &Path) -> Result<PathBuf, ResolveError> {
    let path = relative_to(exe_dir, jar);
    match fs::metadata(&path) {
        Err(_) => Err(ResolveError::JarNotFound(path)),
        Ok(meta) if meta.is_dir() => Err(ResolveError::JarIsDirectory(path)),
        Ok(_) => Ok(path),
    }
}

fn relative_to(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(windows)]
fn executable_name(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".exe") {
        name.to_string()
    } else {
        format!("{name}.exe")
    }
}

#[cfg(not(windows))]
fn executable_name(name: &str) -> String {
    name.to_string()
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file() && has_execute_permission(&meta))
}

#[cfg(unix)]
fn has_execute_permission(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
const fn has_execute_permission(_meta: &fs::Metadata) -> bool {
    true
}
