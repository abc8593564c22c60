//! Loader for the launcher's `key=value` configuration file.
//!
//! The file sits next to the launcher executable and shares its stem:
//! `app.exe` reads `app.conf` and, unless told otherwise, runs `app.jar`.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Prefix that turns a key into an environment override.
const ENV_PREFIX: &str = "env_";

/// Settings read from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Java installation directory. Empty means "look up `PATH`".
    pub java_dir: String,
    /// Name of the Java executable inside `<java_dir>/bin`.
    pub java_executable: String,
    /// Archive to run, relative to the launcher directory unless absolute.
    pub jar_file: String,
    /// Raw interpreter arguments, tokenized at launch.
    pub jvm_args: String,
    /// Raw application arguments, tokenized at launch.
    pub app_args: String,
    /// Environment overrides from `env_NAME=value` lines.
    pub env: BTreeMap<String, String>,
}

impl Config {
    /// Defaults used before any line is applied.
    #[must_use]
    pub fn with_default_jar(default_jar: &str) -> Self {
        Self {
            java_dir: String::new(),
            java_executable: "java".to_string(),
            jar_file: default_jar.to_string(),
            jvm_args: String::new(),
            app_args: String::new(),
            env: BTreeMap::new(),
        }
    }
}

/// Classifies a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Line has no `=` or the key before it is empty.
    MissingDelimiter { text: String },
    /// `env_` with nothing after the prefix.
    EmptyEnvKey,
    /// Key is not one the launcher understands.
    UnknownKey { key: String },
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter { text } => write!(f, "missing '=' in {text:?}"),
            Self::EmptyEnvKey => write!(f, "invalid env_ key"),
            Self::UnknownKey { key } => write!(f, "unknown config key {key:?}"),
        }
    }
}

/// Syntax error in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct ConfigSyntaxError {
    pub kind: ConfigErrorKind,
    /// 1-based line number.
    pub line: usize,
}

/// Error produced while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to locate launcher executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("configuration file error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: ConfigSyntaxError,
    },
}

/// Parse configuration text.
///
/// Blank lines and lines starting with `#` are ignored. Keys and values are
/// trimmed; only the first `=` separates them, so values may contain `=`.
///
/// # Errors
///
/// Returns `ConfigSyntaxError` for a line without a key, an empty
/// `env_` key, or an unknown key.
pub fn parse(input: &str, default_jar: &str) -> Result<Config, ConfigSyntaxError> {
    let mut config = Config::with_default_jar(default_jar);

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=').filter(|(key, _)| !key.is_empty()) else {
            return Err(ConfigSyntaxError {
                kind: ConfigErrorKind::MissingDelimiter {
                    text: line.to_string(),
                },
                line: line_no,
            });
        };
        let key = key.trim();
        let value = value.trim().to_string();

        if let Some(name) = key.strip_prefix(ENV_PREFIX) {
            if name.is_empty() {
                return Err(ConfigSyntaxError {
                    kind: ConfigErrorKind::EmptyEnvKey,
                    line: line_no,
                });
            }
            config.env.insert(name.to_string(), value);
            continue;
        }

        match key {
            "java_dir" => config.java_dir = value,
            "java_executable" => config.java_executable = value,
            "jar_file" => config.jar_file = value,
            "jvm_args" => config.jvm_args = value,
            "app_args" => config.app_args = value,
            _ => {
                return Err(ConfigSyntaxError {
                    kind: ConfigErrorKind::UnknownKey {
                        key: key.to_string(),
                    },
                    line: line_no,
                });
            }
        }
    }

    Ok(config)
}

/// Read and parse the configuration file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::Io` when the file cannot be read and
/// `ConfigError::Syntax` when its contents are invalid.
pub fn load(path: &Path, default_jar: &str) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&text, default_jar).map_err(|source| ConfigError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Configuration path and default archive name derived from an executable.
///
/// `dir/app.exe` maps to `(dir/app.conf, "app.jar")`.
#[must_use]
pub fn sidecar_paths(exe: &Path) -> (PathBuf, String) {
    let stem = exe
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    (exe.with_extension("conf"), format!("{stem}.jar"))
}

/// Load the configuration that sits next to the running executable.
///
/// Returns the configuration and the path it was read from.
///
/// # Errors
///
/// Returns `ConfigError::CurrentExe` if the executable path is unknown,
/// otherwise the errors of [`load`].
pub fn load_beside_exe() -> Result<(Config, PathBuf), ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::CurrentExe)?;
    let (conf_path, default_jar) = sidecar_paths(&exe);
    let config = load(&conf_path, &default_jar)?;
    Ok((config, conf_path))
}

/// Overlay `overrides` onto a base environment of `KEY=VALUE` pairs.
///
/// Keys compare the way the platform does: case-insensitively on Windows,
/// exactly elsewhere. An override replaces a matching base entry in place;
/// new keys are appended. Base entries without a key are dropped.
#[must_use]
pub fn merge_env<I>(base: I, overrides: &BTreeMap<String, String>) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out: Vec<(String, String)> = base.into_iter().filter(|(k, _)| !k.is_empty()).collect();

    for (key, value) in overrides {
        let entry = (key.clone(), value.clone());
        if let Some(index) = out.iter().rposition(|(k, _)| same_env_key(k, key)) {
            out[index] = entry;
            continue;
        }
        out.push(entry);
    }

    out
}

#[cfg(windows)]
fn same_env_key(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(not(windows))]
fn same_env_key(a: &str, b: &str) -> bool {
    a == b
}

/// Format environment overrides as `K=V, K2=V2` for diagnostics.
#[must_use]
pub fn env_summary(env: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (i, (key, value)) in env.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{key}={value}");
    }
    out
}
