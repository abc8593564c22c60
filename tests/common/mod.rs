#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use jar_launcher::tokenize;

/// Assert that `input` tokenizes to exactly `expected`.
pub fn assert_tokens(input: &str, expected: &[&str]) {
    let tokens = tokenize(input);
    assert_eq!(
        tokens, expected,
        "token mismatch for input {input:?}:\n--- expected ---\n{expected:?}\n--- got ---\n{tokens:?}"
    );
}

/// Write `contents` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Create an executable file at `dir/name`.
pub fn write_executable(dir: &Path, name: &str) -> PathBuf {
    let path = write_file(dir, name, "#!/bin/sh\nexit 0\n");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }
    path
}
