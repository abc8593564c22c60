//! Launcher binary: runs the archive named in the sidecar `.conf` file.

use std::io;
use std::path::{Path, PathBuf};

use jar_launcher::config::{self, merge_env};
use jar_launcher::{Error, Report, SpecialFlags, build_argv, extract_special, resolve};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LAUNCHER_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

fn log_builder(var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(var, DEFAULT_LOG_LEVEL))
}

fn main() {
    log_builder(LOG_ENV).init();
    let flags = extract_special(std::env::args().skip(1));

    let code = launch(&flags).unwrap_or_else(|err| {
        eprintln!("{err}");
        err.exit_code()
    });
    std::process::exit(code);
}

fn launch(flags: &SpecialFlags) -> Result<i32, Error> {
    let (cfg, config_path) = config::load_beside_exe()?;
    let exe_dir = config_path
        .parent()
        .map_or_else(PathBuf::new, Path::to_path_buf);

    let java = resolve::resolve_java(&cfg.java_dir, &cfg.java_executable, &exe_dir)?;
    let jar = resolve::resolve_jar(&cfg.jar_file, &exe_dir)?;

    let argv = build_argv(&java, &cfg.jvm_args, &jar, &cfg.app_args, &flags.forward);
    let env = merge_env(
        std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        }),
        &cfg.env,
    );

    if flags.report() {
        let report = Report {
            config_path: &config_path,
            java: &java,
            jar: &jar,
            env: &cfg.env,
            argv: &argv,
        };
        if let Err(err) = report.write_to(&mut io::stdout().lock()) {
            log::warn!("could not write report: {err}");
        }
    }

    if flags.dry_run {
        return Ok(0);
    }

    Ok(jar_launcher::run(&argv, &env, &exe_dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_warn() {
        let logger = log_builder("JAR_LAUNCHER_TEST_UNSET_FILTER").build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }
}
