//! Spawns the Java process and waits for it.

use std::path::Path;
use std::process::{Child, Command, ExitStatus};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// How often the child is polled while waiting for it to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Exit code reported when the child ended without one.
const FALLBACK_EXIT_CODE: i32 = 1;

/// Bumped once per interrupt; each waiter compares against the value it saw.
static INTERRUPTS: AtomicUsize = AtomicUsize::new(0);

/// Error produced while running the child process.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("empty argv")]
    EmptyArgv,
    #[error("failed to start process: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),
}

/// Run `argv` with exactly the environment `env`, inheriting stdio.
///
/// An interrupt delivered to the launcher while the child runs kills the
/// child. Returns the child's exit code, or 1 if it was terminated without
/// one.
///
/// # Errors
///
/// Returns `RunError::EmptyArgv` for an empty vector, `RunError::Spawn` if
/// the process cannot be started and `RunError::Wait` if its status cannot
/// be collected.
pub fn run<S, K, V>(argv: &[S], env: &[(K, V)], work_dir: &Path) -> Result<i32, RunError>
where
    S: AsRef<str>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let Some((program, args)) = argv.split_first() else {
        return Err(RunError::EmptyArgv);
    };

    let mut command = Command::new(program.as_ref());
    command
        .args(args.iter().map(AsRef::as_ref))
        .env_clear()
        .envs(env.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .current_dir(work_dir);

    log::debug!("spawning {} in {}", program.as_ref(), work_dir.display());

    let status = {
        let _guard = interrupt::install();
        let child = command.spawn().map_err(RunError::Spawn)?;
        wait_forwarding_interrupts(child).map_err(RunError::Wait)?
    };

    Ok(exit_code(status))
}

fn wait_forwarding_interrupts(mut child: Child) -> std::io::Result<ExitStatus> {
    let mut seen = INTERRUPTS.load(Ordering::SeqCst);
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        let now = INTERRUPTS.load(Ordering::SeqCst);
        if now != seen {
            seen = now;
            log::debug!("interrupt received, killing child {}", child.id());
            // the child may already be gone
            let _ = child.kill();
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(FALLBACK_EXIT_CODE)
}

#[cfg(unix)]
mod interrupt {
    use std::sync::{Mutex, PoisonError};

    use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

    use super::{INTERRUPTS, Ordering};

    extern "C" fn on_interrupt(_: nix::libc::c_int) {
        INTERRUPTS.fetch_add(1, Ordering::SeqCst);
    }

    /// Live guards, and the disposition to restore when the last one drops.
    struct Installed {
        active: usize,
        previous: Option<SigAction>,
    }

    static INSTALLED: Mutex<Installed> = Mutex::new(Installed {
        active: 0,
        previous: None,
    });

    /// Keeps the `SIGINT` handler installed while any run is in progress.
    pub struct Guard {
        registered: bool,
    }

    pub fn install() -> Guard {
        let mut state = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
        if state.active == 0 {
            let action = SigAction::new(
                SigHandler::Handler(on_interrupt),
                SaFlags::SA_RESTART,
                SigSet::empty(),
            );
            // SAFETY: the handler only touches an atomic.
            match unsafe { signal::sigaction(Signal::SIGINT, &action) } {
                Ok(previous) => state.previous = Some(previous),
                Err(err) => {
                    log::warn!("could not install interrupt handler: {err}");
                    return Guard { registered: false };
                }
            }
        }
        state.active += 1;
        Guard { registered: true }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            if !self.registered {
                return;
            }
            let mut state = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
            state.active -= 1;
            if state.active > 0 {
                return;
            }
            if let Some(previous) = state.previous.take() {
                // SAFETY: restores the disposition that was active before the first install.
                let _ = unsafe { signal::sigaction(Signal::SIGINT, &previous) };
            }
        }
    }
}

#[cfg(not(unix))]
mod interrupt {
    // Console Ctrl+C is delivered to every process attached to the console,
    // so the child already sees it.
    pub struct Guard;

    pub const fn install() -> Guard {
        Guard
    }
}
