//! Shell command execution with a hard deadline.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::DoctorError;
use crate::probe::types::ProbeOutcome;

/// Hard deadline for a single shell probe.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Run each command string through the platform shell, in input order.
pub fn run_commands(cmds: &[&str], timeout: Duration) -> Vec<ProbeOutcome> {
    cmds.iter().map(|cmd| run_command(cmd, timeout)).collect()
}

/// Run a single command string through the platform shell.
///
/// The string is passed verbatim to `/bin/sh -c` (or `%COMSPEC% /C` on
/// Windows), so pipes, quoting, and redirection behave as they would at a
/// prompt. The deadline bounds the whole probe, waiting for the shell and
/// draining its output included. Every failure mode is captured as an
/// outcome; this function never returns an error.
pub fn run_command(cmd: &str, timeout: Duration) -> ProbeOutcome {
    debug!(command = cmd, "running command probe");
    let (shell, flag) = platform_shell();

    let mut command = Command::new(shell);
    command.arg(flag);
    command.arg(cmd);
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            let err = DoctorError::CommandSpawn {
                command: cmd.to_string(),
                source,
            };
            debug!(command = cmd, error = %err, "failed to spawn shell");
            return ProbeOutcome::failed(cmd, &err);
        }
    };
    let start = Instant::now();

    // Drain stdout and stderr in background threads to prevent deadlock
    // when the child's pipe buffer fills before it exits.
    let stdout_thread = child.stdout.take().map(|mut pipe| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });
    let stderr_thread = child.stderr.take().map(|mut pipe| {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    match wait_with_timeout(&mut child, start, timeout) {
        Ok(Some(status)) => {
            // The shell has exited, but a descendant that inherited the
            // pipes can still hold them open, so the drains get the
            // remainder of the same deadline, never an unbounded join.
            let stdout_buf = join_drain_within(stdout_thread, start, timeout);
            let stderr_buf = join_drain_within(stderr_thread, start, timeout);
            let (Some(stdout_buf), Some(stderr_buf)) = (stdout_buf, stderr_buf) else {
                debug!(
                    command = cmd,
                    "pipes held open past the deadline, abandoning readers"
                );
                return ProbeOutcome::timed_out(cmd);
            };

            let stdout = String::from_utf8_lossy(&stdout_buf);
            let stderr = String::from_utf8_lossy(&stderr_buf);
            let output = format!("{}{}", stdout.trim(), stderr.trim());

            ProbeOutcome::command(cmd, output, status.code(), stderr_buf.len())
        }
        Ok(None) => {
            debug!(
                command = cmd,
                timeout_secs = timeout.as_secs(),
                "command timed out, killing process"
            );
            // Kill reaches only the shell; surviving pipeline stages can
            // hold the pipes open, so the drain threads must not be joined
            // here or the deadline is lost.
            let _ = child.kill();
            let _ = child.wait();
            ProbeOutcome::timed_out(cmd)
        }
        Err(source) => {
            let _ = child.kill();
            let _ = child.wait();
            let err = DoctorError::Io(source);
            debug!(command = cmd, error = %err, "failed to wait on command");
            ProbeOutcome::failed(cmd, &err)
        }
    }
}

/// Join a pipe-drain thread within the probe deadline.
///
/// Returns `None` when the deadline passes before the pipe reaches EOF; the
/// reader is left behind and exits at EOF or process teardown.
fn join_drain_within(
    handle: Option<std::thread::JoinHandle<Vec<u8>>>,
    start: Instant,
    timeout: Duration,
) -> Option<Vec<u8>> {
    let Some(handle) = handle else {
        return Some(Vec::new());
    };
    while !handle.is_finished() {
        if start.elapsed() >= timeout {
            return None;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    Some(handle.join().unwrap_or_default())
}

/// Shell binary and its command flag for this platform.
///
/// Uses plain `/bin/sh -c` on Unix, not the user's login shell: probes should
/// observe the same non-interactive environment a hosting server sees, so an
/// interactively-augmented PATH does not mask a missing install.
fn platform_shell() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}

/// Poll the child until it exits or the deadline, measured from `start`,
/// passes.
///
/// Returns `Ok(None)` on deadline; the caller kills and reaps the child.
fn wait_with_timeout(
    child: &mut Child,
    start: Instant,
    timeout: Duration,
) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            return Ok(None);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}
