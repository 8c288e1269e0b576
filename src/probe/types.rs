//! Probe outcome types.

use std::path::PathBuf;

use crate::error::DoctorError;

/// Raw evidence gathered by a single probe.
///
/// Outcomes are constructed once by the probe runner and consumed by the
/// classifier; they are never shared or mutated.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// The executable name or command line that was probed.
    pub target: String,

    /// What the probe observed, by probe kind.
    pub detail: ProbeDetail,
}

/// Kind-specific evidence for a probe.
///
/// Command outcomes expose the exit code and the stderr volume as independent
/// signals; neither decides failure by itself, the classifier's policy does.
#[derive(Debug, Clone)]
pub enum ProbeDetail {
    /// Executable lookup: the resolved path, absent when not on PATH.
    Executable { path: Option<PathBuf> },

    /// Shell command execution.
    Command {
        /// Trimmed stdout and stderr concatenated, or the synthetic
        /// timeout message.
        output: String,

        /// Exit code; absent when the child was killed (signal or timeout).
        exit_code: Option<i32>,

        /// Byte length of the untrimmed stderr stream.
        stderr_len: usize,

        /// The command exceeded its deadline and was killed.
        timed_out: bool,
    },
}

impl ProbeOutcome {
    /// Lookup outcome for an executable name.
    pub fn executable(name: &str, path: Option<PathBuf>) -> Self {
        Self {
            target: name.to_string(),
            detail: ProbeDetail::Executable { path },
        }
    }

    /// Outcome for a command that ran to completion.
    pub fn command(cmd: &str, output: String, exit_code: Option<i32>, stderr_len: usize) -> Self {
        Self {
            target: cmd.to_string(),
            detail: ProbeDetail::Command {
                output,
                exit_code,
                stderr_len,
                timed_out: false,
            },
        }
    }

    /// Outcome for a command that hit its deadline and was killed.
    pub fn timed_out(cmd: &str) -> Self {
        Self {
            target: cmd.to_string(),
            detail: ProbeDetail::Command {
                output: format!("{cmd} command timed out!"),
                exit_code: None,
                stderr_len: 0,
                timed_out: true,
            },
        }
    }

    /// Outcome for a command that could not be run at all (shell missing,
    /// wait failure).
    ///
    /// The message counts as stderr volume so the probe registers as failed
    /// under every failure policy.
    pub fn failed(cmd: &str, err: &DoctorError) -> Self {
        let output = err.to_string();
        let stderr_len = output.len();
        Self {
            target: cmd.to_string(),
            detail: ProbeDetail::Command {
                output,
                exit_code: None,
                stderr_len,
                timed_out: false,
            },
        }
    }
}
