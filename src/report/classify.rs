//! Probe outcome classification.
//!
//! Turns raw probe evidence into report lines, a failure verdict, and
//! remediation hints. Failure for command probes is a named policy, not a
//! hard-coded rule: the outcome carries both the exit status and the stderr
//! volume, and the policy decides which of them counts.

use crate::probe::{ProbeDetail, ProbeOutcome};
use crate::ui::DoctorTheme;

/// Placeholder shown for an executable that resolved to nothing.
const NOT_FOUND: &str = "not found";

/// How a command probe's two failure signals are weighed.
///
/// Executable lookups ignore the policy: they fail exactly when no path was
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// A timeout or any stderr output fails the probe; the exit code is not
    /// consulted. This is the historical behavior of the report.
    #[default]
    StderrNonEmpty,
    /// A timeout or a missing/nonzero exit code fails the probe.
    ExitStatus,
    /// Either signal fails the probe.
    StderrOrExitStatus,
}

impl FailurePolicy {
    /// Apply the policy to a command probe's signals.
    pub fn command_failed(
        &self,
        exit_code: Option<i32>,
        stderr_len: usize,
        timed_out: bool,
    ) -> bool {
        if timed_out {
            return true;
        }
        match self {
            Self::StderrNonEmpty => stderr_len > 0,
            Self::ExitStatus => exit_code != Some(0),
            Self::StderrOrExitStatus => stderr_len > 0 || exit_code != Some(0),
        }
    }
}

/// Whether failing probes get remediation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestions {
    Show,
    Suppress,
}

/// Classified result of one probe group.
///
/// Every probe contributes one body line, in probe order. `has_error` is
/// sticky across the group; recommendations stay empty unless a probe failed
/// and the caller asked for suggestions.
#[derive(Debug, Clone, Default)]
pub struct GroupReport {
    lines: Vec<String>,
    recommendations: Vec<String>,
    has_error: bool,
}

impl GroupReport {
    /// Body lines, one per probe, in probe order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Remediation hints accumulated for failing probes.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// True when any probe in the group failed.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Render body lines followed by recommendations, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        for rec in &self.recommendations {
            out.push_str(rec);
            out.push('\n');
        }
        out
    }
}

/// Classify an ordered sequence of probe outcomes into one group report.
pub fn classify(
    outcomes: &[ProbeOutcome],
    policy: FailurePolicy,
    suggestions: Suggestions,
    theme: &DoctorTheme,
) -> GroupReport {
    let mut report = GroupReport::default();

    for outcome in outcomes {
        let failed = match &outcome.detail {
            ProbeDetail::Executable { path } => {
                let failed = path.is_none();
                let shown = path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| NOT_FOUND.to_string());
                let icon = if failed {
                    theme.error_icon()
                } else {
                    theme.ok_icon()
                };
                report
                    .lines
                    .push(format!("{} - {} - {}", outcome.target, shown, icon));
                failed
            }
            ProbeDetail::Command {
                output,
                exit_code,
                stderr_len,
                timed_out,
            } => {
                report.lines.push(output.clone());
                policy.command_failed(*exit_code, *stderr_len, *timed_out)
            }
        };

        if failed {
            report.has_error = true;
            if suggestions == Suggestions::Show {
                report.recommendations.push(recommendation(outcome));
            }
        }
    }

    report
}

/// Remediation hint for a failed probe, worded by probe kind.
fn recommendation(outcome: &ProbeOutcome) -> String {
    match &outcome.detail {
        ProbeDetail::Executable { .. } => format!(
            "Recommendation: {name} is not installed. Please install {name}.",
            name = outcome.target
        ),
        ProbeDetail::Command { .. } => format!(
            "Recommendation: {cmd} did not run cleanly. Review its output above.",
            cmd = outcome.target
        ),
    }
}
