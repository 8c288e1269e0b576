//! Report orchestration.
//!
//! One run walks a fixed sequence of section builders, renders each section
//! for the chosen medium, and returns the concatenated document. There is no
//! retry, no backtracking, and no state carried between sections.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::probe::DEFAULT_COMMAND_TIMEOUT;
use crate::report::classify::FailurePolicy;
use crate::report::section::Section;
use crate::report::sections::{self, SectionContext};
use crate::ui::{DoctorTheme, Medium};

/// Settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Deadline applied to every shell probe.
    pub timeout: Duration,
    /// How command probes are judged.
    pub policy: FailurePolicy,
    /// Log file to include in the final section.
    pub log_file: Option<PathBuf>,
    /// Output medium for framing.
    pub medium: Medium,
    /// Styling for status icons.
    pub theme: DoctorTheme,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_COMMAND_TIMEOUT,
            policy: FailurePolicy::default(),
            log_file: None,
            medium: Medium::Captured,
            theme: DoctorTheme::plain(),
        }
    }
}

impl ReportOptions {
    /// Options matching the current process: detected medium and theme.
    pub fn detected() -> Self {
        Self {
            medium: Medium::detect(),
            theme: DoctorTheme::detect(),
            ..Self::default()
        }
    }
}

/// Section builders that need no extra inputs, in report order.
///
/// The log section is appended separately because it consumes the configured
/// log path; it always comes last.
const SECTION_BUILDERS: &[(&str, fn(&SectionContext) -> Section)] = &[
    (sections::OS_INFORMATION, sections::os_information),
    (sections::PYTHON_AND_PIP, sections::python_and_pip),
    (sections::CONDA_INFORMATION, sections::conda_information),
    (sections::INSTALLED_PACKAGES, sections::installed_packages),
    (sections::MATLAB_EXECUTABLE, sections::matlab_executable),
    (sections::JUPYTER_EXECUTABLE, sections::jupyter_executable),
    (
        sections::MATLAB_PROXY_EXECUTABLE,
        sections::matlab_proxy_executable,
    ),
    (sections::SERVER_EXTENSIONS, sections::server_extensions),
    (
        sections::ENVIRONMENT_VARIABLES,
        sections::environment_variables,
    ),
];

/// Section titles in report order.
pub fn section_titles() -> Vec<&'static str> {
    SECTION_BUILDERS
        .iter()
        .map(|&(title, _)| title)
        .chain(std::iter::once(sections::MATLAB_PROXY_LOGS))
        .collect()
}

/// Collect the full report document.
pub fn collect_report(options: &ReportOptions) -> String {
    collect_report_with_progress(options, |_| {})
}

/// Collect the full report document, announcing each section as it starts.
///
/// The callback fires before the section's probes run, so a slow probe is
/// attributed to the right section while the user waits.
pub fn collect_report_with_progress<F>(options: &ReportOptions, mut progress: F) -> String
where
    F: FnMut(&str),
{
    let ctx = SectionContext {
        timeout: options.timeout,
        policy: options.policy,
        theme: options.theme.clone(),
    };

    let mut document = String::new();
    for &(title, build) in SECTION_BUILDERS {
        progress(title);
        debug!(section = title, "collecting section");
        document.push_str(&build(&ctx).render(options.medium));
    }

    progress(sections::MATLAB_PROXY_LOGS);
    debug!(section = sections::MATLAB_PROXY_LOGS, "collecting section");
    let logs = sections::proxy_logs(options.log_file.as_deref());
    document.push_str(&logs.render(options.medium));

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_probe_timeout() {
        let options = ReportOptions::default();
        assert_eq!(options.timeout, DEFAULT_COMMAND_TIMEOUT);
        assert_eq!(options.medium, Medium::Captured);
        assert!(options.log_file.is_none());
    }

    #[test]
    fn section_titles_are_complete_and_ordered() {
        let titles = section_titles();
        assert_eq!(titles.len(), 10);
        assert_eq!(titles[0], sections::OS_INFORMATION);
        assert_eq!(titles[9], sections::MATLAB_PROXY_LOGS);
    }

    #[test]
    fn report_emits_every_section_in_order() {
        let options = ReportOptions::default();
        let mut announced = Vec::new();
        let document = collect_report_with_progress(&options, |title| {
            announced.push(title.to_string());
        });

        assert_eq!(announced, section_titles());

        let mut last = 0;
        for title in section_titles() {
            let pos = document.find(title).unwrap_or_else(|| {
                panic!("section {title:?} missing from document");
            });
            assert!(pos >= last, "section {title:?} out of order");
            last = pos;
        }
    }
}
