//! The diagnostic sections of the report.
//!
//! Each builder probes one category and returns a [`Section`]; none of them
//! aborts on failure, the evidence simply lands in the report. Ordering is
//! the driver's concern.

use std::path::Path;
use std::time::Duration;

use sysinfo::System;
use tracing::{debug, warn};

use crate::probe::{find_executables_on_system_path, run_commands};
use crate::report::classify::{classify, FailurePolicy, GroupReport, Suggestions};
use crate::report::section::Section;
use crate::ui::DoctorTheme;

pub const OS_INFORMATION: &str = "OS information";
pub const PYTHON_AND_PIP: &str = "Python and pip executables";
pub const CONDA_INFORMATION: &str = "Conda information";
pub const INSTALLED_PACKAGES: &str = "Installed packages";
pub const MATLAB_EXECUTABLE: &str = "matlab executable";
pub const JUPYTER_EXECUTABLE: &str = "jupyter executable";
pub const MATLAB_PROXY_EXECUTABLE: &str = "matlab-proxy-app executable";
pub const SERVER_EXTENSIONS: &str = "Server extensions";
pub const ENVIRONMENT_VARIABLES: &str = "Environment variables";
pub const MATLAB_PROXY_LOGS: &str = "matlab proxy logs";

/// Package list filter for the integration's own packages.
const PACKAGE_FILTER_CMD: &str =
    r#"python -m pip list | grep -E "jupyter|matlab-proxy|jupyter-matlab-proxy|notebook""#;

/// Environment variable filter for MATLAB and MathWorks related settings.
const ENV_FILTER_CMD: &str = r#"env | grep -iE "matlab|mw|mwi""#;

/// Jupyter extension listings, one probe per extension mechanism.
const EXTENSION_LIST_CMDS: [&str; 3] = [
    "jupyter serverextension list",
    "jupyter nbextension list",
    "jupyter labextension list",
];

/// Shared knobs for the section builders.
#[derive(Debug, Clone)]
pub struct SectionContext {
    /// Deadline applied to every shell probe.
    pub timeout: Duration,
    /// How command probes are judged.
    pub policy: FailurePolicy,
    /// Styling for status icons.
    pub theme: DoctorTheme,
}

/// OS identity strings plus the `uname -v` probe.
pub fn os_information(ctx: &SectionContext) -> Section {
    let mut section = Section::new(OS_INFORMATION);
    for line in os_identity_lines() {
        section.push_line(&line);
    }
    let outcomes = run_commands(&["uname -v"], ctx.timeout);
    section.push_report(&classify(
        &outcomes,
        ctx.policy,
        Suggestions::Show,
        &ctx.theme,
    ));
    section
}

/// Lookups and versions for the Python toolchain.
pub fn python_and_pip(ctx: &SectionContext) -> Section {
    let mut section = Section::new(PYTHON_AND_PIP);
    for name in ["python", "pip", "python3"] {
        for report in lookup_with_version(name, Suggestions::Show, ctx) {
            section.push_report(&report);
        }
    }
    section
}

/// Conda lookup, version, and environment list.
///
/// Conda is optional tooling, so everything here runs suppressed; its absence
/// still shows in the body but produces no install nag.
pub fn conda_information(ctx: &SectionContext) -> Section {
    let mut section = Section::new(CONDA_INFORMATION);
    for report in lookup_with_version("conda", Suggestions::Suppress, ctx) {
        section.push_report(&report);
    }
    let outcomes = run_commands(&["conda env list"], ctx.timeout);
    section.push_report(&classify(
        &outcomes,
        ctx.policy,
        Suggestions::Suppress,
        &ctx.theme,
    ));
    section
}

/// Installed packages relevant to the integration.
pub fn installed_packages(ctx: &SectionContext) -> Section {
    let mut section = Section::new(INSTALLED_PACKAGES);
    let outcomes = run_commands(&[PACKAGE_FILTER_CMD], ctx.timeout);
    section.push_report(&classify(
        &outcomes,
        ctx.policy,
        Suggestions::Suppress,
        &ctx.theme,
    ));
    section
}

/// Lookup for the `matlab` executable.
pub fn matlab_executable(ctx: &SectionContext) -> Section {
    lookup_section(MATLAB_EXECUTABLE, "matlab", ctx)
}

/// Lookup for the `jupyter` executable.
pub fn jupyter_executable(ctx: &SectionContext) -> Section {
    lookup_section(JUPYTER_EXECUTABLE, "jupyter", ctx)
}

/// Lookup for the `matlab-proxy-app` executable.
pub fn matlab_proxy_executable(ctx: &SectionContext) -> Section {
    lookup_section(MATLAB_PROXY_EXECUTABLE, "matlab-proxy-app", ctx)
}

/// Jupyter server/notebook/lab extension listings.
pub fn server_extensions(ctx: &SectionContext) -> Section {
    let mut section = Section::new(SERVER_EXTENSIONS);
    for cmd in EXTENSION_LIST_CMDS {
        let outcomes = run_commands(&[cmd], ctx.timeout);
        section.push_report(&classify(
            &outcomes,
            ctx.policy,
            Suggestions::Show,
            &ctx.theme,
        ));
    }
    section
}

/// Environment variables touching MATLAB, MathWorks, or the integration.
pub fn environment_variables(ctx: &SectionContext) -> Section {
    let mut section = Section::new(ENVIRONMENT_VARIABLES);
    let outcomes = run_commands(&[ENV_FILTER_CMD], ctx.timeout);
    section.push_report(&classify(
        &outcomes,
        ctx.policy,
        Suggestions::Suppress,
        &ctx.theme,
    ));
    section
}

/// Tail of the proxy log file, verbatim.
///
/// No configured path, a missing file, and an unreadable file all yield a
/// header-only section; the log tail is best-effort evidence, never a
/// precondition.
pub fn proxy_logs(log_file: Option<&Path>) -> Section {
    let mut section = Section::new(MATLAB_PROXY_LOGS);

    let Some(path) = log_file else {
        debug!("no log file configured, emitting empty log section");
        return section;
    };
    if !path.exists() {
        debug!(path = %path.display(), "log file does not exist");
        return section;
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => {
            for line in contents.lines() {
                section.push_line(line);
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read log file");
        }
    }

    section
}

/// Executable lookup plus a `--version` probe when the lookup succeeds.
///
/// The version probe is skipped for a missing executable; running it would
/// only duplicate the lookup failure as shell noise.
fn lookup_with_version(
    name: &str,
    suggestions: Suggestions,
    ctx: &SectionContext,
) -> Vec<GroupReport> {
    let lookup = classify(
        &find_executables_on_system_path(&[name]),
        ctx.policy,
        suggestions,
        &ctx.theme,
    );

    let mut reports = vec![lookup];
    if !reports[0].has_error() {
        let version_cmd = format!("{name} --version");
        let outcomes = run_commands(&[version_cmd.as_str()], ctx.timeout);
        reports.push(classify(&outcomes, ctx.policy, suggestions, &ctx.theme));
    }
    reports
}

/// Single-lookup section with suggestions shown.
fn lookup_section(title: &'static str, name: &str, ctx: &SectionContext) -> Section {
    let mut section = Section::new(title);
    section.push_report(&classify(
        &find_executables_on_system_path(&[name]),
        ctx.policy,
        Suggestions::Show,
        &ctx.theme,
    ));
    section
}

/// OS name, kernel version, long OS description, and CPU architecture.
fn os_identity_lines() -> Vec<String> {
    vec![
        System::name().unwrap_or_else(|| "unknown".to_string()),
        System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        System::long_os_version().unwrap_or_else(|| "unknown".to_string()),
        System::cpu_arch(),
    ]
}
