//! mwi-doctor - Diagnostic report generator for the MATLAB Integration for
//! Jupyter environment.
//!
//! The tool probes the host for the executables, packages, extensions, and
//! logs the integration depends on, classifies each probe as healthy or
//! failing, and renders one human-readable report. Probe failures are
//! findings, not errors: a fully broken environment still produces a complete
//! report and a zero exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Executable lookups and shell command probes
//! - [`report`] - Classification, sections, and report orchestration
//! - [`ui`] - Framing, theming, and progress output
//!
//! # Example
//!
//! ```no_run
//! use mwi_doctor::report::{collect_report, ReportOptions};
//!
//! let document = collect_report(&ReportOptions::default());
//! print!("{document}");
//! ```

pub mod cli;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{DoctorError, Result};
