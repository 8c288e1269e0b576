//! Report assembly: classification, sections, and orchestration.

pub mod classify;
pub mod driver;
pub mod section;
pub mod sections;

pub use classify::{classify, FailurePolicy, GroupReport, Suggestions};
pub use driver::{collect_report, collect_report_with_progress, section_titles, ReportOptions};
pub use section::{section_header, Section};
pub use sections::SectionContext;
