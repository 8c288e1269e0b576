//! Titled report sections.

use crate::report::classify::GroupReport;
use crate::ui::{frame, Medium};

/// Framed section header with the dash fill, followed by a blank separator.
pub fn section_header(title: &str, medium: Medium) -> String {
    let mut out = frame(&[title], '-', medium);
    out.push('\n');
    out
}

/// One titled block of the final report.
///
/// Parts accumulate in call order; rendering never reorders or merges them.
#[derive(Debug, Clone)]
pub struct Section {
    title: String,
    parts: Vec<String>,
    has_error: bool,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parts: Vec::new(),
            has_error: false,
        }
    }

    /// Section title as shown in the framed header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a classified group report.
    pub fn push_report(&mut self, report: &GroupReport) {
        self.has_error = self.has_error || report.has_error();
        self.parts.push(report.render());
    }

    /// Append a raw body line.
    pub fn push_line(&mut self, line: &str) {
        self.parts.push(format!("{line}\n"));
    }

    /// True when any report in this section failed.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Render the framed header followed by all parts.
    ///
    /// A section with no parts still renders its header; an absent log file,
    /// for example, yields a header-only section rather than an error.
    pub fn render(&self, medium: Medium) -> String {
        let mut out = section_header(&self.title, medium);
        for part in &self.parts {
            out.push_str(part);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use crate::report::classify::{classify, FailurePolicy, Suggestions};
    use crate::ui::DoctorTheme;

    #[test]
    fn header_uses_dash_fill_on_terminal() {
        let out = section_header("OS information", Medium::Terminal { columns: 20 });
        assert!(out.contains("--------------------"));
        assert!(out.contains("OS information"));
    }

    #[test]
    fn header_uses_fixed_rule_when_captured() {
        let rule = "=".repeat(28);
        let out = section_header("OS information", Medium::Captured);
        assert_eq!(out, format!("\n{rule}\nOS information\n{rule}\n\n"));
    }

    #[test]
    fn empty_section_renders_header_only() {
        let section = Section::new("matlab proxy logs");
        let rendered = section.render(Medium::Captured);
        assert_eq!(rendered, section_header("matlab proxy logs", Medium::Captured));
        assert!(!section.has_error());
    }

    #[test]
    fn section_renders_parts_in_call_order() {
        let mut section = Section::new("OS information");
        section.push_line("Linux");
        section.push_line("6.8.0");

        let rendered = section.render(Medium::Captured);
        let body = rendered
            .strip_prefix(&section_header("OS information", Medium::Captured))
            .unwrap();
        assert_eq!(body, "Linux\n6.8.0\n");
    }

    #[test]
    fn section_tracks_report_errors() {
        let theme = DoctorTheme::plain();
        let healthy = classify(
            &[ProbeOutcome::command("echo ok", "ok".into(), Some(0), 0)],
            FailurePolicy::default(),
            Suggestions::Show,
            &theme,
        );
        let failing = classify(
            &[ProbeOutcome::executable("doesnotexist123", None)],
            FailurePolicy::default(),
            Suggestions::Suppress,
            &theme,
        );

        let mut section = Section::new("checks");
        section.push_report(&healthy);
        assert!(!section.has_error());
        section.push_report(&failing);
        assert!(section.has_error());

        let rendered = section.render(Medium::Captured);
        assert!(rendered.contains("ok\n"));
        assert!(rendered.contains("doesnotexist123 - not found -  X\n"));
    }
}
