//! Visual theme and styling.

use console::Style;

/// Styles applied to report status icons.
///
/// The legacy report hard-coded ANSI escapes gated on the OS family; here the
/// styles are picked by a capability check at render time, so a piped report
/// stays free of escape sequences on every platform.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for healthy probes (green).
    pub success: Style,
    /// Style for failing probes (red).
    pub error: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme based on the output capability check.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Status icon for a healthy probe.
    pub fn ok_icon(&self) -> String {
        format!("{}", self.success.apply_to("OK"))
    }

    /// Status icon for a failing probe.
    ///
    /// Leading space kept for column alignment with `OK`.
    pub fn error_icon(&self) -> String {
        format!("{}", self.error.apply_to(" X"))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_icons_are_bare_text() {
        let theme = DoctorTheme::plain();
        assert_eq!(theme.ok_icon(), "OK");
        assert_eq!(theme.error_icon(), " X");
    }

    #[test]
    fn error_icon_aligns_with_ok_icon() {
        let theme = DoctorTheme::plain();
        assert_eq!(theme.ok_icon().len(), theme.error_icon().len());
    }

    #[test]
    fn colored_theme_creates_without_panic() {
        let theme = DoctorTheme::new();
        let _ = theme.ok_icon();
        let _ = theme.error_icon();
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DoctorTheme::default();
        let new = DoctorTheme::new();
        assert_eq!(default.ok_icon(), new.ok_icon());
    }

    #[test]
    fn detect_produces_usable_theme() {
        let theme = DoctorTheme::detect();
        assert!(theme.ok_icon().contains("OK"));
    }
}
