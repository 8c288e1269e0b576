//! Terminal presentation: framing, theming, and progress.

pub mod frame;
pub mod spinner;
pub mod theme;

pub use frame::{frame, Medium, CAPTURED_RULE_WIDTH};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, DoctorTheme};
