//! Status messages and selection notices.

use std::fmt;

use crate::engine::{NoticeSeverity, SelectionNotice};

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

impl fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeSeverity::Warning => write!(f, "Warning"),
            NoticeSeverity::Info => write!(f, "Note"),
        }
    }
}

impl fmt::Display for SelectionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionNotice::CapacityExceeded { max } => {
                write!(f, "You can select at most {max} plans to compare.")
            }
            SelectionNotice::InsufficientSelection {
                selected: 0,
                required,
            } => write!(f, "Nothing to compare: select at least {required} plans."),
            SelectionNotice::InsufficientSelection { selected, required } => write!(
                f,
                "Select at least {required} plans to compare ({selected} selected)."
            ),
            SelectionNotice::Truncated { max, visible } => write!(
                f,
                "Only the first {max} of {visible} visible plans were selected."
            ),
            SelectionNotice::ComparisonDisabled => {
                write!(f, "Plan comparison is turned off for this catalog.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Seeded 8 demo plans".to_string());
        assert_eq!(success.to_string(), "Success: Seeded 8 demo plans\n");

        let failure = OperationStatus::failure("Nothing seeded".to_string());
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            SelectionNotice::CapacityExceeded { max: 3 }.to_string(),
            "You can select at most 3 plans to compare."
        );
        assert_eq!(
            SelectionNotice::insufficient(0).to_string(),
            "Nothing to compare: select at least 2 plans."
        );
        assert_eq!(
            SelectionNotice::insufficient(1).to_string(),
            "Select at least 2 plans to compare (1 selected)."
        );
        assert_eq!(
            SelectionNotice::Truncated { max: 3, visible: 5 }.to_string(),
            "Only the first 3 of 5 visible plans were selected."
        );
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(
            SelectionNotice::Truncated { max: 3, visible: 5 }.severity().to_string(),
            "Note"
        );
        assert_eq!(SelectionNotice::ComparisonDisabled.severity().to_string(), "Warning");
    }
}
