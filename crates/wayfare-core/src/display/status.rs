//! Confirmation messages for edits.

use std::fmt;

/// Outcome of a user action, rendered as a single markdown line.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Success listing the fields an update touched.
    pub fn updated(fields: &[&str]) -> Self {
        if fields.is_empty() {
            Self::success("Nothing to update.")
        } else {
            Self::success(format!("Updated {}.", fields.join(", ")))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "**Done:**" } else { "**Not applied:**" };
        writeln!(f, "{label} {}", self.message)
    }
}
