//! JSON reporter for machine-readable output

use crate::{AssessmentDefinition, AssessmentReport};

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Compact single-line output.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Serialize an assessment report.
    pub fn report(&self, report: &AssessmentReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Serialize a question catalog.
    pub fn catalog(&self, definition: &AssessmentDefinition) -> String {
        if self.pretty {
            serde_json::to_string_pretty(definition).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(definition).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
