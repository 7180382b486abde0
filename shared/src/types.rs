//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Label translation hook.
///
/// Column labels and notice texts pass through a translator before they reach
/// the client. The host application plugs in its own catalogue; the report
/// logic never depends on the translated text.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Translator that returns every label unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Indicator colour used by the report UI
    pub fn indicator(&self) -> &'static str {
        match self {
            Severity::Info => "blue",
            Severity::Warning => "orange",
            Severity::Error => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator() {
        assert_eq!(IdentityTranslator.translate("Backorder Qty"), "Backorder Qty");
    }

    #[test]
    fn test_severity_indicator() {
        assert_eq!(Severity::Warning.indicator(), "orange");
        assert_eq!(Severity::Info.indicator(), "blue");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
