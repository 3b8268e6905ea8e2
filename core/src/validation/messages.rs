//! # ERROR MESSAGE TABLE
//!
//! **PURPOSE**: Maps each rejection kind to its human-readable template.
//! **GUARANTEE**: Every validator instance owns its own table. Overrides given
//! to one instance never change the text of another.

use serde::Deserialize;
use std::collections::BTreeMap;

/// **REJECTION KINDS**
///
/// Deserializes from the `ERROR_*` names used in options documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "ERROR_NO_BODY")]
    NoBody,
    #[serde(rename = "ERROR_INVALID_BODY")]
    InvalidBody,
    #[serde(rename = "ERROR_MISSING_REQUIRED")]
    MissingRequired,
    #[serde(rename = "ERROR_VALIDATION_FAILED")]
    ValidationFailed,
    #[serde(rename = "ERROR_NOT_IN_ARRAY")]
    NotInArray,
    #[serde(rename = "ERROR_NUMBER_MIN")]
    NumberMin,
    #[serde(rename = "ERROR_NUMBER_MAX")]
    NumberMax,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::NoBody,
        ErrorKind::InvalidBody,
        ErrorKind::MissingRequired,
        ErrorKind::ValidationFailed,
        ErrorKind::NotInArray,
        ErrorKind::NumberMin,
        ErrorKind::NumberMax,
    ];

    /// The `ERROR_*` name of this kind.
    pub fn key(self) -> &'static str {
        match self {
            ErrorKind::NoBody => "ERROR_NO_BODY",
            ErrorKind::InvalidBody => "ERROR_INVALID_BODY",
            ErrorKind::MissingRequired => "ERROR_MISSING_REQUIRED",
            ErrorKind::ValidationFailed => "ERROR_VALIDATION_FAILED",
            ErrorKind::NotInArray => "ERROR_NOT_IN_ARRAY",
            ErrorKind::NumberMin => "ERROR_NUMBER_MIN",
            ErrorKind::NumberMax => "ERROR_NUMBER_MAX",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::NoBody => "No body was provided",
            ErrorKind::InvalidBody => "Invalid body type",
            ErrorKind::MissingRequired => "No value was provided",
            ErrorKind::ValidationFailed => "Validation failed",
            ErrorKind::NotInArray => "Value not in array",
            ErrorKind::NumberMin => "Value is smaller than the allowed size",
            ErrorKind::NumberMax => "Value is larger than the allowed size",
        }
    }
}

/// **MESSAGE TABLE**
///
/// Defaults layered under per-instance overrides. Immutable once the owning
/// validator is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessages {
    overrides: BTreeMap<ErrorKind, String>,
}

impl ErrorMessages {
    /// Default table with `overrides` replacing the matching kinds.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (ErrorKind, String)>,
    {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    pub fn get(&self, kind: ErrorKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_message())
    }

    pub fn is_overridden(&self, kind: ErrorKind) -> bool {
        self.overrides.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let messages = ErrorMessages::default();
        for kind in ErrorKind::ALL {
            assert_eq!(messages.get(kind), kind.default_message());
            assert!(!messages.is_overridden(kind));
        }
        assert_eq!(messages.get(ErrorKind::NoBody), "No body was provided");
    }

    #[test]
    fn test_override_replaces_only_given_kinds() {
        let messages =
            ErrorMessages::with_overrides([(ErrorKind::NoBody, "Custom error".to_string())]);
        assert_eq!(messages.get(ErrorKind::NoBody), "Custom error");
        assert_eq!(messages.get(ErrorKind::MissingRequired), "No value was provided");
    }

    #[test]
    fn test_tables_are_independent() {
        let custom =
            ErrorMessages::with_overrides([(ErrorKind::NoBody, "Custom error".to_string())]);
        let plain = ErrorMessages::default();
        assert_eq!(custom.get(ErrorKind::NoBody), "Custom error");
        assert_eq!(plain.get(ErrorKind::NoBody), "No body was provided");
    }

    #[test]
    fn test_kind_names_round_trip_through_serde() {
        for kind in ErrorKind::ALL {
            let parsed: ErrorKind = serde_json::from_str(&format!("\"{}\"", kind.key())).unwrap();
            assert_eq!(parsed, kind);
        }
        assert!(serde_json::from_str::<ErrorKind>(r#""ERROR_UNKNOWN""#).is_err());
    }
}
