//! # OPTIONS DOCUMENTS
//!
//! **PURPOSE**: Build [`ValidatorOptions`] from JSON instead of code.
//!
//! ```json
//! {
//!   "validations": [
//!     { "key": "id", "validationOption": "string", "isUrlParam": true },
//!     { "key": "kind", "validationOption": { "oneOf": ["a", "b"] } },
//!     { "key": "page", "validationOption": { "number": { "min": 1 } }, "isOptional": true }
//!   ],
//!   "bodyRequired": true,
//!   "requiredBodyShape": "json",
//!   "errorMessages": { "ERROR_NO_BODY": "Send a body" }
//! }
//! ```

use crate::errors::{error_codes, ProjectError};
use crate::middleware::ValidatorOptions;
use crate::types::BodyShape;
use crate::validation::{ErrorKind, FieldRule, NumberRange, OneOf, Strategy};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OptionsDocument {
    #[serde(default)]
    validations: Vec<RuleDocument>,
    #[serde(default)]
    body_required: bool,
    #[serde(default)]
    required_body_shape: Option<BodyShape>,
    #[serde(default)]
    error_messages: BTreeMap<ErrorKind, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RuleDocument {
    key: String,
    validation_option: StrategyDocument,
    #[serde(default)]
    is_optional: bool,
    #[serde(default)]
    is_url_param: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StrategyDocument {
    Literal(String),
    OneOf {
        #[serde(rename = "oneOf")]
        one_of: Vec<String>,
    },
    Number {
        number: NumberDocument,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NumberDocument {
    min: Option<i64>,
    max: Option<i64>,
    radix: Option<u32>,
    #[serde(default)]
    strict: bool,
}

impl ValidatorOptions {
    /// Parses an options document.
    pub fn from_json_str(document: &str) -> Result<Self, ProjectError> {
        let parsed: OptionsDocument = serde_json::from_str(document).map_err(invalid_options)?;
        parsed.into_options()
    }

    pub fn from_json_slice(document: &[u8]) -> Result<Self, ProjectError> {
        let parsed: OptionsDocument = serde_json::from_slice(document).map_err(invalid_options)?;
        parsed.into_options()
    }
}

fn invalid_options(err: serde_json::Error) -> ProjectError {
    ProjectError::Config {
        code: error_codes::INVALID_OPTIONS.to_string(),
        message: format!("Invalid options document: {}", err),
    }
}

impl OptionsDocument {
    fn into_options(self) -> Result<ValidatorOptions, ProjectError> {
        let validations = self
            .validations
            .into_iter()
            .map(RuleDocument::into_rule)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatorOptions {
            validations,
            body_required: self.body_required,
            required_body_shape: self.required_body_shape,
            error_messages: self.error_messages,
        })
    }
}

impl RuleDocument {
    fn into_rule(self) -> Result<FieldRule, ProjectError> {
        let strategy = match self.validation_option {
            StrategyDocument::Literal(expected) => Strategy::literal(expected),
            StrategyDocument::OneOf { one_of } => Strategy::function(OneOf::new(one_of)),
            StrategyDocument::Number { number } => {
                Strategy::function(number.into_range(&self.key)?)
            }
        };

        Ok(FieldRule {
            key: self.key,
            strategy,
            is_optional: self.is_optional,
            is_url_param: self.is_url_param,
        })
    }
}

impl NumberDocument {
    fn into_range(self, key: &str) -> Result<NumberRange, ProjectError> {
        let mut range = NumberRange::new();
        if let Some(min) = self.min {
            range = range.min(min);
        }
        if let Some(max) = self.max {
            range = range.max(max);
        }
        if let Some(radix) = self.radix {
            if radix != 0 && !(2..=36).contains(&radix) {
                return Err(ProjectError::Config {
                    code: error_codes::INVALID_RADIX.to_string(),
                    message: format!("Field '{}': radix {} outside 2..=36", key, radix),
                });
            }
            range = range.radix(radix);
        }
        if self.strict {
            range = range.strict();
        }
        Ok(range)
    }
}
