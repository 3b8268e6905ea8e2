//! # FIELD VALIDATION MODULE
//!
//! **STRATEGY-BASED FIELD CHECKS**
//!
//! A [`FieldRule`] names one value of the request and the [`Strategy`] used to
//! check it. Strategies are either a literal to compare against or a
//! [`FieldValidator`] that decides pass/fail itself.
//!
//! ## STRATEGIES
//!
//! 1. **LITERAL** - type-name match (`"string"`, `"number"`, ...) or exact text match
//! 2. **SET MEMBERSHIP** - [`OneOf`]
//! 3. **NUMERIC RANGE** - [`NumberRange`]
//! 4. **CUSTOM** - any [`FieldValidator`], or a closure via [`Strategy::custom`]
//!
//! ## USAGE
//!
//! ```rust
//! use request_validator::validation::{FieldRule, NumberRange, OneOf, Strategy};
//!
//! let rules = vec![
//!     FieldRule::new("kind", Strategy::function(OneOf::new(["a", "b"]))),
//!     FieldRule::new("page", Strategy::function(NumberRange::new().min(1))).optional(),
//!     FieldRule::new("id", Strategy::literal("string")).url_param(),
//! ];
//! assert_eq!(rules.len(), 3);
//! ```

use crate::errors::{fail, ValidationError};
use crate::middleware::ValidatorOptions;
use crate::types::FieldValue;
use std::fmt;
use std::sync::Arc;

pub mod messages;
pub mod validators;

pub use messages::{ErrorKind, ErrorMessages};
pub use validators::{parse_int, NumberRange, OneOf};

/// **VALIDATION RESULT TYPE ALIAS**
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// **CORE FIELD VALIDATOR TRAIT**
///
/// **MANDATE**: Implementations decide pass/fail for one present value and
/// craft their own rejection through [`FieldContext`].
/// **GUARANTEE**: MUST NOT panic. Every failure is returned as a
/// [`ValidationError`].
pub trait FieldValidator: Send + Sync {
    fn validate(&self, field: &FieldContext<'_>, value: &FieldValue) -> ValidationResult;
}

impl<F> FieldValidator for F
where
    F: Fn(&FieldContext<'_>, &FieldValue) -> ValidationResult + Send + Sync,
{
    fn validate(&self, field: &FieldContext<'_>, value: &FieldValue) -> ValidationResult {
        self(field, value)
    }
}

/// **FIELD CONTEXT**
///
/// Everything a strategy gets besides the value: the field key, the owning
/// validator's message table and its options.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    key: &'a str,
    messages: &'a ErrorMessages,
    options: &'a ValidatorOptions,
}

impl<'a> FieldContext<'a> {
    pub fn new(key: &'a str, messages: &'a ErrorMessages, options: &'a ValidatorOptions) -> Self {
        Self {
            key,
            messages,
            options,
        }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn messages(&self) -> &'a ErrorMessages {
        self.messages
    }

    pub fn options(&self) -> &'a ValidatorOptions {
        self.options
    }

    /// Rejection with an arbitrary message, keyed by this field.
    pub fn fail(&self, message: &str, value: Option<&str>, should_be: Option<&str>) -> ValidationError {
        fail(message, Some(self.key), value, should_be)
    }

    /// Rejection using the table's template for `kind`, keyed by this field.
    pub fn reject(&self, kind: ErrorKind, value: Option<&str>, should_be: Option<&str>) -> ValidationError {
        self.fail(self.messages.get(kind), value, should_be)
    }
}

/// **VALIDATION STRATEGY**
#[derive(Clone)]
pub enum Strategy {
    /// Passes when the value's type name equals the literal, or the value is
    /// text equal to it.
    Literal(String),

    /// Delegates the decision to a validator.
    Function(Arc<dyn FieldValidator>),
}

impl Strategy {
    pub fn literal(expected: impl Into<String>) -> Self {
        Strategy::Literal(expected.into())
    }

    pub fn function<V>(validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        Strategy::Function(Arc::new(validator))
    }

    /// Custom strategy from a closure.
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&FieldContext<'_>, &FieldValue) -> ValidationResult + Send + Sync + 'static,
    {
        Strategy::Function(Arc::new(check))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Strategy::Function(_))
    }

    pub(crate) fn literal_matches(expected: &str, value: &FieldValue) -> bool {
        value.type_name() == expected || matches!(value, FieldValue::Text(text) if text == expected)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Literal(expected) => f.debug_tuple("Literal").field(expected).finish(),
            Strategy::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// **FIELD RULE**
///
/// One value to check and how. URL-parameter rules are never looked up in the
/// body.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub key: String,
    pub strategy: Strategy,
    pub is_optional: bool,
    pub is_url_param: bool,
}

impl FieldRule {
    /// Required body field.
    pub fn new(key: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            key: key.into(),
            strategy,
            is_optional: false,
            is_url_param: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn url_param(mut self) -> Self {
        self.is_url_param = true;
        self
    }
}
