use crate::types::BodyShape;
use crate::validation::{ErrorKind, FieldRule, Strategy};
use std::collections::BTreeMap;

/// Configuration a [`ValidatorMiddleware`](super::ValidatorMiddleware) is built from.
///
/// Rules run in the order they appear in `validations`.
#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    pub validations: Vec<FieldRule>,
    /// Reject requests that carry no body at all.
    pub body_required: bool,
    /// Reject bodied requests whose parsed shape differs.
    pub required_body_shape: Option<BodyShape>,
    /// Per-kind message overrides layered onto the defaults.
    pub error_messages: BTreeMap<ErrorKind, String>,
}

impl ValidatorOptions {
    pub fn builder() -> ValidatorOptionsBuilder {
        ValidatorOptionsBuilder::default()
    }
}

/// Fluent construction of [`ValidatorOptions`].
#[derive(Debug, Default)]
pub struct ValidatorOptionsBuilder {
    options: ValidatorOptions,
}

impl ValidatorOptionsBuilder {
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.options.validations.push(rule);
        self
    }

    /// Required body field.
    pub fn field(self, key: impl Into<String>, strategy: Strategy) -> Self {
        self.rule(FieldRule::new(key, strategy))
    }

    /// Optional body field.
    pub fn optional(self, key: impl Into<String>, strategy: Strategy) -> Self {
        self.rule(FieldRule::new(key, strategy).optional())
    }

    /// Required URL parameter.
    pub fn url_param(self, key: impl Into<String>, strategy: Strategy) -> Self {
        self.rule(FieldRule::new(key, strategy).url_param())
    }

    pub fn body_required(mut self, required: bool) -> Self {
        self.options.body_required = required;
        self
    }

    pub fn require_body_shape(mut self, shape: BodyShape) -> Self {
        self.options.required_body_shape = Some(shape);
        self
    }

    pub fn error_message(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.options.error_messages.insert(kind, message.into());
        self
    }

    pub fn build(self) -> ValidatorOptions {
        self.options
    }
}
