//! # VALIDATOR MIDDLEWARE
//!
//! **PER-REQUEST DISPATCH**
//!
//! Built once per route from [`ValidatorOptions`], then run for every request:
//!
//! 1. **BODY POLICIES** - `body_required`, then `required_body_shape`
//! 2. **FIELD RULES** - in configured order; URL parameters are read directly,
//!    everything else is extracted from the parsed body
//! 3. **CONTINUATION** - reached only when every rule passed
//!
//! The first failing check ends the request; violations are never accumulated.

use crate::errors::{fail, ValidationError};
use crate::request::{HttpRequest, RequestBody};
use crate::response::HttpResponse;
use crate::types::FieldValue;
use crate::validation::{ErrorKind, ErrorMessages, FieldContext, FieldRule, Strategy, ValidationResult};
use log::{debug, trace, warn};
use std::future::Future;
use std::sync::Arc;

pub mod options;

pub use options::{ValidatorOptions, ValidatorOptionsBuilder};

/// Configured request validator. Cheap to clone; clones share configuration.
#[derive(Debug, Clone)]
pub struct ValidatorMiddleware {
    options: Arc<ValidatorOptions>,
    messages: Arc<ErrorMessages>,
}

impl ValidatorMiddleware {
    /// Builds the validator. The message table is private to this instance.
    pub fn new(options: ValidatorOptions) -> Self {
        let messages = ErrorMessages::with_overrides(options.error_messages.clone());
        debug!(
            "Configured request validator: {} rule(s), body_required={}, required_body_shape={:?}",
            options.validations.len(),
            options.body_required,
            options.required_body_shape
        );
        Self {
            options: Arc::new(options),
            messages: Arc::new(messages),
        }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn messages(&self) -> &ErrorMessages {
        &self.messages
    }

    /// Runs every check against `request`, stopping at the first failure.
    pub fn validate(&self, request: &HttpRequest) -> ValidationResult {
        self.run(request).map_err(|err| {
            debug!("Rejected request to '{}': {}", request.path, err);
            err
        })
    }

    /// Validates, then awaits `next` exactly once. `next` is never called for
    /// a rejected request.
    pub async fn handle<F, Fut>(&self, request: &HttpRequest, next: F) -> Result<Fut::Output, ValidationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        self.validate(request)?;
        Ok(next().await)
    }

    /// Like [`handle`](Self::handle), but turns a rejection into the terminal
    /// `422` response.
    pub async fn respond<F, Fut>(&self, request: &HttpRequest, next: F) -> HttpResponse
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = HttpResponse>,
    {
        match self.handle(request, next).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }

    fn run(&self, request: &HttpRequest) -> ValidationResult {
        self.check_body_policies(request)?;

        for rule in &self.options.validations {
            trace!("Validating field '{}' (url_param={})", rule.key, rule.is_url_param);
            if rule.is_url_param {
                let value = request.param(&rule.key).map(FieldValue::from);
                self.validate_element(rule, value.as_ref())?;
            } else {
                self.validate_body_field(rule, &request.body)?;
            }
        }
        Ok(())
    }

    fn check_body_policies(&self, request: &HttpRequest) -> ValidationResult {
        if self.options.body_required && !request.has_body() {
            return Err(self.reject(ErrorKind::NoBody, None));
        }

        if let Some(required) = self.options.required_body_shape {
            let observed = request.body.shape();
            if request.has_body() && observed != required {
                return Err(fail(
                    self.messages.get(ErrorKind::InvalidBody),
                    None,
                    Some(observed.as_str()),
                    Some(required.as_str()),
                ));
            }
        }
        Ok(())
    }

    fn validate_element(&self, rule: &FieldRule, value: Option<&FieldValue>) -> ValidationResult {
        let Some(value) = value.filter(|value| value.is_present()) else {
            if rule.is_optional {
                return Ok(());
            }
            return Err(self.reject(ErrorKind::MissingRequired, Some(&rule.key)));
        };

        match &rule.strategy {
            Strategy::Function(validator) => validator.validate(&self.context(rule), value),
            Strategy::Literal(expected) if Strategy::literal_matches(expected, value) => Ok(()),
            Strategy::Literal(expected) => Err(fail(
                self.messages.get(ErrorKind::ValidationFailed),
                Some(&rule.key),
                Some(&*value.to_text()),
                Some(expected.as_str()),
            )),
        }
    }

    fn validate_body_field(&self, rule: &FieldRule, body: &RequestBody) -> ValidationResult {
        match body {
            RequestBody::Form(form) => {
                if !form.contains_key(&rule.key) {
                    if rule.is_optional {
                        return Ok(());
                    }
                    return Err(self.reject(ErrorKind::MissingRequired, Some(&rule.key)));
                }
                // Every occurrence of a repeated key is checked; the first bad one wins.
                for value in form.get_all(&rule.key) {
                    self.validate_element(rule, Some(&FieldValue::from(value)))?;
                }
                Ok(())
            }
            RequestBody::Json(json) => {
                let value = json.get(rule.key.as_str()).cloned().map(FieldValue::from);
                self.validate_element(rule, value.as_ref())
            }
            RequestBody::Text(_) | RequestBody::Raw(_) | RequestBody::None => {
                let payload = body.payload().filter(|payload| payload.is_present());
                match (payload, &rule.strategy) {
                    (None, _) if self.options.body_required => Err(self.reject(ErrorKind::NoBody, None)),
                    (Some(payload), Strategy::Function(validator)) => {
                        warn!(
                            "Field '{}' validated against the whole {} body",
                            rule.key,
                            body.shape()
                        );
                        validator.validate(&self.context(rule), &payload)
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    fn context<'a>(&'a self, rule: &'a FieldRule) -> FieldContext<'a> {
        FieldContext::new(&rule.key, &self.messages, &self.options)
    }

    fn reject(&self, kind: ErrorKind, key: Option<&str>) -> ValidationError {
        fail(self.messages.get(kind), key, None, None)
    }
}
