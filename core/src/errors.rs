use thiserror::Error;

/// Status attached to every rejection produced by the validator.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Failures raised outside the per-request validation path.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("CONFIG ERROR: {code} - {message}")]
    Config { code: String, message: String },

    #[error("REQUEST ERROR: {code} - {message}")]
    Request { code: String, message: String },
}

/// Stable codes carried by [`ProjectError`].
pub mod error_codes {
    pub const INVALID_OPTIONS: &str = "RUST_CORE_CONFIG_INVALID_OPTIONS";
    pub const INVALID_RADIX: &str = "RUST_CORE_CONFIG_INVALID_RADIX";
    pub const INVALID_JSON: &str = "RUST_CORE_REQUEST_INVALID_JSON";
    pub const INVALID_UTF8: &str = "RUST_CORE_REQUEST_INVALID_UTF8";
}

/// A rejected request. Always surfaces as `422 Unprocessable Entity` with the
/// composed message as a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Wraps an already composed message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The composed message, e.g. `"No value was provided; Key: a;"`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        UNPROCESSABLE_ENTITY
    }
}

/// Builds `"<message>;[ Key: <key>;][ Value: <value>;][ Should Be: <should_be>;]"`.
///
/// Empty clauses are dropped the same way absent ones are.
pub fn compose_message(
    message: &str,
    key: Option<&str>,
    value: Option<&str>,
    should_be: Option<&str>,
) -> String {
    let mut composed = format!("{};", message);
    let clauses = [(" Key", key), (" Value", value), (" Should Be", should_be)];
    for (label, clause) in clauses {
        if let Some(text) = clause.filter(|text| !text.is_empty()) {
            composed.push_str(&format!("{}: {};", label, text));
        }
    }
    composed
}

/// The fail primitive: composes the message and produces the rejection that
/// aborts the request.
pub fn fail(
    message: &str,
    key: Option<&str>,
    value: Option<&str>,
    should_be: Option<&str>,
) -> ValidationError {
    ValidationError::new(compose_message(message, key, value, should_be))
}
