//! # REQUEST VALIDATOR
//!
//! **DECLARATIVE REQUEST VALIDATION MIDDLEWARE**
//!
//! **ARCHITECTURE**: Ordered field rules checked against URL parameters and
//! form/JSON bodies, with a strategy per field
//! **GUARANTEE**: The first failing rule rejects the request with a single
//! `422 Unprocessable Entity` plain-text message
//!
//! ```rust
//! use request_validator::api::*;
//! use serde_json::json;
//!
//! let validator = ValidatorMiddleware::new(
//!     ValidatorOptions::builder()
//!         .url_param("id", Strategy::literal("string"))
//!         .field("kind", Strategy::function(OneOf::new(["a", "b"])))
//!         .build(),
//! );
//!
//! let request = HttpRequest::new("/items/7")
//!     .with_param("id", "7")
//!     .with_body(RequestBody::Json(json!({"kind": "c"})));
//!
//! let err = validator.validate(&request).unwrap_err();
//! assert_eq!(err.status(), 422);
//! assert_eq!(err.message(), "Value not in array; Key: kind; Value: c; Should Be: [a,b];");
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod request;
pub mod response;
pub mod types;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;

#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::errors::ProjectError;
    use serde_json::json;

    fn parsed(content_type: &str, body: &str) -> HttpRequest {
        HttpRequest::new("/")
            .with_header("Content-Type", content_type)
            .with_raw_body(body.as_bytes())
            .unwrap()
    }

    // **PIPELINE TESTS**
    #[test]
    fn test_raw_form_body_through_validator() {
        let validator = ValidatorMiddleware::new(
            ValidatorOptions::builder()
                .field("a", Strategy::literal("b"))
                .build(),
        );
        let request = parsed("application/x-www-form-urlencoded", "a=b");
        assert!(validator.validate(&request).is_ok());

        let request = parsed("application/x-www-form-urlencoded", "a=c");
        assert_eq!(
            validator.validate(&request).unwrap_err().message(),
            "Validation failed; Key: a; Value: c; Should Be: b;"
        );
    }

    #[test]
    fn test_raw_json_body_through_validator() {
        let validator = ValidatorMiddleware::new(
            ValidatorOptions::builder()
                .field("a", Strategy::function(NumberRange::between(1, 3)))
                .build(),
        );
        assert!(validator.validate(&parsed("application/json", r#"{"a": 2}"#)).is_ok());
        assert_eq!(
            validator
                .validate(&parsed("application/json", r#"{"a": 4}"#))
                .unwrap_err()
                .message(),
            "Value is larger than the allowed size; Key: a; Value: 4; Should Be: 3;"
        );
    }

    #[test]
    fn test_document_configured_validator() {
        let options = ValidatorOptions::from_json_str(
            r#"{
                "validations": [{ "key": "a", "validationOption": { "oneOf": ["b"] } }],
                "errorMessages": { "ERROR_NOT_IN_ARRAY": "Unknown choice" }
            }"#,
        )
        .unwrap();
        let validator = ValidatorMiddleware::new(options);

        let request = HttpRequest::new("/").with_body(RequestBody::Json(json!({"a": "c"})));
        assert_eq!(
            validator.validate(&request).unwrap_err().message(),
            "Unknown choice; Key: a; Value: c; Should Be: [b];"
        );
    }

    // **ERROR PROPAGATION TESTS**
    #[test]
    fn test_malformed_body_is_not_a_rejection() {
        let result = HttpRequest::new("/")
            .with_header("content-type", "application/json")
            .with_raw_body(b"{not json");

        match result {
            Err(ProjectError::Request { code, .. }) => {
                assert!(code.contains("INVALID_JSON"));
            }
            _ => panic!("Expected request error"),
        }
    }

    #[test]
    fn test_rejection_translates_to_response() {
        let validator = ValidatorMiddleware::new(ValidatorOptions::builder().body_required(true).build());
        let response = validator
            .validate(&HttpRequest::new("/"))
            .map_err(ValidationError::into_response)
            .unwrap_err();

        assert_eq!(response.status_code, 422);
        assert_eq!(response.body, ResponseBody::Text("No body was provided;".to_string()));
    }
}
