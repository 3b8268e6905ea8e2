use crate::errors::{fail, ValidationError};
use crate::response::{create_response, HttpResponse, ResponseBody};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    // **RESPONSE CONSTRUCTION TESTS**
    #[test]
    fn test_create_text_response() {
        let response = create_response(201, ResponseBody::Text("Created".to_string()));

        assert_eq!(response.status_code, 201);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"text/plain".to_string())
        );
    }

    #[test]
    fn test_create_json_response() {
        let response = create_response(200, ResponseBody::Json(json!({"status": "ok"})));

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_create_empty_response() {
        let response = create_response(204, ResponseBody::Empty);

        assert_eq!(response.status_code, 204);
        assert!(response.headers.get("Content-Type").is_none());
    }

    // **REJECTION RESPONSE TESTS**
    #[test]
    fn test_rejection_is_422_plain_text() {
        let response = fail("No value was provided", Some("a"), None, None).into_response();

        assert_eq!(response.status_code, 422);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"text/plain".to_string())
        );
        assert_eq!(
            response.body,
            ResponseBody::Text("No value was provided; Key: a;".to_string())
        );
    }

    #[test]
    fn test_rejection_body_is_never_json() {
        let response: HttpResponse =
            ValidationError::new("Validation failed; Key: a; Value: b; Should Be: c;").into();

        assert_eq!(response.status_code, 422);
        assert_eq!(
            response.body,
            ResponseBody::Text("Validation failed; Key: a; Value: b; Should Be: c;".to_string())
        );
    }
}
