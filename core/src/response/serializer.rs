use crate::errors::ValidationError;
use crate::response::types::{HttpResponse, ResponseBody};
use std::collections::HashMap;

pub fn create_response(status: u16, body: ResponseBody) -> HttpResponse {
    let mut headers = HashMap::new();

    match &body {
        ResponseBody::Json(_) => {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        ResponseBody::Text(_) => {
            headers.insert("Content-Type".to_string(), "text/plain".to_string());
        }
        ResponseBody::Empty => {}
    }

    HttpResponse {
        status_code: status,
        headers,
        body,
    }
}

impl ValidationError {
    /// The terminal response for this rejection: `422` with the composed
    /// message as plain text.
    pub fn into_response(self) -> HttpResponse {
        let status = self.status();
        create_response(status, ResponseBody::Text(self.message().to_string()))
    }
}

impl From<ValidationError> for HttpResponse {
    fn from(err: ValidationError) -> Self {
        err.into_response()
    }
}
