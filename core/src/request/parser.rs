use crate::errors::{error_codes, ProjectError};
use crate::request::types::{FormData, RequestBody};

/// Decodes `application/x-www-form-urlencoded` text. `+` is a space, a bare
/// `key` gets an empty value, empty segments are skipped.
pub fn parse_urlencoded(input: &str) -> FormData {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

pub fn parse_json_body(data: &[u8]) -> Result<serde_json::Value, ProjectError> {
    serde_json::from_slice(data).map_err(|e| ProjectError::Request {
        code: error_codes::INVALID_JSON.to_string(),
        message: format!("Invalid JSON: {}", e),
    })
}

pub fn parse_form_body(data: &[u8]) -> Result<FormData, ProjectError> {
    let body_str = std::str::from_utf8(data).map_err(|e| ProjectError::Request {
        code: error_codes::INVALID_UTF8.to_string(),
        message: format!("Invalid UTF-8 in form body: {}", e),
    })?;

    Ok(parse_urlencoded(body_str))
}

/// Picks the body representation from the media type. An empty payload is
/// always [`RequestBody::None`].
pub fn parse_body(content_type: Option<&str>, data: &[u8]) -> Result<RequestBody, ProjectError> {
    if data.is_empty() {
        return Ok(RequestBody::None);
    }

    let media_type = content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    let body = match media_type.as_str() {
        "application/json" => RequestBody::Json(parse_json_body(data)?),
        json if json.ends_with("+json") => RequestBody::Json(parse_json_body(data)?),
        "application/x-www-form-urlencoded" => RequestBody::Form(parse_form_body(data)?),
        text if text.starts_with("text/") => {
            RequestBody::Text(String::from_utf8_lossy(data).into_owned())
        }
        _ => RequestBody::Raw(data.to_vec()),
    };
    Ok(body)
}
