use crate::errors::ProjectError;
use crate::request::parser::parse_body;
use crate::types::{BodyShape, FieldValue};
use std::collections::HashMap;

/// Request context handed to the validator by the router.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub path: String,
    /// Header names are stored lower-cased.
    pub headers: HashMap<String, String>,
    /// Route parameters captured by the router.
    pub params: HashMap<String, String>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Parses `data` according to the `Content-Type` header already set.
    pub fn with_raw_body(mut self, data: &[u8]) -> Result<Self, ProjectError> {
        self.body = parse_body(self.content_type(), data)?;
        Ok(self)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn has_body(&self) -> bool {
        !matches!(self.body, RequestBody::None)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    None,
    Form(FormData),
    Json(serde_json::Value),
    Text(String),
    Raw(Vec<u8>),
}

impl RequestBody {
    pub fn shape(&self) -> BodyShape {
        match self {
            RequestBody::None => BodyShape::None,
            RequestBody::Form(_) => BodyShape::Form,
            RequestBody::Json(_) => BodyShape::Json,
            RequestBody::Text(_) => BodyShape::Text,
            RequestBody::Raw(_) => BodyShape::Raw,
        }
    }

    /// The whole body as one value, for bodies without named fields.
    pub fn payload(&self) -> Option<FieldValue> {
        match self {
            RequestBody::Text(text) => Some(FieldValue::Text(text.clone())),
            RequestBody::Raw(bytes) => Some(FieldValue::Bytes(bytes.clone())),
            RequestBody::None | RequestBody::Form(_) | RequestBody::Json(_) => None,
        }
    }
}

/// Ordered multi-map of form entries. A key may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Every value under `key`, in body order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (key, value) in iter {
            form.append(key, value);
        }
        form
    }
}
