pub use crate::errors::{compose_message, fail, ProjectError, ValidationError};
pub use crate::middleware::{ValidatorMiddleware, ValidatorOptions, ValidatorOptionsBuilder};
pub use crate::request::{parse_body, FormData, HttpRequest, RequestBody};
pub use crate::response::{HttpResponse, ResponseBody};
pub use crate::types::{BodyShape, FieldValue};
pub use crate::validation::{
    ErrorKind, ErrorMessages, FieldContext, FieldRule, FieldValidator, NumberRange, OneOf, Strategy,
};
