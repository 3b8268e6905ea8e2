pub mod parser;
pub mod types;

pub use parser::{parse_body, parse_form_body, parse_json_body, parse_urlencoded};
pub use types::{FormData, HttpRequest, RequestBody};
