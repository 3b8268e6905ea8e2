pub mod serializer;
pub mod types;

pub use serializer::create_response;
pub use types::{HttpResponse, ResponseBody};

#[cfg(test)]
mod tests;
