pub mod cors;
pub mod test_utils;

pub use cors::with_cors_headers;
