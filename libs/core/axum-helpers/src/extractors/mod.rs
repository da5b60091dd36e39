//! Custom extractors.

pub mod json_body;

pub use json_body::JsonBody;
