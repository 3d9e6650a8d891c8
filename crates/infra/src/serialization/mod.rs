//! Entity serialization

pub mod json;

pub use json::JsonEntitySerializer;
