//! Search query construction and reply decoding.
//!
//! This is the only layer that speaks the engine's query syntax and reply
//! shape. Everything here is pure: the transport executes the expression,
//! this module only builds it and interprets the result.

pub mod decode;
pub mod escape;
pub mod query;

pub use decode::decode;
pub use escape::escape;
pub use query::{build_query, SearchQuery};
