//! Services - request-scoped orchestration on top of the database layer.

pub mod search;

pub use search::SearchService;
