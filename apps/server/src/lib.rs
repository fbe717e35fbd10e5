//! Shaker - read-only search API over the cocktail database cache
//!
//! A thin HTTP façade over a RediSearch index holding ingredients,
//! alcohols, and cocktails:
//! - Query parameters become an escaped search expression
//! - `FT.SEARCH` executes against the collection's index
//! - The engine's flat positional reply is decoded into typed records

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
