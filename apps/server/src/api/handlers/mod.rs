//! Request handlers

pub mod records;
