//! Core translation client module

pub mod client;
pub mod errors;
pub mod models;
