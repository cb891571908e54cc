//! Configuration, shared models, and the credential cache

pub mod config;
pub mod credentials;
pub mod models;
pub mod secrets;
