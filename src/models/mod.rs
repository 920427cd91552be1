//! Configuration models shared across handlers.

pub mod config;
