//! config/mod.rs
pub mod hub_config;
