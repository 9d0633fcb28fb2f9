//! handlers/mod.rs
//! Handlers HTTP del hub de mensajería.
pub mod message_handler;
