//! services/mod.rs
//! Lógica de negocio del hub: simulación, agregación, analíticas, store y consultas.

pub mod analytics;
pub mod delivery_simulator;
pub mod message_store;
pub mod messaging_service;
pub mod query_engine;
pub mod status_aggregator;
