//! services/message_store.rs
//! Almacén en memoria de registros de mensaje, compartido entre workers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::message_model::MessageRecord;

/// Se construye una vez al arrancar y se clona (es un handle) hacia cada servicio.
#[derive(Clone, Default)]
pub struct MessageStore {
    records: Arc<RwLock<HashMap<String, MessageRecord>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta el registro ya completo. No se comprueba colisión de id:
    /// si el id ya existe, el registro anterior se reemplaza.
    pub async fn put(&self, id: &str, record: MessageRecord) {
        let mut records = self.records.write().await;
        if records.insert(id.to_string(), record).is_some() {
            log::warn!("(put) Se reemplazó un registro existente con id={}", id);
        }
    }

    pub async fn get(&self, id: &str) -> Option<MessageRecord> {
        self.records.read().await.get(id).cloned()
    }

    /// Copia de todos los registros en el momento de la llamada. Sin orden garantizado.
    pub async fn list_all(&self) -> Vec<MessageRecord> {
        self.records.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
