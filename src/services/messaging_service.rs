//! services/messaging_service.rs
//! Fachada del núcleo: Dispatch, GetById y List.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    errors::{HubError, HubResult},
    models::{
        message_model::{Channel, MessageRecord},
        request_model::MessageRequest,
    },
    services::{
        analytics::compute_analytics,
        delivery_simulator::{DeliverySimulator, EntropySource},
        message_store::MessageStore,
        query_engine::{filter_and_paginate, MessageQuery},
        status_aggregator::aggregate,
    },
};

#[derive(Clone)]
pub struct MessagingService {
    store: MessageStore,
    simulator: DeliverySimulator,
    entropy: Arc<Mutex<Box<dyn EntropySource>>>,
}

impl MessagingService {
    pub fn new(
        store: MessageStore,
        simulator: DeliverySimulator,
        entropy: Box<dyn EntropySource>,
    ) -> Self {
        Self {
            store,
            simulator,
            entropy: Arc::new(Mutex::new(entropy)),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Simula cada canal, agrega el estado y guarda el registro completo una sola vez.
    /// Si la validación falla no se guarda nada.
    pub async fn dispatch(&self, req: MessageRequest) -> HubResult<MessageRecord> {
        if let Err(e) = validate_request(&req) {
            log::warn!("(dispatch) Petición rechazada: {}", e);
            return Err(e);
        }

        let channels = dedup_channels(&req.channels);
        let message_id = format!("msg_{}", Uuid::new_v4());
        let created_at = Utc::now();

        log::info!(
            "(dispatch) Iniciando envío id={} canales={} destinatarios={}",
            message_id,
            channels.len(),
            req.recipients.len()
        );

        let channel_status: BTreeMap<_, _> = {
            let mut entropy = self.entropy.lock().await;
            channels
                .iter()
                .map(|&ch| (ch, self.simulator.deliver(ch, &mut **entropy)))
                .collect()
        };

        let status = aggregate(channel_status.values());
        let analytics = compute_analytics(req.recipients.len(), channel_status.values());
        let delivered_at = status.reached_recipient().then(Utc::now);

        let record = MessageRecord {
            id: message_id.clone(),
            recipients: req.recipients,
            content: req.content,
            channels,
            priority: req.priority,
            category: req.category,
            status,
            created_at,
            updated_at: created_at,
            delivered_at,
            channel_status,
            analytics,
            mock_data: req.demo_mode,
        };

        self.store.put(&message_id, record.clone()).await;

        log::info!(
            "(dispatch) Envío id={} finalizado con status={} (rate={:.1}%)",
            message_id,
            record.status,
            record.analytics.delivery_rate
        );
        Ok(record)
    }

    pub async fn get_message(&self, message_id: &str) -> HubResult<MessageRecord> {
        match self.store.get(message_id).await {
            Some(record) => Ok(record),
            None => {
                log::info!("(get_message) No existe mensaje con id={}", message_id);
                Err(HubError::NotFound(message_id.to_string()))
            }
        }
    }

    pub async fn list_messages(&self, query: &MessageQuery) -> Vec<MessageRecord> {
        let snapshot = self.store.list_all().await;
        let page = filter_and_paginate(snapshot, query);
        log::debug!(
            "(list_messages) status={:?} category={:?} page={} size={} -> {} items",
            query.status,
            query.category,
            query.page,
            query.size,
            page.len()
        );
        page
    }
}

fn validate_request(req: &MessageRequest) -> HubResult<()> {
    if req.recipients.is_empty() {
        return Err(HubError::InvalidArgument(
            "recipients no puede estar vacío".to_string(),
        ));
    }
    if req.recipients.iter().any(|r| r.trim().is_empty()) {
        return Err(HubError::InvalidArgument(
            "recipients contiene una dirección vacía".to_string(),
        ));
    }
    if req.content.trim().is_empty() {
        return Err(HubError::InvalidArgument(
            "content no puede estar vacío".to_string(),
        ));
    }
    if req.channels.is_empty() {
        return Err(HubError::InvalidArgument(
            "channels no puede estar vacío".to_string(),
        ));
    }
    Ok(())
}

/// Mantiene el orden de la primera aparición.
fn dedup_channels(requested: &[Channel]) -> Vec<Channel> {
    let mut channels = Vec::with_capacity(requested.len());
    for ch in requested {
        if !channels.contains(ch) {
            channels.push(*ch);
        }
    }
    channels
}
