//! tests/support.rs
//! Utilidades compartidas por los tests: aleatoriedad guionada y registros de ejemplo.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::config::hub_config::SuccessRateTable;
use crate::models::message_model::{
    Channel, ChannelDeliveryStatus, DeliveryAnalytics, MessageRecord, MessageStatus, Priority,
};
use crate::services::delivery_simulator::{DeliverySimulator, EntropySource};
use crate::services::message_store::MessageStore;
use crate::services::messaging_service::MessagingService;

/// Devuelve valores fijos. Agotada la cola: 0.0 (éxito) y el mínimo del rango.
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    units: VecDeque<f64>,
    ranges: VecDeque<u32>,
}

impl ScriptedEntropy {
    pub fn new(units: &[f64], ranges: &[u32]) -> Self {
        ScriptedEntropy {
            units: units.iter().copied().collect(),
            ranges: ranges.iter().copied().collect(),
        }
    }

    pub fn always_deliver() -> Self {
        Self::default()
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.ranges
            .pop_front()
            .map(|v| v.clamp(low, high))
            .unwrap_or(low)
    }
}

pub fn scripted_service(entropy: ScriptedEntropy) -> MessagingService {
    MessagingService::new(
        MessageStore::new(),
        DeliverySimulator::new(SuccessRateTable::default()),
        Box::new(entropy),
    )
}

pub fn recipients(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user{}@example.com", i)).collect()
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Registro armado a mano para tests de consulta; `minutes` desplaza `createdAt`.
pub fn sample_record(
    id: &str,
    status: MessageStatus,
    category: Option<&str>,
    minutes: i64,
) -> MessageRecord {
    let created_at = base_time() + Duration::minutes(minutes);
    let outcome = if status == MessageStatus::Failed {
        ChannelDeliveryStatus::failed(Channel::Email, 2, "boom")
    } else {
        ChannelDeliveryStatus::delivered(Channel::Email, created_at)
    };
    let analytics = if outcome.is_delivered() {
        DeliveryAnalytics::new(1, 1, 0, 0)
    } else {
        DeliveryAnalytics::new(1, 0, 1, 0)
    };

    MessageRecord {
        id: id.to_string(),
        recipients: recipients(1),
        content: "hola".to_string(),
        channels: vec![Channel::Email],
        priority: Priority::Normal,
        category: category.map(str::to_string),
        status,
        created_at,
        updated_at: created_at,
        delivered_at: status.reached_recipient().then_some(created_at),
        channel_status: BTreeMap::from([(Channel::Email, outcome)]),
        analytics,
        mock_data: true,
    }
}
