//! models/message_model.rs
//! Registro de mensaje, resultado por canal y analíticas de entrega.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canales de entrega soportados (conjunto cerrado).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
    Push,
    InApp,
    Webhook,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Email,
        Channel::Sms,
        Channel::Push,
        Channel::InApp,
        Channel::Webhook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Push => "push",
            Channel::InApp => "in_app",
            Channel::Webhook => "webhook",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Estado global del mensaje. Derivado, nunca lo fija el cliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    // El envío es síncrono, hoy nunca se produce.
    Queued,
    Processing,
    Delivered,
    PartiallyDelivered,
    Failed,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Queued => "queued",
            MessageStatus::Processing => "processing",
            MessageStatus::Delivered => "delivered",
            MessageStatus::PartiallyDelivered => "partially_delivered",
            MessageStatus::Failed => "failed",
        }
    }

    /// `deliveredAt` solo se fija en estos dos estados.
    pub fn reached_recipient(&self) -> bool {
        matches!(
            self,
            MessageStatus::Delivered | MessageStatus::PartiallyDelivered
        )
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nivel de canal no existe estado parcial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOutcomeStatus {
    Delivered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDeliveryStatus {
    pub channel: Channel,
    pub status: ChannelOutcomeStatus,
    pub delivered_at: Option<DateTime<Utc>>,
    pub attempts: u32,
    pub error_message: Option<String>,
}

impl ChannelDeliveryStatus {
    pub fn delivered(channel: Channel, at: DateTime<Utc>) -> Self {
        Self {
            channel,
            status: ChannelOutcomeStatus::Delivered,
            delivered_at: Some(at),
            attempts: 1,
            error_message: None,
        }
    }

    pub fn failed(channel: Channel, attempts: u32, error_message: impl Into<String>) -> Self {
        Self {
            channel,
            status: ChannelOutcomeStatus::Failed,
            delivered_at: None,
            attempts: attempts.max(1),
            error_message: Some(error_message.into()),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == ChannelOutcomeStatus::Delivered
    }

    pub fn is_failed(&self) -> bool {
        self.status == ChannelOutcomeStatus::Failed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAnalytics {
    pub total_recipients: u64,
    pub delivered: u64,
    pub failed: u64,
    pub pending: u64,
    pub delivery_rate: f64,
}

impl DeliveryAnalytics {
    /// El porcentaje se calcula aquí para que nunca quede desalineado con los contadores.
    pub fn new(total_recipients: u64, delivered: u64, failed: u64, pending: u64) -> Self {
        let delivery_rate = if total_recipients > 0 {
            delivered as f64 / total_recipients as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_recipients,
            delivered,
            failed,
            pending,
            delivery_rate,
        }
    }
}

/// Registro completo de un envío. Inmutable una vez guardado en el store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    pub recipients: Vec<String>,
    pub content: String,
    pub channels: Vec<Channel>,
    pub priority: Priority,
    pub category: Option<String>,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub channel_status: BTreeMap<Channel, ChannelDeliveryStatus>,
    pub analytics: DeliveryAnalytics,
    pub mock_data: bool,
}
