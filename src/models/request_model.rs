use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::message_model::{Channel, Priority};

fn default_demo_mode() -> bool {
    true
}

/// Petición de envío multicanal.
/// `template_*`, `scheduled_at` y `webhook_url` se aceptan pero no se procesan aquí.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    pub recipients: Vec<String>,
    pub content: String,
    /// ["email", "push"] etc.
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub priority: Priority,
    pub category: Option<String>,

    pub template_id: Option<String>,
    pub template_variables: Option<HashMap<String, serde_json::Value>>,
    pub scheduled_at: Option<String>,
    pub webhook_url: Option<String>,

    #[serde(default = "default_demo_mode")]
    pub demo_mode: bool,
}

#[allow(dead_code)]
impl MessageRequest {
    pub fn new(recipients: Vec<String>, content: impl Into<String>, channels: Vec<Channel>) -> Self {
        Self {
            recipients,
            content: content.into(),
            channels,
            priority: Priority::default(),
            category: None,
            template_id: None,
            template_variables: None,
            scheduled_at: None,
            webhook_url: None,
            demo_mode: true,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Filtros y paginación para el listado.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}
