//! services/query_engine.rs
//! Filtrado por estado/categoría y paginación sobre una copia del store.

use std::cmp::Ordering;

use crate::models::message_model::MessageRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    /// Base cero.
    pub page: usize,
    pub size: usize,
}

#[allow(dead_code)]
impl MessageQuery {
    pub fn new(page: usize, size: usize) -> Self {
        MessageQuery {
            status: None,
            category: None,
            page,
            size,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Comparación exacta, sensible a mayúsculas. Filtro vacío = sin restricción.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        let status_ok = match active_filter(&self.status) {
            Some(status) => record.status.as_str() == status,
            None => true,
        };
        let category_ok = match active_filter(&self.category) {
            Some(category) => record.category.as_deref() == Some(category),
            None => true,
        };
        status_ok && category_ok
    }
}

fn active_filter(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.is_empty())
}

/// Más recientes primero; el id desempata para que las páginas sean estables.
fn newest_first(a: &MessageRecord, b: &MessageRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

/// Página fuera de rango devuelve un vector vacío, no un error.
pub fn filter_and_paginate(records: Vec<MessageRecord>, query: &MessageQuery) -> Vec<MessageRecord> {
    let mut filtered: Vec<MessageRecord> = records
        .into_iter()
        .filter(|record| query.matches(record))
        .collect();
    filtered.sort_by(newest_first);

    let total = filtered.len();
    let start = query.page.saturating_mul(query.size);
    if start >= total {
        return Vec::new();
    }
    let end = start.saturating_add(query.size).min(total);

    filtered.drain(start..end).collect()
}
