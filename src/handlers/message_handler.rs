//! handlers/message_handler.rs
//! Endpoints de /v2/messages sobre MessagingService.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    config::hub_config::AppConfig,
    errors::HubError,
    models::request_model::{ListMessagesQuery, MessageRequest},
    services::{messaging_service::MessagingService, query_engine::MessageQuery},
};

fn error_response(e: HubError) -> HttpResponse {
    match &e {
        HubError::InvalidArgument(_) => HttpResponse::BadRequest().json(json!({
            "error": "Invalid request",
            "details": e.to_string()
        })),
        HubError::NotFound(_) => HttpResponse::NotFound().json(json!({
            "error": "Message not found",
            "details": e.to_string()
        })),
    }
}

/// POST /v2/messages
pub async fn send_message_endpoint(
    messaging_service: web::Data<MessagingService>,
    body: web::Json<MessageRequest>,
) -> HttpResponse {
    match messaging_service.dispatch(body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(record),
        Err(e) => error_response(e),
    }
}

/// GET /v2/messages/{id}
pub async fn get_message_endpoint(
    messaging_service: web::Data<MessagingService>,
    path: web::Path<String>,
) -> HttpResponse {
    let message_id = path.into_inner();

    match messaging_service.get_message(&message_id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => error_response(e),
    }
}

/// GET /v2/messages?status=&category=&page=&size=
pub async fn list_messages_endpoint(
    messaging_service: web::Data<MessagingService>,
    config: web::Data<AppConfig>,
    query: web::Query<ListMessagesQuery>,
) -> HttpResponse {
    let params = query.into_inner();
    let size = params
        .size
        .unwrap_or(config.default_page_size)
        .min(config.max_page_size);

    let message_query = MessageQuery {
        status: params.status,
        category: params.category,
        page: params.page.unwrap_or(0),
        size,
    };

    let items = messaging_service.list_messages(&message_query).await;
    HttpResponse::Ok().json(items)
}

/// GET /v2/health
pub async fn health_endpoint(messaging_service: web::Data<MessagingService>) -> HttpResponse {
    let messages = messaging_service.store().len().await;
    HttpResponse::Ok().json(json!({
        "status": "UP",
        "messages": messages
    }))
}
