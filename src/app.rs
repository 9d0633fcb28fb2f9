//! app.rs
use crate::handlers::message_handler;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v2")
            .route("/health", web::get().to(message_handler::health_endpoint))
            .service(
                web::scope("/messages")
                    .route(
                        "",
                        web::post().to(message_handler::send_message_endpoint),
                    )
                    .route(
                        "",
                        web::get().to(message_handler::list_messages_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(message_handler::get_message_endpoint),
                    ),
            ),
    );
}
