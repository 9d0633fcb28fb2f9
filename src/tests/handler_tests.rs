//! tests/handler_tests.rs
//! Pruebas HTTP de /v2 con `actix_web::test`.

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::app::init_app;
    use crate::config::hub_config::AppConfig;
    use crate::services::messaging_service::MessagingService;
    use crate::tests::support::{scripted_service, ScriptedEntropy};

    fn test_config() -> AppConfig {
        AppConfig {
            default_page_size: 2,
            max_page_size: 3,
            ..AppConfig::default()
        }
    }

    macro_rules! test_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service))
                    .app_data(web::Data::new(test_config()))
                    .configure(init_app),
            )
            .await
        };
    }

    fn send_body(channels: Value) -> Value {
        json!({
            "recipients": ["user@example.com", "admin@retailx.com"],
            "content": "Your order #12345 has been shipped!",
            "channels": channels,
            "priority": "high",
            "category": "order_updates",
            "templateId": "order_shipped_template",
            "templateVariables": { "orderNumber": "12345" },
            "webhookUrl": "https://example.com/hook"
        })
    }

    #[actix_rt::test]
    async fn test_post_message_returns_created_record() {
        let service: MessagingService = scripted_service(ScriptedEntropy::always_deliver());
        let app = test_app!(service);

        let req = test::TestRequest::post()
            .uri("/v2/messages")
            .set_json(send_body(json!(["email", "in_app"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "delivered");
        assert_eq!(body["priority"], "high");
        assert_eq!(body["category"], "order_updates");
        assert_eq!(body["mockData"], true);
        assert_eq!(body["channelStatus"]["in_app"]["status"], "delivered");
        assert_eq!(body["channelStatus"]["email"]["attempts"], 1);
        assert_eq!(body["analytics"]["totalRecipients"], 4);
        assert_eq!(body["analytics"]["deliveryRate"], 100.0);
        assert!(body["deliveredAt"].is_string());
        assert!(body["id"].as_str().unwrap_or_default().starts_with("msg_"));
    }

    #[actix_rt::test]
    async fn test_post_invalid_message_is_bad_request() {
        let app = test_app!(scripted_service(ScriptedEntropy::always_deliver()));

        let empty_channels = test::TestRequest::post()
            .uri("/v2/messages")
            .set_json(send_body(json!([])))
            .to_request();
        let resp = test::call_service(&app, empty_channels).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid request");

        let unknown_channel = test::TestRequest::post()
            .uri("/v2/messages")
            .set_json(send_body(json!(["fax"])))
            .to_request();
        let resp = test::call_service(&app, unknown_channel).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_get_message_found_and_not_found() {
        let app = test_app!(scripted_service(ScriptedEntropy::new(&[0.99], &[3])));

        let req = test::TestRequest::post()
            .uri("/v2/messages")
            .set_json(send_body(json!(["sms"])))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap_or_default().to_string();
        assert_eq!(created["status"], "failed");
        assert!(created["deliveredAt"].is_null());

        let req = test::TestRequest::get()
            .uri(&format!("/v2/messages/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get()
            .uri("/v2/messages/msg_does_not_exist")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_list_uses_default_and_max_page_size() {
        let app = test_app!(scripted_service(ScriptedEntropy::always_deliver()));

        for _ in 0..5 {
            let req = test::TestRequest::post()
                .uri("/v2/messages")
                .set_json(send_body(json!(["push"])))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/v2/messages").to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 2);

        let req = test::TestRequest::get()
            .uri("/v2/messages?size=50&status=delivered&category=order_updates")
            .to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 3);

        let req = test::TestRequest::get()
            .uri("/v2/messages?page=9&size=3")
            .to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(items.is_empty());

        let req = test::TestRequest::get()
            .uri("/v2/messages?status=failed")
            .to_request();
        let items: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(items.is_empty());
    }

    #[actix_rt::test]
    async fn test_health_reports_store_size() {
        let app = test_app!(scripted_service(ScriptedEntropy::always_deliver()));

        let req = test::TestRequest::post()
            .uri("/v2/messages")
            .set_json(send_body(json!(["webhook"])))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/v2/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "UP", "messages": 1 }));
    }
}
