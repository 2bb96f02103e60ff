use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe; reports 503 until the store answers a ping.
#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let ready = state.db.health_check().await.is_ok();
    let status = if ready { "ready" } else { "not_ready" };
    let store = if ready { "ok" } else { "error" };

    let response = serde_json::json!({
        "success": ready,
        "status": status,
        "dependencies": { "mongodb": store }
    });

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], serde_json::json!("healthy"));
        assert_eq!(body["version"], serde_json::json!(env!("CARGO_PKG_VERSION")));
    }

    #[actix_web::test]
    async fn test_readiness_without_a_store_is_unavailable() {
        let state = crate::test_support::seeded_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["dependencies"]["mongodb"], serde_json::json!("error"));
    }
}
