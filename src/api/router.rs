//! Dashboard API router.
//!
//! Returns a composable `Router` with every dashboard route mounted at
//! the root.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. Access logger

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the dashboard API router.
///
/// Handlers use `State<ApiContext>`; `.with_state()` turns the router
/// into `Router<()>` so the `from_fn` layers stay stateless.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::status::banner))
        .route("/status", get(endpoints::status::check))
        .route("/dashboard", get(endpoints::dashboard::summary))
        .route(
            "/health",
            get(endpoints::health::list).post(endpoints::health::create),
        )
        .route("/health/import", post(endpoints::health::import))
        .route(
            "/health/:id",
            get(endpoints::health::detail)
                .put(endpoints::health::update)
                .delete(endpoints::health::remove),
        )
        .route("/alerts", get(endpoints::alerts::list))
        .route("/alerts/:id", get(endpoints::alerts::detail))
        .route(
            "/residents",
            get(endpoints::residents::list).post(endpoints::residents::create),
        )
        .route(
            "/residents/:id",
            get(endpoints::residents::detail)
                .put(endpoints::residents::update)
                .delete(endpoints::residents::remove),
        )
        .route(
            "/staff",
            get(endpoints::staff::list).post(endpoints::staff::create),
        )
        .route(
            "/staff/:id",
            get(endpoints::staff::detail)
                .put(endpoints::staff::update)
                .delete(endpoints::staff::remove),
        )
        .route(
            "/donations",
            get(endpoints::donations::list).post(endpoints::donations::create),
        )
        .route(
            "/donations/:id",
            get(endpoints::donations::detail)
                .put(endpoints::donations::update)
                .delete(endpoints::donations::remove),
        )
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access::log_access))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::alerting::AlertPolicy;
    use crate::db::SqliteStore;

    fn test_router() -> Router {
        test_router_with(AlertPolicy::EveryNonNormal)
    }

    fn test_router_with(policy: AlertPolicy) -> Router {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        api_router(ApiContext::new(store, policy))
    }

    fn make_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(make_request(method, uri, body))
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn critical_vitals(name: &str) -> Value {
        json!({
            "residentName": name,
            "age": "79",
            "gender": "Male",
            "heartRate": "150",
            "bloodPressure": "170/105",
            "temperature": "103.5",
            "oxygenLevel": "85"
        })
    }

    fn normal_vitals(name: &str) -> Value {
        json!({
            "residentName": name,
            "age": 84,
            "heartRate": 72,
            "bloodPressure": "120/80",
            "temperature": 98.6,
            "oxygenLevel": 98
        })
    }

    #[tokio::test]
    async fn banner_is_plain_text() {
        let app = test_router();
        let response = app.oneshot(make_request("GET", "/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).starts_with("SilverCare backend running"));
    }

    #[tokio::test]
    async fn status_reports_policy() {
        let app = test_router_with(AlertPolicy::OnEscalation);
        let (status, json) = send(&app, "GET", "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["alertPolicy"], "escalation");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = test_router();
        let response = app.oneshot(make_request("GET", "/status", None)).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn critical_vitals_create_record_and_alert() {
        let app = test_router();

        let (status, record) = send(&app, "POST", "/health", Some(critical_vitals("Robert Chen"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["status"], "Critical");
        assert_eq!(record["age"], 79);
        assert_eq!(record["bloodPressure"], "170/105");
        assert!(record["riskScore"].as_u64().unwrap() <= 100);

        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        let alerts = alerts.as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["level"], "Critical");
        assert_eq!(alerts[0]["title"], "CRITICAL HEALTH ALERT");
        assert!(alerts[0]["description"].as_str().unwrap().contains("Robert Chen"));
    }

    #[tokio::test]
    async fn normal_vitals_raise_no_alert() {
        let app = test_router();
        let (_, record) = send(&app, "POST", "/health", Some(normal_vitals("Mary Johnson"))).await;
        assert_eq!(record["status"], "Normal");
        assert_eq!(record["riskScore"], 86);

        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert!(alerts.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn client_status_and_score_are_ignored() {
        let app = test_router();
        let mut body = normal_vitals("Mary");
        body["status"] = json!("Critical");
        body["riskScore"] = json!(3);

        let (_, record) = send(&app, "POST", "/health", Some(body)).await;
        assert_eq!(record["status"], "Normal");
        assert_eq!(record["riskScore"], 86);
    }

    #[tokio::test]
    async fn repeated_critical_updates_duplicate_alerts() {
        let app = test_router();
        let (_, record) = send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;
        let uri = format!("/health/{}", record["id"]);

        let (status, _) = send(&app, "PUT", &uri, Some(critical_vitals("Robert"))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert_eq!(alerts.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_recomputes_status() {
        let app = test_router();
        let (_, record) = send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;
        let uri = format!("/health/{}", record["id"]);

        let (_, updated) = send(&app, "PUT", &uri, Some(normal_vitals("Robert"))).await;
        assert_eq!(updated["status"], "Normal");

        let (_, fetched) = send(&app, "GET", &uri, None).await;
        assert_eq!(fetched["status"], "Normal");
        assert_eq!(fetched["riskScore"], 86);
    }

    #[tokio::test]
    async fn empty_vitals_store_degraded_record() {
        let app = test_router();
        let (status, record) =
            send(&app, "POST", "/health", Some(json!({ "residentName": "Nobody" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["status"], "Normal");
        assert_eq!(record["riskScore"], 0);
        assert!(record["heartRate"].is_null());
    }

    #[tokio::test]
    async fn blank_resident_name_is_rejected() {
        let app = test_router();
        let mut body = critical_vitals("x");
        body["residentName"] = json!("   ");

        let (status, json) = send(&app, "POST", "/health", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");

        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert!(alerts.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_resident_name_is_a_json_400() {
        let app = test_router();
        let (status, json) = send(
            &app,
            "POST",
            "/health",
            Some(json!({ "heartRate": "150", "bloodPressure": "120/80" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "residentName is required");
    }

    #[tokio::test]
    async fn null_or_malformed_bodies_are_json_400s() {
        let app = test_router();
        let cases = [
            ("/residents", json!({ "name": null })),
            ("/staff", json!({ "name": 7 })),
            ("/donations", json!({ "amount": 5 })),
            ("/health", json!(["not", "an", "object"])),
        ];
        for (uri, body) in cases {
            let (status, json) = send(&app, "POST", uri, Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(json["error"]["code"], "BAD_REQUEST", "{uri}");
        }

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/health")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_alert_write_is_a_500_but_record_is_kept() {
        let conn = crate::db::sqlite::open_memory_database().unwrap();
        conn.execute_batch("DROP TABLE alerts;").unwrap();
        let store = Arc::new(SqliteStore::from_connection(conn));
        let app = api_router(ApiContext::new(store, AlertPolicy::EveryNonNormal));

        let (status, json) = send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["message"], "An internal error occurred");

        let (_, records) = send(&app, "GET", "/health", None).await;
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["status"], "Critical");
    }

    #[tokio::test]
    async fn csv_import_recomputes_and_alerts() {
        let app = test_router();
        let csv = "residentName,heartRate,bloodPressure,temperature,oxygenLevel,status\n\
                   Mary Johnson,72,120/80,98.6,98,Critical\n\
                   Robert Chen,150,170/105,103.5,85,Normal\n\
                   ,80,120/80,98.6,98,Normal\n";
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/health/import")
                    .header("Content-Type", "text/csv")
                    .body(Body::from(csv))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let report: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report["imported"], 2);
        assert_eq!(report["alerts"], 1);
        assert_eq!(report["skipped"][0]["row"], 3);

        let (_, records) = send(&app, "GET", "/health", None).await;
        let statuses: Vec<_> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["status"].as_str().unwrap().to_string())
            .collect();
        assert!(statuses.contains(&"Normal".to_string()));
        assert!(statuses.contains(&"Critical".to_string()));
    }

    #[tokio::test]
    async fn missing_ids_return_404() {
        let app = test_router();
        for uri in ["/health/42", "/alerts/42", "/residents/42", "/staff/42", "/donations/42"] {
            let (status, json) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json["error"]["code"], "NOT_FOUND");
        }

        let (status, _) = send(&app, "PUT", "/health/42", Some(critical_vitals("Ghost"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert!(alerts.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_health_record_keeps_its_alerts() {
        let app = test_router();
        let (_, record) = send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;
        let uri = format!("/health/{}", record["id"]);

        let (status, deleted) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["id"], record["id"]);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert_eq!(alerts.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn alerts_are_read_only() {
        let app = test_router();
        let (status, _) = send(
            &app,
            "POST",
            "/alerts",
            Some(json!({ "title": "x", "description": "y", "level": "Critical" })),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn resident_crud() {
        let app = test_router();
        let (status, created) = send(
            &app,
            "POST",
            "/residents",
            Some(json!({ "name": "Mary Johnson", "age": "84", "room": "12B" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["age"], 84);
        let uri = format!("/residents/{}", created["id"]);

        let (_, updated) = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "name": "Mary Johnson", "room": "14A", "healthInfo": "Diabetic" })),
        )
        .await;
        assert_eq!(updated["room"], "14A");
        assert_eq!(updated["healthInfo"], "Diabetic");

        let (_, list) = send(&app, "GET", "/residents", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn staff_creation_issues_credentials() {
        let app = test_router();
        let (status, staff) = send(
            &app,
            "POST",
            "/staff",
            Some(json!({ "name": "Ana Ruiz", "role": "Nurse", "shift": "Night" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let password = staff["password"].as_str().unwrap();
        assert_eq!(password.len(), 8);
        assert_eq!(
            staff["email"].as_str().unwrap(),
            format!("ana.ruiz-{password}@silvercare.com")
        );

        let uri = format!("/staff/{}", staff["id"]);
        let (_, updated) = send(
            &app,
            "PUT",
            &uri,
            Some(json!({ "name": "Ana Ruiz-Lopez", "role": "Head Nurse" })),
        )
        .await;
        assert_eq!(updated["role"], "Head Nurse");
        assert_eq!(updated["email"], staff["email"]);
        assert_eq!(updated["password"], staff["password"]);
    }

    #[tokio::test]
    async fn donation_amount_is_validated() {
        let app = test_router();
        let (status, _) = send(
            &app,
            "POST",
            "/donations",
            Some(json!({ "donorName": "Rotary Club", "amount": -10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, donation) = send(
            &app,
            "POST",
            "/donations",
            Some(json!({ "donorName": "Rotary Club", "amount": "250.5", "purpose": "Garden" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(donation["amount"], 250.5);
    }

    #[tokio::test]
    async fn dashboard_counts_everything() {
        let app = test_router();
        send(&app, "POST", "/residents", Some(json!({ "name": "Mary" }))).await;
        send(&app, "POST", "/staff", Some(json!({ "name": "Ana" }))).await;
        send(&app, "POST", "/donations", Some(json!({ "donorName": "A", "amount": 100 }))).await;
        send(&app, "POST", "/donations", Some(json!({ "donorName": "B", "amount": 50.5 }))).await;
        send(&app, "POST", "/health", Some(normal_vitals("Mary"))).await;
        send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;

        let (status, summary) = send(&app, "GET", "/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["residents"], 1);
        assert_eq!(summary["staff"], 1);
        assert_eq!(summary["donations"], 2);
        assert_eq!(summary["donationTotal"], 150.5);
        assert_eq!(summary["health"]["normal"], 1);
        assert_eq!(summary["health"]["critical"], 1);
        assert_eq!(summary["alerts"]["critical"], 1);
        assert_eq!(summary["alerts"]["warning"], 0);
    }

    #[tokio::test]
    async fn escalation_policy_suppresses_repeat_alerts() {
        let app = test_router_with(AlertPolicy::OnEscalation);
        let (_, record) = send(&app, "POST", "/health", Some(critical_vitals("Robert"))).await;
        let uri = format!("/health/{}", record["id"]);
        send(&app, "PUT", &uri, Some(critical_vitals("Robert"))).await;

        let (_, alerts) = send(&app, "GET", "/alerts", None).await;
        assert_eq!(alerts.as_array().unwrap().len(), 1);
    }
}
