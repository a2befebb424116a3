//! Route-level tests: roles, status codes, and JSON shapes.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::Value;

use outlook_core::config::{AccessToken, ScoringConfig, ServerConfig};
use outlook_core::traits::InMemoryStudentStore;
use outlook_core::types::access::Role;
use outlook_predict::{ClassifierAdapter, RecordWorkflow, ScoringService};
use outlook_server::{configure, AppState, AuthMiddleware, LoggingMiddleware, SharedStore};

const STAFF: &str = "Bearer staff-token";
const STUDENT: &str = "Bearer student-token";

fn server_config() -> Arc<ServerConfig> {
    Arc::new(ServerConfig {
        access_tokens: vec![
            AccessToken {
                token: "staff-token".to_string(),
                user: "registrar".to_string(),
                role: Role::Staff,
            },
            AccessToken {
                token: "student-token".to_string(),
                user: "s-001".to_string(),
                role: Role::Student,
            },
        ],
        ..ServerConfig::default()
    })
}

fn state() -> web::Data<AppState> {
    let store: SharedStore = Arc::new(InMemoryStudentStore::new());
    let scoring = ScoringService::new(Arc::new(ClassifierAdapter::rule_based()));
    web::Data::new(AppState::new(RecordWorkflow::new(
        store,
        scoring,
        &ScoringConfig::default(),
    )))
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(state())
                .wrap(AuthMiddleware::new(server_config()))
                .wrap(LoggingMiddleware)
                .configure(configure),
        )
        .await
    };
}

fn form(name: &str, values: [&str; 4]) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("attendance", values[0].to_string()),
        ("internal", values[1].to_string()),
        ("assignment", values[2].to_string()),
        ("final", values[3].to_string()),
    ]
}

#[actix_web::test]
async fn health_needs_no_token() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["classifier"], "rule_based");
    assert_eq!(body["fallback"], true);
}

#[actix_web::test]
async fn submit_returns_created_record() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(("Authorization", STUDENT))
        .set_form(form("Asha", ["90", "85", "88", "90"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["verdict"], "High Chance of Success");
    assert_eq!(body["color"], "green");
    assert_eq!(body["record"]["name"], "Asha");
    assert_eq!(body["chart_series"][3]["label"], "Final");
    assert_eq!(body["chart_series"][3]["value"], 90.0);
    assert_eq!(body["chart_axis"]["max"], 100.0);
    assert!(body["id"].as_i64().is_some());
}

#[actix_web::test]
async fn missing_or_unknown_token_is_401() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/students/history").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/students/history")
        .insert_header(("Authorization", "Bearer nope"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn student_role_is_limited() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/students/history")
        .insert_header(("Authorization", STUDENT))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri("/api/students/1")
        .insert_header(("Authorization", STUDENT))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn invalid_metric_is_400_with_code() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(("Authorization", STAFF))
        .set_form(form("Asha", ["90", "abc", "88", "90"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[actix_web::test]
async fn missing_record_is_404() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/students/99/report")
        .insert_header(("Authorization", STAFF))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

#[actix_web::test]
async fn staff_lifecycle() {
    let app = init_app!();

    let mut ids = Vec::new();
    for (name, values) in [("Asha", ["90", "85", "88", "90"]), ("Ben", ["30", "25", "28", "29"])] {
        let req = test::TestRequest::post()
            .uri("/api/students")
            .insert_header(("Authorization", STAFF))
            .set_form(form(name, values))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get()
        .uri("/api/students/history")
        .insert_header(("Authorization", STAFF))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["avg_score"], 59.5);
    assert_eq!(body["high_count"], 1);
    assert_eq!(body["chart_series"][1]["color"], "red");

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}/report", ids[1]))
        .insert_header(("Authorization", STAFF))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["fields"][0]["value"], "Ben");
    assert_eq!(body["fields"][4]["value"], "29.0");

    let req = test::TestRequest::put()
        .uri(&format!("/api/students/{}", ids[1]))
        .insert_header(("Authorization", STAFF))
        .set_form(form("Ben", ["80", "80", "80", "80"]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["prediction_result"], "High Chance of Success");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/students/{}", ids[0]))
        .insert_header(("Authorization", STAFF))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/students/{}", ids[0]))
        .insert_header(("Authorization", STAFF))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
