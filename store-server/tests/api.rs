//! End-to-end API tests against the assembled router
//!
//! Requests go through `tower::ServiceExt::oneshot`, no socket involved.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::error::{AppError, AppResult, ErrorCode};
use store_server::advisor::{AdvisorAnswer, AdvisorClient, Citation};
use store_server::{Config, Server, ServerState};

/// Upstream stub returning a canned answer
struct StubAdvisor {
    answer: AdvisorAnswer,
}

#[async_trait::async_trait]
impl AdvisorClient for StubAdvisor {
    async fn ask(&self, _prompt: &str) -> AppResult<AdvisorAnswer> {
        Ok(self.answer.clone())
    }
}

/// Upstream stub whose first call hangs; later calls answer immediately
struct RecoveringAdvisor {
    hung_once: std::sync::atomic::AtomicBool,
}

impl RecoveringAdvisor {
    fn new() -> Self {
        Self {
            hung_once: std::sync::atomic::AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl AdvisorClient for RecoveringAdvisor {
    async fn ask(&self, _prompt: &str) -> AppResult<AdvisorAnswer> {
        if !self
            .hung_once
            .swap(true, std::sync::atomic::Ordering::SeqCst)
        {
            tokio::time::sleep(std::time::Duration::from_secs(600)).await;
        }
        Ok(AdvisorAnswer {
            text: "Back online.".to_string(),
            citations: Vec::new(),
        })
    }
}

/// Upstream stub that always fails
struct BrokenAdvisor;

#[async_trait::async_trait]
impl AdvisorClient for BrokenAdvisor {
    async fn ask(&self, _prompt: &str) -> AppResult<AdvisorAnswer> {
        Err(AppError::new(ErrorCode::NetworkError))
    }
}

fn test_app(advisor: Arc<dyn AdvisorClient>) -> Router {
    let config = Config::from_env();
    let state = ServerState::with_advisor(&config, advisor);
    Server::router(state)
}

fn default_app() -> Router {
    test_app(Arc::new(BrokenAdvisor))
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(value.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = default_app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["products"], 9);
}

#[tokio::test]
async fn test_catalog_filter() {
    let app = default_app();

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 9);

    let (status, body) = send(&app, "GET", "/api/products?category=Networking", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["4", "10"]);

    let (status, body) = send(
        &app,
        "GET",
        "/api/products?category=Networking&search=mikrotik",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "10");

    let (status, body) = send(&app, "GET", "/api/products?category=Fridges", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6101);
}

#[tokio::test]
async fn test_single_product_lookup() {
    let app = default_app();

    let (status, body) = send(&app, "GET", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["retail_price"], 676_000);
    assert_eq!(body["supplier"], "Barclays.lk");

    let (status, body) = send(&app, "GET", "/api/products/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_static_content() {
    let app = default_app();

    let (status, body) = send(&app, "GET", "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (status, body) = send(&app, "GET", "/api/company", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["executives"].as_array().unwrap().len() >= 2);
    assert!(body["history"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn test_full_checkout_flow() {
    let app = default_app();
    let session = create_session(&app).await;

    // Two Zephyrus (retail 676000) and one MX Master (retail 45500)
    let add = |id: &str| json!({ "product_id": id });
    let cart_path = format!("/api/cart/{}", session);
    let items_path = format!("{}/items", cart_path);

    let (status, _) = send(&app, "POST", &items_path, Some(add("1"))).await;
    assert_eq!(status, StatusCode::OK);
    send(&app, "POST", &items_path, Some(add("1"))).await;
    let (_, body) = send(&app, "POST", &items_path, Some(add("3"))).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 2 * 676_000 + 45_500);

    // Quantity floor: driving below one clamps at one
    let patch_path = format!("{}/items/1", cart_path);
    let (_, body) = send(&app, "PATCH", &patch_path, Some(json!({ "delta": -5 }))).await;
    assert_eq!(body["total"], 676_000 + 45_500);

    // Remove the mouse
    let (_, body) = send(&app, "DELETE", &format!("{}/items/3", cart_path), None).await;
    assert_eq!(body["total"], 676_000);

    // Submit the order
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/orders/{}", session),
        Some(json!({
            "name": "Nimal Perera",
            "address": "12 Galle Road, Colombo",
            "phone": "0771234567",
            "payment_method": "WhatsApp Payment Slip"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 676_000);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("*NEW ORDER - Smart Solutions Lanka*\n"));
    assert!(message.contains("ASUS ROG Zephyrus G14 (2024) x1 (LKR 676,000)"));
    assert!(message.contains("Payment: WhatsApp Payment Slip\n"));
    assert!(message.ends_with("_Please attach your payment slip to this message._"));
    let url = body["whatsapp_url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/94779980801?text="));
    assert_eq!(body["order_id"].as_str().unwrap().len(), 9);

    // Ledger cleared on success
    let (_, body) = send(&app, "GET", &cart_path, None).await;
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_validation_leaves_cart_untouched() {
    let app = default_app();
    let session = create_session(&app).await;
    let orders_path = format!("/api/orders/{}", session);

    // Empty cart
    let complete = json!({
        "name": "A", "address": "B", "phone": "C",
        "payment_method": "Cash on Delivery"
    });
    let (status, body) = send(&app, "POST", &orders_path, Some(complete)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);

    // Missing fields with a non-empty cart
    send(
        &app,
        "POST",
        &format!("/api/cart/{}/items", session),
        Some(json!({ "product_id": "12" })),
    )
    .await;
    let incomplete = json!({
        "name": "A", "address": "", "phone": "  ",
        "payment_method": "Bank Transfer"
    });
    let (status, body) = send(&app, "POST", &orders_path, Some(incomplete)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["details"]["missing"], json!(["address", "phone"]));

    let (_, body) = send(&app, "GET", &format!("/api/cart/{}", session), None).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_session_and_product() {
    let app = default_app();

    let ghost = uuid::Uuid::new_v4();
    let (status, body) = send(&app, "GET", &format!("/api/cart/{}", ghost), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);

    let session = create_session(&app).await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/cart/{}/items", session),
        Some(json!({ "product_id": "404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_advisor_answer_published() {
    let answer = AdvisorAnswer {
        text: "The UDR handles humidity well.".to_string(),
        citations: vec![Citation {
            title: "Ubiquiti".to_string(),
            uri: "https://ui.com".to_string(),
        }],
    };
    let app = test_app(Arc::new(StubAdvisor {
        answer: answer.clone(),
    }));
    let session = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/advisor/{}", session),
        Some(json!({ "prompt": "router for a humid office?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], answer.text);
    assert_eq!(body["citations"][0]["uri"], "https://ui.com");
}

#[tokio::test]
async fn test_advisor_failure_degrades_to_fallback() {
    let app = default_app();
    let session = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/advisor/{}", session),
        Some(json!({ "prompt": "best laptop?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], store_server::advisor::FALLBACK_TEXT);
    assert_eq!(body["citations"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_abandoned_advisor_request_releases_session() {
    let app = test_app(Arc::new(RecoveringAdvisor::new()));
    let session = create_session(&app).await;
    let path = format!("/api/advisor/{}", session);
    let ask_body = json!({ "prompt": "router for a humid office?" });

    // Client disconnects while the upstream call is pending: the request
    // future is dropped before the handler can finish
    let hung = Request::builder()
        .method("POST")
        .uri(&path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(ask_body.to_string()))
        .unwrap();
    let abandoned = tokio::time::timeout(
        std::time::Duration::from_millis(100),
        app.clone().oneshot(hung),
    )
    .await;
    assert!(abandoned.is_err());

    // The session must not stay wedged behind the dead request
    let (status, body) = send(&app, "POST", &path, Some(ask_body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Back online.");
}

#[tokio::test]
async fn test_advisor_rejects_blank_prompt() {
    let app = default_app();
    let session = create_session(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/advisor/{}", session),
        Some(json!({ "prompt": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
