use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use serde_json::Value;
use tower::ServiceExt;

use stockfolio_server::{api::app_router, build_state, config::Config};

fn test_router() -> axum::Router {
    let config = Config::from_env();
    app_router(build_state(), &config)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let app = test_router();
    let response = app.oneshot(get("/api/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn add_stock_returns_message_and_full_portfolio() {
    let app = test_router();

    let body = serde_json::json!({ "name": "AAPL", "quantity": 2 });
    let response = app
        .oneshot(post_json("/api/add-stock", body))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Stock added successfully");
    assert_eq!(json["portfolio"][0]["name"], "AAPL");
    assert_eq!(json["portfolio"][0]["quantity"], 2);
}

#[tokio::test]
async fn add_stock_with_missing_quantity_still_succeeds() {
    let app = test_router();

    let response = app
        .oneshot(post_json("/api/add-stock", serde_json::json!({ "name": "AAPL" })))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(json["portfolio"][0]["quantity"], 0);
}

#[tokio::test]
async fn empty_portfolio_values_at_zero_with_alert() {
    let app = test_router();

    let response = app.oneshot(get("/api/portfolio")).await.unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(json["portfolio"], serde_json::json!([]));
    assert_eq!(json["totalValue"], serde_json::json!(0.0));
    assert_eq!(json["lowValueAlert"], serde_json::json!(true));
}

#[tokio::test]
async fn portfolio_prices_known_and_unknown_symbols() {
    let app = test_router();

    for (name, quantity) in [("AAPL", 2), ("GOOGL", 1), ("ZZZZ", 5)] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/add-stock",
                serde_json::json!({ "name": name, "quantity": quantity }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    let response = app.oneshot(get("/api/portfolio")).await.unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(json["portfolio"][0]["name"], "AAPL");
    assert_eq!(json["portfolio"][0]["price"], serde_json::json!(150.0));
    assert_eq!(json["portfolio"][0]["total"], serde_json::json!(300.0));
    assert_eq!(json["portfolio"][1]["total"], serde_json::json!(200.0));
    // Symbols absent from the price table price at zero, not an error
    assert_eq!(json["portfolio"][2]["name"], "ZZZZ");
    assert_eq!(json["portfolio"][2]["price"], serde_json::json!(0.0));
    assert_eq!(json["portfolio"][2]["total"], serde_json::json!(0.0));
    assert_eq!(json["totalValue"], serde_json::json!(500.0));
    assert_eq!(json["lowValueAlert"], serde_json::json!(false));
}

#[tokio::test]
async fn unknown_symbols_alone_keep_the_low_value_alert() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/add-stock",
            serde_json::json!({ "name": "ZZZZ", "quantity": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let json = body_json(app.oneshot(get("/api/portfolio")).await.unwrap()).await;
    assert_eq!(json["totalValue"], serde_json::json!(0.0));
    assert_eq!(json["lowValueAlert"], serde_json::json!(true));
}

#[tokio::test]
async fn every_add_produces_exactly_one_transaction_in_order() {
    let app = test_router();

    for (name, quantity) in [("AAPL", 2), ("GOOGL", 1), ("AAPL", 4)] {
        app.clone()
            .oneshot(post_json(
                "/api/add-stock",
                serde_json::json!({ "name": name, "quantity": quantity }),
            ))
            .await
            .unwrap();
    }

    let portfolio = body_json(app.clone().oneshot(get("/api/portfolio")).await.unwrap()).await;
    let history = body_json(
        app.oneshot(get("/api/transaction-history")).await.unwrap(),
    )
    .await;

    let holdings = portfolio["portfolio"].as_array().unwrap();
    let transactions = history["transactionHistory"].as_array().unwrap();
    assert_eq!(holdings.len(), 3);
    assert_eq!(transactions.len(), 3);

    for (holding, transaction) in holdings.iter().zip(transactions.iter()) {
        assert_eq!(transaction["type"], "ADD");
        assert_eq!(transaction["name"], holding["name"]);
        assert_eq!(transaction["quantity"], holding["quantity"]);
        // Timestamps are RFC 3339
        let date = transaction["date"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
    }
}

#[tokio::test]
async fn transaction_history_starts_empty() {
    let app = test_router();

    let json = body_json(
        app.oneshot(get("/api/transaction-history")).await.unwrap(),
    )
    .await;
    assert_eq!(json["transactionHistory"], serde_json::json!([]));
}
