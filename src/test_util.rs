use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Fire one request at the router and decode the body as JSON
/// (`Value::Null` for empty bodies, a JSON string for plain-text ones).
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub fn onboarding_body() -> Value {
    serde_json::json!({
        "name": "Alex",
        "email": "alex@example.com",
        "goal": "weightLoss",
        "dietType": "omnivore",
        "allergies": [],
        "activityLevel": "active",
        "preferences": { "cuisines": [], "budget": "moderate" },
        "metrics": { "age": 30, "weight": 70, "height": 170, "gender": "female" }
    })
}
