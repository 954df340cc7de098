#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Stand-in for the classification service. Reviews mentioning "fail" get a
/// 500, "drop" makes the batch endpoint lose a result, and anything that is
/// neither clearly positive nor negative comes back without probabilities.
pub fn classifier_router() -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/bulk-predict", post(bulk_predict))
}

pub async fn serve_classifier() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind classifier");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, classifier_router()).await.unwrap();
    });
    format!("http://{addr}")
}

/// Runs the stand-in on its own runtime so it outlives any single test.
pub fn serve_classifier_detached() -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("classifier runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind classifier");
            tx.send(format!("http://{}", listener.local_addr().unwrap()))
                .unwrap();
            axum::serve(listener, classifier_router()).await.unwrap();
        });
    });
    rx.recv().expect("classifier address")
}

pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn classify(review: &str) -> Value {
    let lower = review.to_lowercase();
    if lower.contains("amazing") || lower.contains("great") {
        json!({
            "review": review,
            "label": "Positive",
            "positive": 0.9,
            "negative": 0.05,
            "neutral": 0.05,
            "timestamp": "2026-01-05 10:00:00"
        })
    } else if lower.contains("terrible") || lower.contains("slow") {
        json!({
            "review": review,
            "label": "negative",
            "positive": 0.1,
            "negative": 0.8,
            "neutral": 0.1,
            "timestamp": "2026-01-05 10:00:01"
        })
    } else {
        json!({ "review": review, "label": "Neutral" })
    }
}

async fn predict(Json(body): Json<Value>) -> Response {
    let review = body["review"].as_str().unwrap_or_default();
    if review.contains("fail") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "model unavailable").into_response();
    }
    Json(classify(review)).into_response()
}

async fn bulk_predict(Json(body): Json<Value>) -> Response {
    let reviews: Vec<&str> = body["reviews"]
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if reviews.iter().any(|review| review.contains("fail")) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "model unavailable").into_response();
    }

    let mut results: Vec<Value> = reviews.iter().map(|review| classify(review)).collect();
    if reviews.iter().any(|review| review.contains("drop")) {
        results.pop();
    }

    Json(json!({ "total_reviews": results.len(), "results": results })).into_response()
}
