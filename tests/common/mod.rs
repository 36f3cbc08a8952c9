//! A stand-in for api.aladhan.com served by axum on a random local port.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    routing::get,
    Router,
};
use jadwal_sholat::Config;

pub const OK_BODY: &str = r#"{
  "code": 200,
  "status": "OK",
  "data": {
    "timings": {
      "Fajr": "04:05", "Sunrise": "05:20", "Dhuhr": "11:45", "Asr": "15:10",
      "Sunset": "18:02", "Maghrib": "18:05", "Isha": "19:18",
      "Imsak": "03:55", "Midnight": "23:45"
    },
    "date": {
      "readable": "09 Dec 2025",
      "timestamp": "1765238400",
      "hijri": {
        "date": "18-06-1447",
        "day": "18",
        "month": { "number": 6, "en": "Jumādá al-ākhirah", "ar": "جُمادى الآخرة" },
        "year": "1447"
      }
    }
  }
}"#;

pub const NOT_FOUND_BODY: &str =
    r#"{"code":400,"status":"BAD_REQUEST","data":"Unable to find city."}"#;

#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, &'static str),
    Slow(Duration),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockApi {
    pub url: String,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockApi {
    pub async fn start(reply: Reply) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = MockState {
            reply,
            hits: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
        };
        let hits = state.hits.clone();
        let queries = state.queries.clone();

        let app = Router::new()
            .route("/v1/timingsByCity", get(timings_by_city))
            .with_state(state);
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self {
            url: format!("http://{addr}/v1/timingsByCity"),
            hits,
            queries,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }

    pub fn config(&self, timeout_secs: u64) -> Config {
        Config {
            api_url: self.url.clone(),
            timeout_secs,
            ..Config::default()
        }
    }
}

async fn timings_by_city(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push(params);

    let json = [(header::CONTENT_TYPE, "application/json")];
    match state.reply {
        Reply::Json(status, body) => (status, json, body),
        Reply::Slow(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, json, OK_BODY)
        }
    }
}

/// A URL on which nothing is listening.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/timingsByCity")
}
