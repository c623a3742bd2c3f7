#![allow(dead_code)]

//! In-process mock of the json-server backend used by the integration
//! tests: generic collections with exact-match, `_gte`/`_lte` and
//! `_page`/`_limit` query handling, and merge-on-PATCH documents.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Default)]
pub struct MockBackend {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,storefront_client=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

impl MockBackend {
    /// Bind an ephemeral port, serve the mock and return its base URL.
    pub async fn spawn() -> (String, MockBackend) {
        init_tracing();
        let state = MockBackend::default();
        let router = Router::new()
            .route("/{collection}", get(list).post(create))
            .route(
                "/{collection}/{id}",
                get(get_one).put(replace).patch(merge).delete(remove),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        (format!("http://{addr}"), state)
    }

    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), records);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of GET-list requests seen for a collection.
    pub fn list_hits(&self, collection: &str) -> usize {
        *self.hits.lock().unwrap().get(collection).unwrap_or(&0)
    }
}

fn value_as_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn matches_params(record: &Value, params: &HashMap<String, String>) -> bool {
    for (key, expected) in params {
        if key.starts_with('_') {
            continue;
        }
        if let Some(field) = key.strip_suffix("_gte") {
            let actual = record.get(field).and_then(Value::as_f64);
            let bound = expected.parse::<f64>().ok();
            match (actual, bound) {
                (Some(actual), Some(bound)) if actual >= bound => continue,
                _ => return false,
            }
        }
        if let Some(field) = key.strip_suffix("_lte") {
            let actual = record.get(field).and_then(Value::as_f64);
            let bound = expected.parse::<f64>().ok();
            match (actual, bound) {
                (Some(actual), Some(bound)) if actual <= bound => continue,
                _ => return false,
            }
        }
        match record.get(key) {
            Some(value) if value_as_param(value) == *expected => {}
            _ => return false,
        }
    }
    true
}

async fn list(
    State(state): State<MockBackend>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state
        .hits
        .lock()
        .unwrap()
        .entry(collection.clone())
        .or_insert(0) += 1;

    let records = state.records(&collection);
    let mut filtered: Vec<Value> = records
        .into_iter()
        .filter(|record| matches_params(record, &params))
        .collect();

    if params.contains_key("_page") || params.contains_key("_limit") {
        let page: usize = params
            .get("_page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
            .max(1);
        let limit: usize = params
            .get("_limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(10);
        let start = (page - 1) * limit;
        filtered = filtered.into_iter().skip(start).take(limit).collect();
    }

    Json(Value::Array(filtered))
}

async fn get_one(
    State(state): State<MockBackend>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    state
        .records(&collection)
        .into_iter()
        .find(|record| record.get("id").map(value_as_param) == Some(id.clone()))
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(
    State(state): State<MockBackend>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .collections
        .lock()
        .unwrap()
        .entry(collection)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn replace(
    State(state): State<MockBackend>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut collections = state.collections.lock().unwrap();
    let records = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let record = records
        .iter_mut()
        .find(|record| record.get("id").map(value_as_param) == Some(id.clone()))
        .ok_or(StatusCode::NOT_FOUND)?;
    *record = body.clone();
    Ok(Json(body))
}

async fn merge(
    State(state): State<MockBackend>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut collections = state.collections.lock().unwrap();
    let records = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let record = records
        .iter_mut()
        .find(|record| record.get("id").map(value_as_param) == Some(id.clone()))
        .ok_or(StatusCode::NOT_FOUND)?;

    if let (Value::Object(target), Value::Object(patch)) = (&mut *record, &body) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    Ok(Json(record.clone()))
}

async fn remove(
    State(state): State<MockBackend>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let mut collections = state.collections.lock().unwrap();
    let records = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let before = records.len();
    records.retain(|record| record.get("id").map(value_as_param) != Some(id.clone()));
    if records.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(Value::Object(Default::default())))
}
