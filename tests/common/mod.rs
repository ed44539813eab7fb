#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use school::router::init_router;
use school::state::{AppState, init_app_state};
use school_config::{CorsConfig, StorageConfig};
use school_db::{CourseRepository, MemoryStore, StudentRepository};
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;

pub const COURSES: [&str; 6] = [
    "Data Science",
    "JavaScript",
    "Node.js",
    "Java Back End",
    "Mobile IOS",
    "Mobile Android",
];

pub const STUDENTS: [&str; 4] = ["Ada Lovelace", "Grace Hopper", "Alan Turing", "Barbara Liskov"];

/// (student id, course id) pairs over the ids handed out by [`seeded_store`].
pub const ENROLLMENTS: [(i64, i64); 6] = [(1, 1), (1, 4), (2, 1), (2, 2), (3, 1), (4, 4)];

pub fn setup_test_app(store: MemoryStore) -> Router {
    init_router(AppState::in_memory(store, CorsConfig::default()))
}

/// App built the way the binary builds it for `STORAGE_BACKEND=memory`.
pub async fn setup_memory_app() -> Router {
    let state = init_app_state(&StorageConfig::memory(), CorsConfig::default())
        .await
        .unwrap();
    init_router(state)
}

/// Store holding [`COURSES`], [`STUDENTS`] and [`ENROLLMENTS`], ids starting at 1.
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    for name in COURSES {
        CourseRepository::save(&store, None, name).await.unwrap();
    }
    for name in STUDENTS {
        StudentRepository::save(&store, None, name).await.unwrap();
    }
    for (student_id, course_id) in ENROLLMENTS {
        store.enroll(student_id, course_id).await.unwrap();
    }
    store
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

/// Names in the order the endpoint returned them.
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

/// Formatted log output written while a [`capture`] guard is alive.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captures events on the current thread. `#[tokio::test]` runs the app on
/// that same thread, so handler logs land here too.
pub fn capture() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
