//! Runs against a real database: `DATABASE_URL=... cargo test -- --ignored`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use school::router::init_router;
use school::state::AppState;
use school_config::CorsConfig;
use school_db::{CourseRepository, PgStore, StudentRepository};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

fn setup_test_app(pool: PgPool) -> axum::Router {
    let store = PgStore::new(pool);
    init_router(AppState::new(
        Arc::new(store.clone()),
        Arc::new(store),
        CorsConfig::default(),
    ))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_student_lifecycle(pool: PgPool) {
    let request = Request::builder()
        .method("POST")
        .uri("/students/student")
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "Ada Lovelace"}).to_string()))
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();

    let request = Request::builder().uri(&location).body(Body::empty()).unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Ada Lovelace");

    let request = Request::builder()
        .uri("/students/student/namelike/LOVE")
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let request = Request::builder()
        .method("DELETE")
        .uri(&location)
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder().uri(&location).body(Body::empty()).unwrap();
    let response = setup_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Only ASCII folding is guaranteed here; `lower()` on non-ASCII depends on the
/// database locale.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_name_search_folds_ascii(pool: PgPool) {
    let store = PgStore::new(pool);
    StudentRepository::save(&store, None, "Alan Turing").await.unwrap();
    StudentRepository::save(&store, None, "Grace Hopper").await.unwrap();
    StudentRepository::save(&store, None, "50%_off").await.unwrap();

    let found = store.find_by_name_containing("TURING").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Alan Turing");

    let literal = store.find_by_name_containing("%_").await.unwrap();
    assert_eq!(literal.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_course_counts_and_cascade(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let course = CourseRepository::save(&store, None, "Data Science")
        .await
        .unwrap()
        .unwrap();
    let empty = CourseRepository::save(&store, None, "Node.js")
        .await
        .unwrap()
        .unwrap();
    let student = StudentRepository::save(&store, None, "Grace Hopper")
        .await
        .unwrap()
        .unwrap();
    store.enroll(student.id, course.id).await.unwrap();
    store.enroll(student.id, course.id).await.unwrap();

    let counts = store.count_students_in_courses().await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].student_count, 1);
    assert_eq!(counts[1].course_id, empty.id);
    assert_eq!(counts[1].student_count, 0);

    assert!(CourseRepository::delete_by_id(&store, course.id).await.unwrap());
    assert!(StudentRepository::find_by_id(&store, student.id).await.unwrap().is_some());

    let err = store.enroll(student.id, course.id).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}
