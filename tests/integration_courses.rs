mod common;

use axum::http::StatusCode;
use common::{COURSES, ENROLLMENTS, get, names, seeded_store, send, setup_test_app};
use school_db::MemoryStore;
use serde_json::{Value, json};

fn counts_by_name(body: &Value) -> Vec<(String, i64)> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["course_name"].as_str().unwrap().to_string(),
                row["student_count"].as_i64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_list_all_courses() {
    let app = setup_test_app(seeded_store().await);

    let response = get(app, "/courses/courses").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(names(&body), COURSES.to_vec());
    assert_eq!(body[0], json!({"id": 1, "name": "Data Science"}));
}

#[tokio::test]
async fn test_list_courses_empty() {
    let app = setup_test_app(MemoryStore::new());

    let response = get(app, "/courses/courses").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_count_students_in_courses() {
    let app = setup_test_app(seeded_store().await);

    let response = get(app, "/courses/studcount").await;

    assert_eq!(response.status, StatusCode::OK);
    let counts = counts_by_name(&response.json());
    assert_eq!(
        counts,
        vec![
            ("Data Science".to_string(), 3),
            ("JavaScript".to_string(), 1),
            ("Node.js".to_string(), 0),
            ("Java Back End".to_string(), 2),
            ("Mobile IOS".to_string(), 0),
            ("Mobile Android".to_string(), 0),
        ]
    );

    let total: i64 = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, ENROLLMENTS.len() as i64);
}

#[tokio::test]
async fn test_delete_course() {
    let store = seeded_store().await;

    let response = send(setup_test_app(store.clone()), "DELETE", "/courses/courses/3", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());

    let listing = get(setup_test_app(store), "/courses/courses").await;
    let remaining = names(&listing.json());
    assert_eq!(remaining.len(), COURSES.len() - 1);
    assert!(!remaining.contains(&"Node.js".to_string()));
}

#[tokio::test]
async fn test_delete_unknown_course_is_not_found() {
    let app = setup_test_app(seeded_store().await);

    let response = send(app, "DELETE", "/courses/courses/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["status"], 404);
    assert!(body["detail"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_delete_course_keeps_enrolled_students() {
    let store = seeded_store().await;

    let response = send(setup_test_app(store.clone()), "DELETE", "/courses/courses/1", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let students = get(setup_test_app(store.clone()), "/students/students").await;
    assert_eq!(students.json().as_array().unwrap().len(), 4);

    let counts = counts_by_name(&get(setup_test_app(store), "/courses/studcount").await.json());
    assert!(counts.iter().all(|(name, _)| name != "Data Science"));
    let total: i64 = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_delete_student_drops_their_enrollments() {
    let store = seeded_store().await;

    let response = send(setup_test_app(store.clone()), "DELETE", "/students/student/1", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let counts = counts_by_name(&get(setup_test_app(store.clone()), "/courses/studcount").await.json());
    assert_eq!(counts[0], ("Data Science".to_string(), 2));
    assert_eq!(counts[3], ("Java Back End".to_string(), 1));

    let courses = get(setup_test_app(store), "/courses/courses").await;
    assert_eq!(courses.json().as_array().unwrap().len(), COURSES.len());
}
