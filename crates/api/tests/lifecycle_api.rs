//! HTTP-level integration tests for the project and application
//! lifecycle: seats, apply/accept/reject, and notifications.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_empty, post_json, put_json};

const STUDENT_A: &str = "alumno1@key.edu.sv";
const STUDENT_B: &str = "alumno2@key.edu.sv";

/// Listing projects annotates each with derived seat counts.
#[tokio::test]
async fn test_project_listing_carries_seat_counts() {
    let app = build_test_app();
    let response = get(app, "/api/v1/projects?status=Active").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json["data"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["accepted_count"], 0);
    assert_eq!(projects[0]["available_seats"], projects[0]["total_seats"]);
}

/// The history endpoint lists only non-active projects.
#[tokio::test]
async fn test_project_history() {
    let app = build_test_app();
    let response = get(app, "/api/v1/projects/history").await;

    let json = body_json(response).await;
    let projects = json["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Sistema Web Escolar");
}

/// Unknown project ids map to 404 with the NOT_FOUND code.
#[tokio::test]
async fn test_get_unknown_project_is_404() {
    let app = build_test_app();
    let response = get(app, "/api/v1/projects/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

/// Applying twice for the same project yields 409 DUPLICATE_APPLICATION.
#[tokio::test]
async fn test_duplicate_application_conflict() {
    let app = build_test_app();

    let body = serde_json::json!({ "project_id": 1, "student_email": STUDENT_A });
    let first = post_json(app.clone(), "/api/v1/applications", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/applications", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "DUPLICATE_APPLICATION");
}

/// Applying to a finished project yields 409 PROJECT_UNAVAILABLE.
#[tokio::test]
async fn test_apply_to_finished_project_conflict() {
    let app = build_test_app();
    let body = serde_json::json!({ "project_id": 3, "student_email": STUDENT_A });
    let response = post_json(app, "/api/v1/applications", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PROJECT_UNAVAILABLE");
}

/// One-seat scenario: the first accept succeeds, the second fails with
/// NO_SEATS_AVAILABLE, and the losing application stays Pending.
#[tokio::test]
async fn test_last_seat_conflict_over_http() {
    let app = build_test_app();

    // Shrink project 1 to one seat.
    let response = put_json(
        app.clone(),
        "/api/v1/projects/1",
        serde_json::json!({ "total_seats": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let a = body_json(
        post_json(
            app.clone(),
            "/api/v1/applications",
            serde_json::json!({ "project_id": 1, "student_email": STUDENT_A }),
        )
        .await,
    )
    .await;
    let b = body_json(
        post_json(
            app.clone(),
            "/api/v1/applications",
            serde_json::json!({ "project_id": 1, "student_email": STUDENT_B }),
        )
        .await,
    )
    .await;

    let a_id = a["data"]["id"].as_i64().unwrap();
    let b_id = b["data"]["id"].as_i64().unwrap();

    let accept_a = post_empty(app.clone(), &format!("/api/v1/applications/{a_id}/accept")).await;
    assert_eq!(accept_a.status(), StatusCode::NO_CONTENT);

    let accept_b = post_empty(app.clone(), &format!("/api/v1/applications/{b_id}/accept")).await;
    assert_eq!(accept_b.status(), StatusCode::CONFLICT);
    let json = body_json(accept_b).await;
    assert_eq!(json["code"], "NO_SEATS_AVAILABLE");

    // B stays pending; the project shows zero seats left.
    let applications = body_json(get(app.clone(), "/api/v1/projects/1/applications").await).await;
    let b_row = applications["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"].as_i64() == Some(b_id))
        .unwrap();
    assert_eq!(b_row["status"], "Pending");

    let project = body_json(get(app, "/api/v1/projects/1").await).await;
    assert_eq!(project["data"]["available_seats"], 0);
}

/// Deciding an application twice yields 409 ALREADY_DECIDED.
#[tokio::test]
async fn test_double_decision_conflict() {
    let app = build_test_app();

    let application = body_json(
        post_json(
            app.clone(),
            "/api/v1/applications",
            serde_json::json!({ "project_id": 1, "student_email": STUDENT_A }),
        )
        .await,
    )
    .await;
    let id = application["data"]["id"].as_i64().unwrap();

    let accept = post_empty(app.clone(), &format!("/api/v1/applications/{id}/accept")).await;
    assert_eq!(accept.status(), StatusCode::NO_CONTENT);

    let reject = post_json(
        app,
        &format!("/api/v1/applications/{id}/reject"),
        serde_json::json!({ "reason": "changed my mind" }),
    )
    .await;
    assert_eq!(reject.status(), StatusCode::CONFLICT);
    let json = body_json(reject).await;
    assert_eq!(json["code"], "ALREADY_DECIDED");
}

/// Rejecting without a reason is a validation error.
#[tokio::test]
async fn test_reject_requires_reason() {
    let app = build_test_app();

    let application = body_json(
        post_json(
            app.clone(),
            "/api/v1/applications",
            serde_json::json!({ "project_id": 1, "student_email": STUDENT_A }),
        )
        .await,
    )
    .await;
    let id = application["data"]["id"].as_i64().unwrap();

    let response = post_json(
        app,
        &format!("/api/v1/applications/{id}/reject"),
        serde_json::json!({ "reason": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// An accepted student sees the project in their accepted list and
/// receives a success notification, which can be marked read.
#[tokio::test]
async fn test_acceptance_notifies_student() {
    let app = build_test_app();

    let application = body_json(
        post_json(
            app.clone(),
            "/api/v1/applications",
            serde_json::json!({ "project_id": 2, "student_email": STUDENT_A }),
        )
        .await,
    )
    .await;
    let id = application["data"]["id"].as_i64().unwrap();
    post_empty(app.clone(), &format!("/api/v1/applications/{id}/accept")).await;

    let accepted = body_json(
        get(
            app.clone(),
            &format!("/api/v1/students/{STUDENT_A}/accepted-projects"),
        )
        .await,
    )
    .await;
    assert_eq!(accepted["data"].as_array().unwrap().len(), 1);
    assert_eq!(accepted["data"][0]["name"], "Investigación en IA");

    let unread = body_json(
        get(
            app.clone(),
            &format!("/api/v1/users/{STUDENT_A}/notifications?unread_only=true"),
        )
        .await,
    )
    .await;
    let notices = unread["data"].as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["kind"], "success");
    let notice_id = notices[0]["id"].as_i64().unwrap();

    let mark = post_empty(app.clone(), &format!("/api/v1/notifications/{notice_id}/read")).await;
    assert_eq!(mark.status(), StatusCode::NO_CONTENT);

    // Marking again still succeeds (idempotent).
    let again = post_empty(app.clone(), &format!("/api/v1/notifications/{notice_id}/read")).await;
    assert_eq!(again.status(), StatusCode::NO_CONTENT);

    let unread_after = body_json(
        get(
            app,
            &format!("/api/v1/users/{STUDENT_A}/notifications?unread_only=true"),
        )
        .await,
    )
    .await;
    assert!(unread_after["data"].as_array().unwrap().is_empty());
}

/// Marking an unknown notification read is 404.
#[tokio::test]
async fn test_mark_read_unknown_notification() {
    let app = build_test_app();
    let response = post_empty(app, "/api/v1/notifications/42/read").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Admins can create projects; invalid capacity is rejected.
#[tokio::test]
async fn test_create_project_validation() {
    let app = build_test_app();

    let created = post_json(
        app.clone(),
        "/api/v1/projects",
        serde_json::json!({
            "name": "Tutoring",
            "description": "Peer tutoring",
            "total_hours": 60,
            "total_seats": 4,
            "manager_email": "encargado1@key.edu.sv"
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let json = body_json(created).await;
    assert_eq!(json["data"]["status"], "Active");

    let invalid = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "name": "Broken",
            "description": "",
            "total_hours": 60,
            "total_seats": 0,
            "manager_email": "encargado1@key.edu.sv"
        }),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
}
