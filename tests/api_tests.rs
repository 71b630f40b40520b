//! HTTP API integration tests
//!
//! Every test builds its own app over a freshly seeded store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use ayursutra::api::services::{AppStartTime, api_routes, configure_app_data, health_routes};
use ayursutra::config::ClinicConfig;
use ayursutra::services::ClinicServices;
use ayursutra::storage::MemoryStore;

// =============================================================================
// Test Setup
// =============================================================================

fn fresh_services() -> Arc<ClinicServices> {
    Arc::new(ClinicServices::new(
        Arc::new(MemoryStore::with_demo_data()),
        &ClinicConfig::default(),
    ))
}

macro_rules! clinic_app {
    () => {
        clinic_app!(fresh_services())
    };
    ($services:expr) => {{
        let services: Arc<ClinicServices> = $services;
        test::init_service(
            App::new()
                .configure(|cfg| configure_app_data(cfg, &services))
                .app_data(web::Data::new(AppStartTime::now()))
                .service(health_routes("/health"))
                .service(api_routes("/api")),
        )
        .await
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_list_therapies() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/therapies");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(body[0]["name"], "Abhyanga");
    assert_eq!(body[0]["price"], 120);
}

#[tokio::test]
async fn test_get_therapy_and_not_found() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/therapies/2");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Shirodhara");

    let (status, body) = get_json!(app, "/api/therapies/99");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Therapy not found");
    assert_eq!(body["code"], 5000);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/therapies/abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);

    let (status, _) = get_json!(app, "/api/bookings/-1");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_practitioners_and_performance() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/practitioners");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (status, body) = get_json!(app, "/api/practitioners/7");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Practitioner not found");

    let (status, body) = get_json!(app, "/api/practitioners/1/performance");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPatients"], 2);
    assert_eq!(body["completedSessions"], 1);
    assert_eq!(body["revenue"], 1400);
    assert_eq!(body["patientSatisfaction"], 100.0);
}

#[tokio::test]
async fn test_therapy_effectiveness() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/therapies/2/effectiveness");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], 1);
    assert_eq!(body["averageRating"], 4.0);
    assert_eq!(body["sideEffects"], json!(["Slight dizziness for 30 minutes"]));
}

// =============================================================================
// Bookings
// =============================================================================

#[tokio::test]
async fn test_list_bookings_joins_details() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/bookings");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body[0]["patientName"], "John Doe");
    assert_eq!(body[0]["therapy"]["name"], "Abhyanga");
    assert_eq!(body[0]["practitioner"]["name"], "Dr. Priya Sharma");
    assert_eq!(body[0]["progress"], "completed");
}

#[tokio::test]
async fn test_list_bookings_filters() {
    let app = clinic_app!();
    let (_, body) = get_json!(app, "/api/bookings?progress=in-progress");
    assert_eq!(ids(&body), vec![2, 4]);

    let (_, body) = get_json!(app, "/api/bookings?search=ROBERT");
    assert_eq!(ids(&body), vec![3]);

    let (status, _) = get_json!(app, "/api/bookings?progress=paused");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_adds_notification() {
    let services = fresh_services();
    let app = clinic_app!(services.clone());

    let req = TestRequest::post()
        .uri("/api/bookings")
        .set_json(json!({
            "patientName": "Asha Rao",
            "therapyId": 6,
            "practitionerId": 2,
            "date": "2025-02-01",
            "time": "15:30",
            "totalDays": 3,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["progress"], "scheduled");
    assert_eq!(body["day"], 0);
    assert_eq!(body["totalDays"], 3);
    assert_eq!(body["cost"], 80);
    assert_eq!(body["paymentStatus"], "pending");

    let (_, notifications) = get_json!(app, "/api/notifications");
    let last = notifications.as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["id"], 6);
    assert_eq!(last["bookingId"], 5);
    assert_eq!(last["type"], "pre-procedure");
    assert_eq!(last["title"], "Upcoming Nasya Session");
    assert_eq!(last["read"], false);
    assert_eq!(services.notifications.unread_count(), 5);
}

#[tokio::test]
async fn test_create_booking_validation() {
    let app = clinic_app!();

    let req = TestRequest::post()
        .uri("/api/bookings")
        .set_json(json!({
            "patientName": "Asha Rao",
            "therapyId": 42,
            "practitionerId": 2,
            "date": "2025-02-01",
            "time": "15:30",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/api/bookings")
        .set_json(json!({
            "patientName": "Asha Rao",
            "therapyId": 1,
            "practitionerId": 2,
            "date": "01/02/2025",
            "time": "15:30",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1012);

    // malformed JSON body
    let req = TestRequest::post()
        .uri("/api/bookings")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);

    let (_, bookings) = get_json!(app, "/api/bookings");
    assert_eq!(bookings.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_booking() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/bookings/3");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patientName"], "Robert Johnson");
    assert_eq!(body["therapy"]["name"], "Panchakarma Detox");

    let (status, body) = get_json!(app, "/api/bookings/10");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Booking not found");
    assert_eq!(body["code"], 2000);
}

#[tokio::test]
async fn test_update_progress() {
    let app = clinic_app!();

    let req = TestRequest::put()
        .uri("/api/bookings/3/progress")
        .set_json(json!({ "progress": "in-progress", "day": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["progress"], "in-progress");
    assert_eq!(body["day"], 2);

    let req = TestRequest::put()
        .uri("/api/bookings/3/progress")
        .set_json(json!({ "progress": "completed", "day": 6 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);

    let req = TestRequest::put()
        .uri("/api/bookings/77/progress")
        .set_json(json!({ "progress": "completed", "day": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auto_schedule_weekly() {
    let app = clinic_app!();

    let req = TestRequest::post()
        .uri("/api/bookings/auto-schedule")
        .set_json(json!({
            "patientName": "Meena Iyer",
            "therapyId": 1,
            "practitionerId": 3,
            "startDate": "2025-03-03",
            "preferredTime": "08:00",
            "totalDays": 3,
            "frequency": "weekly",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-03", "2025-03-10", "2025-03-17"]);
    assert_eq!(ids(&body), vec![5, 6, 7]);
}

#[tokio::test]
async fn test_auto_schedule_rejects_zero_sessions() {
    let app = clinic_app!();
    let req = TestRequest::post()
        .uri("/api/bookings/auto-schedule")
        .set_json(json!({
            "patientName": "Meena Iyer",
            "therapyId": 1,
            "practitionerId": 3,
            "startDate": "2025-03-03",
            "preferredTime": "08:00",
            "totalDays": 0,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Notifications
// =============================================================================

#[tokio::test]
async fn test_notification_filters() {
    let app = clinic_app!();
    let (_, body) = get_json!(app, "/api/notifications?priority=high");
    assert_eq!(ids(&body), vec![1, 5]);

    let (_, body) = get_json!(app, "/api/notifications?type=reminder");
    assert_eq!(ids(&body), vec![3]);

    let (_, body) = get_json!(app, "/api/notifications?unread=true");
    assert_eq!(ids(&body), vec![1, 2, 3, 5]);
}

#[tokio::test]
async fn test_mark_read_and_read_all() {
    let app = clinic_app!();

    let req = TestRequest::put()
        .uri("/api/notifications/2/read")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["read"], true);

    let req = TestRequest::put()
        .uri("/api/notifications/99/read")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Notification not found");

    let req = TestRequest::put()
        .uri("/api/notifications/read-all")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["updated"], 3);

    let (_, stats) = get_json!(app, "/api/dashboard-stats");
    assert_eq!(stats["unreadNotifications"], 0);
}

// =============================================================================
// Feedback & stats
// =============================================================================

#[tokio::test]
async fn test_feedback_create_and_analytics() {
    let app = clinic_app!();

    let req = TestRequest::post()
        .uri("/api/feedback")
        .set_json(json!({
            "bookingId": 3,
            "patientName": "Robert Johnson",
            "rating": 2,
            "symptoms": "Fatigue",
            "sideEffects": "Nausea",
            "improvements": "",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["wouldRecommend"], false);
    assert_eq!(body["date"].as_str().unwrap().len(), 10);

    let (_, analytics) = get_json!(app, "/api/feedback/analytics");
    assert_eq!(analytics["totalFeedback"], 4);
    assert_eq!(analytics["negativeFeedback"], 1);
    assert_eq!(analytics["recommendationRate"], 75.0);
    assert_eq!(analytics["ratingDistribution"][0]["rating"], 5);

    let (_, body) = get_json!(app, "/api/feedback?rating=2");
    assert_eq!(ids(&body), vec![4]);
}

#[tokio::test]
async fn test_feedback_invalid_rating() {
    let app = clinic_app!();
    let req = TestRequest::post()
        .uri("/api/feedback")
        .set_json(json!({
            "bookingId": 1,
            "patientName": "John Doe",
            "rating": 9,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4000);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/dashboard-stats");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalBookings"], 4);
    assert_eq!(body["completedSessions"], 1);
    assert_eq!(body["upcomingSessions"], 1);
    assert_eq!(body["unreadNotifications"], 4);
    assert_eq!(body["weeklyProgress"][5], json!({ "day": "Sat", "sessions": 7 }));
    assert_eq!(
        body["therapyDistribution"][0],
        json!({ "name": "Abhyanga", "value": 35 })
    );
}

#[tokio::test]
async fn test_patient_history_decodes_name() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/api/patients/Sarah%20Wilson/history");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["bookings"]), vec![4]);
    assert_eq!(body["bookings"][0]["therapy"]["name"], "Udvartana");
    assert_eq!(ids(&body["feedback"]), vec![3]);

    let (status, body) = get_json!(app, "/api/patients/Nobody/history");
    assert_eq!(status, StatusCode::OK);
    assert!(body["bookings"].as_array().unwrap().is_empty());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = clinic_app!();
    let (status, body) = get_json!(app, "/health");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["counts"]["therapies"], 6);
    assert_eq!(body["unreadNotifications"], 4);

    let req = TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
