//! Router tests over an in-memory catalogue and a mocked database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;

use tourdesk_api::{AppState, create_router};
use tourdesk_core::auth::hash_password;
use tourdesk_core::catalog::{
    AgencyProfile, Booking, BookingStatus, InMemoryCatalog, PaymentStatus, TourDate, TourPackage,
};
use tourdesk_db::entities::{sea_orm_active_enums::UserRole, users};
use tourdesk_shared::{
    JwtConfig, JwtService, Role,
    types::{AgencyId, BookingId, TourDateId, TourPackageId, UserId},
};

struct TestApp {
    router: Router,
    jwt: Arc<JwtService>,
    agency_owner: UserId,
}

impl TestApp {
    fn new() -> Self {
        Self::with_db(DatabaseConnection::default())
    }

    fn with_db(db: DatabaseConnection) -> Self {
        let agency_owner = UserId::new();
        let agency_id = AgencyId::new();
        let package_id = TourPackageId::new();
        let date_id = TourDateId::new();
        let created = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();

        let mut catalog = InMemoryCatalog::new();
        catalog
            .insert_agency(AgencyProfile {
                id: agency_id,
                owner_id: agency_owner,
                name: "Alpine Routes".to_string(),
                description: None,
            })
            .insert_package(TourPackage {
                id: package_id,
                agency_id,
                title: "Glacier Walk".to_string(),
                price: dec!(100),
                created_at: created - Duration::days(30),
            })
            .insert_tour_date(TourDate {
                id: date_id,
                package_id,
                scheduled_on: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
            })
            .insert_booking(Booking {
                id: BookingId::new(),
                tour_date_id: date_id,
                participants: 3,
                status: BookingStatus::Completed,
                payment_status: PaymentStatus::Paid,
                created_at: created,
                feedback: None,
            })
            .insert_booking(Booking {
                id: BookingId::new(),
                tour_date_id: date_id,
                participants: 2,
                status: BookingStatus::Cancelled,
                payment_status: PaymentStatus::Refunded,
                created_at: created - Duration::hours(1),
                feedback: None,
            });

        let jwt = Arc::new(JwtService::new(JwtConfig {
            secret: "router-test-secret".to_string(),
            access_token_expires_secs: 900,
        }));

        let state = AppState {
            db: Arc::new(db),
            catalog: Arc::new(catalog),
            jwt_service: Arc::clone(&jwt),
            featured_limit: 6,
        };

        Self {
            router: create_router(state),
            jwt,
            agency_owner,
        }
    }

    fn token(&self, user_id: UserId, role: Role) -> String {
        self.jwt.generate_access_token(user_id, role).unwrap()
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, HeaderMap, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = self
            .router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        let payload = serde_json::json!({ "email": email, "password": password });
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

fn stored_user(email: &str, password: &str, role: UserRole, is_active: bool) -> users::Model {
    let now = Utc::now().fixed_offset();
    users::Model {
        id: uuid::Uuid::now_v7(),
        email: email.to_string(),
        password_hash: hash_password(password).unwrap(),
        full_name: "Alpine Routes Owner".to_string(),
        role,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/agency/dashboard", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_token");
}

#[tokio::test]
async fn test_dashboard_rejects_invalid_token() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/agency/dashboard", Some("not-a-jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn test_dashboard_forbidden_for_customer() {
    let app = TestApp::new();
    let token = app.token(UserId::new(), Role::Customer);

    let (status, _, body) = app.get("/api/v1/agency/dashboard", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_dashboard_for_agency() {
    let app = TestApp::new();
    let token = app.token(app.agency_owner, Role::Agency);

    let (status, _, body) = app.get("/api/v1/agency/dashboard", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agency_name"], "Alpine Routes");
    assert_eq!(body["agency_description"], "");
    assert_eq!(body["total_tours"], 1);
    assert_eq!(body["active_bookings"], 1);
    assert_eq!(body["total_revenue"], "300.0000");
    assert_eq!(body["pending_reviews"], 1);

    let recent = body["recent_bookings"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["package_title"], "Glacier Walk");
    assert_eq!(recent[0]["participants"], 3);
    assert_eq!(recent[0]["status"], "Completed");
    assert_eq!(recent[0]["revenue"], "300.0000");
    assert_eq!(recent[0]["booking_date"], "2026-06-01T09:00:00+00:00");
    assert_eq!(recent[1]["status"], "Cancelled");
    assert_eq!(recent[1]["revenue"], "200.0000");
}

#[tokio::test]
async fn test_dashboard_not_found_without_profile() {
    let app = TestApp::new();
    let token = app.token(UserId::new(), Role::Agency);

    let (status, _, body) = app.get("/api/v1/agency/dashboard", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_home_redirects_agency_to_dashboard() {
    let app = TestApp::new();
    let token = app.token(app.agency_owner, Role::Agency);

    let (status, headers, _) = app.get("/api/v1/home", Some(&token)).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/api/v1/agency/dashboard");
}

#[tokio::test]
async fn test_home_lists_featured_tours_for_anonymous_and_customers() {
    let app = TestApp::new();
    let customer = app.token(UserId::new(), Role::Customer);

    for token in [None, Some(customer.as_str()), Some("garbage")] {
        let (status, _, body) = app.get("/api/v1/home", token).await;

        assert_eq!(status, StatusCode::OK);
        let tours = body["featured_tours"].as_array().unwrap();
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0]["title"], "Glacier Walk");
        assert_eq!(tours[0]["agency_name"], "Alpine Routes");
        assert_eq!(tours[0]["price"], "100.0000");
    }
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], false);
}

#[tokio::test]
async fn test_login_hides_database_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset by peer".to_string())])
        .into_connection();
    let app = TestApp::with_db(db);

    let (status, body) = app.login("agency@example.com", "secret").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(!body["message"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_login_issues_agency_token() {
    let user = stored_user("agency@example.com", "glacier-walk", UserRole::Agency, true);
    let user_id = user.id;
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let app = TestApp::with_db(db);

    let (status, body) = app.login("Agency@Example.com", "glacier-walk").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 900);
    assert_eq!(body["role"], "agency");

    let claims = app
        .jwt
        .validate_token(body["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, UserId::from_uuid(user_id));
    assert_eq!(claims.role, Role::Agency);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let user = stored_user("agency@example.com", "glacier-walk", UserRole::Agency, true);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let app = TestApp::with_db(db);

    let (status, body) = app.login("agency@example.com", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn test_login_rejects_unknown_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let app = TestApp::with_db(db);

    let (status, body) = app.login("nobody@example.com", "anything").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn test_login_rejects_disabled_account() {
    let user = stored_user("customer@example.com", "harbour", UserRole::Customer, false);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let app = TestApp::with_db(db);

    let (status, body) = app.login("customer@example.com", "harbour").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "account_disabled");
}
