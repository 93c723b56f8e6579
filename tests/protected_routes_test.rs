mod common;

use actix_web::{test, web, App, HttpResponse, Responder};
use serde_json::json;
use serial_test::serial;

use saffarlog_api::middleware::auth::AuthMiddleware;
use saffarlog_api::middleware::auth_context::AuthenticatedUser;
use saffarlog_api::middleware::role_auth::RequireRole;
use saffarlog_api::models::account::UserRole;

async fn whoami(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(json!({ "email": user.email, "is_admin": user.is_admin }))
}

async fn admin_only() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

macro_rules! protected_app {
    () => {
        test::init_service(
            App::new()
                .service(
                    web::scope("/protected")
                        .wrap(AuthMiddleware)
                        .route("/whoami", web::get().to(whoami)),
                )
                .service(
                    web::scope("/admin")
                        .wrap(RequireRole::new(UserRole::Admin))
                        .wrap(AuthMiddleware)
                        .route("/ping", web::get().to(admin_only)),
                ),
        )
        .await
    };
}

#[actix_rt::test]
#[serial]
async fn request_without_token_is_rejected() {
    let app = protected_app!();

    let req = test::TestRequest::get().uri("/protected/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn garbage_token_is_rejected() {
    let app = protected_app!();

    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn expired_token_is_rejected() {
    let app = protected_app!();

    let token = common::expired_token("traveler@example.com");
    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn bearer_token_is_accepted() {
    let app = protected_app!();

    let token = common::test_token("traveler@example.com", Some("user"));
    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "traveler@example.com");
    assert_eq!(body["is_admin"], false);
}

#[actix_rt::test]
#[serial]
async fn cookie_token_is_accepted() {
    let app = protected_app!();

    let token = common::test_token("traveler@example.com", Some("user"));
    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .cookie(actix_web::cookie::Cookie::new("auth-token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
#[serial]
async fn non_admin_cannot_reach_admin_scope() {
    let app = protected_app!();

    let token = common::test_token("traveler@example.com", Some("user"));
    let req = test::TestRequest::get()
        .uri("/admin/ping")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_rt::test]
#[serial]
async fn admin_token_reaches_admin_scope() {
    let app = protected_app!();

    let token = common::test_token("admin@example.com", Some("admin"));
    let req = test::TestRequest::get()
        .uri("/admin/ping")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
#[serial]
async fn admin_scope_without_token_is_unauthorized() {
    let app = protected_app!();

    let req = test::TestRequest::get().uri("/admin/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
