use actix_web::{test, web, App, HttpResponse};
use serde_json::json;

// Mock handlers standing in for the MongoDB-backed content routes, so the
// public surface shape can be asserted without a database.
async fn health_check() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({"status": "ok"})))
}

async fn get_locations() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!([])))
}

async fn get_attractions() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!([])))
}

async fn get_page() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(json!({"error": "Page not found"})))
}

async fn unauthorized() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Unauthorized().json(json!({"error": "Unauthorized"})))
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new().route("/health", web::get().to(health_check)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_locations_endpoint_returns_array() {
    let app = test::init_service(
        App::new().route("/api/locations", web::get().to(get_locations)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/locations").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.is_array());
}

#[actix_web::test]
async fn test_attractions_endpoint_returns_array() {
    let app = test::init_service(
        App::new().route("/api/attractions", web::get().to(get_attractions)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/attractions?location_id=000000000000000000000000")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_unknown_page_is_404() {
    let app = test::init_service(
        App::new().route("/api/pages/{page}", web::get().to(get_page)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/pages/launch").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_account_routes_require_auth() {
    let app = test::init_service(
        App::new()
            .route("/api/account/trips", web::get().to(unauthorized))
            .route("/api/account/profile", web::get().to(unauthorized)),
    )
    .await;

    for uri in ["/api/account/trips", "/api/account/profile"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}

#[actix_web::test]
async fn test_cors_headers() {
    let app = test::init_service(
        App::new()
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .route("/health", web::get().to(health_check)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
