mod common;

use actix_web::{test, web, App};
use serde_json::json;

use saffarlog_api::routes;

macro_rules! planner_app {
    () => {
        test::init_service(
            App::new()
                .app_data(common::catalog_data())
                .route("/api/chat", web::post().to(routes::chat::chat))
                .service(
                    web::scope("/api/planner")
                        .route("/estimate", web::post().to(routes::planner::estimate))
                        .route("/itinerary", web::post().to(routes::planner::itinerary)),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn estimate_returns_published_rates() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/estimate")
        .set_json(&json!({
            "region": "Northern Pakistan",
            "style": "standard",
            "days": 5,
            "people": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1450);
    assert_eq!(body["breakdown"]["accommodation"], 400);
    assert_eq!(body["breakdown"]["food"], 300);
    assert_eq!(body["breakdown"]["transportation"], 250);
    assert_eq!(body["breakdown"]["activities"], 500);
}

#[actix_web::test]
async fn estimate_unknown_region_is_404() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/estimate")
        .set_json(&json!({
            "region": "Eastern Pakistan",
            "style": "budget",
            "days": 3,
            "people": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn estimate_invalid_style_is_400() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/estimate")
        .set_json(&json!({
            "region": "Northern Pakistan",
            "style": "deluxe",
            "days": 3,
            "people": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn estimate_rejects_zero_counts() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/estimate")
        .set_json(&json!({
            "region": "Northern Pakistan",
            "style": "budget",
            "days": 0,
            "people": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn itinerary_days_stay_within_budget() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/itinerary")
        .set_json(&json!({
            "region": "Northern Pakistan",
            "days": 7
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let daily_plan = body["dailyPlan"].as_array().expect("dailyPlan array");
    assert!(daily_plan.len() <= 7);
    for day in daily_plan {
        let hours: u64 = day["activities"]
            .as_array()
            .expect("activities array")
            .iter()
            .map(|visit| visit["attraction"]["duration"].as_u64().unwrap_or(0))
            .sum();
        assert!(hours <= 9, "day {} packed {} hours", day["day"], hours);
    }
    assert_eq!(body["bestTimeToVisit"], "May to October");
}

#[actix_web::test]
async fn itinerary_with_unmatched_preferences_is_empty() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/itinerary")
        .set_json(&json!({
            "region": "Coastal Pakistan",
            "days": 4,
            "preferences": ["culture"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["dailyPlan"].as_array().map(|a| a.len()), Some(0));
    assert!(!body["tips"].as_array().expect("tips array").is_empty());
}

#[actix_web::test]
async fn itinerary_unknown_region_is_404() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/planner/itinerary")
        .set_json(&json!({
            "region": "Atlantis",
            "days": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn chat_computes_combined_reply() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(&json!({
            "message": "5 days in Northern Pakistan for 2 people, standard style"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let reply = body["reply"].as_str().expect("reply string");
    assert!(reply.contains("Total estimated cost: $1450"));
    assert!(reply.contains("Suggested Itinerary"));
    assert!(reply.contains("Day 1:"));
}

#[actix_web::test]
async fn chat_asks_for_region_first() {
    let app = planner_app!();

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(&json!({ "message": "I want to visit Pakistan" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["reply"],
        "Please specify a region (Northern, Coastal, or Central Pakistan)."
    );
}
