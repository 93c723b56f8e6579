use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::db::regions::RegionCatalog;
use crate::models::planner::{ActivityType, PlannerError, TravelStyle};
use crate::services::expense_service::ExpenseService;
use crate::services::itinerary_service::ItineraryService;

#[derive(Deserialize)]
pub struct EstimateRequest {
    region: String,
    style: String,
    days: u32,
    people: u32,
}

#[derive(Deserialize)]
pub struct ItineraryRequest {
    region: String,
    days: u32,
    preferences: Option<Vec<ActivityType>>,
}

pub async fn estimate(
    catalog: web::Data<RegionCatalog>,
    input: web::Json<EstimateRequest>,
) -> impl Responder {
    let req = input.into_inner();

    if req.days == 0 || req.people == 0 {
        return HttpResponse::BadRequest().body("Days and people must both be at least 1");
    }

    let style: TravelStyle = match req.style.parse() {
        Ok(style) => style,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match ExpenseService::estimate(&catalog, &req.region, style, req.days, req.people) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err @ PlannerError::UnknownRegion(_)) => HttpResponse::NotFound().body(err.to_string()),
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}

pub async fn itinerary(
    catalog: web::Data<RegionCatalog>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let req = input.into_inner();

    if req.days == 0 {
        return HttpResponse::BadRequest().body("Days must be at least 1");
    }

    let preferences = req.preferences.unwrap_or_else(|| ActivityType::ALL.to_vec());

    match ItineraryService::generate(&catalog, &req.region, req.days, &preferences) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err @ PlannerError::UnknownRegion(_)) => HttpResponse::NotFound().body(err.to_string()),
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}
