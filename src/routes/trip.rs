use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Client,
};
use std::sync::Arc;

use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::trip::Trip;
use crate::services::trip_stats_service::TripStatsService;

fn collection(client: &Client) -> mongodb::Collection<Trip> {
    client.database("Travelers").collection("Trips")
}

pub async fn get_trips(data: web::Data<Arc<Client>>, user: AuthenticatedUser) -> impl Responder {
    let client = data.into_inner();

    let mut options = FindOptions::default();
    options.sort = Some(doc! { "start_date": -1 });

    match collection(&client)
        .find(doc! { "user_id": user.user_id })
        .with_options(options)
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Trip>>().await {
            Ok(trips) => HttpResponse::Ok().json(trips),
            Err(err) => {
                eprintln!("Failed to collect trips: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect trips.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find trips: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find trips.")
        }
    }
}

pub async fn create_trip(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    input: web::Json<Trip>,
) -> impl Responder {
    let client = data.into_inner();

    let mut doc = input.into_inner();
    doc.id = None;
    doc.user_id = user.user_id;
    doc.created_at = Some(Utc::now());
    doc.updated_at = Some(Utc::now());

    if doc.end_date < doc.start_date {
        return HttpResponse::BadRequest().body("Trip cannot end before it starts");
    }

    match collection(&client).insert_one(&doc).await {
        Ok(result) => {
            doc.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(doc)
        }
        Err(err) => {
            eprintln!("Failed to insert trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create trip")
        }
    }
}

pub async fn delete_trip(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid trip id"),
    };

    // Scoped to the owner so one user cannot delete another's trip
    match collection(&client)
        .delete_one(doc! { "_id": id, "user_id": user.user_id })
        .await
    {
        Ok(result) if result.deleted_count == 0 => HttpResponse::NotFound().body("Trip not found"),
        Ok(_) => HttpResponse::Ok().body("Trip deleted"),
        Err(err) => {
            eprintln!("Failed to delete trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete trip")
        }
    }
}

/// Travel statistics for the dashboard, derived from the user's trip history.
pub async fn get_preferences(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
) -> impl Responder {
    let client = data.into_inner();

    match collection(&client)
        .find(doc! { "user_id": user.user_id })
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Trip>>().await {
            Ok(trips) => HttpResponse::Ok().json(TripStatsService::summarize(&trips)),
            Err(err) => {
                eprintln!("Failed to collect trips: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to fetch preferences")
            }
        },
        Err(err) => {
            eprintln!("Failed to find trips: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch preferences")
        }
    }
}
