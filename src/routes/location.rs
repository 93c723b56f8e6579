use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Client,
};
use std::sync::Arc;

use crate::models::location::Location;

fn collection(client: &Client) -> mongodb::Collection<Location> {
    client.database("Content").collection("Locations")
}

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

pub async fn get_locations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();

    let mut options = FindOptions::default();
    options.sort = Some(doc! { "name": 1 });
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }
    let filter = match &params.search {
        Some(search_text) if !search_text.is_empty() => {
            doc! {
                "name": {
                    "$regex": format!("^{}", regex::escape(search_text)),
                    "$options": "i"
                }
            }
        }
        _ => doc! {},
    };

    match collection(&client).find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Location>>().await {
            Ok(locations) => HttpResponse::Ok().json(locations),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect locations.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find locations.")
        }
    }
}

pub async fn create_location(
    data: web::Data<Arc<Client>>,
    input: web::Json<Location>,
) -> impl Responder {
    let client = data.into_inner();

    let mut doc = input.into_inner();
    doc.id = None;
    doc.created_at = Some(Utc::now());
    doc.updated_at = Some(Utc::now());

    match collection(&client).insert_one(&doc).await {
        Ok(result) => {
            doc.id = result.inserted_id.as_object_id();
            HttpResponse::Ok().json(doc)
        }
        Err(err) => {
            eprintln!("Failed to insert location: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create location")
        }
    }
}

pub async fn update_location(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Location>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid location id"),
    };

    let mut doc = input.into_inner();
    doc.id = None;
    doc.updated_at = Some(Utc::now());

    let updates = match bson::to_document(&doc) {
        Ok(updates) => updates,
        Err(err) => {
            eprintln!("Failed to serialize location: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update location");
        }
    };

    match collection(&client)
        .update_one(doc! { "_id": id }, doc! { "$set": updates })
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Location not found")
        }
        Ok(_) => HttpResponse::Ok().body("Location updated"),
        Err(err) => {
            eprintln!("Failed to update location: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update location")
        }
    }
}

pub async fn delete_location(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid location id"),
    };

    match collection(&client).delete_one(doc! { "_id": id }).await {
        Ok(result) if result.deleted_count == 0 => {
            HttpResponse::NotFound().body("Location not found")
        }
        Ok(_) => HttpResponse::Ok().body("Location deleted"),
        Err(err) => {
            eprintln!("Failed to delete location: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete location")
        }
    }
}
