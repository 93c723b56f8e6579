use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use std::sync::Arc;

use crate::models::accommodation::Accommodation;

fn collection(client: &Client) -> mongodb::Collection<Accommodation> {
    client.database("Content").collection("Accommodations")
}

#[derive(serde::Deserialize)]
pub struct QueryParams {
    location_id: Option<String>,
}

pub async fn get_accommodations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();

    let filter = match &params.location_id {
        Some(raw) => match ObjectId::parse_str(raw) {
            Ok(id) => doc! { "location_id": id },
            Err(_) => return HttpResponse::BadRequest().body("Invalid location id"),
        },
        None => doc! {},
    };

    match collection(&client).find(filter).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Accommodation>>().await {
            Ok(accommodations) => HttpResponse::Ok().json(accommodations),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect accommodations.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find accommodations.")
        }
    }
}

pub async fn create_accommodation(
    data: web::Data<Arc<Client>>,
    input: web::Json<Accommodation>,
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
            eprintln!("Failed to insert accommodation: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create accommodation")
        }
    }
}

pub async fn update_accommodation(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<Accommodation>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid accommodation id"),
    };

    let mut doc = input.into_inner();
    doc.id = None;
    doc.updated_at = Some(Utc::now());

    let updates = match bson::to_document(&doc) {
        Ok(updates) => updates,
        Err(err) => {
            eprintln!("Failed to serialize accommodation: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update accommodation");
        }
    };

    match collection(&client)
        .update_one(doc! { "_id": id }, doc! { "$set": updates })
        .await
    {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Accommodation not found")
        }
        Ok(_) => HttpResponse::Ok().body("Accommodation updated"),
        Err(err) => {
            eprintln!("Failed to update accommodation: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update accommodation")
        }
    }
}

pub async fn delete_accommodation(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid accommodation id"),
    };

    match collection(&client).delete_one(doc! { "_id": id }).await {
        Ok(result) if result.deleted_count == 0 => {
            HttpResponse::NotFound().body("Accommodation not found")
        }
        Ok(_) => HttpResponse::Ok().body("Accommodation deleted"),
        Err(err) => {
            eprintln!("Failed to delete accommodation: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete accommodation")
        }
    }
}
