use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client,
};
use std::sync::Arc;

use crate::models::page_content::PageContent;

fn collection(client: &Client) -> mongodb::Collection<PageContent> {
    client.database("Content").collection("Pages")
}

/// Public lookup of one page's copy by slug, e.g. /pages/about.
pub async fn get_page(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let slug = path.into_inner();

    match collection(&client).find_one(doc! { "page": &slug }).await {
        Ok(Some(page)) => HttpResponse::Ok().json(page),
        Ok(None) => HttpResponse::NotFound().body("Page not found"),
        Err(err) => {
            eprintln!("Failed to fetch page {}: {:?}", slug, err);
            HttpResponse::InternalServerError().body("Failed to fetch page")
        }
    }
}

pub async fn get_pages(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();

    match collection(&client).find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<PageContent>>().await {
            Ok(pages) => HttpResponse::Ok().json(pages),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect pages.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find pages.")
        }
    }
}

pub async fn create_page(
    data: web::Data<Arc<Client>>,
    input: web::Json<PageContent>,
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
            eprintln!("Failed to insert page: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create page")
        }
    }
}

pub async fn update_page(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
    input: web::Json<PageContent>,
) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid page id"),
    };

    let mut doc = input.into_inner();
    doc.id = None;
    doc.updated_at = Some(Utc::now());

    let updates = match bson::to_document(&doc) {
        Ok(updates) => updates,
        Err(err) => {
            eprintln!("Failed to serialize page: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update page");
        }
    };

    match collection(&client)
        .update_one(doc! { "_id": id }, doc! { "$set": updates })
        .await
    {
        Ok(result) if result.matched_count == 0 => HttpResponse::NotFound().body("Page not found"),
        Ok(_) => HttpResponse::Ok().body("Page updated"),
        Err(err) => {
            eprintln!("Failed to update page: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update page")
        }
    }
}

pub async fn delete_page(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();

    let id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid page id"),
    };

    match collection(&client).delete_one(doc! { "_id": id }).await {
        Ok(result) if result.deleted_count == 0 => HttpResponse::NotFound().body("Page not found"),
        Ok(_) => HttpResponse::Ok().body("Page deleted"),
        Err(err) => {
            eprintln!("Failed to delete page: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete page")
        }
    }
}
