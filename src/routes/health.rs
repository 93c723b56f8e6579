use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    let storage_result = check_media_bucket();
    health
        .services
        .insert("media_bucket".to_string(), storage_result.clone());

    let assistant_result = check_assistant_api();
    health
        .services
        .insert("assistant".to_string(), assistant_result.clone());

    // Any failing service downgrades the overall status
    if mongo_result.status != "ok"
        || storage_result.status != "ok"
        || assistant_result.status != "ok"
    {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client
        .database("Account")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            eprintln!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_media_bucket() -> ServiceStatus {
    match env::var("MEDIA_BUCKET") {
        Ok(bucket) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Media bucket configured: {}", bucket)),
        },
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("MEDIA_BUCKET not configured".to_string()),
        },
    }
}

fn check_assistant_api() -> ServiceStatus {
    // Just validate key existence for basic check
    match env::var("TOGETHER_API_KEY") {
        Ok(key) => {
            let masked_key = if key.len() > 8 {
                format!("{}***{}", &key[0..4], &key[key.len() - 4..])
            } else {
                "***".to_string()
            };

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("Assistant API key configured ({})", masked_key)),
            }
        }
        Err(_) => ServiceStatus {
            status: "error".to_string(),
            details: Some("TOGETHER_API_KEY not configured".to_string()),
        },
    }
}
