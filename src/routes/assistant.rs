use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::assistant_service::{AssistantMessage, AssistantService};

#[derive(Deserialize)]
pub struct AssistantRequest {
    messages: Vec<AssistantMessage>,
}

#[derive(Serialize)]
pub struct AssistantResponse {
    response: String,
}

pub async fn chat_completion(input: web::Json<AssistantRequest>) -> impl Responder {
    match AssistantService::chat(input.into_inner().messages).await {
        Ok(response) => HttpResponse::Ok().json(AssistantResponse { response }),
        Err(err) => {
            eprintln!("Assistant request failed: {}", err);
            HttpResponse::InternalServerError().body("Failed to process request")
        }
    }
}
