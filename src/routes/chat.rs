use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::db::regions::RegionCatalog;
use crate::services::chat_service::ChatService;

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    reply: String,
}

/// The trip-expense bot. Every message is interpreted on its own; the
/// conversation history lives entirely in the client widget.
pub async fn chat(
    catalog: web::Data<RegionCatalog>,
    input: web::Json<ChatRequest>,
) -> impl Responder {
    let reply = ChatService::interpret(&catalog, &input.message);
    HttpResponse::Ok().json(ChatResponse { reply })
}
