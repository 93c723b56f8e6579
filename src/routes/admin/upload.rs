use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::image_service::{ImageData, ImageService, ImageUploadError};

#[derive(Deserialize)]
pub struct UploadImageRequest {
    #[serde(flatten)]
    pub image: ImageData,
    /// Entity kind the image belongs to: location, attraction, accommodation, page.
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Serialize)]
pub struct UploadImageResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

pub async fn upload_image(input: web::Json<UploadImageRequest>) -> impl Responder {
    let req = input.into_inner();

    if req.category.is_empty() {
        return HttpResponse::BadRequest().body("Image type is required");
    }

    let service = match ImageService::new().await {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Image service unavailable: {}", err);
            return HttpResponse::InternalServerError().body("Failed to upload image");
        }
    };

    match service.upload_image(req.image, &req.category).await {
        Ok(image_url) => HttpResponse::Ok().json(UploadImageResponse { image_url }),
        Err(err @ ImageUploadError::InvalidImageFormat(_)) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err @ ImageUploadError::ImageTooLarge(_)) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err @ ImageUploadError::Base64DecodeError(_)) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err) => {
            eprintln!("Image upload error: {}", err);
            HttpResponse::InternalServerError().body("Failed to upload image")
        }
    }
}
