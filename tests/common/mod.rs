#![allow(dead_code)]

use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mongodb::bson::oid::ObjectId;

use saffarlog_api::db::regions::{pakistan_catalog, RegionCatalog};
use saffarlog_api::middleware::auth::Claims;

/// The planner's static reference data, ready to drop into a test App.
pub fn catalog_data() -> web::Data<RegionCatalog> {
    web::Data::new(pakistan_catalog())
}

/// Signs a token the way the API does. AuthMiddleware falls back to
/// "default_secret" when JWT_SECRET is unset, so tests sign with the same.
pub fn test_token(email: &str, role: Option<&str>) -> String {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(1)).timestamp() as usize,
        user_id: ObjectId::new().to_string(),
        role: role.map(|r| r.to_string()),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
        .expect("failed to sign test token")
}

pub fn expired_token(email: &str) -> String {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: (now - Duration::hours(2)).timestamp() as usize,
        exp: (now - Duration::hours(1)).timestamp() as usize,
        user_id: ObjectId::new().to_string(),
        role: Some("user".to_string()),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
        .expect("failed to sign test token")
}
