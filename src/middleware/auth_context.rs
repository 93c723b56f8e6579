use std::future::{ready, Ready};

use actix_http::Payload;
use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::middleware::auth::Claims;

/// Extractor for handlers running behind AuthMiddleware. Pulls the verified
/// claims out of the request extensions and parses the user id up front so
/// handlers work with an ObjectId directly.
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
    pub email: String,
    pub is_admin: bool,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = match req.extensions().get::<Claims>().cloned() {
            Some(claims) => claims,
            None => return ready(Err(ErrorUnauthorized("User not authenticated"))),
        };

        match ObjectId::parse_str(&claims.user_id) {
            Ok(user_id) => ready(Ok(AuthenticatedUser {
                user_id,
                email: claims.sub,
                is_admin: claims.role.as_deref() == Some("admin"),
            })),
            Err(_) => ready(Err(ErrorUnauthorized("Invalid user id in token"))),
        }
    }
}
