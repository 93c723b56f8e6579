use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

pub const AUTH_COOKIE: &str = "auth-token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // subject (email)
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
    pub user_id: String,
    pub role: Option<String>, // "user" | "admin"
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

// The browser client keeps its token in the auth-token cookie; API clients
// send a Bearer header. Either is accepted.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(header) = req.headers().get("Authorization") {
        if let Ok(value) = header.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }
    req.cookie(AUTH_COOKIE).map(|c| c.value().to_string())
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = extract_token(&req) {
            let key =
                std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());

            let mut validation = Validation::new(Algorithm::HS256);
            validation.validate_exp = true;
            validation.set_required_spec_claims(&["exp", "iat", "sub", "user_id"]);

            match decode::<Claims>(
                &token,
                &DecodingKey::from_secret(key.as_bytes()),
                &validation,
            ) {
                Ok(token_data) => {
                    req.extensions_mut().insert(token_data.claims);
                    return Box::pin(self.service.call(req));
                }
                Err(err) => {
                    println!("Error decoding token: {:?}", err);
                    return Box::pin(ready(Err(ErrorUnauthorized("Invalid token"))));
                }
            }
        }
        Box::pin(ready(Err(ErrorUnauthorized("No authorization token"))))
    }
}
