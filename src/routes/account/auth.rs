use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::middleware::auth::{Claims, AUTH_COOKIE};
use crate::models::account::{User, UserRole, UserSession};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

fn users(client: &Client) -> mongodb::Collection<User> {
    client.database("Account").collection("Users")
}

pub async fn register(
    data: web::Data<Arc<Client>>,
    input: web::Json<RegisterRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = users(&client);

    let req = input.into_inner();

    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name is required");
    }
    if !is_valid_email(&req.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return HttpResponse::BadRequest().body("Password must be at least 8 characters long");
    }

    match collection.find_one(doc! { "email": &req.email }).await {
        Ok(Some(_)) => return HttpResponse::Conflict().body("User already exists"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("Database error: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    }

    let hashed = match bcrypt::hash(&req.password, bcrypt::DEFAULT_COST) {
        Ok(hashed) => hashed,
        Err(err) => {
            eprintln!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to create user");
        }
    };

    let curr_time = Utc::now();
    let user = User {
        id: None,
        name: req.name,
        email: req.email,
        password: hashed,
        role: Some(UserRole::User),
        image: None,
        last_signin: None,
        failed_signins: None,
        created_at: Some(curr_time),
        updated_at: Some(curr_time),
    };

    match collection.insert_one(&user).await {
        Ok(result) => {
            let user_id = match result.inserted_id.as_object_id() {
                Some(id) => id,
                None => {
                    return HttpResponse::InternalServerError().body("Failed to create user")
                }
            };
            match generate_token(&user.email, user_id, UserRole::User) {
                Ok(token) => token_response(token),
                Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
            }
        }
        Err(err) => {
            eprintln!("Failed to insert user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create user")
        }
    }
}

pub async fn signin(
    data: web::Data<Arc<Client>>,
    input: web::Json<SigninRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = users(&client);

    let req = input.into_inner();
    let email = req.email;

    match collection.find_one(doc! { "email": &email }).await {
        Ok(Some(user)) => {
            if bcrypt::verify(&req.password, &user.password).unwrap_or(false) {
                let update = doc! {
                    "$set": {
                        "last_signin": Utc::now().to_string(),
                        "failed_signins": 0
                    }
                };

                if let Err(err) = collection.update_one(doc! { "email": &email }, update).await {
                    eprintln!("Failed to update document: {:?}", err);
                    return HttpResponse::InternalServerError().body("Failed to sign in.");
                }

                let user_id = match user.id {
                    Some(id) => id,
                    None => {
                        eprintln!("User record for {} has no id", email);
                        return HttpResponse::InternalServerError().body("Failed to sign in.");
                    }
                };

                match generate_token(&email, user_id, user.role.unwrap_or(UserRole::User)) {
                    Ok(token) => token_response(token),
                    Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
                }
            } else {
                let failed_signins = user.failed_signins.unwrap_or(0) + 1;
                let update = doc! {
                    "$set": { "failed_signins": failed_signins }
                };

                match collection.update_one(doc! { "email": &email }, update).await {
                    Ok(_) => HttpResponse::Unauthorized().body("Invalid credentials"),
                    Err(err) => {
                        eprintln!("Failed to update failed signins: {:?}", err);
                        HttpResponse::InternalServerError().body("Failed to process signin")
                    }
                }
            }
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Database error: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to process signin")
        }
    }
}

pub async fn user_session(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = users(&client);

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(user_id) => user_id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    match collection.find_one(doc! { "_id": user_id }).await {
        Ok(Some(user)) => {
            let user_session = UserSession {
                id: user.id.unwrap_or_default(),
                name: user.name,
                email: user.email,
                role: user.role.unwrap_or(UserRole::User),
                created_at: user.created_at.unwrap_or_default(),
            };
            HttpResponse::Ok().json(user_session)
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Failed to fetch user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch user")
        }
    }
}

// The browser widget reads the cookie, API clients read the JSON body.
fn token_response(token: String) -> HttpResponse {
    let cookie = Cookie::build(AUTH_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::hours(24))
        .finish();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(TokenResponse { auth_token: token })
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    match re {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}

fn generate_token(
    email: &str,
    user_id: ObjectId,
    role: UserRole,
) -> Result<String, jsonwebtoken::errors::Error> {
    let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
        user_id: user_id.to_string(),
        role: Some(
            match role {
                UserRole::Admin => "admin",
                UserRole::User => "user",
            }
            .to_string(),
        ),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
}
