use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::account::{PublicProfile, User, UserRole};
use crate::models::trip::Trip;

const MIN_PASSWORD_LEN: usize = 8;

fn users(client: &Client) -> mongodb::Collection<User> {
    client.database("Account").collection("Users")
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn get_profile(data: web::Data<Arc<Client>>, user: AuthenticatedUser) -> impl Responder {
    let client = data.into_inner();

    match users(&client).find_one(doc! { "_id": user.user_id }).await {
        Ok(Some(record)) => {
            let profile = PublicProfile {
                id: record.id.unwrap_or_default(),
                name: record.name,
                email: record.email,
                role: record.role.unwrap_or(UserRole::User),
                image: record.image,
            };
            HttpResponse::Ok().json(profile)
        }
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Failed to fetch user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch profile")
        }
    }
}

pub async fn update_profile(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    input: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = users(&client);

    let req = input.into_inner();

    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name is required");
    }

    // A changed email must not collide with another account
    if req.email != user.email {
        match collection.find_one(doc! { "email": &req.email }).await {
            Ok(Some(_)) => return HttpResponse::Conflict().body("Email already in use"),
            Ok(None) => {}
            Err(err) => {
                eprintln!("Database error: {:?}", err);
                return HttpResponse::InternalServerError().body("Failed to update profile");
            }
        }
    }

    let update = doc! {
        "$set": {
            "name": &req.name,
            "email": &req.email,
            "updated_at": Utc::now().to_string(),
        }
    };

    match collection
        .update_one(doc! { "_id": user.user_id }, update)
        .await
    {
        Ok(result) if result.matched_count == 0 => HttpResponse::NotFound().body("User not found"),
        Ok(_) => HttpResponse::Ok().body("Profile updated"),
        Err(err) => {
            eprintln!("Failed to update profile: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update profile")
        }
    }
}

pub async fn change_password(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
    input: web::Json<ChangePasswordRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection = users(&client);

    let req = input.into_inner();

    if req.new_password.len() < MIN_PASSWORD_LEN {
        return HttpResponse::BadRequest().body("Password must be at least 8 characters long");
    }

    let record = match collection.find_one(doc! { "_id": user.user_id }).await {
        Ok(Some(record)) => record,
        Ok(None) => return HttpResponse::NotFound().body("User not found"),
        Err(err) => {
            eprintln!("Failed to fetch user: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to change password");
        }
    };

    if !bcrypt::verify(&req.current_password, &record.password).unwrap_or(false) {
        return HttpResponse::Unauthorized().body("Current password is incorrect");
    }

    let hashed = match bcrypt::hash(&req.new_password, bcrypt::DEFAULT_COST) {
        Ok(hashed) => hashed,
        Err(err) => {
            eprintln!("Failed to hash password: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to change password");
        }
    };

    let update = doc! {
        "$set": {
            "password": hashed,
            "updated_at": Utc::now().to_string(),
        }
    };

    match collection
        .update_one(doc! { "_id": user.user_id }, update)
        .await
    {
        Ok(_) => HttpResponse::Ok().body("Password updated"),
        Err(err) => {
            eprintln!("Failed to update password: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to change password")
        }
    }
}

/// Deletes the account and everything owned by it (trips included).
pub async fn delete_account(
    data: web::Data<Arc<Client>>,
    user: AuthenticatedUser,
) -> impl Responder {
    let client = data.into_inner();

    let trips: mongodb::Collection<Trip> = client.database("Travelers").collection("Trips");
    if let Err(err) = trips.delete_many(doc! { "user_id": user.user_id }).await {
        eprintln!("Failed to delete user trips: {:?}", err);
        return HttpResponse::InternalServerError().body("Failed to delete account");
    }

    match users(&client)
        .delete_one(doc! { "_id": user.user_id })
        .await
    {
        Ok(result) if result.deleted_count == 0 => HttpResponse::NotFound().body("User not found"),
        Ok(_) => HttpResponse::Ok().body("Account deleted"),
        Err(err) => {
            eprintln!("Failed to delete user: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete account")
        }
    }
}
