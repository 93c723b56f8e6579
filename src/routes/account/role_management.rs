use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::account::{PublicProfile, User, UserRole};

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub user_id: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRoleResponse {
    pub message: String,
    pub user_id: String,
    pub role: UserRole,
}

fn users(client: &Client) -> mongodb::Collection<User> {
    client.database("Account").collection("Users")
}

// Admin-only endpoint to update user roles
pub async fn update_user_role(
    data: web::Data<Arc<Client>>,
    input: web::Json<UpdateRoleRequest>,
) -> impl Responder {
    let client = data.into_inner();

    let req = input.into_inner();
    let user_id = match ObjectId::parse_str(&req.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID format"),
    };

    let role_string = match req.role {
        UserRole::Admin => "admin",
        UserRole::User => "user",
    };

    match users(&client)
        .update_one(
            doc! { "_id": user_id },
            doc! { "$set": { "role": role_string } },
        )
        .await
    {
        Ok(result) if result.matched_count == 0 => HttpResponse::NotFound().body("User not found"),
        Ok(_) => HttpResponse::Ok().json(UpdateRoleResponse {
            message: "User role updated successfully".to_string(),
            user_id: user_id.to_hex(),
            role: req.role,
        }),
        Err(err) => {
            eprintln!("Failed to update user role: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update user role")
        }
    }
}

// Admin-only endpoint to get all users with their roles
pub async fn list_users_with_roles(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();

    match users(&client).find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<User>>().await {
            Ok(records) => {
                let listing: Vec<PublicProfile> = records
                    .into_iter()
                    .map(|user| PublicProfile {
                        id: user.id.unwrap_or_default(),
                        name: user.name,
                        email: user.email,
                        role: user.role.unwrap_or(UserRole::User),
                        image: user.image,
                    })
                    .collect();
                HttpResponse::Ok().json(listing)
            }
            Err(err) => {
                eprintln!("Failed to collect users: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to fetch users")
            }
        },
        Err(err) => {
            eprintln!("Failed to fetch users: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch users")
        }
    }
}
