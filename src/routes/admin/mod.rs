pub mod upload;

use actix_web::web;

use crate::middleware::auth::AuthMiddleware;
use crate::middleware::role_auth::RequireRole;
use crate::models::account::UserRole;
use crate::routes::account::role_management::{list_users_with_roles, update_user_role};
use crate::routes::{accommodation, attraction, location, page, transportation};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(AuthMiddleware)
            .route("/users", web::get().to(list_users_with_roles))
            .route("/update-role", web::post().to(update_user_role))
            .route("/upload-image", web::post().to(upload::upload_image))
            .route("/locations", web::get().to(location::get_locations))
            .route("/locations", web::post().to(location::create_location))
            .route("/locations/{id}", web::put().to(location::update_location))
            .route("/locations/{id}", web::delete().to(location::delete_location))
            .route("/attractions", web::get().to(attraction::get_attractions))
            .route("/attractions", web::post().to(attraction::create_attraction))
            .route("/attractions/{id}", web::put().to(attraction::update_attraction))
            .route(
                "/attractions/{id}",
                web::delete().to(attraction::delete_attraction),
            )
            .route(
                "/accommodations",
                web::get().to(accommodation::get_accommodations),
            )
            .route(
                "/accommodations",
                web::post().to(accommodation::create_accommodation),
            )
            .route(
                "/accommodations/{id}",
                web::put().to(accommodation::update_accommodation),
            )
            .route(
                "/accommodations/{id}",
                web::delete().to(accommodation::delete_accommodation),
            )
            .route(
                "/transportations",
                web::get().to(transportation::get_transportations),
            )
            .route(
                "/transportations",
                web::post().to(transportation::create_transportation),
            )
            .route(
                "/transportations/{id}",
                web::put().to(transportation::update_transportation),
            )
            .route(
                "/transportations/{id}",
                web::delete().to(transportation::delete_transportation),
            )
            .route("/pages", web::get().to(page::get_pages))
            .route("/pages", web::post().to(page::create_page))
            .route("/pages/{id}", web::put().to(page::update_page))
            .route("/pages/{id}", web::delete().to(page::delete_page)),
    );
}
