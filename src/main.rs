use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use saffarlog_api::{db, middleware, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    // Static planner reference data, shared read-only across all workers
    let catalog = web::Data::new(db::regions::pakistan_catalog());
    println!("Region catalog loaded: {} regions", catalog.regions().len());

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(catalog.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    // Public routes
                    .service(
                        web::scope("/auth")
                            .route("/register", web::post().to(routes::account::auth::register))
                            .route("/signin", web::post().to(routes::account::auth::signin))
                            .service(
                                web::scope("").wrap(middleware::auth::AuthMiddleware).route(
                                    "/session",
                                    web::get().to(routes::account::auth::user_session),
                                ),
                            ),
                    )
                    .service(
                        web::scope("/planner")
                            .route("/estimate", web::post().to(routes::planner::estimate))
                            .route("/itinerary", web::post().to(routes::planner::itinerary)),
                    )
                    .service(
                        web::scope("/account")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route("/profile", web::get().to(routes::account::profile::get_profile))
                            .route(
                                "/profile",
                                web::put().to(routes::account::profile::update_profile),
                            )
                            .route(
                                "/password",
                                web::put().to(routes::account::profile::change_password),
                            )
                            .route(
                                "",
                                web::delete().to(routes::account::profile::delete_account),
                            )
                            .route("/trips", web::get().to(routes::trip::get_trips))
                            .route("/trips", web::post().to(routes::trip::create_trip))
                            .route("/trips/{id}", web::delete().to(routes::trip::delete_trip))
                            .route(
                                "/preferences",
                                web::get().to(routes::trip::get_preferences),
                            ),
                    )
                    .configure(routes::admin::config)
                    .route("/locations", web::get().to(routes::location::get_locations))
                    .route(
                        "/attractions",
                        web::get().to(routes::attraction::get_attractions),
                    )
                    .route(
                        "/accommodations",
                        web::get().to(routes::accommodation::get_accommodations),
                    )
                    .route(
                        "/transportations",
                        web::get().to(routes::transportation::get_transportations),
                    )
                    .route("/pages/{page}", web::get().to(routes::page::get_page))
                    .route("/chat", web::post().to(routes::chat::chat))
                    .route(
                        "/assistant",
                        web::post().to(routes::assistant::chat_completion),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
