use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tourdesk_api::{db, routes};

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
    println!("Got MongoDB URI, attempting connection...");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

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
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/pricing")
                            .route("/quote", web::post().to(routes::pricing::quote)),
                    )
                    .service(
                        web::scope("/rates")
                            .route("/hotel", web::get().to(routes::rates::get_hotel_rates))
                            .route(
                                "/transport",
                                web::get().to(routes::rates::get_transport_rates),
                            ),
                    )
                    .service(
                        web::scope("/variants")
                            .route("", web::get().to(routes::variants::get_variants))
                            .route(
                                "/{variant_id}/hotel-mappings",
                                web::get().to(routes::variants::get_hotel_mappings),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
