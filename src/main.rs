use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

mod middleware;
mod otp;
mod router;
mod utils;
use middleware::error_handler::handle_error;
use middleware::not_found::not_found;
use otp::OtpManager;
use router::index::routes;
use serde_json::json;
use utils::config::AppConfig;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "OTP service is running",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // One manager shared by every worker
    let otp_manager = web::Data::new(OtpManager::new(config.otp_expiry_seconds));

    info!(
        "Starting server on http://{}:{} (OTP expiry: {}s)",
        config.host, config.port, config.otp_expiry_seconds
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(otp_manager.clone())
            .configure(routes)
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, not_found)
                    .default_handler(handle_error),
            )
            .service(default)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
