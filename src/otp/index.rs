use super::controller::{issue_otp, validate_otp};
use actix_web::web;

pub fn otp_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/otp")
            .route("/issue", web::post().to(issue_otp))
            .route("/validate", web::post().to(validate_otp)),
    );
}
