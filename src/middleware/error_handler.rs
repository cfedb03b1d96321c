use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, dev::ServiceResponse};
use serde_json::json;

/// Wrap framework errors (bad JSON, wrong method, ...) in the JSON envelope.
///
/// Responses that already carry a JSON body from `CustomError` pass through.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status_code = res.status();
    let error_message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| status_code.canonical_reason().unwrap_or("Unknown error").to_string());

    let new_response = HttpResponse::build(status_code).json(json!({
        "success": false,
        "message": error_message,
        "httpStatusCode": status_code.as_u16(),
        "error": status_code.canonical_reason().unwrap_or("Unknown"),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }));

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otp::{OtpManager, index::otp_routes};
    use actix_web::http::StatusCode;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_malformed_json_gets_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OtpManager::default()))
                .configure(otp_routes)
                .wrap(ErrorHandlers::new().default_handler(handle_error)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/otp/validate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["httpStatusCode"], 400);
    }

    #[actix_web::test]
    async fn test_custom_error_body_is_kept() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(OtpManager::default()))
                .configure(otp_routes)
                .wrap(ErrorHandlers::new().default_handler(handle_error)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/otp/issue")
            .set_json(serde_json::json!({ "user_id": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
