use crate::otp::model::{IssueOtpRequest, ValidateOtpRequest};
use crate::otp::service::OtpManager;
use crate::utils::error::CustomError;
use crate::utils::helpers::MAX_OTP_LENGTH;
use actix_web::{HttpResponse, web};

fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

pub async fn issue_otp(
    otp_manager: web::Data<OtpManager>,
    request: web::Json<IssueOtpRequest>,
) -> Result<HttpResponse, CustomError> {
    let request = request.into_inner();

    if request.user_id.trim().is_empty() {
        return Err(CustomError::ValidationError("user_id is required".into()));
    }

    let had_pending = otp_manager.has_pending(&request.user_id);
    let otp = match request.length {
        Some(length) if length > MAX_OTP_LENGTH => {
            return Err(CustomError::ValidationError(format!(
                "OTP length must not exceed {}",
                MAX_OTP_LENGTH
            )));
        }
        Some(length) => otp_manager.issue(&request.user_id, length)?,
        None => otp_manager.issue_default(&request.user_id)?,
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "OTP issued successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "otp": otp,
        "expires_in": otp_manager.expiry_seconds(),
        "replaced_pending": had_pending,
    })))
}

/// Every validation outcome is a 200; `success` carries the verdict
pub async fn validate_otp(
    otp_manager: web::Data<OtpManager>,
    request: web::Json<ValidateOtpRequest>,
) -> Result<HttpResponse, CustomError> {
    let outcome = otp_manager.validate(&request.user_id, &request.otp);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": outcome.valid,
        "message": outcome.reason.to_string(),
        "reason": outcome.reason,
        "httpStatusCode": 200,
        "service": service_name(),
    })))
}
