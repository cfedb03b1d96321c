use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pending credential for one user. Replaced wholesale on re-issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

/// Why a validation attempt succeeded or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    NoOtpIssued,
    Expired,
    Validated,
    Invalid,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationReason::NoOtpIssued => write!(f, "No OTP generated for this user."),
            ValidationReason::Expired => write!(f, "OTP expired."),
            ValidationReason::Validated => write!(f, "OTP validated successfully."),
            ValidationReason::Invalid => write!(f, "Invalid OTP."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub reason: ValidationReason,
}

impl ValidationOutcome {
    pub fn rejected(reason: ValidationReason) -> Self {
        Self {
            valid: false,
            reason,
        }
    }

    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: ValidationReason::Validated,
        }
    }
}

#[derive(Deserialize)]
pub struct IssueOtpRequest {
    pub user_id: String,
    pub length: Option<usize>,
}

#[derive(Deserialize)]
pub struct ValidateOtpRequest {
    pub user_id: String,
    pub otp: String,
}
