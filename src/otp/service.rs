use crate::otp::model::{CredentialRecord, ValidationOutcome, ValidationReason};
use crate::otp::store::OtpStore;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::error::CustomError;
use crate::utils::helpers::{
    DEFAULT_OTP_LENGTH, DigitSource, OTP_EXPIRATION_SECONDS, RandomDigits, generate_otp_code,
};
use chrono::TimeDelta;
use log::{debug, info, warn};

/// Issues numeric OTPs per user and checks them against an expiry window.
pub struct OtpManager {
    store: OtpStore,
    expiry_seconds: u64,
    expiry: TimeDelta,
    clock: Box<dyn Clock>,
    digits: Box<dyn DigitSource>,
}

impl OtpManager {
    /// Create a manager backed by the wall clock and the thread RNG
    pub fn new(expiry_seconds: u64) -> Self {
        Self::with_sources(expiry_seconds, Box::new(SystemClock), Box::new(RandomDigits))
    }

    /// Create a manager with explicit time and digit sources.
    ///
    /// An `expiry_seconds` of 0 is raised to 1 second.
    pub fn with_sources(
        expiry_seconds: u64,
        clock: Box<dyn Clock>,
        digits: Box<dyn DigitSource>,
    ) -> Self {
        let expiry_seconds = if expiry_seconds == 0 {
            warn!("OTP expiry of 0 seconds requested, using 1 second");
            1
        } else {
            expiry_seconds
        };
        let expiry = i64::try_from(expiry_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);

        OtpManager {
            store: OtpStore::new(),
            expiry_seconds,
            expiry,
            clock,
            digits,
        }
    }

    pub fn expiry_seconds(&self) -> u64 {
        self.expiry_seconds
    }

    /// Generate and store a fresh OTP for `user_id`, replacing any pending one
    pub fn issue(&self, user_id: &str, length: usize) -> Result<String, CustomError> {
        if length == 0 {
            return Err(CustomError::ValidationError(
                "OTP length must be at least 1".to_string(),
            ));
        }

        let code = generate_otp_code(self.digits.as_ref(), length);
        let record = CredentialRecord {
            code: code.clone(),
            issued_at: self.clock.now(),
        };

        let replaced = self.store.insert(user_id, record);
        info!(
            "Issued {}-digit OTP for user {} (replaced pending: {})",
            length,
            user_id,
            replaced.is_some()
        );
        debug!("{} users with a pending OTP", self.store.len());

        Ok(code)
    }

    /// Issue an OTP with the default length
    pub fn issue_default(&self, user_id: &str) -> Result<String, CustomError> {
        self.issue(user_id, DEFAULT_OTP_LENGTH)
    }

    /// Check `candidate` against the pending OTP for `user_id`.
    ///
    /// Rules apply in order: missing record, expired record, exact match,
    /// mismatch. A successful check does not consume the record.
    pub fn validate(&self, user_id: &str, candidate: &str) -> ValidationOutcome {
        let outcome = match self.store.get(user_id) {
            None => ValidationOutcome::rejected(ValidationReason::NoOtpIssued),
            Some(record) if self.clock.now() - record.issued_at > self.expiry => {
                ValidationOutcome::rejected(ValidationReason::Expired)
            }
            Some(record) if record.code == candidate => ValidationOutcome::accepted(),
            Some(_) => ValidationOutcome::rejected(ValidationReason::Invalid),
        };

        info!("OTP validation for user {}: {:?}", user_id, outcome.reason);

        outcome
    }

    /// Whether a record exists for `user_id`, expired or not
    pub fn has_pending(&self, user_id: &str) -> bool {
        self.store.contains(user_id)
    }
}

impl Default for OtpManager {
    fn default() -> Self {
        Self::new(OTP_EXPIRATION_SECONDS)
    }
}
