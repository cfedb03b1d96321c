use crate::otp::model::CredentialRecord;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// In-memory map of user id to that user's latest credential.
///
/// Holds at most one record per user and `insert` discards whatever was there.
/// A poisoned lock is recovered: writes only ever swap whole records.
#[derive(Debug, Default)]
pub struct OtpStore {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` for `user_id`, returning the record it replaced
    pub fn insert(&self, user_id: &str, record: CredentialRecord) -> Option<CredentialRecord> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(user_id.to_string(), record)
    }

    pub fn get(&self, user_id: &str) -> Option<CredentialRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.get(user_id).cloned()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(code: &str) -> CredentialRecord {
        CredentialRecord {
            code: code.to_string(),
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_replaces_previous_record() {
        let store = OtpStore::new();
        assert!(store.insert("user123", record("111111")).is_none());

        let replaced = store.insert("user123", record("222222")).unwrap();
        assert_eq!(replaced.code, "111111");
        assert_eq!(store.get("user123").unwrap().code, "222222");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_users_are_independent() {
        let store = OtpStore::new();
        store.insert("alice", record("123456"));
        store.insert("bob", record("654321"));

        assert_eq!(store.get("alice").unwrap().code, "123456");
        assert_eq!(store.get("bob").unwrap().code, "654321");
        assert!(!store.contains("carol"));
        assert!(store.get("carol").is_none());
    }
}
