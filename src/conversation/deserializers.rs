//! Field deserializers for persisted [`Turn`](crate::models::Turn)s.
//!
//! Turns are written with RFC3339 timestamps, but logs exported from other tools store
//! epoch milliseconds, so both are read.

use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    EpochMillis(i64),
    Rfc3339(String),
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = StoredTimestamp::deserialize(deserializer).map_err(|_| {
        D::Error::custom("timestamp must be epoch milliseconds or an RFC3339 string")
    })?;
    match stored {
        StoredTimestamp::EpochMillis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| Error::custom(format!("timestamp {} out of range", ms))),
        StoredTimestamp::Rfc3339(text) => DateTime::parse_from_rfc3339(&text)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp '{}': {}", text, e))),
    }
}

/// Session ids are kept as text but must parse as a UUID
pub fn deserialize_session_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(Error::custom("session ID cannot be empty"));
    }
    match Uuid::parse_str(&id) {
        Ok(_) => Ok(id),
        Err(e) => Err(Error::custom(format!("invalid UUID format for session ID: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::Turn;

    #[test]
    fn test_turn_timestamp_integer() {
        let json = r#"{
            "role": "user",
            "text": "where is the expense policy",
            "timestamp": 1762076480016,
            "sessionId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;

        let turn: Turn = serde_json::from_str(json).unwrap();
        let expected_ts = DateTime::from_timestamp_millis(1762076480016).unwrap();
        assert_eq!(turn.timestamp(), expected_ts);
    }

    #[test]
    fn test_turn_timestamp_rfc3339() {
        let json = r#"{
            "role": "user",
            "text": "hello",
            "timestamp": "2025-11-02T09:41:20.016Z",
            "sessionId": "550e8400-e29b-41d4-a716-446655440001"
        }"#;

        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.session_id(), "550e8400-e29b-41d4-a716-446655440001");
    }

    #[test]
    fn test_turn_rejects_bad_session_id() {
        let json = r#"{
            "role": "user",
            "text": "hello",
            "timestamp": 1762076480016,
            "sessionId": "not-a-uuid"
        }"#;

        let err = serde_json::from_str::<Turn>(json).unwrap_err();
        assert!(err.to_string().contains("invalid UUID format"));
    }

    #[test]
    fn test_turn_rejects_empty_session_id() {
        let json = r#"{"role": "user", "text": "x", "timestamp": 1, "sessionId": ""}"#;
        let err = serde_json::from_str::<Turn>(json).unwrap_err();
        assert!(err.to_string().contains("session ID cannot be empty"));
    }

    #[test]
    fn test_turn_rejects_non_rfc3339_string() {
        let json = r#"{
            "role": "user",
            "text": "x",
            "timestamp": "yesterday",
            "sessionId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;
        let err = serde_json::from_str::<Turn>(json).unwrap_err();
        assert!(err.to_string().contains("invalid RFC3339 timestamp 'yesterday'"));
    }

    #[test]
    fn test_turn_rejects_boolean_timestamp() {
        let json = r#"{
            "role": "user",
            "text": "x",
            "timestamp": true,
            "sessionId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;
        assert!(serde_json::from_str::<Turn>(json).is_err());
    }
}
