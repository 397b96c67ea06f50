use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Turn {
    User {
        text: String,
        #[serde(deserialize_with = "crate::conversation::deserializers::deserialize_timestamp")]
        timestamp: DateTime<Utc>,
        #[serde(
            rename = "sessionId",
            deserialize_with = "crate::conversation::deserializers::deserialize_session_id"
        )]
        session_id: String,
    },
    Assistant {
        content: ContentRecord,
        #[serde(deserialize_with = "crate::conversation::deserializers::deserialize_timestamp")]
        timestamp: DateTime<Utc>,
        #[serde(
            rename = "sessionId",
            deserialize_with = "crate::conversation::deserializers::deserialize_session_id"
        )]
        session_id: String,
    },
}

impl Turn {
    pub fn user(text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Turn::User { text: text.into(), timestamp: Utc::now(), session_id: session_id.into() }
    }

    pub fn assistant(content: ContentRecord, session_id: impl Into<String>) -> Self {
        Turn::Assistant { content, timestamp: Utc::now(), session_id: session_id.into() }
    }

    pub fn role(&self) -> Role {
        match self {
            Turn::User { .. } => Role::User,
            Turn::Assistant { .. } => Role::Assistant,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Turn::User { timestamp, .. } | Turn::Assistant { timestamp, .. } => *timestamp,
        }
    }

    pub fn session_id(&self) -> &str {
        match self {
            Turn::User { session_id, .. } | Turn::Assistant { session_id, .. } => session_id,
        }
    }

    pub fn content(&self) -> Option<&ContentRecord> {
        match self {
            Turn::User { .. } => None,
            Turn::Assistant { content, .. } => Some(content),
        }
    }
}
