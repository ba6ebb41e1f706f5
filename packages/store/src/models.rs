//! # Domain models for directories and messages
//!
//! Defines the records handed out by every [`crate::CrudService`]. They are
//! `Serialize + Deserialize` because [`crate::FileStore`] snapshots them to disk,
//! and `Clone + PartialEq` because the UI keeps cached copies in signals and
//! passes them around as component props.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`EntityId`] | Opaque, stable identifier. Stored as a string; the reference stores allocate them from a counter. |
//! | [`Directory`] | A named folder. `name` is the user-editable field. |
//! | [`Message`] | A text entry that always belongs to one directory (`parent_id`). `text` is the user-editable field. |
//!
//! ## [`Entity`] trait
//!
//! The list controllers are generic over the record type. [`Entity`] exposes
//! what they need: the id, the editable field ([`Entity::label`]), the creation
//! time and a `KIND` noun used in log lines and user-facing notices.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a directory or message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A folder of messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub id: EntityId,
    /// Display name, non-blank.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A message stored under a directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    /// Owning directory.
    pub parent_id: EntityId,
    /// Body, non-blank.
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A record managed through a [`crate::CrudService`].
pub trait Entity: Clone + PartialEq + fmt::Debug {
    /// Lower-case noun for logs and notices: `"directory"`, `"message"`.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    /// The single user-editable text field.
    fn label(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

impl Entity for Directory {
    const KIND: &'static str = "directory";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Message {
    const KIND: &'static str = "message";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.text
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// True when `value` is empty or whitespace only.
///
/// Shared by the stores (which reject such values) and the controllers (which
/// never send them).
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_from_number() {
        assert_eq!(EntityId::from(7).as_str(), "7");
        assert_eq!(EntityId::from(7), EntityId::from("7"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_directory_serializes_camel_case() {
        let dir = Directory {
            id: EntityId::from(1),
            name: "Inbox".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Inbox");
        assert!(json.get("createdAt").is_some());
    }
}
