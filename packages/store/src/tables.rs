//! # Tables — the record set behind the reference stores
//!
//! [`Tables`] holds every directory and message plus the id counter, and
//! implements the CRUD rules once. Backends only decide *where* the tables
//! live, through the [`TableStore`] trait:
//!
//! - [`crate::MemoryStore`] keeps them behind an `Arc<Mutex<_>>`.
//! - [`crate::FileStore`] reads a JSON snapshot before each call and writes it
//!   back after each successful mutation.
//!
//! ## Rules
//!
//! | Rule | Error |
//! |------|-------|
//! | Name or text blank after trim | [`StoreError::Validation`] |
//! | Update/delete of an unknown id | [`StoreError::NotFound`] |
//! | Message created under an unknown directory | [`StoreError::NotFound`] |
//!
//! Ids come from a single counter shared by both tables, so they are unique
//! store-wide. Deleting a directory deletes its messages. Listing messages of
//! an unknown directory returns an empty list.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::{is_blank, Directory, Entity, EntityId, Message};
use crate::service::{Directories, Messages};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tables {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    directories: Vec<Directory>,
    #[serde(default)]
    messages: Vec<Message>,
}

impl Tables {
    fn allocate_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId::from(self.next_id)
    }

    fn not_found<E: Entity>(id: &EntityId) -> StoreError {
        StoreError::NotFound {
            kind: E::KIND,
            id: id.clone(),
        }
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    /// Messages of one directory, in insertion order.
    pub fn messages_in(&self, parent: &EntityId) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| &m.parent_id == parent)
            .cloned()
            .collect()
    }

    pub fn create_directory(&mut self, name: &str) -> StoreResult<Directory> {
        if is_blank(name) {
            return Err(StoreError::Validation { field: "name" });
        }
        let directory = Directory {
            id: self.allocate_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.directories.push(directory.clone());
        Ok(directory)
    }

    pub fn rename_directory(&mut self, id: &EntityId, name: &str) -> StoreResult<Directory> {
        if is_blank(name) {
            return Err(StoreError::Validation { field: "name" });
        }
        let directory = self
            .directories
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| Self::not_found::<Directory>(id))?;
        directory.name = name.to_string();
        Ok(directory.clone())
    }

    /// Remove a directory and every message under it.
    pub fn delete_directory(&mut self, id: &EntityId) -> StoreResult<()> {
        let before = self.directories.len();
        self.directories.retain(|d| &d.id != id);
        if self.directories.len() == before {
            return Err(Self::not_found::<Directory>(id));
        }
        self.messages.retain(|m| &m.parent_id != id);
        Ok(())
    }

    pub fn create_message(&mut self, parent: &EntityId, text: &str) -> StoreResult<Message> {
        if is_blank(text) {
            return Err(StoreError::Validation { field: "text" });
        }
        if !self.directories.iter().any(|d| &d.id == parent) {
            return Err(Self::not_found::<Directory>(parent));
        }
        let message = Message {
            id: self.allocate_id(),
            parent_id: parent.clone(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    pub fn edit_message(
        &mut self,
        parent: &EntityId,
        id: &EntityId,
        text: &str,
    ) -> StoreResult<Message> {
        if is_blank(text) {
            return Err(StoreError::Validation { field: "text" });
        }
        let message = self
            .messages
            .iter_mut()
            .find(|m| &m.parent_id == parent && &m.id == id)
            .ok_or_else(|| Self::not_found::<Message>(id))?;
        message.text = text.to_string();
        Ok(message.clone())
    }

    pub fn delete_message(&mut self, parent: &EntityId, id: &EntityId) -> StoreResult<()> {
        let before = self.messages.len();
        self.messages
            .retain(|m| !(&m.parent_id == parent && &m.id == id));
        if self.messages.len() == before {
            return Err(Self::not_found::<Message>(id));
        }
        Ok(())
    }
}

/// Where a set of [`Tables`] lives.
///
/// `read` gets shared access; `write` gets exclusive access and must persist
/// the tables only when the closure succeeds.
pub trait TableStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> StoreResult<R>;

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<R>) -> StoreResult<R>;

    /// Directory service backed by this store.
    fn directories(&self) -> Directories<Self>
    where
        Self: Clone + Sized,
    {
        Directories::new(self.clone())
    }

    /// Message service backed by this store.
    fn messages(&self) -> Messages<Self>
    where
        Self: Clone + Sized,
    {
        Messages::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_across_tables() {
        let mut tables = Tables::default();
        let dir = tables.create_directory("Inbox").unwrap();
        let msg = tables.create_message(&dir.id, "hello").unwrap();
        let other = tables.create_directory("Archive").unwrap();
        assert_eq!(dir.id, EntityId::from(1));
        assert_eq!(msg.id, EntityId::from(2));
        assert_eq!(other.id, EntityId::from(3));
    }

    #[test]
    fn test_blank_values_rejected() {
        let mut tables = Tables::default();
        assert_eq!(
            tables.create_directory("   "),
            Err(StoreError::Validation { field: "name" })
        );
        let dir = tables.create_directory("Inbox").unwrap();
        assert_eq!(
            tables.create_message(&dir.id, ""),
            Err(StoreError::Validation { field: "text" })
        );
        assert!(tables.directories().len() == 1);
    }

    #[test]
    fn test_message_ops_are_scoped_to_parent() {
        let mut tables = Tables::default();
        let a = tables.create_directory("A").unwrap();
        let b = tables.create_directory("B").unwrap();
        let msg = tables.create_message(&a.id, "in a").unwrap();

        assert!(matches!(
            tables.edit_message(&b.id, &msg.id, "moved"),
            Err(StoreError::NotFound { kind: "message", .. })
        ));
        assert!(tables.delete_message(&b.id, &msg.id).is_err());
        assert_eq!(tables.messages_in(&a.id).len(), 1);
        assert!(tables.messages_in(&b.id).is_empty());
    }

    #[test]
    fn test_message_under_unknown_directory() {
        let mut tables = Tables::default();
        let err = tables
            .create_message(&EntityId::from("nope"), "hi")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                kind: "directory",
                id: EntityId::from("nope"),
            }
        );
    }
}
