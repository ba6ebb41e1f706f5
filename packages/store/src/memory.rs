use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};
use crate::tables::{TableStore, Tables};

/// In-memory TableStore for tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Service("memory store lock poisoned".to_string())
}

impl TableStore for MemoryStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> StoreResult<R> {
        let tables = self.tables.lock().map_err(poisoned)?;
        Ok(f(&tables))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<R>) -> StoreResult<R> {
        let mut tables = self.tables.lock().map_err(poisoned)?;
        f(&mut tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;
    use crate::service::CrudService;

    #[tokio::test]
    async fn test_create_and_list_directories() {
        let store = MemoryStore::new();
        let dirs = store.directories();

        // Initially empty
        assert!(dirs.get_all(&()).await.unwrap().is_empty());

        dirs.create(&(), "Inbox").await.unwrap();
        dirs.create(&(), "Archive").await.unwrap();

        let all = dirs.get_all(&()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Inbox");
        assert_eq!(all[1].name, "Archive");
    }

    #[tokio::test]
    async fn test_rename_directory() {
        let store = MemoryStore::new();
        let dirs = store.directories();

        let inbox = dirs.create(&(), "Inbox").await.unwrap();
        let renamed = dirs.update(&(), &inbox.id, "Mail").await.unwrap();
        assert_eq!(renamed.id, inbox.id);
        assert_eq!(renamed.created_at, inbox.created_at);

        let all = dirs.get_all(&()).await.unwrap();
        assert_eq!(all[0].name, "Mail");
    }

    #[tokio::test]
    async fn test_update_missing_directory() {
        let store = MemoryStore::new();
        let dirs = store.directories();

        let err = dirs
            .update(&(), &EntityId::from(42), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "directory", .. }));
    }

    #[tokio::test]
    async fn test_delete_directory_cascades() {
        let store = MemoryStore::new();
        let dirs = store.directories();
        let msgs = store.messages();

        let inbox = dirs.create(&(), "Inbox").await.unwrap();
        let keep = dirs.create(&(), "Keep").await.unwrap();
        msgs.create(&inbox.id, "one").await.unwrap();
        msgs.create(&keep.id, "two").await.unwrap();

        dirs.delete(&(), &inbox.id).await.unwrap();

        assert!(msgs.get_all(&inbox.id).await.unwrap().is_empty());
        assert_eq!(msgs.get_all(&keep.id).await.unwrap().len(), 1);
        assert!(dirs.delete(&(), &inbox.id).await.is_err());
    }

    #[tokio::test]
    async fn test_message_crud() {
        let store = MemoryStore::new();
        let inbox = store.directories().create(&(), "Inbox").await.unwrap();
        let msgs = store.messages();

        let hello = msgs.create(&inbox.id, "hello").await.unwrap();
        assert_eq!(hello.parent_id, inbox.id);

        msgs.update(&inbox.id, &hello.id, "hello again").await.unwrap();
        let all = msgs.get_all(&inbox.id).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "hello again");

        msgs.delete(&inbox.id, &hello.id).await.unwrap();
        assert!(msgs.get_all(&inbox.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.directories().create(&(), "Shared").await.unwrap();
        assert_eq!(other.directories().get_all(&()).await.unwrap().len(), 1);
    }
}
