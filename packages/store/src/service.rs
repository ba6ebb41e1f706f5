//! # CrudService — the persistence capability consumed by the UI
//!
//! [`CrudService`] is an async interface with four methods over one entity
//! type. A `Scope` parameter carries the context every call needs: `()` for
//! directories, the parent directory id for messages. The two instantiations
//! get names of their own, [`DirectoryService`] and [`MessageService`], via
//! blanket impls.
//!
//! Futures are not required to be `Send`; the UI drives them on a
//! single-threaded executor.
//!
//! [`Directories`] and [`Messages`] adapt any [`TableStore`] to this trait.

use std::future::Future;

use crate::error::StoreResult;
use crate::models::{Directory, Entity, EntityId, Message};
use crate::tables::TableStore;

/// Async CRUD over one entity type.
pub trait CrudService {
    type Entity: Entity;
    type Scope: Clone;

    /// Every entity in the scope, in insertion order.
    fn get_all(
        &self,
        scope: &Self::Scope,
    ) -> impl Future<Output = StoreResult<Vec<Self::Entity>>>;

    /// Create an entity whose editable field is `value`.
    fn create(
        &self,
        scope: &Self::Scope,
        value: &str,
    ) -> impl Future<Output = StoreResult<Self::Entity>>;

    /// Replace the editable field of `id`.
    fn update(
        &self,
        scope: &Self::Scope,
        id: &EntityId,
        value: &str,
    ) -> impl Future<Output = StoreResult<Self::Entity>>;

    fn delete(
        &self,
        scope: &Self::Scope,
        id: &EntityId,
    ) -> impl Future<Output = StoreResult<()>>;
}

/// CRUD over directories.
pub trait DirectoryService: CrudService<Entity = Directory, Scope = ()> {}

impl<T: CrudService<Entity = Directory, Scope = ()>> DirectoryService for T {}

/// CRUD over the messages of one directory.
pub trait MessageService: CrudService<Entity = Message, Scope = EntityId> {}

impl<T: CrudService<Entity = Message, Scope = EntityId>> MessageService for T {}

/// Directory service over a [`TableStore`].
#[derive(Clone, Debug)]
pub struct Directories<B> {
    backend: B,
}

impl<B> Directories<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: TableStore> CrudService for Directories<B> {
    type Entity = Directory;
    type Scope = ();

    async fn get_all(&self, _scope: &()) -> StoreResult<Vec<Directory>> {
        self.backend.read(|t| t.directories().to_vec())
    }

    async fn create(&self, _scope: &(), value: &str) -> StoreResult<Directory> {
        self.backend.write(|t| t.create_directory(value))
    }

    async fn update(&self, _scope: &(), id: &EntityId, value: &str) -> StoreResult<Directory> {
        self.backend.write(|t| t.rename_directory(id, value))
    }

    async fn delete(&self, _scope: &(), id: &EntityId) -> StoreResult<()> {
        self.backend.write(|t| t.delete_directory(id))
    }
}

/// Message service over a [`TableStore`].
#[derive(Clone, Debug)]
pub struct Messages<B> {
    backend: B,
}

impl<B> Messages<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: TableStore> CrudService for Messages<B> {
    type Entity = Message;
    type Scope = EntityId;

    async fn get_all(&self, parent: &EntityId) -> StoreResult<Vec<Message>> {
        self.backend.read(|t| t.messages_in(parent))
    }

    async fn create(&self, parent: &EntityId, value: &str) -> StoreResult<Message> {
        self.backend.write(|t| t.create_message(parent, value))
    }

    async fn update(&self, parent: &EntityId, id: &EntityId, value: &str) -> StoreResult<Message> {
        self.backend.write(|t| t.edit_message(parent, id, value))
    }

    async fn delete(&self, parent: &EntityId, id: &EntityId) -> StoreResult<()> {
        self.backend.write(|t| t.delete_message(parent, id))
    }
}
