//! # List controllers
//!
//! Plain state machines behind the two list screens. They hold no UI handles,
//! so they are tested directly and stored in a `Signal` by the views.
//!
//! | Type | Screen |
//! |------|--------|
//! | [`DirectoryListController`] | All directories, with search and a responsive column count. |
//! | [`MessageListController`] | Messages of one directory. |
//!
//! Both wrap a [`CrudList`] and implement [`ListController`], which supplies
//! the shared dialog operations and async drivers that run a whole
//! prepare → call → finish → reload sequence against a [`CrudService`].

mod crud;
mod directories;
mod filter;
mod messages;
#[cfg(test)]
pub(crate) mod testing;

pub use crud::{CrudList, DialogKind, DialogState, LoadTicket, Mutation, Notice, Request};
pub use directories::DirectoryListController;
pub use filter::filter_by_label;
pub use messages::MessageListController;

use store::{CrudService, Entity, EntityId, StoreResult};

/// Operations shared by both list screens.
#[allow(async_fn_in_trait)]
pub trait ListController {
    type Entity: Entity;
    type Scope: Clone;

    fn list(&self) -> &CrudList<Self::Entity>;

    fn list_mut(&mut self) -> &mut CrudList<Self::Entity>;

    /// Scope passed to every service call.
    fn scope(&self) -> Self::Scope;

    /// Hook run after a load replaced the items.
    fn items_replaced(&mut self) {}

    fn items(&self) -> &[Self::Entity] {
        self.list().items()
    }

    fn dialog(&self) -> &DialogState {
        self.list().dialog()
    }

    fn is_submitting(&self) -> bool {
        self.list().is_submitting()
    }

    fn notice(&self) -> Option<&Notice> {
        self.list().notice()
    }

    fn take_notice(&mut self) -> Option<Notice> {
        self.list_mut().take_notice()
    }

    fn begin_load(&mut self) -> LoadTicket {
        self.list_mut().begin_load()
    }

    fn finish_load(&mut self, ticket: LoadTicket, result: StoreResult<Vec<Self::Entity>>) -> bool {
        let applied = self.list_mut().finish_load(ticket, result);
        if applied {
            self.items_replaced();
        }
        applied
    }

    fn finish_mutation(&mut self, mutation: &Mutation, result: StoreResult<()>) -> Option<LoadTicket> {
        self.list_mut().finish_mutation(mutation, result)
    }

    fn open_create(&mut self) -> bool {
        self.list_mut().open_create()
    }

    fn open_edit(&mut self, entity: &Self::Entity) -> bool {
        self.list_mut().open_edit(entity)
    }

    fn request_delete(&mut self, id: EntityId) -> bool {
        self.list_mut().request_delete(id)
    }

    fn set_draft(&mut self, text: String) {
        self.list_mut().set_draft(text);
    }

    fn cancel(&mut self) {
        self.list_mut().cancel();
    }

    fn cancel_kind(&mut self, kind: DialogKind) {
        self.list_mut().cancel_kind(kind);
    }

    fn prepare_submit(&mut self, kind: DialogKind) -> Option<Mutation> {
        self.list_mut().prepare_submit(kind)
    }

    /// Fetch the whole collection and replace the items.
    async fn load<S>(&mut self, service: &S)
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let ticket = self.begin_load();
        let scope = self.scope();
        let result = service.get_all(&scope).await;
        self.finish_load(ticket, result);
    }

    /// Run a prepared mutation and the reload it triggers.
    ///
    /// Returns false when there was nothing to run.
    async fn apply<S>(&mut self, mutation: Option<Mutation>, service: &S) -> bool
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let Some(mutation) = mutation else {
            return false;
        };
        let scope = self.scope();
        let result = mutation.run(service, &scope).await;
        if let Some(ticket) = self.finish_mutation(&mutation, result) {
            let result = service.get_all(&self.scope()).await;
            self.finish_load(ticket, result);
        }
        true
    }

    /// Submit whichever dialog `kind` names.
    async fn submit<S>(&mut self, kind: DialogKind, service: &S) -> bool
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let mutation = self.prepare_submit(kind);
        self.apply(mutation, service).await
    }

    async fn submit_create<S>(&mut self, service: &S) -> bool
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let mutation = self.list_mut().prepare_create();
        self.apply(mutation, service).await
    }

    async fn submit_edit<S>(&mut self, service: &S) -> bool
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let mutation = self.list_mut().prepare_edit();
        self.apply(mutation, service).await
    }

    async fn confirm_delete<S>(&mut self, service: &S) -> bool
    where
        S: CrudService<Entity = Self::Entity, Scope = Self::Scope>,
    {
        let mutation = self.list_mut().prepare_delete();
        self.apply(mutation, service).await
    }
}
