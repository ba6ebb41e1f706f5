//! Glue between a controller held in a `Signal` and the async service.
//!
//! The signal is only borrowed between awaits, never across one. Notices the
//! controller raises are handed to `notify` and cleared.

use dioxus::prelude::*;
use store::{CrudService, StoreResult};

use crate::controller::{DialogKind, ListController, LoadTicket, Mutation, Notice};

/// Fetch the collection in the background and apply it if still current.
pub(crate) fn spawn_load<C, S>(mut controller: Signal<C>, service: S, notify: Callback<Notice>)
where
    C: ListController + 'static,
    C::Entity: 'static,
    C::Scope: 'static,
    S: CrudService<Entity = C::Entity, Scope = C::Scope> + 'static,
{
    let ticket = controller.write().begin_load();
    let scope = controller.peek().scope();
    spawn(async move {
        let result = service.get_all(&scope).await;
        finish_load(controller, ticket, result, notify);
    });
}

fn finish_load<C: ListController + 'static>(
    mut controller: Signal<C>,
    ticket: LoadTicket,
    result: StoreResult<Vec<C::Entity>>,
    notify: Callback<Notice>,
) {
    let mut state = controller.write();
    if state.finish_load(ticket, result) {
        let notice = state.take_notice();
        drop(state);
        if let Some(notice) = notice {
            notify.call(notice);
        }
    }
}

/// Gate the open dialog's request and, if one is due, run it in the background.
pub(crate) fn spawn_submit<C, S>(
    mut controller: Signal<C>,
    service: S,
    kind: DialogKind,
    notify: Callback<Notice>,
) where
    C: ListController + 'static,
    C::Entity: 'static,
    C::Scope: 'static,
    S: CrudService<Entity = C::Entity, Scope = C::Scope> + 'static,
{
    let mutation = controller.write().prepare_submit(kind);
    if let Some(mutation) = mutation {
        spawn_mutation(controller, service, mutation, notify);
    }
}

fn spawn_mutation<C, S>(
    mut controller: Signal<C>,
    service: S,
    mutation: Mutation,
    notify: Callback<Notice>,
) where
    C: ListController + 'static,
    C::Entity: 'static,
    C::Scope: 'static,
    S: CrudService<Entity = C::Entity, Scope = C::Scope> + 'static,
{
    let scope = controller.peek().scope();
    spawn(async move {
        let result = mutation.run(&service, &scope).await;
        let (reload, notice) = {
            let mut state = controller.write();
            let reload = state.finish_mutation(&mutation, result);
            (reload, state.take_notice())
        };
        if let Some(notice) = notice {
            notify.call(notice);
        }
        if let Some(ticket) = reload {
            // The list may have been re-scoped while the mutation ran.
            let scope = controller.peek().scope();
            let result = service.get_all(&scope).await;
            finish_load(controller, ticket, result, notify);
        }
    });
}
