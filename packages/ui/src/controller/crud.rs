//! # CrudList — snapshot list plus modal CRUD workflow
//!
//! [`CrudList`] is the state both list screens share: the last applied
//! snapshot of the collection, the open dialog (if any), an in-flight flag and
//! the last user-facing [`Notice`].
//!
//! ## Dialogs
//!
//! [`DialogState`] is a single tagged value, so only one workflow can be open
//! and its draft or target travels with it:
//!
//! ```text
//!            open_create            prepare_create + Ok
//!   Closed ───────────────▶ Creating ────────────────────▶ Closed
//!     │  ▲      open_edit            prepare_edit + Ok
//!     │  └──── Editing ◀──────────────────────────────────── Closed
//!     │   request_delete          prepare_delete + Ok
//!     └──────▶ ConfirmingDelete ────────────────────────────▶ Closed
//! ```
//!
//! Every open state also returns to `Closed` on cancel. Opening while another
//! dialog is visible is ignored.
//!
//! ## Two-phase operations
//!
//! Service calls happen outside this type so it can live inside a UI signal
//! that must not stay borrowed across an `.await`:
//!
//! - `prepare_*` gates the request and hands back a [`Mutation`] to run, or
//!   `None` when there is nothing to send (blank draft, wrong dialog, a
//!   request already in flight).
//! - [`finish_mutation`](CrudList::finish_mutation) applies the outcome and,
//!   when a reload is due, returns its [`LoadTicket`].
//! - [`begin_load`](CrudList::begin_load) / [`finish_load`](CrudList::finish_load)
//!   bracket a `get_all`. Tickets are numbered; a response is applied only if
//!   it is newer than the last one applied, so overlapping reloads can never
//!   land out of order.
//!
//! A [`Mutation`] records which dialog opening it came from and the reset
//! epoch it was prepared in. Finishing it closes only that dialog, and after a
//! [`reset`](CrudList::reset) it changes nothing at all.

use store::models::is_blank;
use store::{CrudService, Entity, EntityId, StoreError, StoreResult};
use tracing::{debug, info, warn};

use crate::activity_log::LogLevel;

/// Which dialog a user event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Create,
    Edit,
    Delete,
}

/// The open modal workflow, owning its scratch state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Creating {
        draft: String,
    },
    Editing {
        id: EntityId,
        draft: String,
    },
    ConfirmingDelete {
        id: EntityId,
    },
}

impl DialogState {
    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            DialogState::Closed => None,
            DialogState::Creating { .. } => Some(DialogKind::Create),
            DialogState::Editing { .. } => Some(DialogKind::Edit),
            DialogState::ConfirmingDelete { .. } => Some(DialogKind::Delete),
        }
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Text bound to the open create/edit form.
    pub fn draft(&self) -> Option<&str> {
        match self {
            DialogState::Creating { draft } | DialogState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn edit_target(&self) -> Option<&EntityId> {
        match self {
            DialogState::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<&EntityId> {
        match self {
            DialogState::ConfirmingDelete { id } => Some(id),
            _ => None,
        }
    }
}

/// The service call a [`Mutation`] carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Create { value: String },
    Update { id: EntityId, value: String },
    Delete { id: EntityId },
}

impl Request {
    /// Send this request to `service`, discarding the returned entity.
    pub async fn run<S: CrudService>(&self, service: &S, scope: &S::Scope) -> StoreResult<()> {
        match self {
            Request::Create { value } => service.create(scope, value).await.map(drop),
            Request::Update { id, value } => service.update(scope, id, value).await.map(drop),
            Request::Delete { id } => service.delete(scope, id).await,
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Request::Create { .. } => "create",
            Request::Update { .. } => "save",
            Request::Delete { .. } => "delete",
        }
    }

    fn done(&self) -> &'static str {
        match self {
            Request::Create { .. } => "Created",
            Request::Update { .. } => "Saved",
            Request::Delete { .. } => "Deleted",
        }
    }
}

/// A service call decided by the controller, stamped with the dialog it was
/// prepared from and the list epoch it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    request: Request,
    dialog: u64,
    epoch: u64,
}

impl Mutation {
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub async fn run<S: CrudService>(&self, service: &S, scope: &S::Scope) -> StoreResult<()> {
        self.request.run(service, scope).await
    }
}

/// Generation stamp of a load request.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// User-facing outcome of the last operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: LogLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
        }
    }
}

/// Snapshot of a collection plus its dialog workflow.
#[derive(Clone, Debug)]
pub struct CrudList<E> {
    items: Vec<E>,
    dialog: DialogState,
    /// Bumped on every open; the open dialog carries the latest value.
    opened: u64,
    /// Bumped on every reset.
    epoch: u64,
    submitting: bool,
    issued: u64,
    applied: u64,
    notice: Option<Notice>,
}

impl<E> Default for CrudList<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dialog: DialogState::Closed,
            opened: 0,
            epoch: 0,
            submitting: false,
            issued: 0,
            applied: 0,
            notice: None,
        }
    }
}

impl<E: Entity> CrudList<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// True while a prepared mutation has not been finished.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Drop all state and invalidate every load and mutation issued so far.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.items.clear();
        self.dialog = DialogState::Closed;
        self.submitting = false;
        self.notice = None;
        self.applied = self.issued;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        debug!(kind = E::KIND, generation = self.issued, "load issued");
        LoadTicket(self.issued)
    }

    /// Apply a `get_all` result. Returns false when the response is stale.
    ///
    /// A failed load leaves the collection empty.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: StoreResult<Vec<E>>) -> bool {
        if ticket.0 <= self.applied {
            debug!(
                kind = E::KIND,
                generation = ticket.0,
                applied = self.applied,
                "discarding stale load"
            );
            return false;
        }
        self.applied = ticket.0;
        match result {
            Ok(items) => {
                debug!(kind = E::KIND, generation = ticket.0, count = items.len(), "load applied");
                self.items = items;
            }
            Err(err) => {
                warn!(kind = E::KIND, error = %err, "load failed");
                self.items.clear();
                self.notice = Some(Notice::error(format!("Couldn't load {} list: {err}", E::KIND)));
            }
        }
        true
    }

    fn open(&mut self, next: DialogState) -> bool {
        if self.dialog != DialogState::Closed {
            debug!(kind = E::KIND, open = ?self.dialog.kind(), "dialog already open");
            return false;
        }
        self.opened += 1;
        self.dialog = next;
        true
    }

    pub fn open_create(&mut self) -> bool {
        self.open(DialogState::Creating {
            draft: String::new(),
        })
    }

    pub fn open_edit(&mut self, entity: &E) -> bool {
        self.open(DialogState::Editing {
            id: entity.id().clone(),
            draft: entity.label().to_string(),
        })
    }

    pub fn request_delete(&mut self, id: EntityId) -> bool {
        self.open(DialogState::ConfirmingDelete { id })
    }

    /// Replace the draft of the open create/edit form.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        match &mut self.dialog {
            DialogState::Creating { draft } | DialogState::Editing { draft, .. } => {
                *draft = text.into();
            }
            _ => {}
        }
    }

    pub fn cancel(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Cancel only if `kind` is the open dialog.
    pub fn cancel_kind(&mut self, kind: DialogKind) {
        if self.dialog.is_open(kind) {
            self.cancel();
        }
    }

    pub fn prepare_create(&mut self) -> Option<Mutation> {
        if self.submitting {
            return None;
        }
        let DialogState::Creating { draft } = &self.dialog else {
            return None;
        };
        if is_blank(draft) {
            return None;
        }
        let request = Request::Create {
            value: draft.clone(),
        };
        Some(self.stamp(request))
    }

    pub fn prepare_edit(&mut self) -> Option<Mutation> {
        if self.submitting {
            return None;
        }
        let DialogState::Editing { id, draft } = &self.dialog else {
            return None;
        };
        if is_blank(draft) {
            return None;
        }
        let request = Request::Update {
            id: id.clone(),
            value: draft.clone(),
        };
        Some(self.stamp(request))
    }

    pub fn prepare_delete(&mut self) -> Option<Mutation> {
        if self.submitting {
            return None;
        }
        let DialogState::ConfirmingDelete { id } = &self.dialog else {
            return None;
        };
        let request = Request::Delete { id: id.clone() };
        Some(self.stamp(request))
    }

    fn stamp(&mut self, request: Request) -> Mutation {
        self.submitting = true;
        Mutation {
            request,
            dialog: self.opened,
            epoch: self.epoch,
        }
    }

    /// Whether the open dialog is the one `mutation` was prepared from.
    fn owns_dialog(&self, mutation: &Mutation) -> bool {
        self.dialog != DialogState::Closed && mutation.dialog == self.opened
    }

    pub fn prepare_submit(&mut self, kind: DialogKind) -> Option<Mutation> {
        match kind {
            DialogKind::Create => self.prepare_create(),
            DialogKind::Edit => self.prepare_edit(),
            DialogKind::Delete => self.prepare_delete(),
        }
    }

    /// Apply the outcome of a prepared mutation.
    ///
    /// Success closes the dialog and asks for a reload. `NotFound` does the
    /// same, since the snapshot is stale. Any other failure keeps the dialog
    /// and its draft so the user can retry. Only the dialog the mutation was
    /// prepared from is ever closed, and a mutation from before the last
    /// [`reset`](CrudList::reset) is ignored entirely.
    pub fn finish_mutation(
        &mut self,
        mutation: &Mutation,
        result: StoreResult<()>,
    ) -> Option<LoadTicket> {
        let request = &mutation.request;
        if mutation.epoch != self.epoch {
            debug!(kind = E::KIND, action = request.action(), "discarding mutation from before reset");
            return None;
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                info!(kind = E::KIND, action = request.action(), "mutation applied");
                if self.owns_dialog(mutation) {
                    self.dialog = DialogState::Closed;
                }
                self.notice = Some(Notice::success(format!("{} {}", request.done(), E::KIND)));
                Some(self.begin_load())
            }
            Err(StoreError::NotFound { kind, id }) => {
                warn!(kind = E::KIND, action = request.action(), missing = kind, %id, "target vanished");
                if self.owns_dialog(mutation) {
                    self.dialog = DialogState::Closed;
                }
                self.notice = Some(Notice::warning(format!("That {kind} no longer exists")));
                Some(self.begin_load())
            }
            Err(err) => {
                warn!(kind = E::KIND, action = request.action(), error = %err, "mutation failed");
                self.notice = Some(Notice::error(format!(
                    "Couldn't {} {}: {err}",
                    request.action(),
                    E::KIND
                )));
                None
            }
        }
    }
}
