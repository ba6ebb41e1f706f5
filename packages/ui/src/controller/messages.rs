use store::{EntityId, Message};
use tracing::info;

use super::{CrudList, ListController};

/// State of the message screen, scoped to one directory.
#[derive(Clone, Debug)]
pub struct MessageListController {
    parent: EntityId,
    list: CrudList<Message>,
}

impl MessageListController {
    pub fn new(parent: EntityId) -> Self {
        Self {
            parent,
            list: CrudList::new(),
        }
    }

    pub fn parent(&self) -> &EntityId {
        &self.parent
    }

    /// Re-scope to another directory.
    ///
    /// Clears the list and drops any load still in flight for the previous
    /// directory. Returns false if `parent` is already the scope; otherwise the
    /// caller should load.
    pub fn set_parent(&mut self, parent: EntityId) -> bool {
        if parent == self.parent {
            return false;
        }
        info!(from = %self.parent, to = %parent, "message list re-scoped");
        self.parent = parent;
        self.list.reset();
        true
    }
}

impl ListController for MessageListController {
    type Entity = Message;
    type Scope = EntityId;

    fn list(&self) -> &CrudList<Message> {
        &self.list
    }

    fn list_mut(&mut self) -> &mut CrudList<Message> {
        &mut self.list
    }

    fn scope(&self) -> EntityId {
        self.parent.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::{message_service, msg, Call};
    use crate::controller::{DialogKind, DialogState};

    fn inbox() -> EntityId {
        EntityId::from("inbox")
    }

    #[tokio::test]
    async fn test_load_is_scoped_to_parent() {
        let service = message_service();
        service.serve(vec![msg(1, &inbox(), "hello")]);
        let mut controller = MessageListController::new(inbox());

        controller.load(&service).await;

        assert_eq!(controller.items(), &[msg(1, &inbox(), "hello")]);
        assert_eq!(service.scopes(), vec![inbox()]);
    }

    #[tokio::test]
    async fn test_crud_calls_carry_parent() {
        let service = message_service();
        let mut controller = MessageListController::new(inbox());

        controller.open_create();
        controller.set_draft("hello".to_string());
        service.serve(vec![msg(1, &inbox(), "hello")]);
        controller.submit_create(&service).await;

        controller.open_edit(&msg(1, &inbox(), "hello"));
        controller.set_draft("hello there".to_string());
        controller.submit_edit(&service).await;

        controller.request_delete(EntityId::from(1));
        controller.confirm_delete(&service).await;

        assert_eq!(
            service.calls(),
            vec![
                Call::Create("hello".into()),
                Call::GetAll,
                Call::Update(EntityId::from(1), "hello there".into()),
                Call::GetAll,
                Call::Delete(EntityId::from(1)),
                Call::GetAll,
            ]
        );
        assert!(service.scopes().iter().all(|s| s == &inbox()));
        assert_eq!(controller.dialog(), &DialogState::Closed);
    }

    #[tokio::test]
    async fn test_multiline_draft_is_sent_verbatim() {
        let service = message_service();
        let mut controller = MessageListController::new(inbox());
        controller.open_create();
        controller.set_draft("line one\nline two\n".to_string());
        controller.submit_create(&service).await;
        assert_eq!(service.calls()[0], Call::Create("line one\nline two\n".into()));
    }

    #[tokio::test]
    async fn test_whitespace_text_is_rejected_locally() {
        let service = message_service();
        let mut controller = MessageListController::new(inbox());
        controller.open_create();
        controller.set_draft("\n\t ".to_string());
        assert!(!controller.submit_create(&service).await);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_set_parent_resets_and_discards_old_load() {
        let service = message_service();
        let mut controller = MessageListController::new(inbox());
        service.serve(vec![msg(1, &inbox(), "hello")]);
        controller.load(&service).await;

        let in_flight = controller.begin_load();
        controller.open_create();

        assert!(controller.set_parent(EntityId::from("archive")));
        assert!(controller.items().is_empty());
        assert_eq!(controller.dialog(), &DialogState::Closed);
        assert!(!controller.finish_load(in_flight, Ok(vec![msg(1, &inbox(), "hello")])));

        service.serve(vec![]);
        controller.load(&service).await;
        assert_eq!(service.scopes().last(), Some(&EntityId::from("archive")));
    }

    #[tokio::test]
    async fn test_set_parent_drops_mutation_in_flight() {
        let service = message_service();
        let mut controller = MessageListController::new(inbox());
        controller.open_create();
        controller.set_draft("hello".to_string());
        let mutation = controller.prepare_submit(DialogKind::Create).unwrap();
        let result = mutation.run(&service, &controller.scope()).await;

        controller.set_parent(EntityId::from("archive"));

        assert!(controller.finish_mutation(&mutation, result).is_none());
        assert!(controller.items().is_empty());
        assert_eq!(controller.notice(), None);
        assert_eq!(controller.dialog(), &DialogState::Closed);
        assert_eq!(controller.scope(), EntityId::from("archive"));
    }

    #[test]
    fn test_set_parent_same_is_noop() {
        let mut controller = MessageListController::new(inbox());
        controller.open_create();
        assert!(!controller.set_parent(inbox()));
        assert!(controller.dialog().is_open(DialogKind::Create));
    }
}
