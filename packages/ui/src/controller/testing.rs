//! Recording service double for controller tests.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use store::{CrudService, Directory, Entity, EntityId, Message, StoreError, StoreResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    GetAll,
    Create(String),
    Update(EntityId, String),
    Delete(EntityId),
}

/// Serves a fixed snapshot and records every call with its scope.
pub(crate) struct FakeService<E, Sc> {
    snapshot: RefCell<Vec<E>>,
    calls: RefCell<Vec<(Call, Sc)>>,
    fail_loads: RefCell<bool>,
    fail_next: RefCell<Option<StoreError>>,
    make: fn(&Sc, EntityId, &str) -> E,
}

impl<E: Entity, Sc: Clone> FakeService<E, Sc> {
    fn new(make: fn(&Sc, EntityId, &str) -> E) -> Self {
        Self {
            snapshot: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            fail_loads: RefCell::new(false),
            fail_next: RefCell::new(None),
            make,
        }
    }

    /// What `get_all` returns from now on.
    pub(crate) fn serve(&self, items: Vec<E>) {
        *self.snapshot.borrow_mut() = items;
    }

    pub(crate) fn fail_loads(&self, fail: bool) {
        *self.fail_loads.borrow_mut() = fail;
    }

    /// Make the next create/update/delete fail with `err`.
    pub(crate) fn fail_next(&self, err: StoreError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    pub(crate) fn scopes(&self) -> Vec<Sc> {
        self.calls.borrow().iter().map(|(_, s)| s.clone()).collect()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|(c, _)| c == call).count()
    }

    fn record(&self, call: Call, scope: &Sc) {
        self.calls.borrow_mut().push((call, scope.clone()));
    }

    fn take_failure(&self) -> StoreResult<()> {
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<E: Entity, Sc: Clone> CrudService for FakeService<E, Sc> {
    type Entity = E;
    type Scope = Sc;

    async fn get_all(&self, scope: &Sc) -> StoreResult<Vec<E>> {
        self.record(Call::GetAll, scope);
        if *self.fail_loads.borrow() {
            return Err(StoreError::Service("offline".to_string()));
        }
        Ok(self.snapshot.borrow().clone())
    }

    async fn create(&self, scope: &Sc, value: &str) -> StoreResult<E> {
        self.record(Call::Create(value.to_string()), scope);
        self.take_failure()?;
        let id = EntityId::from(self.snapshot.borrow().len() as u64 + 1);
        Ok((self.make)(scope, id, value))
    }

    async fn update(&self, scope: &Sc, id: &EntityId, value: &str) -> StoreResult<E> {
        self.record(Call::Update(id.clone(), value.to_string()), scope);
        self.take_failure()?;
        Ok((self.make)(scope, id.clone(), value))
    }

    async fn delete(&self, scope: &Sc, id: &EntityId) -> StoreResult<()> {
        self.record(Call::Delete(id.clone()), scope);
        self.take_failure()
    }
}

pub(crate) fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub(crate) fn dir(id: u64, name: &str) -> Directory {
    Directory {
        id: EntityId::from(id),
        name: name.to_string(),
        created_at: t0(),
    }
}

pub(crate) fn msg(id: u64, parent: &EntityId, text: &str) -> Message {
    Message {
        id: EntityId::from(id),
        parent_id: parent.clone(),
        text: text.to_string(),
        created_at: t0(),
    }
}

pub(crate) fn directory_service() -> FakeService<Directory, ()> {
    FakeService::new(|_, id, name| Directory {
        id,
        name: name.to_string(),
        created_at: t0(),
    })
}

pub(crate) fn message_service() -> FakeService<Message, EntityId> {
    FakeService::new(|parent, id, text| Message {
        id,
        parent_id: parent.clone(),
        text: text.to_string(),
        created_at: t0(),
    })
}
