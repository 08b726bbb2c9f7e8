use std::collections::BTreeMap;
use async_trait::async_trait;
use log::{debug, trace};
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::clock::{Clock, SystemClock};
use crate::note_store::{NewNote, Note, NoteId, NoteLimits, NoteStore, NoteStoreError, NoteUpdate};
use crate::util::StrExt;


pub type ProductionNoteStore = NoteStoreImpl<SystemClock>;

pub struct NoteStoreImpl<C: Clock> {
    limits: NoteLimits,
    clock: C,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    // ids only grow, so this is creation order
    notes: BTreeMap<NoteId, Note>,
    last_id: u64,
}

impl State {
    fn next_id(&mut self) -> NoteId {
        self.last_id += 1;
        NoteId(self.last_id)
    }

    fn owned_note_mut(
        &mut self,
        owner: Uuid,
        id: NoteId,
    ) -> Result<&mut Note, NoteStoreError> {
        let note = self.notes
            .get_mut(&id)
            .ok_or(NoteStoreError::NotFound)?;
        check_owner(note, owner)?;
        Ok(note)
    }
}

impl ProductionNoteStore {
    pub fn new(limits: NoteLimits) -> Self {
        NoteStoreImpl::new_impl(limits, SystemClock)
    }
}

impl<C: Clock> NoteStoreImpl<C> {
    pub fn new_impl(limits: NoteLimits, clock: C) -> Self {
        NoteStoreImpl {
            limits,
            clock,
            state: RwLock::new(State::default()),
        }
    }

    fn check_title(&self, title: &str) -> Result<(), NoteStoreError> {
        if title.is_blank() {
            Err(NoteStoreError::EmptyTitle)
        } else if title.len() as u64 > self.limits.max_title_len {
            Err(NoteStoreError::TooBig)
        } else {
            Ok(())
        }
    }

    fn check_body(&self, body: &str) -> Result<(), NoteStoreError> {
        if body.len() as u64 > self.limits.max_body_len {
            Err(NoteStoreError::TooBig)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<C: Clock> NoteStore for NoteStoreImpl<C> {
    async fn create(
        &self,
        owner: Uuid,
        input: NewNote,
    ) -> Result<Note, NoteStoreError> {
        let NewNote { title, body, priority, tags } = input;
        self.check_title(&title)?;
        let body = body.unwrap_or_default();
        self.check_body(&body)?;

        let mut state = self.state.write().await;
        let now = self.clock.now();
        let note = Note {
            id: state.next_id(),
            owner_id: owner,
            title,
            body,
            done: false,
            priority: priority.unwrap_or_default(),
            tags: tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(note.id, note.clone());
        debug!("created note {} for owner {owner}", note.id);
        Ok(note)
    }

    async fn get(
        &self,
        owner: Uuid,
        id: NoteId,
    ) -> Result<Note, NoteStoreError> {
        trace!("reading note {id} for owner {owner}");
        let state = self.state.read().await;
        let note = state.notes
            .get(&id)
            .ok_or(NoteStoreError::NotFound)?;
        check_owner(note, owner)?;
        Ok(note.clone())
    }

    async fn list(&self, owner: Uuid) -> Vec<Note> {
        trace!("listing notes for owner {owner}");
        self.state
            .read()
            .await
            .notes
            .values()
            .filter(|note| note.owner_id == owner)
            .cloned()
            .collect()
    }

    async fn update(
        &self,
        owner: Uuid,
        id: NoteId,
        update: NoteUpdate,
    ) -> Result<Note, NoteStoreError> {
        let mut state = self.state.write().await;
        let note = state.owned_note_mut(owner, id)?;
        if let Some(ref title) = update.title {
            self.check_title(title)?;
        }
        if let Some(ref body) = update.body {
            self.check_body(body)?;
        }

        let NoteUpdate { title, body, done, priority, tags } = update;
        if let Some(title) = title {
            note.title = title;
        }
        if let Some(body) = body {
            note.body = body;
        }
        if let Some(done) = done {
            note.done = done;
        }
        if let Some(priority) = priority {
            note.priority = priority;
        }
        if let Some(tags) = tags {
            note.tags = tags;
        }
        note.updated_at = self.clock.now();
        debug!("updated note {id} for owner {owner}");
        Ok(note.clone())
    }

    async fn delete(
        &self,
        owner: Uuid,
        id: NoteId,
    ) -> Result<(), NoteStoreError> {
        let mut state = self.state.write().await;
        state.owned_note_mut(owner, id)?;
        state.notes.remove(&id);
        debug!("deleted note {id} for owner {owner}");
        Ok(())
    }
}

fn check_owner(note: &Note, owner: Uuid) -> Result<(), NoteStoreError> {
    if note.owner_id == owner {
        Ok(())
    } else {
        Err(NoteStoreError::Forbidden)
    }
}
