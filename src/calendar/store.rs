use super::event::{Event, EventDraft};
use super::event_id::EventId;

/// Read access to an ordered collection of events.
pub trait Catalog {
    fn all(&self) -> &[Event];
}

impl Catalog for [Event] {
    fn all(&self) -> &[Event] {
        self
    }
}

impl Catalog for Vec<Event> {
    fn all(&self) -> &[Event] {
        self
    }
}

/// Owner of the event catalog. Every mutation goes through `&mut self`,
/// readers borrow it as a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn create(&mut self, draft: EventDraft) -> EventId {
        let id = self.unused_id();

        log::debug!("Creating event {id} {:?}", draft.title);

        self.events.push(draft.into_event(id));

        id
    }

    /// Replaces every field of the event `id`, keeping its position.
    /// Returns false if there is no such event.
    pub fn update(&mut self, id: EventId, draft: EventDraft) -> bool {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                log::debug!("Updating event {id} {:?}", draft.title);

                *event = draft.into_event(id);

                true
            }
            None => {
                log::debug!("Cannot update unknown event {id}");

                false
            }
        }
    }

    pub fn delete(&mut self, id: EventId) -> Option<Event> {
        let idx = self.events.iter().position(|event| event.id == id)?;

        log::debug!("Deleting event {id}");

        Some(self.events.remove(idx))
    }

    /// Adds an already identified event, e.g. one loaded from a file.
    /// An event whose id is taken gets a fresh one.
    pub fn insert(&mut self, mut event: Event) -> EventId {
        if self.get(event.id).is_some() {
            let id = self.unused_id();

            log::warn!("Duplicate event id {}, reassigned to {id}", event.id);

            event.id = id;
        }

        let id = event.id;
        self.events.push(event);

        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn unused_id(&self) -> EventId {
        loop {
            let id = EventId::new();

            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

impl Catalog for EventStore {
    fn all(&self) -> &[Event] {
        &self.events
    }
}

impl FromIterator<Event> for EventStore {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        let mut store = Self::new();

        for event in iter {
            store.insert(event);
        }

        store
    }
}
