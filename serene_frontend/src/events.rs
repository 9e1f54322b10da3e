use log::{debug, warn};

use crate::models::{Event, EventStatus};
use crate::storage::KeyValueStore;

pub const UPCOMING_EVENTS_KEY: &str = "upcoming_events";

/// The user's upcoming events, persisted as one JSON array on every change.
pub struct EventStore {
    storage: Box<dyn KeyValueStore>,
    events: Vec<Event>,
}

impl EventStore {
    /// Creates the store and loads whatever is already persisted.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            storage,
            events: Vec::new(),
        };
        store.events = store.load();
        store
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|event| event.id == id)
    }

    /// Reads the persisted list. Missing or malformed data yields an empty list.
    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.get(UPCOMING_EVENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read upcoming events: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Event>>(&raw) {
            Ok(events) => events,
            Err(err) => {
                warn!("discarding malformed upcoming events: {err}");
                Vec::new()
            }
        }
    }

    /// Persists the full list. Failures are logged and dropped.
    pub fn save(&self, list: &[Event]) {
        let raw = match serde_json::to_string(list) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to encode upcoming events: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(UPCOMING_EVENTS_KEY, &raw) {
            warn!("failed to persist upcoming events: {err}");
        }
    }

    /// Returns false when an event with the same id is already present.
    pub fn add(&mut self, event: Event) -> bool {
        if self.contains(&event.id) {
            return false;
        }
        debug!("adding upcoming event {}", event.id);
        self.events.push(event);
        self.save(&self.events);
        true
    }

    /// Drops every entry with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() == before {
            return false;
        }
        debug!("removed upcoming event {id}");
        self.save(&self.events);
        true
    }
}

/// Events the user can pick from.
pub fn catalog() -> Vec<Event> {
    let entry = |id: &str,
                 title: &str,
                 description: &str,
                 date: &str,
                 location: &str,
                 organizer: &str,
                 image: &str,
                 status: EventStatus| Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        organizer: organizer.to_string(),
        image: image.to_string(),
        status,
    };

    vec![
        entry(
            "mindful-morning",
            "Mindful Morning Meditation",
            "A gentle guided meditation to start the day with intention and calm.",
            "2026-11-02 08:00",
            "Community Wellness Center",
            "Calm Minds Collective",
            "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=640",
            EventStatus::Upcoming,
        ),
        entry(
            "peer-support-circle",
            "Peer Support Circle",
            "A confidential, facilitated space to share experiences and listen to others.",
            "2026-11-05 18:30",
            "Library Room B",
            "Open Hearts Network",
            "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=640",
            EventStatus::Upcoming,
        ),
        entry(
            "nature-walk",
            "Nature Walk & Talk",
            "An easy-paced walk through the park with optional conversation prompts.",
            "2026-11-08 10:00",
            "Riverside Park Entrance",
            "Green Steps",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=640",
            EventStatus::Upcoming,
        ),
        entry(
            "art-therapy",
            "Expressive Art Session",
            "Explore feelings through color and shape. No experience needed.",
            "2026-11-12 17:00",
            "Studio 4, Arts Hub",
            "Canvas & Care",
            "https://images.unsplash.com/photo-1513364776144-60967b0f800f?w=640",
            EventStatus::Upcoming,
        ),
        entry(
            "stress-workshop",
            "Managing Stress Workshop",
            "Practical tools for noticing stress early and responding with care.",
            "2026-11-15 14:00",
            "Online",
            "Serene Team",
            "https://images.unsplash.com/photo-1499209974431-9dddcece7f88?w=640",
            EventStatus::Upcoming,
        ),
        entry(
            "sleep-clinic",
            "Better Sleep Q&A",
            "Ask a sleep specialist about routines, wind-down habits and rest.",
            "2026-11-20 19:00",
            "Online",
            "Rest Well Clinic",
            "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?w=640",
            EventStatus::Upcoming,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// Lets a test keep a handle on the storage the store writes to.
    struct Shared(Rc<MemoryStore>);

    impl KeyValueStore for Shared {
        fn get(&self, key: &str) -> Result<Option<String>, crate::storage::StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), crate::storage::StorageError> {
            self.0.set(key, value)
        }
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let mut store = EventStore::open(Box::new(MemoryStore::new()));
        let events = catalog();
        assert!(store.add(events[0].clone()));
        assert!(store.add(events[1].clone()));

        let mut duplicate = events[0].clone();
        duplicate.title = "Renamed".into();
        assert!(!store.add(duplicate));
        assert_eq!(ids(store.events()), vec!["mindful-morning", "peer-support-circle"]);
        assert_eq!(store.events()[0].title, "Mindful Morning Meditation");
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut store = EventStore::open(Box::new(MemoryStore::new()));
        store.add(catalog()[2].clone());
        assert!(!store.remove("does-not-exist"));
        assert_eq!(ids(store.events()), vec!["nature-walk"]);
        assert!(store.remove("nature-walk"));
        assert!(store.is_empty());
        assert!(!store.remove("nature-walk"));
    }

    #[test]
    fn remove_drops_every_duplicate_entry() {
        let backing = Rc::new(MemoryStore::new());
        let event = catalog()[0].clone();
        let raw = serde_json::to_string(&vec![event.clone(), catalog()[1].clone(), event]).unwrap();
        backing.set(UPCOMING_EVENTS_KEY, &raw).unwrap();

        let mut store = EventStore::open(Box::new(Shared(backing)));
        assert_eq!(store.len(), 3);
        assert!(store.remove("mindful-morning"));
        assert_eq!(ids(store.events()), vec!["peer-support-circle"]);
    }

    #[test]
    fn mutations_are_persisted_in_order() {
        let backing = Rc::new(MemoryStore::new());
        let mut store = EventStore::open(Box::new(Shared(backing.clone())));
        for event in catalog().into_iter().rev().take(3) {
            store.add(event);
        }
        store.remove("stress-workshop");

        let reopened = EventStore::open(Box::new(Shared(backing)));
        assert_eq!(ids(reopened.events()), vec!["sleep-clinic", "art-therapy"]);
    }

    #[test]
    fn save_then_load_preserves_ids_and_order() {
        let temp = tempdir().expect("tempdir");
        let store = EventStore::open(Box::new(FileStore::new(temp.path()).expect("file store")));
        let list: Vec<Event> = catalog().into_iter().rev().collect();
        store.save(&list);
        assert_eq!(store.load(), list);
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let backing = Rc::new(MemoryStore::new());
        backing.set(UPCOMING_EVENTS_KEY, "{not json").unwrap();
        let store = EventStore::open(Box::new(Shared(backing.clone())));
        assert!(store.is_empty());

        backing.set(UPCOMING_EVENTS_KEY, r#"{"id":"x"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let events = catalog();
        let mut seen: Vec<&str> = ids(&events);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), events.len());
    }
}
