use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::*;

/// Durable string key-value store the game state is mirrored to.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError>;
}

/// Binds a persisted value type to the key it is stored under.
pub trait StorageKey {
    const KEY: &'static str;
}

impl StorageKey for WordList {
    const KEY: &'static str = "words";
}

impl StorageKey for WordMatrix {
    const KEY: &'static str = "wordMatrix";
}

impl StorageKey for MarkedSet {
    const KEY: &'static str = "markedWords";
}

impl StorageKey for GameStarted {
    const KEY: &'static str = "started";
}

pub trait StorageExt: Storage {
    /// Loads `T` from its key, falling back to the default when it is missing or does not parse.
    fn load_or_default<T>(&self) -> T
    where
        T: StorageKey + DeserializeOwned + Default,
    {
        let Some(raw) = self.get(T::KEY) else {
            log::trace!("nothing stored under {:?}", T::KEY);
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Ignoring malformed value under {:?}: {}", T::KEY, err);
                T::default()
            }
        }
    }

    /// Writes `value` under its key. Failures are logged and otherwise ignored.
    fn save<T>(&mut self, value: &T)
    where
        T: StorageKey + Serialize,
    {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::error!("Could not encode {:?}: {}", T::KEY, err);
                return;
            }
        };
        if let Err(err) = self.set(T::KEY, &encoded) {
            log::error!("Could not save to storage: {}", err);
        }
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory storage, used when the game should not survive the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> core::result::Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn word_list_round_trips() {
        let mut storage = MemoryStorage::new();
        let words: WordList = ["a", "b", "c"].into_iter().collect();

        storage.save(&words);

        assert_eq!(storage.get("words").as_deref(), Some(r#"["a","b","c"]"#));
        let loaded: WordList = storage.load_or_default();
        assert_eq!(loaded.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn marks_are_stored_as_json_object() {
        let mut storage = MemoryStorage::new();
        let marks: MarkedSet = [(3, true), (7, false)].into_iter().collect();

        storage.save(&marks);

        assert_eq!(
            storage.get("markedWords").as_deref(),
            Some(r#"{"3":true,"7":false}"#)
        );
        assert_eq!(storage.load_or_default::<MarkedSet>(), marks);
    }

    #[test]
    fn absent_keys_load_defaults() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.load_or_default::<WordList>(), WordList::new());
        assert_eq!(storage.load_or_default::<WordMatrix>(), WordMatrix::default());
        assert_eq!(storage.load_or_default::<MarkedSet>(), MarkedSet::new());
        assert_eq!(storage.load_or_default::<GameStarted>(), GameStarted(false));
    }

    #[test]
    fn corrupt_values_load_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set("words", "[\"a\",").unwrap();
        storage.set("wordMatrix", "{}").unwrap();
        storage.set("markedWords", "{\"x\":true}").unwrap();
        storage.set("started", "\"yes\"").unwrap();

        assert!(storage.load_or_default::<WordList>().is_empty());
        assert!(storage.load_or_default::<WordMatrix>().is_empty());
        assert!(storage.load_or_default::<MarkedSet>().is_empty());
        assert_eq!(storage.load_or_default::<GameStarted>(), GameStarted(false));
    }

    #[test]
    fn started_flag_is_a_json_bool() {
        let mut storage = MemoryStorage::new();

        storage.save(&GameStarted(true));

        assert_eq!(storage.get("started").as_deref(), Some("true"));
    }
}
