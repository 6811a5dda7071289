use bingo_core::{Storage, StorageError};
use gloo::storage::{LocalStorage, Storage as _};

/// Game storage backed by the browser's `localStorage`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LocalStorageBackend;

impl Storage for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::error!("Could not read {:?} from local storage: {:?}", key, err);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError {
                key: key.to_string(),
                reason: format!("{:?}", err),
            })
    }
}

/// Either the browser's local storage or a per-session in-memory map.
#[derive(Debug)]
pub(crate) enum Backend {
    Local(LocalStorageBackend),
    Memory(bingo_core::MemoryStorage),
}

impl Backend {
    pub(crate) fn new(ephemeral: bool) -> Self {
        if ephemeral {
            log::info!("Running without persistence");
            Self::Memory(Default::default())
        } else {
            Self::Local(LocalStorageBackend)
        }
    }
}

impl Storage for Backend {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get(key),
            Self::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage.set(key, value),
            Self::Memory(storage) => storage.set(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_backend_keeps_values_in_memory() {
        let mut backend = Backend::new(true);

        backend.set("words", "[]").unwrap();

        assert!(matches!(backend, Backend::Memory(_)));
        assert_eq!(backend.get("words").as_deref(), Some("[]"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use bingo_core::{BoardConfig, FixedDealer, GameStore};
    use gloo::storage::Storage as _;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_raw_values() {
        LocalStorage::clear();
        let mut backend = LocalStorageBackend;

        assert_eq!(backend.get("words"), None);
        backend.set("words", r#"["a"]"#).unwrap();

        assert_eq!(backend.get("words").as_deref(), Some(r#"["a"]"#));
        LocalStorage::clear();
    }

    #[wasm_bindgen_test]
    fn game_survives_a_reload() {
        LocalStorage::clear();
        let config = BoardConfig::new(2, 2);
        let mut store = GameStore::open(Backend::new(false), config);
        for word in ["a", "b", "c", "d"] {
            store.add_word(word).unwrap();
        }
        store.start_game(FixedDealer).unwrap();
        store.toggle_mark(2).unwrap();

        let reloaded = GameStore::open(Backend::new(false), config);

        let board = reloaded.board().unwrap();
        assert_eq!(board.word_at(3), Some("d"));
        assert!(board.is_marked(2));
        LocalStorage::clear();
    }
}
