//! Per-game best-score persistence
//!
//! A single scalar per game, persisted to LocalStorage on wasm. Sessions
//! take the store as an injected dependency so game logic stays testable
//! without a live window.

use crate::games::GameKey;

/// Read/write access to one best score per game.
pub trait BestScoreStore {
    fn get(&self, key: GameKey) -> Option<u32>;
    fn set(&mut self, key: GameKey, value: u32);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryScores {
    entries: Vec<(GameKey, u32)>,
}

impl MemoryScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for MemoryScores {
    fn get(&self, key: GameKey) -> Option<u32> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn set(&mut self, key: GameKey, value: u32) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// LocalStorage-backed store (WASM only). Storage failures degrade to
/// "no best score" and are logged, never propagated.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScores;

#[cfg(target_arch = "wasm32")]
impl LocalScores {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalScores {
    fn get(&self, key: GameKey) -> Option<u32> {
        let storage = Self::storage()?;
        let json = storage.get_item(key.storage_key()).ok().flatten()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding corrupt best score for {}: {e}", key.as_str());
                None
            }
        }
    }

    fn set(&mut self, key: GameKey, value: u32) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(&value) {
                let _ = storage.set_item(key.storage_key(), &json);
                log::info!("best score saved: {} = {value}", key.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryScores::new();
        assert_eq!(store.get(GameKey::Reaction), None);
        store.set(GameKey::Reaction, 231);
        assert_eq!(store.get(GameKey::Reaction), Some(231));
        store.set(GameKey::Reaction, 198);
        assert_eq!(store.get(GameKey::Reaction), Some(198));
    }

    #[test]
    fn test_memory_store_keys_are_independent() {
        let mut store = MemoryScores::new();
        store.set(GameKey::Reaction, 250);
        store.set(GameKey::Aim, 40);
        assert_eq!(store.get(GameKey::Reaction), Some(250));
        assert_eq!(store.get(GameKey::Aim), Some(40));
        assert_eq!(store.get(GameKey::Typing), None);
    }
}
