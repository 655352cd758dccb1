//! Face registry for asset lookup.
//!
//! The `FaceRegistry` stores the face asset keys of a game in configuration
//! order. `FaceId(n)` is the n-th configured face.

use rustc_hash::FxHashMap;

use super::definition::FaceId;
use crate::core::config::GameConfig;
use crate::core::error::{EngineError, Result};

/// Registry of face asset keys.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{FaceId, FaceRegistry};
///
/// let registry = FaceRegistry::from_keys(["Apple.jpg", "B.jpg"]).unwrap();
///
/// assert_eq!(registry.asset(FaceId::new(0)), Some("Apple.jpg"));
/// assert_eq!(registry.lookup("B.jpg"), Some(FaceId::new(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FaceRegistry {
    assets: Vec<String>,
    by_key: FxHashMap<String, FaceId>,
}

impl FaceRegistry {
    /// Build a registry from asset keys, rejecting duplicates.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for key in keys {
            let key = key.into();
            let id = FaceId::new(registry.assets.len() as u32);
            if registry.by_key.insert(key.clone(), id).is_some() {
                return Err(EngineError::InvalidConfig(format!("duplicate face {key:?}")));
            }
            registry.assets.push(key);
        }
        Ok(registry)
    }

    /// Build the registry for a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::from_keys(config.faces.iter().cloned())
    }

    /// Get the asset key of a face.
    #[must_use]
    pub fn asset(&self, id: FaceId) -> Option<&str> {
        self.assets.get(id.0 as usize).map(String::as_str)
    }

    /// Find the face with the given asset key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<FaceId> {
        self.by_key.get(key).copied()
    }

    /// Check if a face ID is registered.
    #[must_use]
    pub fn contains(&self, id: FaceId) -> bool {
        (id.0 as usize) < self.assets.len()
    }

    /// Number of registered faces (K).
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over all face IDs in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.assets.len() as u32).map(FaceId::new)
    }
}
