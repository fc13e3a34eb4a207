//! Preference storage
//!
//! The engine only needs a get/set key-value surface. Reading a whole
//! [`Preferences`] value is a provided method that falls back to defaults for
//! missing or unreadable entries, so a corrupt store never blocks a request.

use crate::error::StoreError;
use crate::preferences::{Preferences, READING_LEVEL_KEY, TARGET_LANGUAGE_KEY, TONE_KEY};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Async key-value access to stored preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value for a key
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value for a key
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read all preferences, using defaults for anything missing or invalid
    async fn load_preferences(&self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            tone: read_or(self, TONE_KEY, defaults.tone).await,
            reading_level: read_or(self, READING_LEVEL_KEY, defaults.reading_level).await,
            target_language: read_or(self, TARGET_LANGUAGE_KEY, defaults.target_language).await,
        }
    }

    /// Write all preferences
    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StoreError> {
        self.set(TONE_KEY, preferences.tone.as_str()).await?;
        self.set(READING_LEVEL_KEY, preferences.reading_level.as_str())
            .await?;
        self.set(TARGET_LANGUAGE_KEY, preferences.target_language.as_str())
            .await
    }
}

async fn read_or<S, T>(store: &S, key: &str, default: T) -> T
where
    S: PreferenceStore + ?Sized,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match store.get(key).await {
        Ok(Some(raw)) => match raw.parse() {
            Ok(value) => value,
            Err(err) => {
                warn!(key, value = %raw, error = %err, "ignoring invalid stored preference");
                default
            }
        },
        Ok(None) => default,
        Err(err) => {
            warn!(key, error = %err, "could not read stored preference");
            default
        }
    }
}

/// Preferences held in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Empty store; every read yields the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given preferences
    pub fn with_preferences(preferences: &Preferences) -> Self {
        let values = HashMap::from([
            (TONE_KEY.to_string(), preferences.tone.to_string()),
            (
                READING_LEVEL_KEY.to_string(),
                preferences.reading_level.to_string(),
            ),
            (
                TARGET_LANGUAGE_KEY.to_string(),
                preferences.target_language.to_string(),
            ),
        ]);
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a flat TOML table
///
/// ```toml
/// tone = "formal"
/// readingLevel = "basic"
/// targetLanguage = "fr"
/// ```
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl TomlPreferenceStore {
    /// Open a store, reading the file if it exists
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => toml::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "preference file not found, starting empty");
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferenceStore for TomlPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        let contents = toml::to_string(&*values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}
