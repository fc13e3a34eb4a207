//! Adaptation engine and builder

use crate::adapter::{panic_message, Adapter, Capabilities, FallbackAdapter, Task};
use crate::config::EngineConfig;
use crate::error::{AdapterError, EngineError, ErrorKind, Result};
use crate::preferences::{PreferenceOverrides, Preferences};
use crate::request::{AdaptationRequest, AdaptationResult, Method, Operation};
use crate::store::{MemoryPreferenceStore, PreferenceStore};
use contextguard_core::adapt::clamp_alt_text;
use contextguard_core::normalize::char_count;
use contextguard_core::{ContentLocator, DocumentHandle, ExtractionResult, Selection, SourceKind};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, warn};

/// What the engine can do natively right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Whether any native capability is usable
    pub available: bool,
    /// Per-operation native capabilities
    pub capabilities: Capabilities,
}

/// Dispatches adaptation requests to a native adapter or the fallback
///
/// Every call is independent: preferences are read from the store at the
/// start of the call, merged with the request overrides, and dropped when
/// the result is returned.
pub struct AdaptationEngine {
    config: EngineConfig,
    locator: ContentLocator,
    native: Option<Arc<dyn Adapter>>,
    fallback: FallbackAdapter,
    store: Arc<dyn PreferenceStore>,
}

impl AdaptationEngine {
    /// Offline engine with default configuration and an in-memory store
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            locator: ContentLocator::new(),
            native: None,
            fallback: FallbackAdapter::new(),
            store: Arc::new(MemoryPreferenceStore::new()),
        }
    }

    /// Create an engine builder
    pub fn builder() -> AdaptationEngineBuilder {
        AdaptationEngineBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Content locator built from the configuration
    pub fn locator(&self) -> &ContentLocator {
        &self.locator
    }

    /// Native capabilities, all false without a native adapter
    pub async fn status(&self) -> EngineStatus {
        let capabilities = match &self.native {
            Some(native) => native.capabilities().await,
            None => Capabilities::default(),
        };
        EngineStatus {
            available: capabilities.any(),
            capabilities,
        }
    }

    /// Stored preferences, with defaults for anything missing
    pub async fn preferences(&self) -> Preferences {
        self.store.load_preferences().await
    }

    /// Replace the stored preferences
    pub async fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.store.save_preferences(preferences).await?;
        Ok(())
    }

    /// Run one adaptation request
    ///
    /// Never fails: every problem is reported through the result.
    pub async fn run(&self, request: &AdaptationRequest) -> AdaptationResult {
        if let Err(reason) = self.validate(request) {
            debug!(operation = %request.operation, reason, "rejected request");
            return AdaptationResult::failed(ErrorKind::InvalidInput, Method::Fallback);
        }

        let preferences = self
            .store
            .load_preferences()
            .await
            .merged(&request.overrides);
        debug!(operation = %request.operation, ?preferences, "resolved preferences");

        let Some(task) = Self::task(request, &preferences) else {
            return AdaptationResult::failed(ErrorKind::InvalidInput, Method::Fallback);
        };

        if let Some(native) = self.native_for(request.operation).await {
            let outcome = AssertUnwindSafe(native.execute(&task))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(AdapterError::Panicked(panic_message(payload.as_ref())))
                });
            match outcome {
                Ok(value) => {
                    debug!(operation = %request.operation, "native adapter succeeded");
                    return AdaptationResult::completed(
                        Self::finish(request.operation, value),
                        Method::Native,
                    );
                }
                Err(err) => {
                    warn!(
                        operation = %request.operation,
                        error = %err,
                        "native adapter failed, falling back"
                    );
                }
            }
        }

        match self.fallback.execute(&task).await {
            Ok(value) => AdaptationResult::completed(value, Method::Fallback),
            Err(err) => {
                warn!(operation = %request.operation, error = %err, "fallback failed");
                AdaptationResult::failed(ErrorKind::ProcessingFailed, Method::Fallback)
            }
        }
    }

    /// Run an operation on a locator extraction
    ///
    /// The sentinel extraction for an empty document fails with
    /// [`ErrorKind::NoContentFound`] instead of being processed as text.
    pub async fn run_on_extraction(
        &self,
        operation: Operation,
        extraction: &ExtractionResult,
        overrides: PreferenceOverrides,
    ) -> AdaptationResult {
        if extraction.source_kind == SourceKind::None {
            return AdaptationResult::failed(ErrorKind::NoContentFound, Method::Fallback);
        }
        let request =
            AdaptationRequest::new(operation, extraction.text.clone()).with_overrides(overrides);
        self.run(&request).await
    }

    /// Locate content in a document and run an operation on it
    pub async fn run_on_document<D>(
        &self,
        doc: &D,
        selection: Option<&Selection>,
        operation: Operation,
        overrides: PreferenceOverrides,
    ) -> (ExtractionResult, AdaptationResult)
    where
        D: DocumentHandle + Sync + ?Sized,
    {
        let extraction = self.locator.locate(selection, doc);
        let result = self
            .run_on_extraction(operation, &extraction, overrides)
            .await;
        (extraction, result)
    }

    fn validate(&self, request: &AdaptationRequest) -> std::result::Result<(), &'static str> {
        if char_count(&request.text) > self.config.max_input_chars {
            return Err("text exceeds the maximum length");
        }
        match request.operation {
            Operation::GenerateAlt if request.image.is_none() => Err("no image given"),
            Operation::GenerateAlt => Ok(()),
            _ if request.text.trim().is_empty() => Err("text is empty"),
            _ => Ok(()),
        }
    }

    fn task<'a>(request: &'a AdaptationRequest, preferences: &'a Preferences) -> Option<Task<'a>> {
        let text = request.text.as_str();
        Some(match request.operation {
            Operation::Summarize => Task::Summarize {
                text,
                options: request.summary,
            },
            Operation::Rewrite => Task::Rewrite {
                text,
                tone: preferences.tone,
                reading_level: preferences.reading_level,
            },
            Operation::Proofread => Task::Proofread { text },
            Operation::Translate => Task::Translate {
                text,
                target: &preferences.target_language,
            },
            Operation::GenerateAlt => Task::GenerateAlt {
                image: request.image.as_ref()?,
            },
        })
    }

    async fn native_for(&self, operation: Operation) -> Option<&Arc<dyn Adapter>> {
        if !self.config.prefer_native {
            return None;
        }
        let native = self.native.as_ref()?;
        if native.capabilities().await.supports(operation) {
            Some(native)
        } else {
            debug!(%operation, "native capability unavailable, using fallback");
            None
        }
    }

    fn finish(operation: Operation, value: String) -> String {
        match operation {
            Operation::GenerateAlt => clamp_alt_text(&value),
            _ => value,
        }
    }
}

impl Default for AdaptationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`AdaptationEngine`]
pub struct AdaptationEngineBuilder {
    config: EngineConfig,
    native: Option<Arc<dyn Adapter>>,
    store: Option<Arc<dyn PreferenceStore>>,
}

impl Default for AdaptationEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptationEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            native: None,
            store: None,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a native adapter
    pub fn native_adapter(mut self, adapter: Arc<dyn Adapter>) -> Self {
        self.native = Some(adapter);
        self
    }

    /// Use a preference store
    pub fn preference_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the engine
    pub fn build(self) -> std::result::Result<AdaptationEngine, EngineError> {
        self.config.validate()?;
        let locator = ContentLocator::with_config(self.config.locator.clone())?;
        Ok(AdaptationEngine {
            config: self.config,
            locator,
            native: self.native,
            fallback: FallbackAdapter::new(),
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryPreferenceStore::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextguard_core::Tone;

    #[tokio::test]
    async fn test_rejects_empty_and_oversized_text() {
        let engine = AdaptationEngine::new();

        let empty = engine
            .run(&AdaptationRequest::new(Operation::Summarize, "   "))
            .await;
        assert_eq!(empty.error(), Some(ErrorKind::InvalidInput));

        let long = "a".repeat(10_001);
        let oversized = engine
            .run(&AdaptationRequest::new(Operation::Proofread, long))
            .await;
        assert_eq!(oversized.error(), Some(ErrorKind::InvalidInput));
    }

    #[tokio::test]
    async fn test_generate_alt_needs_an_image() {
        let engine = AdaptationEngine::new();
        let result = engine
            .run(&AdaptationRequest::new(Operation::GenerateAlt, ""))
            .await;
        assert_eq!(result.error(), Some(ErrorKind::InvalidInput));
    }

    #[tokio::test]
    async fn test_overrides_beat_stored_preferences() {
        let store = Arc::new(MemoryPreferenceStore::with_preferences(&Preferences {
            tone: Tone::Friendly,
            ..Preferences::default()
        }));
        let engine = AdaptationEngine::builder()
            .preference_store(store)
            .build()
            .unwrap();

        let stored = engine
            .run(&AdaptationRequest::new(Operation::Rewrite, "I do not know."))
            .await;
        assert_eq!(stored.value(), Some("I don't know."));

        let overridden = engine
            .run(
                &AdaptationRequest::new(Operation::Rewrite, "I don't know.")
                    .with_overrides(PreferenceOverrides::default().tone(Tone::Formal)),
            )
            .await;
        assert_eq!(overridden.value(), Some("I do not know."));
    }

    #[tokio::test]
    async fn test_status_without_native() {
        let status = AdaptationEngine::new().status().await;
        assert!(!status.available);
        assert_eq!(status.capabilities, Capabilities::default());
    }

    #[tokio::test]
    async fn test_sentinel_extraction_is_no_content() {
        let engine = AdaptationEngine::new();
        let doc = contextguard_core::Document::builder().build();
        let (extraction, result) = engine
            .run_on_document(&doc, None, Operation::Summarize, PreferenceOverrides::default())
            .await;
        assert_eq!(extraction.source_kind, SourceKind::None);
        assert_eq!(result.error(), Some(ErrorKind::NoContentFound));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let config = EngineConfig {
            max_input_chars: 0,
            ..EngineConfig::default()
        };
        assert!(AdaptationEngine::builder().config(config).build().is_err());
    }
}
