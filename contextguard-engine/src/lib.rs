//! Adaptation orchestration for ContextGuard
//!
//! This crate wraps the synchronous algorithms of `contextguard-core` in an
//! async engine that prefers a native adaptation capability when one is
//! available and falls back to the local algorithms otherwise. It also owns
//! user preferences and their storage.
//!
//! # Example
//!
//! ```rust
//! use contextguard_engine::{AdaptationEngine, AdaptationRequest, Method, Operation};
//! use contextguard_engine::PreferenceOverrides;
//! use contextguard_core::LanguageCode;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! runtime.block_on(async {
//!     let engine = AdaptationEngine::new();
//!     let request = AdaptationRequest::new(Operation::Translate, "Hello").with_overrides(
//!         PreferenceOverrides::default().target_language(LanguageCode::new("fr").unwrap()),
//!     );
//!     let result = engine.run(&request).await;
//!     assert!(result.success());
//!     assert_eq!(result.method(), Method::Fallback);
//! });
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod preferences;
pub mod request;
pub mod store;

pub use adapter::{Adapter, Capabilities, FallbackAdapter, Task};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{AdaptationEngine, AdaptationEngineBuilder, EngineStatus};
pub use error::{AdapterError, EngineError, ErrorKind, Result, StoreError};
pub use preferences::{PreferenceOverrides, Preferences, PREFERENCE_KEYS};
pub use request::{AdaptationRequest, AdaptationResult, Method, Operation};
pub use store::{MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore};
