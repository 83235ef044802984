//! themis-core - Intent-resolution engine for institutional FAQ chatbots.
//!
//! This crate normalizes free-text messages, matches them against a static
//! intent catalog followed by intents fetched from a management backend, and
//! composes a canned reply with an optional downloadable attachment. Matched
//! backend intents are reported in the background to rank frequently asked
//! questions.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use themis_core::{EngineConfig, FaqEngine, IntentCatalog};
//!
//! let catalog = Arc::new(IntentCatalog::builtin());
//! let engine = FaqEngine::new(catalog, source, sink, EngineConfig::from_env());
//!
//! let reply = engine.respond("¿Cómo hago la matrícula?").await;
//! println!("{}", reply.text);
//! ```

pub mod catalog;
pub mod composer;
pub mod config;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod intent;
pub mod normalize;
pub mod resolver;
pub mod traits;
pub mod usage;

// Re-export commonly used types
pub use catalog::{IntentCatalog, WELCOME_MESSAGE};
pub use composer::{ResponseComposer, FALLBACK_REPLY};
pub use config::EngineConfig;
pub use dynamic::DynamicIntents;
pub use engine::FaqEngine;
pub use error::{ErrorCode, ThemisError, ThemisResult};
pub use intent::{Intent, MatchResult, MISSING_RESPONSE_PLACEHOLDER};
pub use normalize::normalize;
pub use resolver::{IntentMatch, IntentResolver};
pub use traits::{IntentSource, NoopSink, NoopSource, UsageSink};
pub use usage::UsageReporter;
