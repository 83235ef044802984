//! themis-client - HTTP adapter for the themis intent management backend.
//!
//! This crate provides [`BackendClient`], which lists curated intents and
//! records their usage. It plugs into [`themis_core::FaqEngine`] as both the
//! dynamic intent source and the usage sink.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use themis_client::{BackendClient, BackendConfig};
//! use themis_core::{EngineConfig, FaqEngine, IntentCatalog};
//!
//! let backend = Arc::new(BackendClient::new(BackendConfig::from_env())?);
//! let engine = FaqEngine::new(
//!     Arc::new(IntentCatalog::builtin()),
//!     backend.clone(),
//!     backend.clone(),
//!     EngineConfig::default(),
//! );
//!
//! let reply = engine.respond("¿Cómo hago la matrícula?").await;
//! if let Some(file) = &reply.file {
//!     println!("Descarga: {}", backend.file_url(file)?);
//! }
//! ```

mod client;
mod config;
pub mod records;

pub use client::BackendClient;
pub use config::{BackendConfig, DEFAULT_BASE_URL};
pub use records::{parse_listing, IntentRecord};
