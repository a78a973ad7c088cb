#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Compatibility layer for configuration values written for earlier Capstan
//! releases.
//!
//! Layout: `error.rs` (the deprecation error surfaced to operators),
//! `migrate.rs` (duration normalization and registry-setting schema
//! migration).

pub mod error;
pub mod migrate;

pub use error::{DeprecationError, MigrateResult};
pub use migrate::{
    DEFAULT_JWT_EXPIRATION_MINUTES, jwt_expiration, normalize_duration, resolve_registry_setting,
};
