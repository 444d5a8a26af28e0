//! # API crate: client-side network helpers for Rulehub
//!
//! Every call the desktop UI makes to the Rulehub service goes through this crate.
//! The service itself is remote; this crate only shapes requests, maps response
//! status codes to typed outcomes and owns the client configuration.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`AccountApi`] trait and its reqwest implementation [`HttpApi`] |
//! | [`config`] | `rulehub.toml` client configuration (server URL, request timeout) |
//! | [`error`] | [`ApiError`], the single error type returned by every call |
//! | [`memory`] | [`MemoryApi`], a scripted in-memory [`AccountApi`] that records its calls |
//! | [`models`] | Wire models: [`UserInfo`], [`Profile`], status enums and payloads |
//!
//! ## Operations
//!
//! - **Authentication**: `register`, `login`, `verify_2fa`, `get_user_info`, `logout`
//! - **Profiles**: `get_user_profile`
//! - **Own settings**: `update_settings`, `update_avatar`

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;

pub use client::{AccountApi, HttpApi};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use memory::{ApiCall, MemoryApi};
pub use models::{LoginStatus, Profile, RegisterStatus, SettingsUpdate, UserInfo};
