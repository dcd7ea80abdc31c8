//! Ludoteca Core - Cart types and persistence contract.
//!
//! This crate provides the cart model shared by all Ludoteca components:
//! - `widget` - Cart view and browser bindings for the static shop pages
//! - `cli` - Command-line host that operates the same cart against a file
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O. Persistence goes
//! through the [`KeyValueStore`] trait so the browser's `localStorage`, a
//! JSON file, or an in-memory map can back the same [`CartStore`].
//!
//! # Modules
//!
//! - [`types`] - Prices, line items and the cart itself
//! - [`storage`] - Key-value storage contract and the in-memory implementation
//! - [`store`] - Load/save/add/remove/clear over a persisted cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod store;
pub mod types;

pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use store::{CartError, CartStore, DEFAULT_STORAGE_KEY};
pub use types::*;
