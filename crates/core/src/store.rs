//! Persisted cart operations.
//!
//! Every mutation is load → change → save on a fresh working copy; the
//! backing store is the only source of truth between calls.

use core::num::NonZeroU32;

use thiserror::Error;
use tracing::{info, warn};

use crate::storage::{KeyValueStore, StorageError};
use crate::types::{Cart, LineItem, NewItem};

/// Key the cart has always been stored under in `localStorage`.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// Errors from cart persistence.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A cart persisted as JSON under one key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store using [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// Absent, unreadable or unparseable state yields an empty cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cart storage unreadable, using empty cart");
                return Cart::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "Persisted cart is corrupt, using empty cart");
            Cart::new()
        })
    }

    /// Persist `cart`, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if serialization or the storage write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    /// Add one unit of `item` and persist.
    ///
    /// Returns the line's quantity after the add.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the cart cannot be saved.
    pub fn add(&self, item: NewItem) -> Result<NonZeroU32, CartError> {
        let mut cart = self.load();
        let name = item.name().to_string();
        let quantity = cart.add(item);
        self.save(&cart)?;
        info!(item = %name, quantity = quantity.get(), "Added item to cart");
        Ok(quantity)
    }

    /// Remove the line at `index` and persist.
    ///
    /// An out-of-range index leaves the stored cart untouched and returns
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the cart cannot be saved.
    pub fn remove(&self, index: usize) -> Result<Option<LineItem>, CartError> {
        let mut cart = self.load();
        let Some(removed) = cart.remove(index) else {
            warn!(index, len = cart.len(), "Ignoring removal of missing cart line");
            return Ok(None);
        };
        self.save(&cart)?;
        info!(item = %removed.name(), index, "Removed item from cart");
        Ok(Some(removed))
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the storage backend rejects the removal.
    pub fn clear(&self) -> Result<(), CartError> {
        self.storage.remove(&self.key)?;
        info!(key = %self.key, "Cleared cart");
        Ok(())
    }
}
