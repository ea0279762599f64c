//! Visitor-state persistence trait.
//!
//! The widget needs exactly what a browser's `localStorage` gave it: string
//! keys, string values, no expiry. Backends implement this one trait; the
//! widget never cares where the flag actually lives.

use async_trait::async_trait;

use crate::error::StoreError;

/// Well-known keys.
pub mod keys {
    /// Set once the visitor opens the panel; suppresses auto-open on later
    /// visits.
    pub const DISMISSED: &str = "chatbot_dismissed";
}

/// Backend-agnostic key/value store for persisted widget state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch a value. `Ok(None)` when the key has never been set.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
