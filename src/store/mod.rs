//! Persistence for keys and translations.
//!
//! - `postgres`: [`PgStore`], the production store backed by sqlx
//! - `memory`: [`MemoryStore`], an in-process store with the same semantics

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreError;
use crate::models::{Key, Translation};
use async_trait::async_trait;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations used by the request handlers.
///
/// Listings are ordered by ascending id. Updates are conditional: they return
/// `None` when the target row does not exist at the time of the write.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_keys(&self) -> StoreResult<Vec<Key>>;

    async fn create_key(&self, name: &str) -> StoreResult<Key>;

    async fn key_exists(&self, id: i64) -> StoreResult<bool>;

    async fn rename_key(&self, id: i64, name: &str) -> StoreResult<Option<Key>>;

    async fn list_translations(&self, key_id: i64) -> StoreResult<Vec<Translation>>;

    async fn find_translation(&self, key_id: i64, locale: &str)
        -> StoreResult<Option<Translation>>;

    /// Insert a translation.
    ///
    /// Fails with [`StoreError::NotFound`] if the key is missing and with
    /// [`StoreError::Conflict`] if the (key, locale) pair already exists.
    async fn create_translation(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Translation>;

    async fn update_translation_value(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Option<Translation>>;
}
