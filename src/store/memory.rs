use super::{Store, StoreResult};
use crate::error::StoreError;
use crate::models::{Key, Translation};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    keys: BTreeMap<i64, Key>,
    translations: BTreeMap<i64, Translation>,
    next_key_id: i64,
    next_translation_id: i64,
}

impl Tables {
    fn translation_id(&self, key_id: i64, locale: &str) -> Option<i64> {
        self.translations
            .values()
            .find(|t| t.key_id == key_id && t.locale == locale)
            .map(|t| t.id)
    }
}

/// In-process store used by tests and when no database is configured.
///
/// Ids start at 1 and increase monotonically, like a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_keys(&self) -> StoreResult<Vec<Key>> {
        Ok(self.tables.read().await.keys.values().cloned().collect())
    }

    async fn create_key(&self, name: &str) -> StoreResult<Key> {
        let mut tables = self.tables.write().await;
        tables.next_key_id += 1;
        let key = Key {
            id: tables.next_key_id,
            name: name.to_string(),
        };
        tables.keys.insert(key.id, key.clone());
        Ok(key)
    }

    async fn key_exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.read().await.keys.contains_key(&id))
    }

    async fn rename_key(&self, id: i64, name: &str) -> StoreResult<Option<Key>> {
        let mut tables = self.tables.write().await;
        Ok(tables.keys.get_mut(&id).map(|key| {
            key.name = name.to_string();
            key.clone()
        }))
    }

    async fn list_translations(&self, key_id: i64) -> StoreResult<Vec<Translation>> {
        Ok(self
            .tables
            .read()
            .await
            .translations
            .values()
            .filter(|t| t.key_id == key_id)
            .cloned()
            .collect())
    }

    async fn find_translation(
        &self,
        key_id: i64,
        locale: &str,
    ) -> StoreResult<Option<Translation>> {
        let tables = self.tables.read().await;
        Ok(tables
            .translation_id(key_id, locale)
            .and_then(|id| tables.translations.get(&id).cloned()))
    }

    async fn create_translation(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Translation> {
        let mut tables = self.tables.write().await;
        if !tables.keys.contains_key(&key_id) {
            return Err(StoreError::NotFound);
        }
        if tables.translation_id(key_id, locale).is_some() {
            return Err(StoreError::Conflict);
        }

        tables.next_translation_id += 1;
        let translation = Translation {
            id: tables.next_translation_id,
            key_id,
            locale: locale.to_string(),
            value: Some(value.to_string()),
        };
        tables.translations.insert(translation.id, translation.clone());
        Ok(translation)
    }

    async fn update_translation_value(
        &self,
        key_id: i64,
        locale: &str,
        value: &str,
    ) -> StoreResult<Option<Translation>> {
        let mut tables = self.tables.write().await;
        let Some(id) = tables.translation_id(key_id, locale) else {
            return Ok(None);
        };
        Ok(tables.translations.get_mut(&id).map(|t| {
            t.value = Some(value.to_string());
            t.clone()
        }))
    }
}
