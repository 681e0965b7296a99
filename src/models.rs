//! Row types shared by the store and the HTTP layer.

use serde::{Deserialize, Serialize};

/// A named identifier for a piece of translatable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Key {
    pub id: i64,
    pub name: String,
}

/// The localized value of a [`Key`] in one locale.
///
/// `value` is nullable at the storage level only; every write path requires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Translation {
    pub id: i64,
    #[serde(rename = "keyId")]
    pub key_id: i64,
    pub locale: String,
    pub value: Option<String>,
}
