//! Typed save/load over a [`KvStore`].
//!
//! Values are stored as JSON text. Loading a missing key yields the
//! caller's default; loading text that no longer deserializes into the
//! requested type is treated the same way, logged, and copied to
//! [`corrupt_key`] so the next save under the original key cannot lose it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KvStore;
use crate::error::StorageError;

/// Serialize `value` and store it under `key`, overwriting any prior value.
///
/// # Errors
/// Returns an error if serialization fails or the backend rejects the write.
pub fn save<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &text)?;
    tracing::debug!(key, bytes = text.len(), "saved");
    Ok(())
}

/// Key holding the last unreadable text found under `key`.
pub fn corrupt_key(key: &str) -> String {
    format!("{key}.corrupt")
}

/// Load the value under `key`, or `default` if it is absent or corrupt.
///
/// Corrupt text is copied to [`corrupt_key`] before the default is returned.
/// Failing to make that copy is logged, not returned.
///
/// # Errors
/// Returns an error only if reading the backend fails.
pub fn load<S, T>(store: &mut S, key: &str, default: T) -> Result<T, StorageError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(text) = store.get(key)? else {
        return Ok(default);
    };

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            let backup = corrupt_key(key);
            tracing::warn!(
                key,
                bytes = text.len(),
                backup = %backup,
                error = %e,
                "stored value is corrupt, using default"
            );
            if let Err(err) = store.set(&backup, &text) {
                tracing::warn!(key, error = %err, "could not back up corrupt value");
            }
            Ok(default)
        }
    }
}
