use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use business::domain::cart::store::KeyValueStore;
use business::domain::errors::StoreError;

/// File-backed key-value store: one JSON document per key under a base
/// directory. The substrate only ever sees opaque strings.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates the backing directory if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|_| StoreError::Write)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(_) => Err(StoreError::Read),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        // Write-then-rename keeps a torn write from leaving a half-written
        // document under the live key.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .await
            .map_err(|_| StoreError::Write)?;
        fs::rename(&staging, &path)
            .await
            .map_err(|_| StoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        let value = store.read("cart").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_round_trip_a_written_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.write("cart", r#"[{"id":1,"amount":2}]"#).await.unwrap();
        let value = store.read("cart").await.unwrap();

        assert_eq!(value.as_deref(), Some(r#"[{"id":1,"amount":2}]"#));
    }

    #[tokio::test]
    async fn should_replace_previous_value_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.write("cart", "[]").await.unwrap();
        store.write("cart", r#"[{"id":7,"amount":1}]"#).await.unwrap();

        let value = store.read("cart").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"id":7,"amount":1}]"#));
    }

    #[tokio::test]
    async fn should_keep_keys_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.write("cart", "[]").await.unwrap();

        assert!(store.read("wishlist").await.unwrap().is_none());
    }
}
