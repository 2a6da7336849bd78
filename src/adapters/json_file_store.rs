//! Local JSON-file document store.
//!
//! Used when no Firestore project is configured or `--offline` is given, so
//! form submissions still land somewhere inspectable. Each collection is one
//! file, `<dir>/<collection>.json`, mapping document ids to Firestore-typed
//! field objects.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::adapters::firestore::{decode_fields, encode_value};
use crate::traits::{CreateOutcome, Document, DocumentStore, FieldValue, Fields, StoreError};

/// File-backed [`DocumentStore`].
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store under `~/.listick/store`.
    pub fn in_home() -> Result<Self, StoreError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".listick").join("store")))
            .ok_or_else(|| StoreError::Unavailable("could not determine home directory".into()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        let safe: String = collection
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }

    async fn read_collection(&self, collection: &str) -> Result<Map<String, Value>, StoreError> {
        let path = self.collection_path(collection);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => Ok(map),
                Ok(_) => Err(StoreError::InvalidResponse(format!(
                    "{} is not a JSON object",
                    path.display()
                ))),
                Err(e) => Err(StoreError::InvalidResponse(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    async fn write_collection(
        &self,
        collection: &str,
        documents: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let path = self.collection_path(collection);
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(documents)
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let documents = self.read_collection(collection).await?;
        Ok(documents.get(id).map(|fields| Document {
            id: id.to_string(),
            fields: decode_fields(Some(fields)),
        }))
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<CreateOutcome, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_collection(collection).await?;
        if documents.contains_key(id) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let now = Utc::now();
        let encoded: Map<String, Value> = fields
            .into_iter()
            .filter_map(|(name, value)| {
                let value = match value {
                    FieldValue::ServerTimestamp => FieldValue::Timestamp(now),
                    other => other,
                };
                encode_value(&value).map(|v| (name, v))
            })
            .collect();
        documents.insert(id.to_string(), Value::Object(encoded));
        self.write_collection(collection, &documents).await?;

        tracing::debug!(collection, id, dir = %self.dir.display(), "Document saved locally");
        Ok(CreateOutcome::Created)
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        Ok(self.read_collection(collection).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(email: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("email".into(), email.into());
        fields.insert("createdAt".into(), FieldValue::ServerTimestamp);
        fields
    }

    #[tokio::test]
    async fn test_create_get_and_count() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert_eq!(store.count("subs").await.unwrap(), 0);
        assert!(store.get("subs", "a").await.unwrap().is_none());

        let outcome = store.create("subs", "a", fields("a@b.co")).await.unwrap();
        assert_eq!(outcome, CreateOutcome::Created);

        let doc = store.get("subs", "a").await.unwrap().unwrap();
        assert_eq!(doc.get_str("email"), Some("a@b.co"));
        assert!(doc.fields["createdAt"].as_timestamp().is_some());
        assert_eq!(store.count("subs").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.create("subs", "a", fields("first@b.co")).await.unwrap();

        let outcome = store.create("subs", "a", fields("second@b.co")).await.unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        let doc = store.get("subs", "a").await.unwrap().unwrap();
        assert_eq!(doc.get_str("email"), Some("first@b.co"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("subs.json"), "not json").unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.count("subs").await,
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_collection_path_is_sanitized() {
        let store = JsonFileStore::new("/tmp/x");
        assert_eq!(
            store.collection_path("../evil name"),
            PathBuf::from("/tmp/x/___evil_name.json")
        );
    }
}
