//! In-memory document store for testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::traits::{CreateOutcome, Document, DocumentStore, FieldValue, Fields, StoreError};

type Collections = HashMap<String, BTreeMap<String, Fields>>;

/// In-memory [`DocumentStore`] with failure injection.
///
/// Clones share the same data, so a test can keep a handle while the app
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<Mutex<Collections>>,
    fail_next: Arc<Mutex<Option<StoreError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document directly, bypassing create semantics.
    pub fn seed(&self, collection: &str, id: &str, fields: Fields) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    /// Make the next store call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// Document ids in a collection, sorted.
    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn document(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            })
    }

    /// Operations performed, e.g. `"create contactRequests/1 - Ada"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn begin(&self, call: String) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.begin(format!("get {}/{}", collection, id))?;
        Ok(self.document(collection, id))
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<CreateOutcome, StoreError> {
        self.begin(format!("create {}/{}", collection, id))?;
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(id) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        let now = Utc::now();
        let resolved = fields
            .into_iter()
            .map(|(name, value)| match value {
                FieldValue::ServerTimestamp => (name, FieldValue::Timestamp(now)),
                other => (name, other),
            })
            .collect();
        docs.insert(id.to_string(), resolved);
        Ok(CreateOutcome::Created)
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        self.begin(format!("count {}", collection))?;
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, BTreeMap::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_if_absent() {
        let store = InMemoryStore::new();
        let mut fields = Fields::new();
        fields.insert("createdAt".into(), FieldValue::ServerTimestamp);

        assert_eq!(
            store.create("c", "a", fields.clone()).await.unwrap(),
            CreateOutcome::Created
        );
        assert_eq!(
            store.create("c", "a", fields).await.unwrap(),
            CreateOutcome::AlreadyExists
        );
        assert_eq!(store.count("c").await.unwrap(), 1);
        let doc = store.get("c", "a").await.unwrap().unwrap();
        assert!(doc.fields["createdAt"].as_timestamp().is_some());
    }

    #[tokio::test]
    async fn test_fail_next_applies_once() {
        let store = InMemoryStore::new();
        store.fail_next(StoreError::Unavailable("down".into()));
        assert!(store.count("c").await.is_err());
        assert_eq!(store.count("c").await.unwrap(), 0);
        assert_eq!(store.calls(), vec!["count c", "count c"]);
    }
}
