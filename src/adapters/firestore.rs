//! Firestore REST document store.
//!
//! Maps [`DocumentStore`] onto the Firestore v1 REST API:
//!
//! - `get` reads `documents/{collection}/{id}`; 404 means absent
//! - `create` commits one write with a `currentDocument.exists = false`
//!   precondition, so an existing document is never overwritten, and
//!   resolves [`FieldValue::ServerTimestamp`] with a `REQUEST_TIME` transform
//! - `count` pages through the collection with a `__name__` field mask

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::traits::{
    json_headers, CreateOutcome, Document, DocumentStore, FieldValue, Fields, Headers, HttpClient,
    Response, StoreError,
};

/// Public Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Page size used when counting a collection.
const COUNT_PAGE_SIZE: u32 = 300;

/// Upper bound on pages fetched by one count.
const MAX_COUNT_PAGES: usize = 1000;

/// Connection settings for a Firestore project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreSettings {
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: String,
    pub database: String,
}

impl Default for FirestoreSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            database: "(default)".to_string(),
        }
    }
}

impl FirestoreSettings {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// A project id is required to reach the store.
    pub fn is_configured(&self) -> bool {
        self.project_id
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }
}

/// [`DocumentStore`] backed by Firestore over an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct FirestoreStore<C> {
    client: C,
    settings: FirestoreSettings,
    project_id: String,
}

impl<C: HttpClient> FirestoreStore<C> {
    /// Fails with [`StoreError::Unavailable`] when no project id is set.
    pub fn new(client: C, settings: FirestoreSettings) -> Result<Self, StoreError> {
        let project_id = settings
            .project_id
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| StoreError::Unavailable("no Firestore project configured".into()))?;
        Ok(Self {
            client,
            settings,
            project_id,
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resource name of the documents root, e.g. `projects/p/databases/(default)/documents`.
    fn documents_name(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.settings.database
        )
    }

    fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.documents_name(), collection, id)
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            self.documents_name()
        )
    }

    /// Append query parameters plus the API key, if any.
    fn with_query(&self, url: String, params: &[(&str, &str)]) -> String {
        let mut pairs: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        if let Some(key) = &self.settings.api_key {
            pairs.push(format!("key={}", urlencoding::encode(key)));
        }
        if pairs.is_empty() {
            url
        } else {
            format!("{}?{}", url, pairs.join("&"))
        }
    }

    fn status_error(response: &Response) -> StoreError {
        let message = error_message(response).unwrap_or_else(|| response.snippet(200));
        StoreError::Status {
            status: response.status,
            message,
        }
    }
}

#[async_trait]
impl<C: HttpClient> DocumentStore for FirestoreStore<C> {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.with_query(
            format!(
                "{}/{}/{}",
                self.documents_url(),
                urlencoding::encode(collection),
                urlencoding::encode(id)
            ),
            &[],
        );
        let response = self.client.get(&url, &Headers::new()).await?;

        match response.status {
            404 => Ok(None),
            s if (200..300).contains(&s) => {
                let body: Value = response
                    .json()
                    .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
                Ok(Some(Document {
                    id: id.to_string(),
                    fields: decode_fields(body.get("fields")),
                }))
            }
            _ => Err(Self::status_error(&response)),
        }
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<CreateOutcome, StoreError> {
        let body = commit_body(&self.document_name(collection, id), &fields);
        let url = self.with_query(format!("{}:commit", self.documents_url()), &[]);
        let response = self
            .client
            .post(&url, &body.to_string(), &json_headers())
            .await?;

        if response.is_success() {
            tracing::debug!(collection, id, "Document created");
            return Ok(CreateOutcome::Created);
        }
        if is_already_exists(&response) {
            tracing::debug!(collection, id, "Document already exists");
            return Ok(CreateOutcome::AlreadyExists);
        }
        Err(Self::status_error(&response))
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let base = format!("{}/{}", self.documents_url(), urlencoding::encode(collection));
        let page_size = COUNT_PAGE_SIZE.to_string();
        let mut total = 0usize;
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_COUNT_PAGES {
            let mut params = vec![
                ("pageSize", page_size.as_str()),
                ("mask.fieldPaths", "__name__"),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }
            let url = self.with_query(base.clone(), &params);
            let response = self.client.get(&url, &Headers::new()).await?;
            if !response.is_success() {
                return Err(Self::status_error(&response));
            }

            let page: ListPage = response
                .json()
                .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
            total += page.documents.len();

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(total),
            }
        }

        tracing::warn!(collection, total, "Count stopped at page limit");
        Ok(total)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    #[serde(default)]
    documents: Vec<Value>,
    next_page_token: Option<String>,
}

/// Build the `:commit` request body for a create-if-absent write.
pub fn commit_body(document_name: &str, fields: &Fields) -> Value {
    let mut encoded = Map::new();
    let mut transforms = Vec::new();
    for (name, value) in fields {
        match value {
            FieldValue::ServerTimestamp => transforms.push(json!({
                "fieldPath": name,
                "setToServerValue": "REQUEST_TIME",
            })),
            other => {
                if let Some(v) = encode_value(other) {
                    encoded.insert(name.clone(), v);
                }
            }
        }
    }

    let mut write = json!({
        "update": { "name": document_name, "fields": encoded },
        "currentDocument": { "exists": false },
    });
    if !transforms.is_empty() {
        write["updateTransforms"] = Value::Array(transforms);
    }
    json!({ "writes": [write] })
}

/// Typed Firestore JSON for one value. Server timestamps have no literal form.
pub fn encode_value(value: &FieldValue) -> Option<Value> {
    match value {
        FieldValue::String(s) => Some(json!({ "stringValue": s })),
        FieldValue::Timestamp(ts) => Some(json!({
            "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true)
        })),
        FieldValue::ServerTimestamp => None,
    }
}

/// Decode the typed `fields` object. Unsupported value types are skipped.
pub fn decode_fields(fields: Option<&Value>) -> Fields {
    let mut out = Fields::new();
    let Some(Value::Object(map)) = fields else {
        return out;
    };
    for (name, value) in map {
        if let Some(s) = value.get("stringValue").and_then(Value::as_str) {
            out.insert(name.clone(), FieldValue::String(s.to_string()));
        } else if let Some(ts) = value
            .get("timestampValue")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        {
            out.insert(name.clone(), FieldValue::Timestamp(ts.with_timezone(&Utc)));
        }
    }
    out
}

fn error_status(response: &Response) -> Option<String> {
    let body: Value = response.json().ok()?;
    body.pointer("/error/status")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn error_message(response: &Response) -> Option<String> {
    let body: Value = response.json().ok()?;
    body.pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// A failed `exists = false` precondition or an explicit conflict.
fn is_already_exists(response: &Response) -> bool {
    if response.status == 409 {
        return true;
    }
    matches!(
        error_status(response).as_deref(),
        Some("ALREADY_EXISTS") | Some("FAILED_PRECONDITION")
    )
}
