//! HTTP store over the Contentful Delivery and Preview APIs.
//!
//! Both APIs share one shape; preview differs only in host and token. Requests
//! are `GET /spaces/{space}/environments/{env}/entries?{query}` with a bearer
//! token. Nothing here retries: a failed request is reported once and the
//! query layer falls back to empty.

use super::client::Credentials;
use super::entry::EntryCollection;
use super::error::ContentError;
use super::links::Includes;
use super::query::EntryQuery;
use super::store::ContentStore;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;

/// A configured Delivery (or Preview) API endpoint.
#[derive(Clone)]
pub struct DeliveryClient {
    client: Client,
    base_url: String,
    host: String,
    space_id: String,
    environment: String,
    token: String,
    include: u8,
    locale: Option<String>,
    preview: bool,
}

impl fmt::Debug for DeliveryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryClient")
            .field("host", &self.host)
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

impl DeliveryClient {
    /// Build a client for published (`preview = false`) or draft content.
    ///
    /// Makes no network call. Fails only when credentials for the mode are
    /// missing or the HTTP client cannot be constructed.
    pub fn new(credentials: &Credentials, preview: bool) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(credentials.request_timeout)
            .connect_timeout(credentials.connect_timeout)
            .user_agent(concat!("kartsite/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ContentError::Client)?;

        Self::with_client(credentials, preview, client)
    }

    /// Like [`DeliveryClient::new`] with a caller-supplied HTTP client.
    pub fn with_client(
        credentials: &Credentials,
        preview: bool,
        client: Client,
    ) -> Result<Self, ContentError> {
        let endpoint = credentials.endpoint(preview).ok_or_else(|| {
            ContentError::Unavailable(format!(
                "missing {} credentials",
                if preview { "preview" } else { "delivery" }
            ))
        })?;

        Ok(Self {
            client,
            base_url: format!("https://{}", endpoint.host),
            host: endpoint.host.to_owned(),
            space_id: endpoint.space_id.to_owned(),
            environment: credentials.environment.clone(),
            token: endpoint.token.to_owned(),
            include: credentials.include,
            locale: credentials.locale.clone(),
            preview,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    pub const fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url,
            urlencoding::encode(&self.space_id),
            urlencoding::encode(&self.environment)
        )
    }

    /// Full request URL. Client-wide include depth and locale apply unless the
    /// query sets its own.
    pub fn request_url(&self, query: &EntryQuery) -> String {
        let mut query = query.clone();
        if query.include.is_none() {
            query.include = Some(self.include);
        }
        if query.locale.is_none() {
            query.locale.clone_from(&self.locale);
        }
        format!("{}?{}", self.entries_url(), query.to_query_string())
    }

    fn http_error(&self, source: reqwest::Error) -> ContentError {
        ContentError::Http {
            host: self.host.clone(),
            source,
        }
    }
}

#[async_trait]
impl ContentStore for DeliveryClient {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError> {
        let url = self.request_url(query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|err| self.http_error(err))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| self.http_error(err))?;

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                message: error_message(&body)
                    .or_else(|| status.canonical_reason().map(str::to_owned))
                    .unwrap_or_default(),
            });
        }

        decode_response(&body)
    }

    fn label(&self) -> &str {
        if self.preview { "preview" } else { "delivery" }
    }
}

/// Decode a collection response and resolve its links.
///
/// Accepts the API shape (`{"items": [...], "includes": {...}}`) and, for
/// fixture files, a bare array of items.
pub fn decode_response(body: &str) -> Result<EntryCollection, ContentError> {
    let raw: Value = serde_json::from_str(body)?;

    let (mut collection, includes) = match raw {
        Value::Array(items) => (EntryCollection::new(items), None),
        mut object => {
            let includes = object.get_mut("includes").map(Value::take);
            (serde_json::from_value::<EntryCollection>(object)?, includes)
        }
    };

    let mut includes = Includes::from_response(includes.as_ref());
    includes.add_entries(&collection.items);
    for item in &mut collection.items {
        includes.resolve(item);
    }

    Ok(collection)
}

/// The `message` of a CMS error body (`{"sys": {"type": "Error"}, "message": ...}`).
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_owned())
}
