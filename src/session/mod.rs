//! Browsing session
//!
//! Ties one `PaginationController` to an HTTP client and a renderer.
//!
//! # Overview
//!
//! Requests are strictly sequential: every navigation awaits its fetch
//! before the next one can start. A fetch reads the response headers into
//! the controller before the body is decoded, so the stored links always
//! describe the page that was just rendered.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{IngestOutcome, PaginationController};
use crate::render::Renderer;
use crate::types::{Direction, NewRecord, Record, RecordForm};
use serde_json::Value;
use tracing::{debug, error, info};

/// Result of a single page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    /// URL that was fetched
    pub url: String,
    /// Records handed to the renderer
    pub records: usize,
    /// What happened to the navigation links
    pub links: IngestOutcome,
}

/// One user's browsing session over a collection
pub struct CollectionSession<R: Renderer> {
    client: HttpClient,
    controller: PaginationController,
    renderer: R,
    collection_url: String,
}

impl<R: Renderer> CollectionSession<R> {
    /// Create a session from its parts
    pub fn new(client: HttpClient, controller: PaginationController, renderer: R) -> Self {
        let collection_url = controller.base_url().to_string();
        Self {
            client,
            controller,
            renderer,
            collection_url,
        }
    }

    /// Create a session from a client config
    pub fn from_config(config: &ClientConfig, renderer: R) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(client, config.controller()?, renderer))
    }

    /// Navigation state
    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// The renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// End the session, returning the renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Load the first page
    pub async fn open(&mut self) -> Result<PageLoad> {
        let url = self.controller.first_page();
        self.fetch_page(&url).await
    }

    /// Move one page in `direction`
    ///
    /// Returns `Ok(None)` without any request when there is nowhere to go.
    pub async fn navigate(&mut self, direction: Direction) -> Result<Option<PageLoad>> {
        let Some(url) = self.controller.step(direction) else {
            debug!(?direction, "No page in this direction, not fetching");
            return Ok(None);
        };
        self.fetch_page(&url).await.map(Some)
    }

    /// Fetch `url`, update links from its headers, then render its records
    pub async fn fetch_page(&mut self, url: &str) -> Result<PageLoad> {
        info!("Fetching {url}");
        let response = self.client.get(url).await?;

        let links = self.controller.ingest(response.headers());

        let body = response.bytes().await?;
        let records: Vec<Record> = serde_json::from_slice(&body)
            .map_err(|e| Error::decode(format!("expected a list of records: {e}")))?;

        self.renderer.render(&records);
        debug!(count = records.len(), "Rendered page");

        Ok(PageLoad {
            url: url.to_string(),
            records: records.len(),
            links,
        })
    }

    /// POST a new record to the collection
    pub async fn create(&self, record: &NewRecord) -> Result<Value> {
        let config = RequestConfig::new()
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(serde_json::to_value(record)?);
        let response = self
            .client
            .post_with_config(&self.collection_url, config)
            .await?;
        let created: Value = response.json().await?;
        info!("Created record in {}", self.collection_url);
        Ok(created)
    }

    /// Submit the form, alerting the user on failure
    ///
    /// The form is cleared whether or not the request succeeded. Navigation
    /// state is never touched.
    pub async fn submit(&mut self, form: &mut RecordForm) -> Option<Value> {
        let record = form.to_record();
        form.reset();

        match self.create(&record).await {
            Ok(created) => Some(created),
            Err(e) => {
                error!("Creating record failed: {e}");
                self.renderer
                    .alert(&format!("Adding new record failed with error: \n[{e}]"));
                None
            }
        }
    }
}

impl<R: Renderer> std::fmt::Debug for CollectionSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionSession")
            .field("collection_url", &self.collection_url)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
