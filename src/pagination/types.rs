//! Pagination types
//!
//! Navigation state, page URL formatting and the knobs shared by the
//! controller and the link header resolver.

use serde::{Deserialize, Serialize};
use url::Url;

/// How a relation name is compared against a `link` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelMatch {
    /// The entry's relation text contains the name anywhere.
    ///
    /// Loose: a lookup for `prev` also matches `rel="previous"`.
    #[default]
    Contains,
    /// One of the entry's space-separated `rel` tokens equals the name
    Exact,
}

/// Authoritative navigation state, fixed to one variant at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Local page counter, never below 1
    PageNumbered { page: u32 },
    /// Server-supplied neighbours of the page fetched last
    LinkDriven {
        next: Option<String>,
        prev: Option<String>,
    },
}

impl Navigation {
    /// Current page number (page-number mode only)
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::PageNumbered { page } => Some(*page),
            Self::LinkDriven { .. } => None,
        }
    }

    /// Stored `next` URL (link mode only)
    pub fn next_url(&self) -> Option<&str> {
        match self {
            Self::LinkDriven { next, .. } => next.as_deref(),
            Self::PageNumbered { .. } => None,
        }
    }

    /// Stored `prev` URL (link mode only)
    pub fn prev_url(&self) -> Option<&str> {
        match self {
            Self::LinkDriven { prev, .. } => prev.as_deref(),
            Self::PageNumbered { .. } => None,
        }
    }
}

/// What `ingest` did with a response's headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// `next`/`prev` were replaced from the `link` header
    Updated,
    /// No usable `link` header; previous links were kept
    NoLinkHeader,
    /// Page-number mode does not read headers
    Ignored,
}

/// Formats page-number URLs for a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    base: Url,
    /// Query parameter carrying the page size
    pub limit_param: String,
    /// Query parameter carrying the page number
    pub page_param: String,
    /// Records per page
    pub page_size: u32,
}

/// Default query parameter for the page size
pub const DEFAULT_LIMIT_PARAM: &str = "_limit";

/// Default query parameter for the page number
pub const DEFAULT_PAGE_PARAM: &str = "_page";

impl PageQuery {
    /// Create a formatter with the default `_limit`/`_page` parameters
    pub fn new(base: Url, page_size: u32) -> Self {
        Self {
            base,
            limit_param: DEFAULT_LIMIT_PARAM.to_string(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            page_size,
        }
    }

    /// Override the parameter names
    #[must_use]
    pub fn with_params(
        mut self,
        limit_param: impl Into<String>,
        page_param: impl Into<String>,
    ) -> Self {
        self.limit_param = limit_param.into();
        self.page_param = page_param.into();
        self
    }

    /// Collection URL without pagination parameters
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of the given page
    pub fn url_for(&self, page: u32) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(&self.limit_param, &self.page_size.to_string())
            .append_pair(&self.page_param, &page.to_string());
        url.into()
    }
}
