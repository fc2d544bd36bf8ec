//! Pagination controller
//!
//! Owns the navigation state for one browsing session.

use super::resolver::LinkHeaderResolver;
use super::types::{IngestOutcome, Navigation, PageQuery, RelMatch};
use crate::error::{Error, Result};
use crate::types::{Direction, NavigationMode};
use reqwest::header::{HeaderMap, LINK};
use tracing::{debug, warn};
use url::Url;

/// Relation followed by `advance`
const REL_NEXT: &str = "next";

/// Relation followed by `retreat`
const REL_PREV: &str = "prev";

/// Computes fetch targets for forward/back navigation
///
/// Created once per session. State changes only through `advance`,
/// `retreat` and `ingest`.
#[derive(Debug, Clone)]
pub struct PaginationController {
    query: PageQuery,
    resolver: LinkHeaderResolver,
    nav: Navigation,
}

impl PaginationController {
    /// Create a controller positioned before the first page
    ///
    /// In link mode `next` is seeded with the first page URL and `prev` is
    /// empty; in page-number mode the counter starts at 1.
    pub fn new(base_url: &str, page_size: u32, mode: NavigationMode) -> Result<Self> {
        let base = Url::parse(base_url)?;
        Self::from_query(PageQuery::new(base, page_size), mode)
    }

    /// Create a controller from a prepared page formatter
    pub fn from_query(query: PageQuery, mode: NavigationMode) -> Result<Self> {
        if query.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }

        let nav = match mode {
            NavigationMode::Page => Navigation::PageNumbered { page: 1 },
            NavigationMode::Link => Navigation::LinkDriven {
                next: Some(query.url_for(1)),
                prev: None,
            },
        };

        Ok(Self {
            query,
            resolver: LinkHeaderResolver::default(),
            nav,
        })
    }

    /// Set how relation names are matched in `link` headers
    #[must_use]
    pub fn with_rel_match(mut self, rel_match: RelMatch) -> Self {
        self.resolver = LinkHeaderResolver::new(rel_match);
        self
    }

    /// Mode chosen at construction
    pub fn mode(&self) -> NavigationMode {
        match self.nav {
            Navigation::PageNumbered { .. } => NavigationMode::Page,
            Navigation::LinkDriven { .. } => NavigationMode::Link,
        }
    }

    /// Current navigation state
    pub fn state(&self) -> &Navigation {
        &self.nav
    }

    /// Collection URL without pagination parameters
    pub fn base_url(&self) -> &Url {
        self.query.base()
    }

    /// URL of the first page
    pub fn first_page(&self) -> String {
        self.query.url_for(1)
    }

    /// Target for the next page, or `None` if there is none
    pub fn advance(&mut self) -> Option<String> {
        match &mut self.nav {
            Navigation::PageNumbered { page } => {
                *page = page.saturating_add(1);
                Some(self.query.url_for(*page))
            }
            Navigation::LinkDriven { next, .. } => next.clone(),
        }
    }

    /// Target for the previous page, or `None` if there is none
    ///
    /// Page-number mode clamps at page 1 and returns page 1 again.
    pub fn retreat(&mut self) -> Option<String> {
        match &mut self.nav {
            Navigation::PageNumbered { page } => {
                *page = (*page).saturating_sub(1).max(1);
                Some(self.query.url_for(*page))
            }
            Navigation::LinkDriven { prev, .. } => prev.clone(),
        }
    }

    /// Dispatch on a navigation direction
    pub fn step(&mut self, direction: Direction) -> Option<String> {
        match direction {
            Direction::Forward => self.advance(),
            Direction::Back => self.retreat(),
        }
    }

    /// Update link state from the headers of the response just fetched
    ///
    /// Both links are replaced together; a relation missing from the header
    /// becomes `None`. Without a `link` header the old links are kept.
    pub fn ingest(&mut self, headers: &HeaderMap) -> IngestOutcome {
        let Navigation::LinkDriven { next, prev } = &mut self.nav else {
            return IngestOutcome::Ignored;
        };

        let Some(value) = link_header_value(headers) else {
            warn!("Response carried no usable link header, keeping previous links");
            return IngestOutcome::NoLinkHeader;
        };

        *next = self.resolver.resolve(&value, REL_NEXT);
        *prev = self.resolver.resolve(&value, REL_PREV);
        debug!(next = ?next, prev = ?prev, "Updated navigation links");
        IngestOutcome::Updated
    }
}

/// Join every `link` field into one value, as a browser would
fn link_header_value(headers: &HeaderMap) -> Option<String> {
    let mut values = Vec::new();
    for value in headers.get_all(LINK) {
        match value.to_str() {
            Ok(s) => values.push(s),
            Err(_) => debug!("Skipping undecodable link header value"),
        }
    }

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
