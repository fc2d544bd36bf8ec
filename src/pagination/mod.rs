//! Pagination module
//!
//! Supports: Page Number, Link Header
//!
//! # Overview
//!
//! `PaginationController` answers "what do I fetch next or previous" and
//! learns from each response how that answer changes. In page-number mode
//! the answer comes from a local counter; in link mode it comes from the
//! `next`/`prev` entries of the server's `link` header, which
//! `resolve_link` extracts.

mod controller;
mod resolver;
mod types;

pub use controller::PaginationController;
pub use resolver::{resolve_link, resolve_link_with, LinkHeaderResolver};
pub use types::{
    IngestOutcome, Navigation, PageQuery, RelMatch, DEFAULT_LIMIT_PARAM, DEFAULT_PAGE_PARAM,
};
