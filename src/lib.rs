//! # restpager
//!
//! A small client for paginated REST collections.
//!
//! ## Features
//!
//! - **Two navigation modes**: a local page counter (`?_limit=N&_page=P`) or
//!   server-supplied `next`/`prev` URLs from the `link` response header
//! - **Link header resolution**: pull the URL for any relation out of a
//!   `link` header value
//! - **Record creation**: POST JSON records to the collection
//! - **Pluggable rendering**: pages and alerts go to a `Renderer`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restpager::{ClientConfig, CollectionSession, Direction, TextRenderer};
//!
//! #[tokio::main]
//! async fn main() -> restpager::Result<()> {
//!     let config = ClientConfig::default();
//!     let mut session = CollectionSession::from_config(&config, TextRenderer::stdio())?;
//!
//!     session.open().await?;
//!     session.navigate(Direction::Forward).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                   CollectionSession                   │
//! │  open()   navigate(dir)   fetch_page(url)   submit()  │
//! └───────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴───────────┬────────────────┐
//! │     HTTP     │       Paginate        │     Render     │
//! ├──────────────┼───────────────────────┼────────────────┤
//! │ GET / POST   │ Page Number           │ Renderer trait │
//! │ Timeouts     │ Link Header (ingest)  │ TextRenderer   │
//! └──────────────┴───────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Records, forms and navigation enums
pub mod types;

/// HTTP client
pub mod http;

/// Link header resolution and pagination state
pub mod pagination;

/// Client configuration
pub mod config;

/// Rendering collaborator
pub mod render;

/// Browsing session
pub mod session;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{resolve_link, IngestOutcome, PaginationController};
pub use render::{LastPage, Renderer, TextRenderer};
pub use session::{CollectionSession, PageLoad};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
