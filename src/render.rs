//! Rendering collaborator
//!
//! The session hands decoded pages and user-facing alerts to a `Renderer`.
//! Layout is entirely the renderer's business.

use crate::types::Record;
use std::io::Write;
use tracing::warn;

/// Receives pages to display and alerts to show the user
pub trait Renderer {
    /// Replace whatever is displayed with `records`
    fn render(&mut self, records: &[Record]);

    /// Show a blocking, user-visible message
    fn alert(&mut self, message: &str);
}

/// Plain text renderer for terminals
///
/// Each record prints as its name, an `Age:` line and its description.
pub struct TextRenderer<W: Write, A: Write> {
    out: W,
    alerts: A,
}

impl TextRenderer<std::io::Stdout, std::io::Stderr> {
    /// Render to stdout, alert on stderr
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, A: Write> TextRenderer<W, A> {
    /// Create a renderer over the given writers
    pub fn new(out: W, alerts: A) -> Self {
        Self { out, alerts }
    }

    /// Give back the writers
    pub fn into_inner(self) -> (W, A) {
        (self.out, self.alerts)
    }

    fn write_page(&mut self, records: &[Record]) -> std::io::Result<()> {
        for record in records {
            writeln!(self.out, "== {}", record.name)?;
            writeln!(self.out, "Age: {}", record.age)?;
            writeln!(self.out, "{}", record.description)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write, A: Write> Renderer for TextRenderer<W, A> {
    fn render(&mut self, records: &[Record]) {
        if let Err(e) = self.write_page(records) {
            warn!("Failed to render page: {e}");
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.alerts, "{message}").and_then(|()| self.alerts.flush()) {
            warn!("Failed to show alert: {e}");
        }
    }
}

/// Holds back pages until `flush`, then renders only the latest one
///
/// Alerts pass straight through.
pub struct LastPage<R: Renderer> {
    inner: R,
    page: Option<Vec<Record>>,
}

impl<R: Renderer> LastPage<R> {
    /// Wrap a renderer
    pub fn new(inner: R) -> Self {
        Self { inner, page: None }
    }

    /// Render the latest page, if any, and give back the inner renderer
    pub fn flush(mut self) -> R {
        if let Some(page) = self.page.take() {
            self.inner.render(&page);
        }
        self.inner
    }
}

impl<R: Renderer> Renderer for LastPage<R> {
    fn render(&mut self, records: &[Record]) {
        self.page = Some(records.to_vec());
    }

    fn alert(&mut self, message: &str) {
        self.inner.alert(message);
    }
}
