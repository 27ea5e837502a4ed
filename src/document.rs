//! Logical documents handed to the engine by calling screens, and the
//! rendered artifact handed back to a delivery sink.

/// A single-entity printable view (invoice, customer profile, product sheet).
///
/// `details` is an ordered label→value list: insertion order is print order,
/// labels are display strings, values are printed verbatim.
#[derive(Debug, Clone, Default)]
pub struct DetailDocument {
    pub title: String,
    pub details: Vec<(String, String)>,
}

impl DetailDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), details: Vec::new() }
    }

    pub fn detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }
}

/// A multi-row listing (inventory, order log, customer list). Each row's cell
/// order matches the column order; cells are pre-formatted display strings.
#[derive(Debug, Clone, Default)]
pub struct TabularDocument {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularDocument {
    pub fn new(
        title: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self { title: title.into(), columns, rows }
    }
}

/// A finished PDF. Immutable once produced; consumed exactly once by a
/// delivery sink.
#[derive(Debug)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
}

impl RenderedDocument {
    pub(crate) fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        Self { bytes, page_count }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
