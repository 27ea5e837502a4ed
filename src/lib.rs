//! storeprint: back-office PDF reports and invoices.
//!
//! Takes logical documents (ordered label→value detail sets, or column/row
//! listings) plus persisted store branding, renders them onto an A4 page
//! canvas with one of ten visual templates, and hands the finished PDF to a
//! delivery sink (open for viewing, or save as a named file).
//!
//! ```no_run
//! use storeprint::{
//!     DeliveryMode, DetailDocument, FileSystemDelivery, FileSettingsStore, ReportEngine,
//! };
//!
//! let mut engine = ReportEngine::new(
//!     FileSettingsStore::new("store_settings.json"),
//!     FileSystemDelivery::new("out"),
//! );
//! let invoice = DetailDocument::new("Invoice #42")
//!     .detail("Customer Name", "John Doe")
//!     .detail("Total Amount", "₹ 5310.00");
//! engine.generate_detail(&invoice, "invoice_42.pdf", DeliveryMode::View)?;
//! # Ok::<(), storeprint::ReportError>(())
//! ```

pub mod canvas;
pub mod document;
pub mod error;
pub mod format;
pub mod report;
pub mod settings;
pub mod templates;

pub use canvas::{Align, Color, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
pub use document::{DetailDocument, RenderedDocument, TabularDocument};
pub use error::{RenderError, ReportError};
pub use format::{amount_to_words, format_currency, parse_amount};
pub use report::{
    Delivered, DeliveryMode, DeliverySink, FileSystemDelivery, MemoryDelivery, ReportEngine,
};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore, StoreSettings};
pub use templates::{TemplateRenderer, DEFAULT_TEMPLATE};
