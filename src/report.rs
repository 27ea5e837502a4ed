//! The report engine: the three entry points callers generate PDFs through,
//! plus the delivery seam the finished documents leave by.
//!
//! The engine owns its collaborators (settings store, delivery sink) by
//! injection and is the single error boundary: everything below it
//! propagates, everything that reaches it is logged once and returned as one
//! operation-named failure. Settings are re-read from the store on every
//! call so edits take effect on the next generation.

use crate::canvas::{Align, Color, PageCanvas, Table, TableStyle, Theme};
use crate::document::{DetailDocument, RenderedDocument, TabularDocument};
use crate::error::{RenderError, ReportError};
use crate::settings::{SettingsStore, StoreSettings};
use crate::templates;

const SLATE: Color = Color::new(44, 62, 80);

/// Whether output opens for interactive viewing or lands as a named file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    View,
    Download,
}

/// Consumes finished documents. Exactly one of the two methods runs per
/// generation; implementations own the "open a viewer" / "write a file"
/// side effects.
pub trait DeliverySink {
    fn view(&mut self, document: RenderedDocument) -> std::io::Result<()>;
    fn save(&mut self, filename: &str, document: RenderedDocument) -> std::io::Result<()>;
}

/// Filesystem-backed sink. `save` writes under the output directory; `view`
/// writes to a temp file and logs its path for an external viewer to pick
/// up.
pub struct FileSystemDelivery {
    out_dir: std::path::PathBuf,
}

impl FileSystemDelivery {
    pub fn new(out_dir: impl Into<std::path::PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }
}

impl DeliverySink for FileSystemDelivery {
    fn view(&mut self, document: RenderedDocument) -> std::io::Result<()> {
        let path = std::env::temp_dir().join(format!(
            "storeprint_view_{}.pdf",
            chrono::Local::now().format("%Y%m%d%H%M%S%3f")
        ));
        std::fs::write(&path, document.bytes())?;
        log::info!("document ready for viewing at {}", path.display());
        Ok(())
    }

    fn save(&mut self, filename: &str, document: RenderedDocument) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(filename);
        std::fs::write(&path, document.bytes())?;
        log::info!("document saved to {}", path.display());
        Ok(())
    }
}

/// Recording sink for tests and embedding hosts that deliver elsewhere.
#[derive(Default)]
pub struct MemoryDelivery {
    pub delivered: Vec<Delivered>,
}

pub struct Delivered {
    pub mode: DeliveryMode,
    pub filename: Option<String>,
    pub document: RenderedDocument,
}

impl DeliverySink for MemoryDelivery {
    fn view(&mut self, document: RenderedDocument) -> std::io::Result<()> {
        self.delivered.push(Delivered { mode: DeliveryMode::View, filename: None, document });
        Ok(())
    }

    fn save(&mut self, filename: &str, document: RenderedDocument) -> std::io::Result<()> {
        self.delivered.push(Delivered {
            mode: DeliveryMode::Download,
            filename: Some(filename.to_string()),
            document,
        });
        Ok(())
    }
}

pub struct ReportEngine<S: SettingsStore, D: DeliverySink> {
    settings_store: S,
    delivery: D,
}

impl<S: SettingsStore, D: DeliverySink> ReportEngine<S, D> {
    pub fn new(settings_store: S, delivery: D) -> Self {
        Self { settings_store, delivery }
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    pub fn into_delivery(self) -> D {
        self.delivery
    }

    /// Renders a multi-row listing with the fixed list-report layout. The
    /// selected template is deliberately not consulted: listings are dense
    /// operational output, not branded customer documents.
    pub fn generate_report(
        &mut self,
        document: &TabularDocument,
        filename: &str,
        mode: DeliveryMode,
    ) -> Result<(), ReportError> {
        let settings = StoreSettings::load(&self.settings_store);
        let result = render_list_report(document, &settings)
            .and_then(|rendered| self.deliver(rendered, filename, mode));
        result.map_err(|source| {
            log::error!("list report '{}' failed: {source}", document.title);
            ReportError::Report { source }
        })
    }

    /// Renders a single-entity document through the template selected in
    /// settings (unknown keys fall back to the standard template).
    pub fn generate_detail(
        &mut self,
        document: &DetailDocument,
        filename: &str,
        mode: DeliveryMode,
    ) -> Result<(), ReportError> {
        let settings = StoreSettings::load(&self.settings_store);
        let template = templates::resolve(&settings.selected_template);

        let result = render_detail(template, &settings, &document.title, &document.details)
            .and_then(|rendered| self.deliver(rendered, filename, mode));
        result.map_err(|source| {
            log::error!(
                "detail document '{}' via template '{}' failed: {source}",
                document.title,
                template.id()
            );
            ReportError::Detail { template: template.id().to_string(), source }
        })
    }

    /// Renders the canned sample document through an explicitly requested
    /// template, over possibly unsaved settings, and always opens it for
    /// viewing. The persisted settings store is not consulted and not
    /// touched; this is WYSIWYG inspection before committing a choice.
    pub fn generate_preview(
        &mut self,
        template_id: &str,
        current: &StoreSettings,
    ) -> Result<(), ReportError> {
        let mut settings = current.clone();
        if settings.store_name.is_empty() {
            settings.store_name = "Store Name".to_string();
        }
        settings.selected_template = template_id.to_string();

        let template = templates::resolve(template_id);
        let details = sample_details(&settings.currency_symbol);

        let result = render_detail(template, &settings, "PREVIEW INVOICE", &details)
            .and_then(|rendered| self.delivery.view(rendered).map_err(RenderError::from));
        result.map_err(|source| {
            log::error!("preview of template '{template_id}' failed: {source}");
            ReportError::Preview { source }
        })
    }

    fn deliver(
        &mut self,
        rendered: RenderedDocument,
        filename: &str,
        mode: DeliveryMode,
    ) -> Result<(), RenderError> {
        match mode {
            DeliveryMode::View => self.delivery.view(rendered)?,
            DeliveryMode::Download => self.delivery.save(filename, rendered)?,
        }
        Ok(())
    }
}

fn render_detail(
    template: &dyn templates::TemplateRenderer,
    settings: &StoreSettings,
    title: &str,
    details: &[(String, String)],
) -> Result<RenderedDocument, RenderError> {
    let mut canvas = PageCanvas::new();
    template.render(&mut canvas, settings, title, details)?;
    canvas.finish()
}

fn render_list_report(
    document: &TabularDocument,
    settings: &StoreSettings,
) -> Result<RenderedDocument, RenderError> {
    let mut canvas = PageCanvas::new();

    canvas.set_fill_color(SLATE);
    canvas.fill_rect(0.0, 0.0, 210.0, 40.0);

    canvas.set_font_size(22.0);
    canvas.set_text_color(Color::WHITE);
    let store_name = if settings.store_name.is_empty() {
        "Store Report"
    } else {
        &settings.store_name
    };
    canvas.text(store_name, 14.0, 20.0, Align::Left);

    canvas.set_font_size(10.0);
    canvas.set_text_color(Color::gray(200));
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    canvas.text(&format!("Generated: {generated}"), 14.0, 30.0, Align::Left);

    canvas.set_font_size(16.0);
    canvas.set_text_color(Color::WHITE);
    canvas.text(&document.title, 196.0, 25.0, Align::Right);

    Table::new(document.rows.clone())
        .head(document.columns.clone())
        .start_y(45.0)
        .theme(Theme::Grid)
        .styles(TableStyle { font_size: 9.0, ..TableStyle::default() })
        .head_fill(SLATE)
        .draw(&mut canvas);

    let pages = canvas.page_count();
    for page in 0..pages {
        canvas.select_page(page);
        canvas.set_font_size(9.0);
        canvas.set_text_color(Color::gray(150));
        canvas.text(
            &format!("{} - Page {}/{}", settings.footer_text, page + 1, pages),
            105.0,
            290.0,
            Align::Center,
        );
    }

    canvas.finish()
}

/// Canned sample data for template previews: one plausible invoice.
fn sample_details(currency_symbol: &str) -> Vec<(String, String)> {
    vec![
        ("Invoice No".to_string(), "INV-001".to_string()),
        (
            "Date".to_string(),
            chrono::Local::now().format("%d/%m/%Y").to_string(),
        ),
        ("Customer Name".to_string(), "John Doe".to_string()),
        ("Item 1".to_string(), "Wireless Headphones - 1 pc".to_string()),
        ("Item 2".to_string(), "Mechanical Keyboard - 1 pc".to_string()),
        ("Subtotal".to_string(), "4500.00".to_string()),
        ("Tax (18%)".to_string(), "810.00".to_string()),
        (
            "Total Amount".to_string(),
            format!("{currency_symbol} 5310.00"),
        ),
    ]
}
