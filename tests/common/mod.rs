#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use storeprint::{PageCanvas, RenderedDocument, StoreSettings};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Enables log output for a test run; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_rendered(rendered: &RenderedDocument) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(rendered.bytes().to_vec())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page (1-based), empty string when extraction fails.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Concatenated text of every page.
    pub fn all_text(&self) -> String {
        let mut text = String::new();
        for page in 1..=self.page_count() as u32 {
            text.push_str(&self.page_text(page));
            text.push('\n');
        }
        text
    }
}

/// Settings with every branding field populated.
pub fn demo_settings() -> StoreSettings {
    StoreSettings {
        store_name: "Acme Traders".to_string(),
        address: "12 Market Road, Pune".to_string(),
        email: "hello@acme.example".to_string(),
        phone: "+91 98765 43210".to_string(),
        footer_text: "Thank you for your business".to_string(),
        gstin: "27AAPFU0939F1ZV".to_string(),
        tax_rate: "18".to_string(),
        currency_symbol: "₹".to_string(),
        selected_template: "standard".to_string(),
    }
}

/// Settings with every string field empty, for totality checks.
pub fn blank_settings() -> StoreSettings {
    StoreSettings {
        store_name: String::new(),
        address: String::new(),
        email: String::new(),
        phone: String::new(),
        footer_text: String::new(),
        gstin: String::new(),
        tax_rate: String::new(),
        currency_symbol: String::new(),
        selected_template: String::new(),
    }
}

/// Renders a detail set through one template straight onto a fresh canvas.
pub fn render_with_template(
    template_id: &str,
    settings: &StoreSettings,
    title: &str,
    details: &[(String, String)],
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let mut canvas = PageCanvas::new();
    storeprint::templates::resolve(template_id).render(&mut canvas, settings, title, details)?;
    GeneratedPdf::from_rendered(&canvas.finish()?)
}

pub fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}
