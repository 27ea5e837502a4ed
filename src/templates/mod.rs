//! The template registry: ten visual layout strategies behind one trait.
//!
//! Every renderer receives the same informational content (settings, title,
//! ordered detail pairs) and owns only its typography, palette, and
//! geometry. Resolution by key never fails; unknown keys fall back to the
//! standard template.

mod classic_red;
mod compact;
mod corporate_blue;
mod elegant;
mod indian_gst;
mod minimalist;
mod modern_dark;
mod pro_orange;
mod standard;
mod tech;

use crate::canvas::PageCanvas;
use crate::error::RenderError;
use crate::settings::StoreSettings;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub use classic_red::ClassicRed;
pub use compact::Compact;
pub use corporate_blue::CorporateBlue;
pub use elegant::Elegant;
pub use indian_gst::IndianGst;
pub use minimalist::Minimalist;
pub use modern_dark::ModernDark;
pub use pro_orange::ProOrange;
pub use standard::Standard;
pub use tech::Tech;

/// One visual layout strategy. Implementations must tolerate empty settings
/// fields and empty detail sets; side effects are confined to the canvas.
pub trait TemplateRenderer: Send + Sync {
    /// Stable registry key.
    fn id(&self) -> &'static str;

    /// Human-readable name for settings/preview screens.
    fn display_name(&self) -> &'static str;

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError>;
}

pub const DEFAULT_TEMPLATE: &str = "standard";

/// Registration order is the order settings screens present the choices in.
static CATALOG: Lazy<Vec<&'static dyn TemplateRenderer>> = Lazy::new(|| {
    vec![
        &Standard,
        &IndianGst,
        &CorporateBlue,
        &ModernDark,
        &Minimalist,
        &ProOrange,
        &ClassicRed,
        &Compact,
        &Tech,
        &Elegant,
    ]
});

static REGISTRY: Lazy<BTreeMap<&'static str, &'static dyn TemplateRenderer>> =
    Lazy::new(|| CATALOG.iter().map(|t| (t.id(), *t)).collect());

/// Looks up a renderer by key, silently falling back to the default for
/// unknown or empty keys.
pub fn resolve(key: &str) -> &'static dyn TemplateRenderer {
    REGISTRY.get(key).copied().unwrap_or_else(|| {
        if !key.is_empty() {
            log::debug!("unknown template '{key}', falling back to '{DEFAULT_TEMPLATE}'");
        }
        REGISTRY[DEFAULT_TEMPLATE]
    })
}

/// All registered templates in presentation order.
pub fn catalog() -> &'static [&'static dyn TemplateRenderer] {
    &CATALOG
}

/// Detail pairs as two-column table rows, preserving insertion order.
fn detail_rows(details: &[(String, String)]) -> Vec<Vec<String>> {
    details
        .iter()
        .map(|(label, value)| vec![label.clone(), value.clone()])
        .collect()
}

/// The configured currency symbol, never empty.
fn symbol_of(settings: &StoreSettings) -> &str {
    if settings.currency_symbol.is_empty() {
        "₹"
    } else {
        &settings.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_templates_registered() {
        assert_eq!(catalog().len(), 10);
        let ids: Vec<_> = catalog().iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            [
                "standard",
                "indian_gst",
                "corporate_blue",
                "modern_dark",
                "minimalist",
                "pro_orange",
                "classic_red",
                "compact",
                "tech",
                "elegant",
            ]
        );
    }

    #[test]
    fn unknown_key_falls_back_to_standard() {
        assert_eq!(resolve("nonexistent").id(), "standard");
        assert_eq!(resolve("").id(), "standard");
        assert_eq!(resolve("elegant").id(), "elegant");
    }
}
