//! Store branding settings and the persistence seam they are read through.
//!
//! Settings live as a JSON blob in an external key-value store. The blob is
//! re-read at the start of every report call so edits take effect on the next
//! generation; nothing here is cached. A missing or unparseable blob is
//! valid and simply yields defaults.

use serde::{Deserialize, Serialize};

/// Branding and tax configuration consumed by every renderer.
///
/// Field names serialize in camelCase for compatibility with the persisted
/// settings format. Every field tolerates absence; renderers must accept
/// empty strings anywhere.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreSettings {
    pub store_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub footer_text: String,
    pub gstin: String,
    /// Tax percentage as a numeric string, e.g. "18". Non-numeric values
    /// fall back to 18 at the point of use.
    pub tax_rate: String,
    pub currency_symbol: String,
    /// Key into the template registry; unknown keys resolve to "standard".
    pub selected_template: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: "My E-Commerce Store".to_string(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            footer_text: String::new(),
            gstin: String::new(),
            tax_rate: "18".to_string(),
            currency_symbol: "₹".to_string(),
            selected_template: "standard".to_string(),
        }
    }
}

impl StoreSettings {
    /// Reads settings through the given store. Total: a missing blob yields
    /// defaults, a malformed blob is logged and yields defaults.
    pub fn load(store: &dyn SettingsStore) -> Self {
        match store.load_raw() {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("malformed settings blob, using defaults: {err}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Effective tax rate in percent; non-numeric or empty `tax_rate`
    /// defaults to 18.
    pub fn tax_rate_percent(&self) -> f64 {
        crate::format::parse_amount_opt(&self.tax_rate).unwrap_or(18.0)
    }
}

/// The persistence seam: yields the raw settings blob, if any.
///
/// Implementations are read-only as far as the report engine is concerned;
/// the engine never writes settings back.
pub trait SettingsStore {
    fn load_raw(&self) -> Option<String>;
}

/// In-memory store for tests and preview flows.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    blob: Option<String>,
}

impl MemorySettingsStore {
    pub fn empty() -> Self {
        Self { blob: None }
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    pub fn with_settings(settings: &StoreSettings) -> Self {
        // Serializing a plain struct of strings cannot fail.
        let blob = serde_json::to_string(settings).unwrap_or_default();
        Self { blob: Some(blob) }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_raw(&self) -> Option<String> {
        self.blob.clone()
    }
}

/// File-backed store: the settings blob lives in a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: std::path::PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load_raw(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blob_yields_defaults() {
        let settings = StoreSettings::load(&MemorySettingsStore::empty());
        assert_eq!(settings, StoreSettings::default());
        assert_eq!(settings.selected_template, "standard");
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn malformed_blob_yields_defaults() {
        let store = MemorySettingsStore::with_blob("{not json at all");
        assert_eq!(StoreSettings::load(&store), StoreSettings::default());
    }

    #[test]
    fn partial_camel_case_blob_fills_defaults() {
        let store = MemorySettingsStore::with_blob(
            r#"{"storeName":"Acme","footerText":"Thanks!","selectedTemplate":"elegant"}"#,
        );
        let settings = StoreSettings::load(&store);
        assert_eq!(settings.store_name, "Acme");
        assert_eq!(settings.footer_text, "Thanks!");
        assert_eq!(settings.selected_template, "elegant");
        assert_eq!(settings.tax_rate, "18");
    }

    #[test]
    fn tax_rate_tolerates_garbage() {
        let mut settings = StoreSettings::default();
        settings.tax_rate = "abc".to_string();
        assert_eq!(settings.tax_rate_percent(), 18.0);
        settings.tax_rate = "12".to_string();
        assert_eq!(settings.tax_rate_percent(), 12.0);
        settings.tax_rate = String::new();
        assert_eq!(settings.tax_rate_percent(), 18.0);
    }
}
