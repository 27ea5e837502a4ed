mod common;

use common::{demo_settings, init_logging, GeneratedPdf, TestResult};
use storeprint::{
    DeliveryMode, DetailDocument, FileSystemDelivery, MemoryDelivery, MemorySettingsStore,
    ReportEngine, TabularDocument,
};

fn engine_with(
    settings: &storeprint::StoreSettings,
) -> ReportEngine<MemorySettingsStore, MemoryDelivery> {
    ReportEngine::new(
        MemorySettingsStore::with_settings(settings),
        MemoryDelivery::default(),
    )
}

fn widget_listing() -> TabularDocument {
    TabularDocument::new(
        "Product Inventory Report",
        vec!["ID".to_string(), "Name".to_string()],
        vec![
            vec!["1".to_string(), "Widget".to_string()],
            vec!["2".to_string(), "Gadget".to_string()],
        ],
    )
}

#[test]
fn tabular_report_contains_rows_in_order_and_footer() -> TestResult {
    init_logging();
    let mut engine = engine_with(&demo_settings());
    engine.generate_report(&widget_listing(), "products_report.pdf", DeliveryMode::Download)?;

    let delivery = engine.into_delivery();
    assert_eq!(delivery.delivered.len(), 1);
    let delivered = &delivery.delivered[0];
    assert_eq!(delivered.filename.as_deref(), Some("products_report.pdf"));

    let pdf = GeneratedPdf::from_rendered(&delivered.document)?;
    assert_eq!(pdf.page_count(), 1);
    let text = pdf.all_text();
    assert!(text.contains("Acme Traders"));
    assert!(text.contains("Product Inventory Report"));
    assert!(text.contains("Generated:"));
    let widget = text.find("Widget").expect("first row missing");
    let gadget = text.find("Gadget").expect("second row missing");
    assert!(widget < gadget, "rows out of order");
    assert!(text.contains("Thank you for your business - Page 1/1"));
    Ok(())
}

#[test]
fn tabular_report_spills_and_repeats_head() -> TestResult {
    let rows = (1..=120)
        .map(|i| vec![i.to_string(), format!("Item {i}")])
        .collect();
    let listing = TabularDocument::new(
        "Order Report",
        vec!["ID".to_string(), "Name".to_string()],
        rows,
    );
    let mut engine = engine_with(&demo_settings());
    engine.generate_report(&listing, "orders_report.pdf", DeliveryMode::Download)?;

    let delivery = engine.into_delivery();
    let pdf = GeneratedPdf::from_rendered(&delivery.delivered[0].document)?;
    let pages = pdf.page_count();
    assert!(pages >= 2, "expected spill, got {pages} page(s)");
    assert!(pdf.page_text(1).contains(&format!("Page 1/{pages}")));
    assert!(pdf.page_text(pages as u32).contains(&format!("Page {pages}/{pages}")));
    // Head row repeats on continuation pages.
    assert!(pdf.page_text(2).contains("Name"));
    Ok(())
}

#[test]
fn delivery_mode_dispatch_is_exclusive() -> TestResult {
    let mut engine = engine_with(&demo_settings());

    engine.generate_report(&widget_listing(), "report.pdf", DeliveryMode::Download)?;
    let invoice = DetailDocument::new("Invoice #7").detail("Total Amount", "₹ 118.00");
    engine.generate_detail(&invoice, "invoice_7.pdf", DeliveryMode::View)?;

    let delivery = engine.into_delivery();
    assert_eq!(delivery.delivered.len(), 2);
    assert_eq!(delivery.delivered[0].mode, DeliveryMode::Download);
    assert!(delivery.delivered[0].filename.is_some());
    assert_eq!(delivery.delivered[1].mode, DeliveryMode::View);
    assert!(delivery.delivered[1].filename.is_none());
    Ok(())
}

#[test]
fn detail_uses_selected_template_with_fallback() -> TestResult {
    let mut settings = demo_settings();
    settings.selected_template = "no_such_template".to_string();
    let mut engine = engine_with(&settings);

    let sheet = DetailDocument::new("Product Sheet: Widget")
        .detail("Category", "Hardware")
        .detail("Price", "₹ 499.00");
    engine.generate_detail(&sheet, "product_1.pdf", DeliveryMode::View)?;

    let delivery = engine.into_delivery();
    let pdf = GeneratedPdf::from_rendered(&delivery.delivered[0].document)?;
    // Fallback is the standard layout: store name header plus the title.
    let text = pdf.all_text();
    assert!(text.contains("Acme Traders"));
    assert!(text.contains("Product Sheet: Widget"));
    Ok(())
}

#[test]
fn preview_forces_requested_template_and_sample_data() -> TestResult {
    let mut settings = demo_settings();
    settings.selected_template = "standard".to_string();
    let mut engine = engine_with(&settings);

    engine.generate_preview("indian_gst", &settings)?;

    let delivery = engine.into_delivery();
    assert_eq!(delivery.delivered.len(), 1);
    assert_eq!(delivery.delivered[0].mode, DeliveryMode::View);
    let pdf = GeneratedPdf::from_rendered(&delivery.delivered[0].document)?;
    let text = pdf.all_text();
    assert!(text.contains("TAX INVOICE"));
    assert!(text.contains("INV-001"));
    assert!(text.contains("John Doe"));
    assert!(text.contains("5310.00"));
    Ok(())
}

#[test]
fn preview_does_not_alter_persisted_selection() -> TestResult {
    let mut settings = demo_settings();
    settings.selected_template = "standard".to_string();
    let mut engine = engine_with(&settings);

    engine.generate_preview("indian_gst", &settings)?;
    // The next detail render must still resolve the persisted template.
    let invoice = DetailDocument::new("Invoice #8").detail("Total Amount", "₹ 236.00");
    engine.generate_detail(&invoice, "invoice_8.pdf", DeliveryMode::View)?;

    let delivery = engine.into_delivery();
    let pdf = GeneratedPdf::from_rendered(&delivery.delivered[1].document)?;
    assert!(
        !pdf.all_text().contains("TAX INVOICE"),
        "preview leaked into persisted template selection"
    );
    Ok(())
}

#[test]
fn empty_settings_store_uses_defaults() -> TestResult {
    let mut engine = ReportEngine::new(MemorySettingsStore::empty(), MemoryDelivery::default());
    engine.generate_report(&widget_listing(), "report.pdf", DeliveryMode::Download)?;

    let delivery = engine.into_delivery();
    let pdf = GeneratedPdf::from_rendered(&delivery.delivered[0].document)?;
    assert!(pdf.all_text().contains("My E-Commerce Store"));
    Ok(())
}

#[test]
fn filesystem_delivery_saves_named_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut engine = ReportEngine::new(
        MemorySettingsStore::with_settings(&demo_settings()),
        FileSystemDelivery::new(dir.path()),
    );
    engine.generate_report(&widget_listing(), "customers_report.pdf", DeliveryMode::Download)?;

    let path = dir.path().join("customers_report.pdf");
    assert!(path.is_file());
    let bytes = std::fs::read(path)?;
    assert!(bytes.starts_with(b"%PDF"));
    Ok(())
}
