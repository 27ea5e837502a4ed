mod common;

use common::{blank_settings, demo_settings, init_logging, pairs, render_with_template, TestResult};
use storeprint::templates;

fn invoice_details() -> Vec<(String, String)> {
    pairs(&[
        ("Order ID", "1042"),
        ("Date", "2026-08-30"),
        ("Status", "Shipped"),
        ("Customer Name", "John Doe"),
        ("Email", "john@example.com"),
        ("Phone", "+91 90000 00000"),
        ("Shipping Address", "14 Lake View, Mumbai"),
        ("Total Amount", "₹ 5310.00"),
    ])
}

#[test]
fn every_template_renders_a_full_invoice() -> TestResult {
    init_logging();
    let settings = demo_settings();
    for template in templates::catalog() {
        let pdf = render_with_template(
            template.id(),
            &settings,
            "Invoice #1042",
            &invoice_details(),
        )?;
        assert!(
            pdf.page_count() >= 1,
            "template '{}' produced no pages",
            template.id()
        );
    }
    Ok(())
}

#[test]
fn every_template_survives_empty_details() -> TestResult {
    let settings = demo_settings();
    for template in templates::catalog() {
        let pdf = render_with_template(template.id(), &settings, "Empty", &[])?;
        assert!(pdf.page_count() >= 1, "template '{}'", template.id());
    }
    Ok(())
}

#[test]
fn every_template_survives_blank_settings() -> TestResult {
    let settings = blank_settings();
    for template in templates::catalog() {
        let pdf =
            render_with_template(template.id(), &settings, "Sheet", &invoice_details())?;
        assert!(pdf.page_count() >= 1, "template '{}'", template.id());
    }
    Ok(())
}

#[test]
fn unknown_template_falls_back_to_standard() -> TestResult {
    let settings = demo_settings();
    let fallback =
        render_with_template("nonexistent", &settings, "Invoice #7", &invoice_details())?;
    let standard =
        render_with_template("standard", &settings, "Invoice #7", &invoice_details())?;
    assert_eq!(fallback.page_count(), standard.page_count());
    // The standard header carries the store name; fallback output must too.
    assert!(fallback.all_text().contains("Acme Traders"));
    Ok(())
}

#[test]
fn tax_invoice_back_calculates_tax() -> TestResult {
    let pdf = render_with_template(
        "indian_gst",
        &demo_settings(),
        "Invoice #1042",
        &invoice_details(),
    )?;
    let text = pdf.all_text();
    assert!(text.contains("TAX INVOICE"));
    // ₹ 5310.00 inclusive at 18% → 4500.00 taxable, 810.00 tax.
    assert!(text.contains("4500.00"), "taxable base missing: {text}");
    assert!(text.contains("810.00"), "tax amount missing: {text}");
    assert!(text.contains("IGST (18%)"));
    assert!(text.contains("Five Thousand Three Hundred Ten"));
    Ok(())
}

#[test]
fn tax_invoice_without_total_renders_zero_row() -> TestResult {
    let details = pairs(&[("Customer Name", "Jane"), ("Status", "Pending")]);
    let pdf = render_with_template("indian_gst", &demo_settings(), "Invoice #9", &details)?;
    assert!(pdf.all_text().contains("0.00"));
    Ok(())
}

#[test]
fn uppercasing_templates_transform_labels() -> TestResult {
    let details = pairs(&[("Customer Name", "John Doe")]);
    let pdf = render_with_template("modern_dark", &demo_settings(), "Invoice", &details)?;
    assert!(pdf.all_text().contains("CUSTOMER NAME"));
    Ok(())
}

#[test]
fn long_values_wrap_instead_of_failing() -> TestResult {
    let long_value = "very long shipping address segment ".repeat(20);
    let details = pairs(&[("Shipping Address", long_value.trim())]);
    for template in templates::catalog() {
        let pdf = render_with_template(template.id(), &demo_settings(), "Sheet", &details)?;
        assert!(pdf.page_count() >= 1, "template '{}'", template.id());
    }
    Ok(())
}
