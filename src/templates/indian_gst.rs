//! Tax-invoice template: bordered page, centered letterhead with GSTIN, and
//! a synthesized line-item table derived from the detail values.

use super::{symbol_of, TemplateRenderer};
use crate::canvas::{
    Align, Color, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme,
};
use crate::error::RenderError;
use crate::format::{amount_to_words, parse_amount};
use crate::settings::StoreSettings;

pub struct IndianGst;

impl TemplateRenderer for IndianGst {
    fn id(&self) -> &'static str {
        "indian_gst"
    }

    fn display_name(&self) -> &'static str {
        "Indian GST (B2B/B2C)"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        let symbol = symbol_of(settings);
        let _ = title; // the invoice carries its own fixed heading

        canvas.set_draw_color(Color::BLACK);
        canvas.set_line_width(0.2);
        canvas.stroke_rect(5.0, 5.0, 200.0, 287.0);

        canvas.set_font(FontFamily::Helvetica, FontStyle::Bold);
        canvas.set_font_size(18.0);
        canvas.set_text_color(Color::BLACK);
        canvas.text(&settings.store_name, 105.0, 15.0, Align::Center);

        canvas.set_font(FontFamily::Helvetica, FontStyle::Normal);
        canvas.set_font_size(10.0);
        canvas.text(&settings.address, 105.0, 22.0, Align::Center);
        let gstin = if settings.gstin.is_empty() { "N/A" } else { &settings.gstin };
        canvas.text(&format!("GSTIN: {gstin}"), 105.0, 27.0, Align::Center);

        canvas.line(5.0, 30.0, 205.0, 30.0);

        canvas.set_font_size(12.0);
        canvas.text("TAX INVOICE", 105.0, 38.0, Align::Center);

        let mut y = 45.0;
        for (label, value) in details {
            canvas.set_font(FontFamily::Helvetica, FontStyle::Bold);
            canvas.set_font_size(10.0);
            canvas.text(&format!("{label}:"), 15.0, y, Align::Left);
            canvas.set_font(FontFamily::Helvetica, FontStyle::Normal);
            canvas.text(value, 60.0, y, Align::Left);
            y += 6.0;
        }

        // The detail set is key/value, not line items, so a single mock row
        // is synthesized by back-calculating tax out of the total. The scan
        // takes the first value containing the currency symbol; with more
        // than one such entry, or a total formatted without the symbol, it
        // picks the wrong amount. Display approximation, not accounting.
        let total = details
            .iter()
            .map(|(_, value)| value.as_str())
            .find(|value| value.contains(symbol))
            .map(parse_amount)
            .unwrap_or(0.0);
        let rate = settings.tax_rate_percent();
        let taxable = round2(total / (1.0 + rate / 100.0));
        let tax = round2(total - taxable);

        let result = Table::new(vec![vec![
            "Item/Service".to_string(),
            "8512".to_string(),
            "1".to_string(),
            format!("{taxable:.2}"),
            format!("{taxable:.2}"),
            format!("{tax:.2}"),
            format!("{total:.2}"),
        ]])
        .head(vec![
            "Description".to_string(),
            "HSN/SAC".to_string(),
            "Qty".to_string(),
            "Rate".to_string(),
            "Taxable".to_string(),
            format!("IGST ({}%)", display_rate(rate)),
            "Total".to_string(),
        ])
        .start_y(y + 5.0)
        .margins(5.0, 5.0)
        .theme(Theme::Grid)
        .styles(TableStyle {
            text_color: Color::BLACK,
            line_color: Color::BLACK,
            ..TableStyle::default()
        })
        .head_fill(Color::WHITE)
        .head_text_color(Color::BLACK)
        .draw(canvas);

        let final_y = result.final_y + 20.0;
        canvas.set_font(FontFamily::Helvetica, FontStyle::Normal);
        canvas.set_font_size(10.0);
        canvas.text("Amount in Words:", 15.0, final_y, Align::Left);
        canvas.set_font(FontFamily::Helvetica, FontStyle::Italic);
        canvas.text(
            &amount_to_words(total.round().max(0.0) as u64, symbol),
            45.0,
            final_y,
            Align::Left,
        );

        canvas.set_font(FontFamily::Helvetica, FontStyle::Normal);
        canvas.text("Authorized Signatory", 160.0, final_y + 20.0, Align::Center);
        canvas.text(
            &format!("For {}", settings.store_name),
            160.0,
            final_y + 25.0,
            Align::Center,
        );
        Ok(())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// "18" rather than "18.0", "12.5" kept as-is.
fn display_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{rate}")
    }
}
