//! Near-black header band with a centered title, striped body with
//! uppercased labels.

use super::TemplateRenderer;
use crate::canvas::{Align, Color, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const INK: Color = Color::new(20, 20, 20);

pub struct ModernDark;

impl TemplateRenderer for ModernDark {
    fn id(&self) -> &'static str {
        "modern_dark"
    }

    fn display_name(&self) -> &'static str {
        "Modern Dark"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(INK);
        canvas.fill_rect(0.0, 0.0, 210.0, 60.0);

        canvas.set_text_color(Color::WHITE);
        canvas.set_font(FontFamily::Helvetica, FontStyle::Bold);
        canvas.set_font_size(26.0);
        canvas.text(title, 105.0, 30.0, Align::Center);

        canvas.set_font(FontFamily::Helvetica, FontStyle::Normal);
        canvas.set_font_size(12.0);
        canvas.text(&settings.store_name, 105.0, 45.0, Align::Center);

        let rows = details
            .iter()
            .map(|(label, value)| vec![label.to_uppercase(), value.clone()])
            .collect();
        Table::new(rows)
            .start_y(70.0)
            .theme(Theme::Striped)
            .alternate_row_fill(Color::gray(245))
            .styles(TableStyle { font_size: 11.0, text_color: INK, ..TableStyle::default() })
            .draw(canvas);
        Ok(())
    }
}
