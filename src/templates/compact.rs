//! Dense single-column listing: one "label: value" line per detail, minimal
//! chrome.

use super::TemplateRenderer;
use crate::canvas::{Align, Color, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

pub struct Compact;

impl TemplateRenderer for Compact {
    fn id(&self) -> &'static str {
        "compact"
    }

    fn display_name(&self) -> &'static str {
        "Compact List"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_font_size(12.0);
        canvas.set_text_color(Color::BLACK);
        canvas.text(&settings.store_name, 14.0, 15.0, Align::Left);
        canvas.text(title, 196.0, 15.0, Align::Right);

        canvas.set_draw_color(Color::BLACK);
        canvas.set_line_width(0.2);
        canvas.line(14.0, 18.0, 196.0, 18.0);

        let rows = details
            .iter()
            .map(|(label, value)| vec![format!("{label}: {value}")])
            .collect();
        Table::new(rows)
            .start_y(22.0)
            .theme(Theme::Plain)
            .styles(TableStyle { font_size: 9.0, cell_padding: 1.0, ..TableStyle::default() })
            .draw(canvas);
        Ok(())
    }
}
