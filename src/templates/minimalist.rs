//! Serif template: centered letterhead over a quiet Times key/value list,
//! wide side margins, italic labels.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, ColumnStyle, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

pub struct Minimalist;

impl TemplateRenderer for Minimalist {
    fn id(&self) -> &'static str {
        "minimalist"
    }

    fn display_name(&self) -> &'static str {
        "Minimalist Type"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        let _ = title; // fixed "INVOICE" wordmark instead

        canvas.set_font(FontFamily::Times, FontStyle::Normal);
        canvas.set_font_size(28.0);
        canvas.set_text_color(Color::BLACK);
        canvas.text(&settings.store_name, 105.0, 40.0, Align::Center);

        canvas.set_font_size(12.0);
        canvas.text("INVOICE", 105.0, 55.0, Align::Center);

        canvas.set_line_width(0.2);
        canvas.set_draw_color(Color::BLACK);
        canvas.line(80.0, 58.0, 130.0, 58.0);

        Table::new(detail_rows(details))
            .start_y(70.0)
            .margins(40.0, 40.0)
            .theme(Theme::Plain)
            .styles(TableStyle {
                font_family: FontFamily::Times,
                font_size: 11.0,
                cell_padding: 3.0,
                ..TableStyle::default()
            })
            .column_style(
                0,
                ColumnStyle {
                    width: Some(60.0),
                    font_style: Some(FontStyle::Italic),
                    ..ColumnStyle::default()
                },
            )
            .draw(canvas);
        Ok(())
    }
}
