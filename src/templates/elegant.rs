//! Gold-accented serif template: letter-spaced uppercase wordmark, centered
//! content column.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, ColumnStyle, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const GOLD: Color = Color::new(212, 175, 55);

pub struct Elegant;

impl TemplateRenderer for Elegant {
    fn id(&self) -> &'static str {
        "elegant"
    }

    fn display_name(&self) -> &'static str {
        "Elegant Serif"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(GOLD);
        canvas.fill_rect(0.0, 0.0, 210.0, 5.0);

        canvas.set_font(FontFamily::Times, FontStyle::Normal);
        canvas.set_text_color(Color::gray(80));
        canvas.set_font_size(26.0);
        canvas.set_char_space(2.0);
        canvas.text(&settings.store_name.to_uppercase(), 105.0, 30.0, Align::Center);
        canvas.set_char_space(0.0);

        canvas.set_font_size(10.0);
        canvas.text(&settings.address, 105.0, 40.0, Align::Center);

        canvas.set_font_size(16.0);
        canvas.set_text_color(Color::BLACK);
        canvas.text(title, 105.0, 60.0, Align::Center);

        canvas.set_draw_color(GOLD);
        canvas.set_line_width(0.2);
        canvas.line(80.0, 65.0, 130.0, 65.0);

        Table::new(detail_rows(details))
            .start_y(75.0)
            .theme(Theme::Plain)
            .styles(TableStyle {
                font_family: FontFamily::Times,
                font_size: 12.0,
                cell_padding: 5.0,
                halign: Align::Center,
                ..TableStyle::default()
            })
            .column_style(
                0,
                ColumnStyle {
                    font_style: Some(FontStyle::Bold),
                    text_color: Some(Color::gray(150)),
                    ..ColumnStyle::default()
                },
            )
            .draw(canvas);
        Ok(())
    }
}
