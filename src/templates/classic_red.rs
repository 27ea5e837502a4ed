//! Bahi-khata style ledger sheet: double red border, invocation line in
//! Courier, Times body with red rules.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const RED: Color = Color::new(180, 0, 0);

pub struct ClassicRed;

impl TemplateRenderer for ClassicRed {
    fn id(&self) -> &'static str {
        "classic_red"
    }

    fn display_name(&self) -> &'static str {
        "Classic Red (Bahi Khata)"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_draw_color(RED);
        canvas.set_line_width(1.0);
        canvas.stroke_rect(5.0, 5.0, 200.0, 287.0);
        canvas.stroke_rect(7.0, 7.0, 196.0, 283.0);

        canvas.set_text_color(RED);
        canvas.set_font(FontFamily::Courier, FontStyle::Bold);
        canvas.set_font_size(24.0);
        canvas.text("|| SRI GANESHAY NAMAH ||", 105.0, 20.0, Align::Center);

        canvas.set_text_color(Color::BLACK);
        canvas.set_font(FontFamily::Times, FontStyle::Bold);
        canvas.set_font_size(22.0);
        canvas.text(&settings.store_name, 105.0, 35.0, Align::Center);

        canvas.set_font_size(14.0);
        canvas.text(title, 105.0, 50.0, Align::Center);

        Table::new(detail_rows(details))
            .start_y(60.0)
            .theme(Theme::Grid)
            .styles(TableStyle {
                font_family: FontFamily::Times,
                line_color: RED,
                text_color: Color::BLACK,
                ..TableStyle::default()
            })
            .draw(canvas);
        Ok(())
    }
}
