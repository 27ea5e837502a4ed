//! Black top band with an orange accent strip, orange right-aligned title,
//! soft gray grid.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const ORANGE: Color = Color::new(255, 153, 0);
const DARK: Color = Color::new(30, 30, 30);

pub struct ProOrange;

impl TemplateRenderer for ProOrange {
    fn id(&self) -> &'static str {
        "pro_orange"
    }

    fn display_name(&self) -> &'static str {
        "Professional Orange"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(DARK);
        canvas.fill_rect(0.0, 0.0, 210.0, 15.0);
        canvas.set_fill_color(ORANGE);
        canvas.fill_rect(0.0, 15.0, 210.0, 2.0);

        canvas.set_font_size(20.0);
        canvas.set_text_color(DARK);
        canvas.text(&settings.store_name, 14.0, 30.0, Align::Left);

        canvas.set_font_size(24.0);
        canvas.set_text_color(ORANGE);
        canvas.text(title, 196.0, 30.0, Align::Right);

        Table::new(detail_rows(details))
            .start_y(45.0)
            .theme(Theme::Grid)
            .styles(TableStyle { line_color: Color::gray(230), ..TableStyle::default() })
            .draw(canvas);
        Ok(())
    }
}
