//! Terminal-flavored template: full-page green wash, monospace throughout,
//! prompt-prefixed title.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, ColumnStyle, FontFamily, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const DARK_GREEN: Color = Color::new(0, 100, 0);

pub struct Tech;

impl TemplateRenderer for Tech {
    fn id(&self) -> &'static str {
        "tech"
    }

    fn display_name(&self) -> &'static str {
        "Tech Startup"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(Color::new(240, 255, 240));
        canvas.fill_rect(0.0, 0.0, 210.0, 297.0);

        canvas.set_font(FontFamily::Courier, FontStyle::Normal);
        canvas.set_text_color(DARK_GREEN);
        canvas.set_font_size(24.0);
        canvas.text(&settings.store_name.to_lowercase(), 14.0, 25.0, Align::Left);

        canvas.set_draw_color(DARK_GREEN);
        canvas.set_line_width(0.2);
        canvas.line(14.0, 30.0, 50.0, 30.0);

        canvas.set_font_size(14.0);
        canvas.text(&format!("> {title}"), 14.0, 45.0, Align::Left);

        Table::new(detail_rows(details))
            .start_y(55.0)
            .theme(Theme::Plain)
            .styles(TableStyle {
                font_family: FontFamily::Courier,
                text_color: Color::new(0, 50, 0),
                ..TableStyle::default()
            })
            .column_style(
                0,
                ColumnStyle { font_style: Some(FontStyle::Bold), ..ColumnStyle::default() },
            )
            .draw(canvas);
        Ok(())
    }
}
