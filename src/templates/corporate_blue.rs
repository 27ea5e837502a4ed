//! Corporate template: full-height navy sidebar carrying the letterhead,
//! uppercased title and a plain key/value grid in the main pane.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, ColumnStyle, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const NAVY: Color = Color::new(0, 51, 102);

pub struct CorporateBlue;

impl TemplateRenderer for CorporateBlue {
    fn id(&self) -> &'static str {
        "corporate_blue"
    }

    fn display_name(&self) -> &'static str {
        "Corporate Blue"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(NAVY);
        canvas.fill_rect(0.0, 0.0, 50.0, 297.0);

        canvas.set_text_color(Color::WHITE);
        canvas.set_font_size(20.0);
        let stacked_name = settings
            .store_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("\n");
        canvas.text(&stacked_name, 10.0, 30.0, Align::Left);

        canvas.set_font_size(9.0);
        let stacked_address = settings.address.split(',').collect::<Vec<_>>().join("\n");
        canvas.text(&stacked_address, 10.0, 80.0, Align::Left);
        canvas.text(
            &format!("{}\n{}", settings.email, settings.phone),
            10.0,
            110.0,
            Align::Left,
        );

        canvas.set_text_color(NAVY);
        canvas.set_font_size(24.0);
        canvas.text(&title.to_uppercase(), 60.0, 30.0, Align::Left);

        canvas.set_line_width(0.5);
        canvas.set_draw_color(Color::gray(200));
        canvas.line(60.0, 35.0, 200.0, 35.0);

        Table::new(detail_rows(details))
            .start_y(50.0)
            .margins(60.0, 14.0)
            .theme(Theme::Plain)
            .styles(TableStyle {
                font_size: 11.0,
                cell_padding: 5.0,
                text_color: Color::gray(50),
                ..TableStyle::default()
            })
            .column_style(
                0,
                ColumnStyle {
                    width: Some(50.0),
                    font_style: Some(FontStyle::Bold),
                    ..ColumnStyle::default()
                },
            )
            .draw(canvas);

        canvas.set_draw_color(NAVY);
        canvas.set_line_width(2.0);
        canvas.line(60.0, 280.0, 200.0, 280.0);
        canvas.set_font_size(10.0);
        canvas.set_text_color(NAVY);
        let footer = if settings.footer_text.is_empty() {
            "Thank you!"
        } else {
            &settings.footer_text
        };
        canvas.text(footer, 60.0, 285.0, Align::Left);
        Ok(())
    }
}
