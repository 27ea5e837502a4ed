//! Default template: dark slate header band, right-aligned title, key/value
//! grid with a shaded label column.

use super::{detail_rows, TemplateRenderer};
use crate::canvas::{Align, Color, ColumnStyle, FontStyle, PageCanvas, Table, TableStyle, Theme};
use crate::error::RenderError;
use crate::settings::StoreSettings;

const SLATE: Color = Color::new(44, 62, 80);

pub struct Standard;

impl TemplateRenderer for Standard {
    fn id(&self) -> &'static str {
        "standard"
    }

    fn display_name(&self) -> &'static str {
        "Standard Default"
    }

    fn render(
        &self,
        canvas: &mut PageCanvas,
        settings: &StoreSettings,
        title: &str,
        details: &[(String, String)],
    ) -> Result<(), RenderError> {
        canvas.set_fill_color(SLATE);
        canvas.fill_rect(0.0, 0.0, 210.0, 40.0);

        canvas.set_font_size(22.0);
        canvas.set_text_color(Color::WHITE);
        let store_name = if settings.store_name.is_empty() {
            "Store Name"
        } else {
            &settings.store_name
        };
        canvas.text(store_name, 14.0, 15.0, Align::Left);

        canvas.set_font_size(10.0);
        canvas.set_text_color(Color::gray(200));
        let mut y = 22.0;
        if !settings.address.is_empty() {
            canvas.text(&settings.address, 14.0, y, Align::Left);
            y += 5.0;
        }
        let contact = [settings.email.as_str(), settings.phone.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" | ");
        if !contact.is_empty() {
            canvas.text(&contact, 14.0, y, Align::Left);
        }

        canvas.set_font_size(18.0);
        canvas.set_text_color(Color::WHITE);
        canvas.text(title, 196.0, 25.0, Align::Right);

        Table::new(detail_rows(details))
            .start_y(55.0)
            .theme(Theme::Grid)
            .styles(TableStyle { font_size: 12.0, cell_padding: 4.0, ..TableStyle::default() })
            .column_style(
                0,
                ColumnStyle {
                    width: Some(50.0),
                    font_style: Some(FontStyle::Bold),
                    fill: Some(Color::gray(240)),
                    ..ColumnStyle::default()
                },
            )
            .draw(canvas);
        Ok(())
    }
}
