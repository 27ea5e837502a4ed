//! Grid/plain/striped table layout on top of [`PageCanvas`].
//!
//! Covers what the templates ask of a table routine: an optional head row,
//! uniform body rows, per-column style overrides, word-wrapping inside
//! column widths, and page-break spill with the head repeated. No per-cell
//! styling beyond column overrides; content is uniform by design.

use super::{Align, Color, FontFamily, FontStyle, PageCanvas, PAGE_WIDTH};
use std::collections::BTreeMap;

/// Where the table resumes after a page break, and how close to the page
/// bottom a row may start.
const TOP_MARGIN: f32 = 15.0;
const BOTTOM_MARGIN: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Every cell stroked.
    #[default]
    Grid,
    /// No rules, no fills beyond explicit overrides.
    Plain,
    /// Alternating row fills, no rules.
    Striped,
}

/// Base typography and spacing applied to every cell.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub font_family: FontFamily,
    pub font_style: FontStyle,
    /// Points.
    pub font_size: f32,
    /// Millimetres on every side of the cell text.
    pub cell_padding: f32,
    pub text_color: Color,
    pub line_color: Color,
    pub halign: Align,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Helvetica,
            font_style: FontStyle::Normal,
            font_size: 10.0,
            cell_padding: 2.0,
            text_color: Color::BLACK,
            line_color: Color::gray(200),
            halign: Align::Left,
        }
    }
}

/// Per-column overrides over the base style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnStyle {
    /// Fixed width in millimetres; unset columns share the leftover width.
    pub width: Option<f32>,
    pub font_style: Option<FontStyle>,
    pub fill: Option<Color>,
    pub text_color: Option<Color>,
    pub halign: Option<Align>,
}

#[derive(Debug, Clone)]
pub struct Table {
    head: Option<Vec<String>>,
    body: Vec<Vec<String>>,
    start_y: f32,
    margin_left: f32,
    margin_right: f32,
    theme: Theme,
    styles: TableStyle,
    head_fill: Option<Color>,
    head_text_color: Color,
    alternate_row_fill: Option<Color>,
    column_styles: BTreeMap<usize, ColumnStyle>,
}

#[derive(Debug, Clone, Copy)]
pub struct TableResult {
    /// Bottom edge of the last drawn row, in millimetres on the final page.
    pub final_y: f32,
}

impl Table {
    pub fn new(body: Vec<Vec<String>>) -> Self {
        Self {
            head: None,
            body,
            start_y: TOP_MARGIN,
            margin_left: 14.0,
            margin_right: 14.0,
            theme: Theme::Grid,
            styles: TableStyle::default(),
            head_fill: None,
            head_text_color: Color::WHITE,
            alternate_row_fill: None,
            column_styles: BTreeMap::new(),
        }
    }

    pub fn head(mut self, head: Vec<String>) -> Self {
        self.head = Some(head);
        self
    }

    pub fn start_y(mut self, y: f32) -> Self {
        self.start_y = y;
        self
    }

    pub fn margins(mut self, left: f32, right: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn styles(mut self, styles: TableStyle) -> Self {
        self.styles = styles;
        self
    }

    pub fn head_fill(mut self, fill: Color) -> Self {
        self.head_fill = Some(fill);
        self
    }

    pub fn head_text_color(mut self, color: Color) -> Self {
        self.head_text_color = color;
        self
    }

    pub fn alternate_row_fill(mut self, fill: Color) -> Self {
        self.alternate_row_fill = Some(fill);
        self
    }

    pub fn column_style(mut self, index: usize, style: ColumnStyle) -> Self {
        self.column_styles.insert(index, style);
        self
    }

    fn column_count(&self) -> usize {
        let body_max = self.body.iter().map(Vec::len).max().unwrap_or(0);
        self.head.as_ref().map_or(body_max, |h| h.len().max(body_max))
    }

    fn column_widths(&self, count: usize) -> Vec<f32> {
        let available = PAGE_WIDTH - self.margin_left - self.margin_right;
        let mut widths = vec![0.0_f32; count];
        let mut fixed_total = 0.0;
        let mut flexible = 0usize;
        for (i, width) in widths.iter_mut().enumerate() {
            match self.column_styles.get(&i).and_then(|s| s.width) {
                Some(w) => {
                    *width = w;
                    fixed_total += w;
                }
                None => flexible += 1,
            }
        }
        if flexible > 0 {
            let share = ((available - fixed_total) / flexible as f32).max(5.0);
            for (i, width) in widths.iter_mut().enumerate() {
                if self.column_styles.get(&i).and_then(|s| s.width).is_none() {
                    *width = share;
                }
            }
        }
        widths
    }

    /// Draws the table, spilling to fresh pages as needed.
    pub fn draw(&self, canvas: &mut PageCanvas) -> TableResult {
        let count = self.column_count();
        if count == 0 {
            return TableResult { final_y: self.start_y };
        }
        let widths = self.column_widths(count);

        let mut y = self.start_y;
        if let Some(head) = &self.head {
            y = self.draw_row(canvas, head, &widths, y, RowKind::Head);
        }
        for (index, row) in self.body.iter().enumerate() {
            let striped = self.theme == Theme::Striped && index % 2 == 1;
            let height = self.row_height(canvas, row, &widths, RowKind::Body { striped });
            if y + height > PAGE_HEIGHT_LIMIT {
                canvas.add_page();
                y = TOP_MARGIN;
                if let Some(head) = &self.head {
                    y = self.draw_row(canvas, head, &widths, y, RowKind::Head);
                }
            }
            y = self.draw_row(canvas, row, &widths, y, RowKind::Body { striped });
        }
        TableResult { final_y: y }
    }

    fn cell_font(&self, column: usize, kind: RowKind) -> (FontFamily, FontStyle) {
        let style = match kind {
            RowKind::Head => FontStyle::Bold,
            RowKind::Body { .. } => self
                .column_styles
                .get(&column)
                .and_then(|s| s.font_style)
                .unwrap_or(self.styles.font_style),
        };
        (self.styles.font_family, style)
    }

    fn wrap_cell(
        &self,
        canvas: &mut PageCanvas,
        text: &str,
        column: usize,
        width: f32,
        kind: RowKind,
    ) -> Vec<String> {
        let (family, style) = self.cell_font(column, kind);
        canvas.set_font(family, style);
        canvas.set_font_size(self.styles.font_size);
        let inner = (width - 2.0 * self.styles.cell_padding).max(1.0);
        let mut lines = Vec::new();
        for raw_line in text.split('\n') {
            let mut line = String::new();
            for word in raw_line.split_whitespace() {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };
                if canvas.measure_text(&candidate) <= inner || line.is_empty() {
                    line = candidate;
                } else {
                    lines.push(line);
                    line = word.to_string();
                }
            }
            lines.push(line);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    fn row_height(
        &self,
        canvas: &mut PageCanvas,
        row: &[String],
        widths: &[f32],
        kind: RowKind,
    ) -> f32 {
        let mut max_lines = 1usize;
        for (column, width) in widths.iter().enumerate() {
            let text = row.get(column).map(String::as_str).unwrap_or("");
            let lines = self.wrap_cell(canvas, text, column, *width, kind);
            max_lines = max_lines.max(lines.len());
        }
        canvas.set_font_size(self.styles.font_size);
        max_lines as f32 * canvas.line_height() + 2.0 * self.styles.cell_padding
    }

    fn draw_row(
        &self,
        canvas: &mut PageCanvas,
        row: &[String],
        widths: &[f32],
        y: f32,
        kind: RowKind,
    ) -> f32 {
        let height = self.row_height(canvas, row, widths, kind);
        let mut x = self.margin_left;
        for (column, width) in widths.iter().enumerate() {
            let text = row.get(column).map(String::as_str).unwrap_or("");

            if let Some(fill) = self.cell_fill(column, kind) {
                canvas.set_fill_color(fill);
                canvas.fill_rect(x, y, *width, height);
            }
            if self.theme == Theme::Grid {
                canvas.set_draw_color(self.styles.line_color);
                canvas.set_line_width(0.2);
                canvas.stroke_rect(x, y, *width, height);
            }

            let (family, style) = self.cell_font(column, kind);
            canvas.set_font(family, style);
            canvas.set_font_size(self.styles.font_size);
            canvas.set_text_color(self.cell_text_color(column, kind));

            let halign = match kind {
                RowKind::Head => self.styles.halign,
                RowKind::Body { .. } => self
                    .column_styles
                    .get(&column)
                    .and_then(|s| s.halign)
                    .unwrap_or(self.styles.halign),
            };
            let lines = self.wrap_cell(canvas, text, column, *width, kind);
            let mut baseline =
                y + self.styles.cell_padding + self.styles.font_size * 0.8 * MM_PER_PT;
            for line in lines {
                let anchor = match halign {
                    Align::Left => x + self.styles.cell_padding,
                    Align::Center => x + *width / 2.0,
                    Align::Right => x + *width - self.styles.cell_padding,
                };
                canvas.text(&line, anchor, baseline, halign);
                baseline += canvas.line_height();
            }
            x += *width;
        }
        y + height
    }

    fn cell_fill(&self, column: usize, kind: RowKind) -> Option<Color> {
        match kind {
            RowKind::Head => self.head_fill,
            RowKind::Body { striped } => {
                if let Some(fill) = self.column_styles.get(&column).and_then(|s| s.fill) {
                    return Some(fill);
                }
                if striped {
                    self.alternate_row_fill.or(Some(Color::gray(245)))
                } else {
                    None
                }
            }
        }
    }

    fn cell_text_color(&self, column: usize, kind: RowKind) -> Color {
        match kind {
            RowKind::Head => self.head_text_color,
            RowKind::Body { .. } => self
                .column_styles
                .get(&column)
                .and_then(|s| s.text_color)
                .unwrap_or(self.styles.text_color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Head,
    Body { striped: bool },
}

const PAGE_HEIGHT_LIMIT: f32 = super::PAGE_HEIGHT - BOTTOM_MARGIN;
const MM_PER_PT: f32 = 25.4 / 72.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| vec![format!("row {i}"), "value".to_string()])
            .collect()
    }

    #[test]
    fn final_y_advances_per_row() {
        let mut canvas = PageCanvas::new();
        let short = Table::new(rows(2)).start_y(40.0).draw(&mut canvas);
        let long = Table::new(rows(5)).start_y(40.0).draw(&mut canvas);
        assert!(long.final_y > short.final_y);
        assert!(short.final_y > 40.0);
    }

    #[test]
    fn many_rows_spill_to_new_pages() {
        let mut canvas = PageCanvas::new();
        Table::new(rows(120))
            .head(vec!["ID".to_string(), "Name".to_string()])
            .start_y(45.0)
            .draw(&mut canvas);
        assert!(canvas.page_count() >= 2);
    }

    #[test]
    fn empty_body_draws_nothing() {
        let mut canvas = PageCanvas::new();
        let result = Table::new(Vec::new()).start_y(55.0).draw(&mut canvas);
        assert_eq!(result.final_y, 55.0);
        assert_eq!(canvas.page_count(), 1);
    }
}
