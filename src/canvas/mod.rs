//! The page canvas: a builder-style drawing surface over `lopdf`.
//!
//! Coordinates are millimetres with the origin at the top-left of an A4
//! portrait page, matching the geometry every template is specified in;
//! conversion to PDF points (y-up) happens at operation-emission time.
//! Renderers receive a scoped `&mut PageCanvas`, append draw instructions in
//! order, and must not retain the handle past their own call.

mod table;

pub use table::{ColumnStyle, Table, TableResult, TableStyle, Theme};

use crate::document::RenderedDocument;
use crate::error::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use std::collections::BTreeSet;
use std::io::Cursor;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const MM_TO_PT: f32 = 72.0 / 25.4;
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Line-height factor for multi-line text blocks.
const LINE_FACTOR: f32 = 1.15;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    fn components(self) -> Vec<Object> {
        vec![
            (self.r as f32 / 255.0).into(),
            (self.g as f32 / 255.0).into(),
            (self.b as f32 / 255.0).into(),
        ]
    }
}

/// The standard-14 families the canvas can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Base font name and fixed resource name for a family/style pair.
fn font_entry(family: FontFamily, style: FontStyle) -> (&'static str, &'static str) {
    use FontFamily::*;
    use FontStyle::*;
    match (family, style) {
        (Helvetica, Normal) => ("Helvetica", "F1"),
        (Helvetica, Bold) => ("Helvetica-Bold", "F2"),
        (Helvetica, Italic) => ("Helvetica-Oblique", "F3"),
        (Helvetica, BoldItalic) => ("Helvetica-BoldOblique", "F4"),
        (Times, Normal) => ("Times-Roman", "F5"),
        (Times, Bold) => ("Times-Bold", "F6"),
        (Times, Italic) => ("Times-Italic", "F7"),
        (Times, BoldItalic) => ("Times-BoldItalic", "F8"),
        (Courier, Normal) => ("Courier", "F9"),
        (Courier, Bold) => ("Courier-Bold", "F10"),
        (Courier, Italic) => ("Courier-Oblique", "F11"),
        (Courier, BoldItalic) => ("Courier-BoldOblique", "F12"),
    }
}

/// Average glyph advance as a fraction of the font size. Courier is exact;
/// the proportional families are close enough for alignment and wrapping.
fn width_factor(family: FontFamily, style: FontStyle) -> f32 {
    match (family, style) {
        (FontFamily::Courier, _) => 0.600,
        (FontFamily::Helvetica, FontStyle::Bold | FontStyle::BoldItalic) => 0.556,
        (FontFamily::Helvetica, _) => 0.513,
        (FontFamily::Times, FontStyle::Bold | FontStyle::BoldItalic) => 0.520,
        (FontFamily::Times, _) => 0.490,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A multi-page A4 drawing surface. One canvas per rendered document.
pub struct PageCanvas {
    pages: Vec<Vec<Operation>>,
    current: usize,
    fill_color: Color,
    draw_color: Color,
    text_color: Color,
    line_width: f32,
    font_family: FontFamily,
    font_style: FontStyle,
    font_size: f32,
    char_space: f32,
    fonts_used: BTreeSet<(&'static str, &'static str)>,
}

impl PageCanvas {
    pub fn new() -> Self {
        let mut canvas = Self {
            pages: vec![Vec::new()],
            current: 0,
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
            text_color: Color::BLACK,
            line_width: 0.2,
            font_family: FontFamily::Helvetica,
            font_style: FontStyle::Normal,
            font_size: 16.0,
            char_space: 0.0,
            fonts_used: BTreeSet::new(),
        };
        canvas.fonts_used.insert(font_entry(FontFamily::Helvetica, FontStyle::Normal));
        canvas
    }

    // --- page management ---

    pub fn add_page(&mut self) {
        self.pages.push(Vec::new());
        self.current = self.pages.len() - 1;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Switches drawing to an existing page (zero-based). Out-of-range
    /// indices are ignored; used by footer passes that revisit every page.
    pub fn select_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        &mut self.pages[self.current]
    }

    // --- graphics state ---

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Stroke width in millimetres.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn set_font(&mut self, family: FontFamily, style: FontStyle) {
        self.font_family = family;
        self.font_style = style;
        self.fonts_used.insert(font_entry(family, style));
    }

    /// Font size in points, as every template specifies typography.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Extra spacing between glyphs, in points. Zero disables.
    pub fn set_char_space(&mut self, space: f32) {
        self.char_space = space;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    // --- drawing primitives ---

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let color = self.fill_color;
        let rect = rect_pt(x, y, width, height);
        let ops = self.ops();
        ops.push(Operation::new("rg", color.components()));
        ops.push(Operation::new("re", rect));
        ops.push(Operation::new("f", vec![]));
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let color = self.draw_color;
        let width_pt = self.line_width * MM_TO_PT;
        let rect = rect_pt(x, y, width, height);
        let ops = self.ops();
        ops.push(Operation::new("RG", color.components()));
        ops.push(Operation::new("w", vec![width_pt.into()]));
        ops.push(Operation::new("re", rect));
        ops.push(Operation::new("S", vec![]));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let color = self.draw_color;
        let width_pt = self.line_width * MM_TO_PT;
        let (ax, ay) = point_pt(x1, y1);
        let (bx, by) = point_pt(x2, y2);
        let ops = self.ops();
        ops.push(Operation::new("RG", color.components()));
        ops.push(Operation::new("w", vec![width_pt.into()]));
        ops.push(Operation::new("m", vec![ax.into(), ay.into()]));
        ops.push(Operation::new("l", vec![bx.into(), by.into()]));
        ops.push(Operation::new("S", vec![]));
    }

    /// Estimated width of `text` in millimetres at the current font.
    pub fn measure_text(&self, text: &str) -> f32 {
        let factor = width_factor(self.font_family, self.font_style);
        let glyphs = text.chars().count() as f32;
        (glyphs * factor * self.font_size + glyphs * self.char_space) * PT_TO_MM
    }

    /// Advance between baselines of a multi-line block, in millimetres.
    pub fn line_height(&self) -> f32 {
        self.font_size * LINE_FACTOR * PT_TO_MM
    }

    /// Places text with `(x, y)` on the baseline. Embedded newlines start
    /// fresh lines below; alignment is applied per line around `x`.
    pub fn text(&mut self, text: &str, x: f32, y: f32, align: Align) {
        let mut baseline = y;
        let line_height = self.line_height();
        for line in text.split('\n') {
            self.text_line(line, x, baseline, align);
            baseline += line_height;
        }
    }

    fn text_line(&mut self, line: &str, x: f32, y: f32, align: Align) {
        if line.is_empty() {
            return;
        }
        let drawn_x = match align {
            Align::Left => x,
            Align::Center => x - self.measure_text(line) / 2.0,
            Align::Right => x - self.measure_text(line),
        };
        let (_, resource) = font_entry(self.font_family, self.font_style);
        let size = self.font_size;
        let color = self.text_color;
        let char_space = self.char_space;
        let (tx, ty) = point_pt(drawn_x, y);
        let encoded = to_win_ansi(line);
        let ops = self.ops();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(resource.as_bytes().to_vec()), size.into()],
        ));
        ops.push(Operation::new("rg", color.components()));
        if char_space != 0.0 {
            ops.push(Operation::new("Tc", vec![char_space.into()]));
        }
        ops.push(Operation::new("Td", vec![tx.into(), ty.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, StringFormat::Literal)],
        ));
        if char_space != 0.0 {
            ops.push(Operation::new("Tc", vec![0.0_f32.into()]));
        }
        ops.push(Operation::new("ET", vec![]));
    }

    // --- document assembly ---

    /// Assembles the page tree and produces the finished document.
    pub fn finish(self) -> Result<RenderedDocument, RenderError> {
        let page_count = self.pages.len();
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (base_name, resource) in &self.fonts_used {
            font_dict.set(
                resource.as_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => *base_name,
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let mut page_ids = Vec::with_capacity(page_count);
        for operations in self.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Object::Stream(Stream::new(dictionary! {}, encoded)));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.0_f32.into(),
                    0.0_f32.into(),
                    (PAGE_WIDTH * MM_TO_PT).into(),
                    (PAGE_HEIGHT * MM_TO_PT).into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
                "Count" => page_ids.len() as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut Cursor::new(&mut bytes))?;
        Ok(RenderedDocument::new(bytes, page_count))
    }
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// mm/y-down point to PDF pt/y-up.
fn point_pt(x: f32, y: f32) -> (f32, f32) {
    (x * MM_TO_PT, (PAGE_HEIGHT - y) * MM_TO_PT)
}

/// mm/y-down rect (top-left anchored) to PDF `re` arguments.
fn rect_pt(x: f32, y: f32, width: f32, height: f32) -> Vec<Object> {
    vec![
        (x * MM_TO_PT).into(),
        ((PAGE_HEIGHT - y - height) * MM_TO_PT).into(),
        (width * MM_TO_PT).into(),
        (height * MM_TO_PT).into(),
    ]
}

/// Standard fonts carry WinAnsi encoding; anything outside it prints as '?'.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 255 { c as u8 } else { b'?' })
        .collect()
}
