//! PDF rendering for record exports.
//!
//! Callers describe a document as a [`Report`] (title plus a sequence of
//! sections) and get back the finished PDF bytes. Two section shapes cover
//! every export: a two-column key/value listing for single-record detail
//! sheets, and a grid table for tabular exports. Wide tables go on landscape
//! pages.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect, Rgb,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("pdf generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Page orientation. A4 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    fn page_size(self) -> (Mm, Mm) {
        match self {
            Orientation::Portrait => (Mm(210.0), Mm(297.0)),
            Orientation::Landscape => (Mm(297.0), Mm(210.0)),
        }
    }
}

/// One block of report content.
#[derive(Debug, Clone)]
pub enum Section {
    /// Intermediate heading between blocks.
    Heading(String),
    /// Label/value pairs rendered as two columns.
    KeyValues(Vec<(String, String)>),
    /// Grid table with a shaded header row.
    Table(Table),
}

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A complete document to render.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub orientation: Orientation,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            orientation: Orientation::Portrait,
            sections: Vec::new(),
        }
    }

    pub fn landscape(mut self) -> Self {
        self.orientation = Orientation::Landscape;
        self
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.sections.push(Section::Heading(text.into()));
        self
    }

    pub fn key_values(mut self, pairs: Vec<(String, String)>) -> Self {
        self.sections.push(Section::KeyValues(pairs));
        self
    }

    pub fn table(mut self, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        self.sections.push(Section::Table(Table { headers, rows }));
        self
    }

    /// Render to PDF bytes.
    pub fn render(&self) -> Result<Vec<u8>, ReportError> {
        Renderer::run(self)
    }
}

const MARGIN: f32 = 15.0;
const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const LINE_STEP: f32 = 7.0;
const TABLE_ROW_H: f32 = 7.0;
const LABEL_COL_W: f32 = 60.0;

// Helvetica's average glyph is roughly half an em wide. Good enough for
// deciding when a cell value must be truncated.
const PT_TO_MM: f32 = 0.352_778;

fn approx_text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

/// Shorten `text` with a trailing ellipsis so it fits in `max_mm` at
/// `font_size`. Returns the text unchanged when it already fits.
fn fit_text(text: &str, font_size: f32, max_mm: f32) -> String {
    if approx_text_width_mm(text, font_size) <= max_mm {
        return text.to_string();
    }
    let char_w = font_size * 0.5 * PT_TO_MM;
    let keep = ((max_mm / char_w) as usize).saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

struct Renderer<'a> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    report: &'a Report,
    page_w: f32,
    page_h: f32,
    y: f32,
}

impl<'a> Renderer<'a> {
    fn run(report: &'a Report) -> Result<Vec<u8>, ReportError> {
        let (Mm(page_w), Mm(page_h)) = report.orientation.page_size();
        let (doc, page, layer) =
            PdfDocument::new(&report.title, Mm(page_w), Mm(page_h), "content");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut r = Renderer {
            doc,
            layer,
            regular,
            bold,
            report,
            page_w,
            page_h,
            y: page_h - MARGIN,
        };
        r.title();
        for section in &report.sections {
            match section {
                Section::Heading(text) => r.section_heading(text),
                Section::KeyValues(pairs) => r.key_values(pairs),
                Section::Table(table) => r.grid_table(table),
            }
        }
        Ok(r.doc.save_to_bytes()?)
    }

    fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * MARGIN
    }

    /// Start a fresh page when fewer than `needed` millimetres remain.
    /// Returns true when a new page was started.
    fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y - needed < MARGIN {
            let (page, layer) =
                self.doc
                    .add_page(Mm(self.page_w), Mm(self.page_h), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = self.page_h - MARGIN;
            return true;
        }
        false
    }

    fn title(&mut self) {
        self.layer.use_text(
            &self.report.title,
            TITLE_SIZE,
            Mm(MARGIN),
            Mm(self.y - 6.0),
            &self.bold,
        );
        self.y -= 9.0;
        self.rule(0.6);
        self.y -= 6.0;
    }

    fn rule(&mut self, thickness: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None)));
        self.layer.set_outline_thickness(thickness);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y)), false),
                (Point::new(Mm(self.page_w - MARGIN), Mm(self.y)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn section_heading(&mut self, text: &str) {
        self.ensure_room(LINE_STEP + 4.0);
        self.y -= 3.0;
        self.layer
            .use_text(text, HEADING_SIZE, Mm(MARGIN), Mm(self.y - 4.0), &self.bold);
        self.y -= LINE_STEP + 2.0;
    }

    fn key_values(&mut self, pairs: &[(String, String)]) {
        let value_w = self.usable_width() - LABEL_COL_W;
        for (label, value) in pairs {
            self.ensure_room(LINE_STEP);
            let baseline = self.y - 5.0;
            self.layer
                .use_text(label, BODY_SIZE, Mm(MARGIN), Mm(baseline), &self.bold);
            let value = fit_text(value, BODY_SIZE, value_w);
            self.layer.use_text(
                &value,
                BODY_SIZE,
                Mm(MARGIN + LABEL_COL_W),
                Mm(baseline),
                &self.regular,
            );
            self.y -= LINE_STEP;
        }
        self.y -= 3.0;
    }

    fn grid_table(&mut self, table: &Table) {
        if table.headers.is_empty() {
            return;
        }
        let col_w = self.usable_width() / table.headers.len() as f32;
        self.ensure_room(2.0 * TABLE_ROW_H);
        self.table_header(&table.headers, col_w);
        for row in &table.rows {
            // Repeat the header after a page break.
            if self.ensure_room(TABLE_ROW_H) {
                self.table_header(&table.headers, col_w);
            }
            self.table_row(row, col_w, &self.regular.clone());
        }
        self.y -= 3.0;
    }

    fn table_header(&mut self, headers: &[String], col_w: f32) {
        let top = self.y;
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.88, 0.88, 0.88, None)));
        let shade = Rect::new(
            Mm(MARGIN),
            Mm(top - TABLE_ROW_H),
            Mm(self.page_w - MARGIN),
            Mm(top),
        )
        .with_mode(PaintMode::Fill);
        self.layer.add_rect(shade);
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.table_row(headers, col_w, &self.bold.clone());
    }

    fn table_row(&mut self, cells: &[String], col_w: f32, font: &IndirectFontRef) {
        let top = self.y;
        let baseline = top - 5.0;
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN + i as f32 * col_w;
            let text = fit_text(cell, BODY_SIZE, col_w - 2.0);
            self.layer
                .use_text(&text, BODY_SIZE, Mm(x + 1.0), Mm(baseline), font);
        }
        self.y -= TABLE_ROW_H;
        self.grid_lines(cells.len(), col_w, top);
    }

    fn grid_lines(&mut self, ncols: usize, col_w: f32, top: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.6, 0.6, 0.6, None)));
        self.layer.set_outline_thickness(0.25);
        let bottom = top - TABLE_ROW_H;
        let right = MARGIN + ncols as f32 * col_w;
        for h in [top, bottom] {
            self.layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(MARGIN), Mm(h)), false),
                    (Point::new(Mm(right), Mm(h)), false),
                ],
                is_closed: false,
            });
        }
        for i in 0..=ncols {
            let x = MARGIN + i as f32 * col_w;
            self.layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(x), Mm(top)), false),
                    (Point::new(Mm(x), Mm(bottom)), false),
                ],
                is_closed: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_detail_sheet() {
        let pdf = Report::new("Student CS-001")
            .key_values(vec![
                ("Roll No".into(), "CS-001".into()),
                ("Name".into(), "Asha Verma".into()),
                ("Email".into(), String::new()),
            ])
            .render()
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.len() > 500);
    }

    #[test]
    fn renders_wide_landscape_table() {
        let headers: Vec<String> = (0..16).map(|i| format!("C{i}")).collect();
        let rows: Vec<Vec<String>> = (0..80)
            .map(|r| (0..16).map(|c| format!("{r}-{c}")).collect())
            .collect();
        let pdf = Report::new("Exam Results")
            .landscape()
            .table(headers, rows)
            .render()
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn paginates_long_detail_sheet() {
        let pairs: Vec<(String, String)> = (0..60)
            .map(|i| (format!("Field {i}"), format!("value {i}")))
            .collect();
        let pdf = Report::new("Long Sheet").key_values(pairs).render().unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn fit_text_truncates_with_ellipsis() {
        let long = "a very long value that cannot possibly fit in ten millimetres";
        let fitted = fit_text(long, BODY_SIZE, 10.0);
        assert!(fitted.ends_with('…'));
        assert!(fitted.chars().count() < long.chars().count());

        assert_eq!(fit_text("short", BODY_SIZE, 60.0), "short");
    }

    #[test]
    fn orientation_swaps_page_size() {
        let (w, h) = Orientation::Landscape.page_size();
        assert_eq!((w, h), (Mm(297.0), Mm(210.0)));
        let (w, h) = Orientation::Portrait.page_size();
        assert_eq!((w, h), (Mm(210.0), Mm(297.0)));
    }
}
