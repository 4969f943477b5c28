//! Draws a [`TimetableDocument`] onto one A4 landscape PDF page

use crate::{
    document::TimetableDocument,
    error::GenerateError,
    layout::{self, GridLayout, PageGeometry, TitleBlock},
};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};

const BORDER_THICKNESS: f32 = 0.5;

/// Share of the font height that sits above the baseline
const ASCENT: f32 = 0.7;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Page-space painter working in top-left millimetres
struct Canvas<'a> {
    layer: PdfLayerReference,
    page: &'a PageGeometry,
    fonts: Fonts,
}

impl Canvas<'_> {
    fn text(&self, text: &str, font_size: f32, x: f32, baseline: f32, bold: bool) {
        let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
        self.layer.use_text(
            text,
            font_size,
            Mm(x),
            Mm(self.page.height - baseline),
            font,
        );
    }

    /// Text centred horizontally on `center_x`
    fn centered_text(&self, text: &str, font_size: f32, center_x: f32, baseline: f32, bold: bool) {
        let x = center_x - layout::text_width(text, font_size) / 2.0;
        self.text(text, font_size, x, baseline, bold);
    }

    fn rectangle(&self, x: f32, y: f32, width: f32, height: f32) {
        let corners = [
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ];
        let points = corners
            .iter()
            .map(|&(px, py)| (Point::new(Mm(px), Mm(self.page.height - py)), false))
            .collect();

        self.layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    /// A bordered cell with its lines wrapped, shrunk and centred inside
    fn cell(&self, lines: &[String], x: f32, y: f32, grid: &GridLayout, bold: bool) {
        self.rectangle(x, y, grid.column_width, grid.row_height);

        if lines.is_empty() {
            return;
        }

        let fitted = layout::fit_cell(lines, grid.column_width, grid.row_height, grid.font_size);
        let block_height = fitted.line_height * fitted.lines.len() as f32;
        let top = y + (grid.row_height - block_height) / 2.0;
        let center_x = x + grid.column_width / 2.0;

        for (i, line) in fitted.lines.iter().enumerate() {
            let baseline = top
                + fitted.line_height * i as f32
                + (fitted.line_height + layout::font_height(fitted.font_size) * ASCENT) / 2.0;
            self.centered_text(line, fitted.font_size, center_x, baseline, bold);
        }
    }
}

/// Renders the document to PDF bytes
///
/// The page carries the school name, the document title and then the grid:
/// a header row of start and end times followed by one row per weekday.
pub fn render(document: &TimetableDocument, school_name: &str) -> Result<Vec<u8>, GenerateError> {
    let page = PageGeometry::A4_LANDSCAPE;
    let (doc, page_index, layer_index) = PdfDocument::new(
        &document.title,
        Mm(page.width),
        Mm(page.height),
        "Timetable",
    );

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };
    let layer = doc.get_page(page_index).get_layer(layer_index);
    layer.set_outline_thickness(BORDER_THICKNESS);

    let canvas = Canvas {
        layer,
        page: &page,
        fonts,
    };

    let title = TitleBlock::STANDARD;
    let center_x = page.width / 2.0;
    canvas.centered_text(
        school_name,
        title.school_font_size,
        center_x,
        page.margin + title.school_line_height * ASCENT,
        true,
    );
    canvas.centered_text(
        &document.title,
        title.title_font_size,
        center_x,
        page.margin + title.school_line_height + title.title_line_height * ASCENT,
        true,
    );

    let grid = GridLayout::fit(&page, document.grid.columns.len());
    let left = page.margin;
    let mut y = page.margin + title.height();

    for (i, lines) in document.grid.header().iter().enumerate() {
        let x = left + grid.column_width * i as f32;
        canvas.cell(lines, x, y, &grid, true);
    }

    for row in &document.grid.rows {
        y += grid.row_height;
        canvas.cell(&[row.day.code().to_string()], left, y, &grid, true);

        for (i, lines) in row.cells.iter().enumerate() {
            let x = left + grid.column_width * (i + 1) as f32;
            canvas.cell(lines, x, y, &grid, false);
        }
    }

    Ok(doc.save_to_bytes()?)
}
