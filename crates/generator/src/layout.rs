//! Page geometry and the arithmetic that fits a timetable grid on one page
//!
//! All lengths are millimetres measured from the top-left corner of the page,
//! font sizes are points.

/// Millimetres per typographic point
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Width of a column before any shrinking
pub const NAIVE_COLUMN_WIDTH: f32 = 20.0;

/// Tallest row the grid will use, even on a nearly empty page
pub const MAX_ROW_HEIGHT: f32 = 30.0;

/// Header row plus one row per weekday
pub const GRID_ROWS: usize = 6;

/// Vertical space reserved for margins and the title block
const RESERVED_HEIGHT: f32 = 40.0;

const FONT_SIZE: f32 = 9.0;
const SHRUNK_FONT_SIZE: f32 = 8.0;
const MIN_FONT_SIZE: f32 = 4.0;
const FONT_STEP: f32 = 0.5;

/// Horizontal padding inside each cell border
pub const CELL_PADDING: f32 = 1.0;

/// Builtin fonts carry no metrics, so glyphs are assumed half an em wide
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub const A4_LANDSCAPE: Self = Self {
        width: 297.0,
        height: 210.0,
        margin: 10.0,
    };

    pub fn printable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn available_height(&self) -> f32 {
        self.height - RESERVED_HEIGHT
    }
}

/// The title block above the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleBlock {
    pub school_font_size: f32,
    pub school_line_height: f32,
    pub title_font_size: f32,
    pub title_line_height: f32,
    pub gap: f32,
}

impl TitleBlock {
    pub const STANDARD: Self = Self {
        school_font_size: 18.0,
        school_line_height: 10.0,
        title_font_size: 12.0,
        title_line_height: 8.0,
        gap: 4.0,
    };

    pub fn height(&self) -> f32 {
        self.school_line_height + self.title_line_height + self.gap
    }
}

/// Column width, row height and base font size of a grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub column_width: f32,
    pub row_height: f32,
    pub font_size: f32,
}

impl GridLayout {
    /// Fits a grid with `time_columns` start-time columns (plus the day
    /// column) onto `page`
    pub fn fit(page: &PageGeometry, time_columns: usize) -> Self {
        let columns = (time_columns + 1) as f32;
        let printable_width = page.printable_width();

        let (column_width, font_size) = if NAIVE_COLUMN_WIDTH * columns > printable_width {
            (printable_width / columns, SHRUNK_FONT_SIZE)
        } else {
            (NAIVE_COLUMN_WIDTH, FONT_SIZE)
        };

        let row_height = MAX_ROW_HEIGHT.min(page.available_height() / GRID_ROWS as f32);

        Self {
            column_width,
            row_height,
            font_size,
        }
    }
}

/// Estimated rendered width of `text`
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVERAGE_GLYPH_WIDTH * PT_TO_MM
}

/// Height of one line of text set at `font_size`
pub fn font_height(font_size: f32) -> f32 {
    font_size * PT_TO_MM
}

/// Greedy word wrap; words wider than `width` are split by character
pub fn wrap(text: &str, width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(&candidate, font_size) <= width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1 && text_width(&current, font_size) > width {
                current.pop();
                lines.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cell text after wrapping and shrinking
#[derive(Clone, Debug, PartialEq)]
pub struct CellText {
    pub lines: Vec<String>,
    pub font_size: f32,
    pub line_height: f32,
}

/// Wraps `lines` into a `width` × `height` box, shrinking the font until the
/// stacked lines fit
pub fn fit_cell(lines: &[String], width: f32, height: f32, font_size: f32) -> CellText {
    let inner_width = (width - 2.0 * CELL_PADDING).max(CELL_PADDING);
    let mut font_size = font_size;

    loop {
        let wrapped: Vec<String> = lines
            .iter()
            .flat_map(|line| wrap(line, inner_width, font_size))
            .collect();
        let line_height = (height / 2.0).min(height / wrapped.len().max(1) as f32);

        if font_height(font_size) <= line_height || font_size <= MIN_FONT_SIZE {
            return CellText {
                lines: wrapped,
                font_size,
                line_height,
            };
        }

        font_size = (font_size - FONT_STEP).max(MIN_FONT_SIZE);
    }
}
