use database::services::timetable::{Lesson, SlotColumn};
use models::{days::Weekday, labels};

/// Label of the top-left cell
pub const DAY_HEADER: &str = "DAY";

/// The day × start-time table of one document, before any layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableGrid {
    pub columns: Vec<SlotColumn>,
    pub rows: Vec<GridRow>,
}

/// One weekday row; `cells[i]` holds the stacked lines under `columns[i]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    pub day: Weekday,
    pub cells: Vec<Vec<String>>,
}

impl TimetableGrid {
    /// Places each lesson in the cell matching its day and start time
    ///
    /// Lessons keep their input order within a cell. Lessons on days outside
    /// the timetable rows, or at a start time with no column, are dropped.
    pub fn build<F>(columns: &[SlotColumn], lessons: &[Lesson], qualifier: F) -> Self
    where
        F: Fn(&Lesson) -> String,
    {
        let mut rows: Vec<GridRow> = Weekday::TIMETABLE_ROWS
            .iter()
            .map(|&day| GridRow {
                day,
                cells: vec![Vec::new(); columns.len()],
            })
            .collect();

        for lesson in lessons {
            let Some(day) = lesson.day else {
                continue;
            };
            let Some(row) = rows.iter_mut().find(|row| row.day == day) else {
                continue;
            };
            let Some(column) = columns
                .iter()
                .position(|c| c.start_time == lesson.start_time)
            else {
                continue;
            };

            row.cells[column].push(labels::cell_line(&lesson.subject_name, &qualifier(lesson)));
        }

        Self {
            columns: columns.to_vec(),
            rows,
        }
    }

    /// The header row: `DAY`, then each column's start and end stacked on
    /// two lines so a time is never wrapped mid-value
    pub fn header(&self) -> Vec<Vec<String>> {
        std::iter::once(vec![DAY_HEADER.to_string()])
            .chain(self.columns.iter().map(|c| {
                vec![labels::time_label(c.start_time), labels::time_label(c.end_time)]
            }))
            .collect()
    }

    /// Rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Columns including the day column
    pub fn column_count(&self) -> usize {
        self.columns.len() + 1
    }

    /// Lines in the cell at `day` and the column starting at `start`
    pub fn cell(&self, day: Weekday, start: chrono::NaiveTime) -> Option<&[String]> {
        let column = self.columns.iter().position(|c| c.start_time == start)?;
        let row = self.rows.iter().find(|row| row.day == day)?;
        row.cells.get(column).map(Vec::as_slice)
    }

    /// True when no cell holds any line
    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells.iter().all(|cell| cell.is_empty()))
    }
}
