use crate::grid::TimetableGrid;
use database::{
    entities::{school_class, teacher},
    services::timetable::{Lesson, SlotColumn},
};
use models::labels::MISSING_INITIALS;

/// One timetable ready to be rendered to a single-page PDF
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableDocument {
    pub title: String,
    pub file_name: String,
    pub grid: TimetableGrid,
}

impl TimetableDocument {
    /// A class timetable; cells read `Subject (initials)`
    pub fn for_class(
        school_class: &school_class::Model,
        columns: &[SlotColumn],
        lessons: &[Lesson],
    ) -> Self {
        let grid = TimetableGrid::build(columns, lessons, |lesson| {
            lesson
                .teacher_initials
                .clone()
                .unwrap_or_else(|| MISSING_INITIALS.to_string())
        });

        Self {
            title: format!("Class Timetable - {}", school_class.name),
            file_name: sanitize_file_name(&format!("class_{}.pdf", school_class.name)),
            grid,
        }
    }

    /// A teacher timetable; cells read `Subject (class)`
    pub fn for_teacher(teacher: &teacher::Model, columns: &[SlotColumn], lessons: &[Lesson]) -> Self {
        let grid = TimetableGrid::build(columns, lessons, |lesson| lesson.class_name.clone());

        Self {
            title: format!("Teacher Timetable - {}", teacher.full_name()),
            file_name: sanitize_file_name(&format!(
                "teacher_{}_{}.pdf",
                teacher.first_name, teacher.last_name
            )),
            grid,
        }
    }
}

/// Replaces path separators so a name always stays inside the output directory
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;
    use models::days::Weekday;

    fn eight() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 0, 0).unwrap()
    }

    fn columns() -> Vec<SlotColumn> {
        vec![SlotColumn {
            start_time: eight(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }]
    }

    fn math(initials: Option<&str>) -> Lesson {
        Lesson {
            entry_id: 1,
            day: Some(Weekday::Monday),
            start_time: eight(),
            subject_name: "Math".to_string(),
            class_name: "S1A".to_string(),
            teacher_initials: initials.map(str::to_string),
        }
    }

    fn jane() -> teacher::Model {
        teacher::Model {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn test_class_document() {
        let class = school_class::Model {
            id: 1,
            name: "S1A".to_string(),
        };
        let doc = TimetableDocument::for_class(&class, &columns(), &[math(Some("JD"))]);

        assert_eq!(doc.title, "Class Timetable - S1A");
        assert_eq!(doc.file_name, "class_S1A.pdf");
        assert_eq!(doc.grid.cell(Weekday::Monday, eight()).unwrap(), ["Math (JD)"]);
    }

    #[test]
    fn test_class_document_without_teacher() {
        let class = school_class::Model {
            id: 1,
            name: "S1A".to_string(),
        };
        let doc = TimetableDocument::for_class(&class, &columns(), &[math(None)]);
        assert_eq!(doc.grid.cell(Weekday::Monday, eight()).unwrap(), ["Math (N/A)"]);
    }

    #[test]
    fn test_teacher_document() {
        let doc = TimetableDocument::for_teacher(&jane(), &columns(), &[math(Some("JD"))]);

        assert_eq!(doc.title, "Teacher Timetable - Jane Doe");
        assert_eq!(doc.file_name, "teacher_Jane_Doe.pdf");
        assert_eq!(doc.grid.cell(Weekday::Monday, eight()).unwrap(), ["Math (S1A)"]);
    }

    #[test]
    fn test_file_names_drop_path_separators() {
        let class = school_class::Model {
            id: 2,
            name: "S1/A\\B".to_string(),
        };
        let doc = TimetableDocument::for_class(&class, &[], &[]);
        assert_eq!(doc.file_name, "class_S1-A-B.pdf");
        assert_eq!(sanitize_file_name("../x"), "..-x");
    }
}
