mod common;

use common::{setup, time};
use database::services::{
    school_class::SchoolClassService,
    subject::SubjectService,
    teacher::TeacherService,
    time_slot::TimeSlotService,
    timetable::{SlotColumn, TimetableService},
    timetable_entry::{EntryFilter, TimetableEntryService},
};
use models::days::Weekday;

#[tokio::test]
async fn test_columns_collapse_slots_sharing_a_start_time() {
    let (_dir, db) = setup().await;

    TimeSlotService::create(&db, "TUE", time(10, 0), time(10, 40))
        .await
        .unwrap();
    TimeSlotService::create(&db, "MON", time(8, 0), time(9, 0))
        .await
        .unwrap();
    TimeSlotService::create(&db, "WED", time(8, 0), time(8, 45))
        .await
        .unwrap();
    TimeSlotService::create(&db, "MON", time(10, 0), time(11, 0))
        .await
        .unwrap();

    let columns = TimetableService::columns(&db).await.unwrap();
    assert_eq!(
        columns,
        vec![
            SlotColumn {
                start_time: time(8, 0),
                end_time: time(9, 0),
            },
            SlotColumn {
                start_time: time(10, 0),
                end_time: time(10, 40),
            },
        ]
    );
}

#[tokio::test]
async fn test_lessons_use_the_effective_teacher() {
    let (_dir, db) = setup().await;

    let jane = TeacherService::create(&db, "Jane".into(), "Doe".into())
        .await
        .unwrap();
    let omar = TeacherService::create(&db, "Omar".into(), "Said".into())
        .await
        .unwrap();
    let s1a = SchoolClassService::create(&db, "S1A".into()).await.unwrap();
    let math = SubjectService::create(&db, "Math".into(), Some(jane.id), vec![s1a.id])
        .await
        .unwrap();
    let mon = TimeSlotService::create(&db, "MON", time(8, 0), time(9, 0))
        .await
        .unwrap();
    let tue = TimeSlotService::create(&db, "TUE", time(8, 0), time(9, 0))
        .await
        .unwrap();

    // Taught by the subject teacher on Monday, covered by Omar on Tuesday
    TimetableEntryService::create(&db, s1a.id, math.subject.id, mon.id, None)
        .await
        .unwrap();
    TimetableEntryService::create(&db, s1a.id, math.subject.id, tue.id, Some(omar.id))
        .await
        .unwrap();

    let class_lessons = TimetableService::lessons_for_class(&db, s1a.id)
        .await
        .unwrap();
    let initials: Vec<_> = class_lessons
        .iter()
        .map(|l| l.teacher_initials.as_deref())
        .collect();
    assert_eq!(initials, vec![Some("JD"), Some("OS")]);

    let jane_lessons = TimetableService::lessons_for_teacher(&db, jane.id)
        .await
        .unwrap();
    assert_eq!(jane_lessons.len(), 1);
    assert_eq!(jane_lessons[0].day, Some(Weekday::Monday));
    assert_eq!(jane_lessons[0].class_name, "S1A");

    let omar_lessons = TimetableService::lessons_for_teacher(&db, omar.id)
        .await
        .unwrap();
    assert_eq!(omar_lessons.len(), 1);
    assert_eq!(omar_lessons[0].day, Some(Weekday::Tuesday));
}

#[tokio::test]
async fn test_lessons_keep_retrieval_order() {
    let (_dir, db) = setup().await;

    let s1a = SchoolClassService::create(&db, "S1A".into()).await.unwrap();
    let mon = TimeSlotService::create(&db, "MON", time(8, 0), time(9, 0))
        .await
        .unwrap();

    let mut expected = Vec::new();
    for name in ["Physics", "Chemistry", "Biology"] {
        let subject = SubjectService::create(&db, name.into(), None, vec![s1a.id])
            .await
            .unwrap();
        let entry = TimetableEntryService::create(&db, s1a.id, subject.subject.id, mon.id, None)
            .await
            .unwrap();
        expected.push((entry.id, name));
    }

    let lessons = TimetableService::lessons_for_class(&db, s1a.id)
        .await
        .unwrap();
    let actual: Vec<_> = lessons
        .iter()
        .map(|l| (l.entry_id, l.subject_name.as_str()))
        .collect();
    assert_eq!(actual, expected);
    assert!(lessons.iter().all(|l| l.teacher_initials.is_none()));
}

#[tokio::test]
async fn test_deleting_a_teacher_cascades_to_entries() {
    let (_dir, db) = setup().await;

    let jane = TeacherService::create(&db, "Jane".into(), "Doe".into())
        .await
        .unwrap();
    let omar = TeacherService::create(&db, "Omar".into(), "Said".into())
        .await
        .unwrap();
    let s1a = SchoolClassService::create(&db, "S1A".into()).await.unwrap();
    let math = SubjectService::create(&db, "Math".into(), Some(jane.id), vec![s1a.id])
        .await
        .unwrap();
    let english = SubjectService::create(&db, "English".into(), None, vec![s1a.id])
        .await
        .unwrap();
    let mon = TimeSlotService::create(&db, "MON", time(8, 0), time(9, 0))
        .await
        .unwrap();

    TimetableEntryService::create(&db, s1a.id, math.subject.id, mon.id, None)
        .await
        .unwrap();
    TimetableEntryService::create(&db, s1a.id, english.subject.id, mon.id, Some(omar.id))
        .await
        .unwrap();
    let untouched = TimetableEntryService::create(&db, s1a.id, english.subject.id, mon.id, None)
        .await
        .unwrap();

    // Jane's subject goes, and with it the Math entry
    assert!(TeacherService::delete(&db, jane.id).await.unwrap());
    assert!(SubjectService::get(&db, math.subject.id).await.unwrap().is_none());

    // Omar's override entry goes
    assert!(TeacherService::delete(&db, omar.id).await.unwrap());

    let remaining = TimetableEntryService::list(&db, EntryFilter::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].entry.id, untouched.id);

    let lessons = TimetableService::lessons_for_class(&db, s1a.id)
        .await
        .unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].subject_name, "English");
}

#[tokio::test]
async fn test_deleting_a_time_slot_cascades_to_entries() {
    let (_dir, db) = setup().await;

    let s1a = SchoolClassService::create(&db, "S1A".into()).await.unwrap();
    let math = SubjectService::create(&db, "Math".into(), None, vec![s1a.id])
        .await
        .unwrap();
    let mon = TimeSlotService::create(&db, "MON", time(8, 0), time(9, 0))
        .await
        .unwrap();
    TimetableEntryService::create(&db, s1a.id, math.subject.id, mon.id, None)
        .await
        .unwrap();

    TimeSlotService::delete(&db, mon.id).await.unwrap();

    assert!(
        TimetableService::lessons_for_class(&db, s1a.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(TimetableService::columns(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lessons_on_unrecognised_days_have_no_weekday() {
    let (_dir, db) = setup().await;

    let s1a = SchoolClassService::create(&db, "S1A".into()).await.unwrap();
    let art = SubjectService::create(&db, "Art".into(), None, vec![s1a.id])
        .await
        .unwrap();
    let holiday = TimeSlotService::create(&db, "holiday", time(8, 0), time(9, 0))
        .await
        .unwrap();
    let sat = TimeSlotService::create(&db, "sat", time(8, 0), time(9, 0))
        .await
        .unwrap();
    TimetableEntryService::create(&db, s1a.id, art.subject.id, holiday.id, None)
        .await
        .unwrap();
    TimetableEntryService::create(&db, s1a.id, art.subject.id, sat.id, None)
        .await
        .unwrap();

    let lessons = TimetableService::lessons_for_class(&db, s1a.id)
        .await
        .unwrap();
    let days: Vec<_> = lessons.iter().map(|l| l.day).collect();
    assert_eq!(days, vec![None, Some(Weekday::Saturday)]);
}
