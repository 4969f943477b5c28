use chrono::NaiveTime;
use database::{
    db,
    services::{
        school_class::SchoolClassService, subject::SubjectService, teacher::TeacherService,
        time_slot::TimeSlotService, timetable::TimetableService,
        timetable_entry::TimetableEntryService,
    },
};
use generator::{
    config::GeneratorConfig,
    error::GenerateError,
    generate::{class_document, generate_all, teacher_document},
};
use migration::{Migrator, MigratorTrait};
use models::days::Weekday;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("timetable.sqlite").display()
    );

    let db = db::connect(&url).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    (dir, db)
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time")
}

fn config(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig {
        school_name: "TEST SCHOOL".to_string(),
        output_dir: dir.path().join("out"),
    }
}

/// Jane Doe teaches Math to S1A on Monday 08:00-09:00
async fn seed_math(db: &DatabaseConnection) -> (i32, i32) {
    let jane = TeacherService::create(db, "Jane".into(), "Doe".into())
        .await
        .unwrap();
    let s1a = SchoolClassService::create(db, "S1A".into()).await.unwrap();
    let math = SubjectService::create(db, "Math".into(), Some(jane.id), vec![s1a.id])
        .await
        .unwrap();
    let monday = TimeSlotService::create(db, "MON", time(8), time(9))
        .await
        .unwrap();
    TimetableEntryService::create(db, s1a.id, math.subject.id, monday.id, None)
        .await
        .unwrap();

    (s1a.id, jane.id)
}

#[tokio::test]
async fn test_class_and_teacher_documents() {
    let (_dir, db) = setup().await;
    let (s1a_id, jane_id) = seed_math(&db).await;

    let columns = TimetableService::columns(&db).await.unwrap();
    let s1a = SchoolClassService::get(&db, s1a_id).await.unwrap().unwrap();
    let jane = TeacherService::get(&db, jane_id).await.unwrap().unwrap();

    let class_doc = class_document(&db, &s1a, &columns).await.unwrap();
    assert_eq!(class_doc.title, "Class Timetable - S1A");
    assert_eq!(
        class_doc.grid.header(),
        vec![vec!["DAY"], vec!["08:00", "09:00"]]
    );
    assert_eq!(
        class_doc.grid.cell(Weekday::Monday, time(8)).unwrap(),
        ["Math (JD)"]
    );
    for day in &Weekday::TIMETABLE_ROWS[1..] {
        assert!(class_doc.grid.cell(*day, time(8)).unwrap().is_empty(), "{day}");
    }

    let teacher_doc = teacher_document(&db, &jane, &columns).await.unwrap();
    assert_eq!(teacher_doc.title, "Teacher Timetable - Jane Doe");
    assert_eq!(
        teacher_doc.grid.cell(Weekday::Monday, time(8)).unwrap(),
        ["Math (S1A)"]
    );
    for day in &Weekday::TIMETABLE_ROWS[1..] {
        assert!(teacher_doc.grid.cell(*day, time(8)).unwrap().is_empty(), "{day}");
    }
}

#[tokio::test]
async fn test_teacher_override_moves_lesson() {
    let (_dir, db) = setup().await;
    let (s1a_id, jane_id) = seed_math(&db).await;

    let peter = TeacherService::create(&db, "Peter".into(), "Kamau".into())
        .await
        .unwrap();
    let entry = TimetableEntryService::list(&db, Default::default())
        .await
        .unwrap()
        .remove(0)
        .entry;
    TimetableEntryService::update(
        &db,
        entry.id,
        entry.school_class_id,
        entry.subject_id,
        entry.time_slot_id,
        Some(peter.id),
    )
    .await
    .unwrap();

    let columns = TimetableService::columns(&db).await.unwrap();
    let s1a = SchoolClassService::get(&db, s1a_id).await.unwrap().unwrap();
    let jane = TeacherService::get(&db, jane_id).await.unwrap().unwrap();

    let class_doc = class_document(&db, &s1a, &columns).await.unwrap();
    assert_eq!(
        class_doc.grid.cell(Weekday::Monday, time(8)).unwrap(),
        ["Math (PK)"]
    );

    let peter_doc = teacher_document(&db, &peter, &columns).await.unwrap();
    assert_eq!(
        peter_doc.grid.cell(Weekday::Monday, time(8)).unwrap(),
        ["Math (S1A)"]
    );

    let jane_doc = teacher_document(&db, &jane, &columns).await.unwrap();
    assert!(jane_doc.grid.is_empty());
}

#[tokio::test]
async fn test_generate_all_writes_one_pdf_per_class_and_teacher() {
    let (dir, db) = setup().await;
    seed_math(&db).await;
    SchoolClassService::create(&db, "S2/B".into()).await.unwrap();

    let config = config(&dir);
    let paths = generate_all(&db, &config).await.unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["class_S1A.pdf", "class_S2-B.pdf", "teacher_Jane_Doe.pdf"]
    );

    for path in &paths {
        assert!(path.starts_with(&config.output_dir));
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[tokio::test]
async fn test_generate_all_on_empty_store() {
    let (dir, db) = setup().await;

    let config = config(&dir);
    let paths = generate_all(&db, &config).await.unwrap();

    assert!(paths.is_empty());
    assert!(config.output_dir.is_dir());
}

#[tokio::test]
async fn test_generate_after_teacher_deleted() {
    let (dir, db) = setup().await;
    let (s1a_id, jane_id) = seed_math(&db).await;

    assert!(TeacherService::delete(&db, jane_id).await.unwrap());

    let columns = TimetableService::columns(&db).await.unwrap();
    let s1a = SchoolClassService::get(&db, s1a_id).await.unwrap().unwrap();
    let class_doc = class_document(&db, &s1a, &columns).await.unwrap();
    assert!(class_doc.grid.is_empty());
    assert_eq!(class_doc.grid.row_count(), 6);

    let paths = generate_all(&db, &config(&dir)).await.unwrap();
    assert_eq!(paths.len(), 1);
}

#[tokio::test]
async fn test_generate_overwrites_existing_files() {
    let (dir, db) = setup().await;
    seed_math(&db).await;

    let config = config(&dir);
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(config.output_dir.join("class_S1A.pdf"), b"stale").unwrap();

    generate_all(&db, &config).await.unwrap();

    let bytes = std::fs::read(config.output_dir.join("class_S1A.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_fails_when_output_dir_is_a_file() {
    let (dir, db) = setup().await;
    seed_math(&db).await;

    let config = config(&dir);
    std::fs::write(&config.output_dir, b"not a directory").unwrap();

    let err = generate_all(&db, &config).await.unwrap_err();
    assert!(matches!(err, GenerateError::Io { ref path, .. } if *path == config.output_dir));
    assert!(err.to_string().starts_with("failed to write"));
}
