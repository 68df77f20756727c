#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use exam_service::entities::{exam, exam_session, faculty, semester, student, subject};
use exam_service::repositories::{
    ExamRepository, FacultyRepository, SemesterRepository, SessionRepository, StudentRepository,
    SubjectRepository,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema};

/// In-memory SQLite database with the full schema built from the
/// entity definitions.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();

    let stmts = [
        schema.create_table_from_entity(exam_service::entities::semester::Entity),
        schema.create_table_from_entity(exam_service::entities::subject::Entity),
        schema.create_table_from_entity(exam_service::entities::admin::Entity),
        schema.create_table_from_entity(exam_service::entities::faculty::Entity),
        schema.create_table_from_entity(exam_service::entities::student::Entity),
        schema.create_table_from_entity(exam_service::entities::exam::Entity),
        schema.create_table_from_entity(exam_service::entities::exam_schedule::Entity),
        schema.create_table_from_entity(exam_service::entities::student_exam_registration::Entity),
        schema.create_table_from_entity(exam_service::entities::exam_session::Entity),
        schema.create_table_from_entity(exam_service::entities::seating_arrangement::Entity),
        schema.create_table_from_entity(exam_service::entities::attendance::Entity),
        schema.create_table_from_entity(exam_service::entities::answer_sheet::Entity),
    ];

    for stmt in stmts {
        db.execute(backend.build(&stmt)).await.unwrap();
    }

    db
}

/// Low-cost bcrypt keeps the suite fast; verification is cost-agnostic.
pub fn test_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

pub async fn seed_semester(db: &DatabaseConnection) -> semester::Model {
    SemesterRepository::new(db)
        .create("Semester 1".to_string())
        .await
        .unwrap()
}

pub async fn seed_subject(db: &DatabaseConnection, semester: &semester::Model) -> subject::Model {
    SubjectRepository::new(db)
        .create(
            "Operating Systems".to_string(),
            "CS301".to_string(),
            semester.semester_id,
        )
        .await
        .unwrap()
}

pub async fn seed_exam(db: &DatabaseConnection, subject: &subject::Model) -> exam::Model {
    ExamRepository::new(db)
        .create(
            subject.subject_id,
            NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            100,
        )
        .await
        .unwrap()
}

pub struct ExamFixture {
    pub semester: semester::Model,
    pub subject: subject::Model,
    pub exam: exam::Model,
}

/// A published exam ready for registration.
pub async fn seed_published_exam(db: &DatabaseConnection) -> ExamFixture {
    let semester = seed_semester(db).await;
    let subject = seed_subject(db, &semester).await;
    let exam = seed_exam(db, &subject).await;
    let exam = ExamRepository::new(db).publish(exam.exam_id).await.unwrap();
    ExamFixture {
        semester,
        subject,
        exam,
    }
}

pub async fn seed_student(db: &DatabaseConnection, semester_id: uuid::Uuid, n: u32) -> student::Model {
    StudentRepository::new(db)
        .create(
            format!("student{n}"),
            test_hash("student123"),
            format!("Student {n}"),
            format!("student{n}@university.edu"),
            format!("CS{n:03}"),
            semester_id,
        )
        .await
        .unwrap()
}

pub async fn seed_faculty(db: &DatabaseConnection, username: &str) -> faculty::Model {
    FacultyRepository::new(db)
        .create(
            username.to_string(),
            test_hash("faculty123"),
            format!("Dr. {username}"),
            format!("{username}@university.edu"),
            "Computer Science".to_string(),
        )
        .await
        .unwrap()
}

pub async fn seed_session(db: &DatabaseConnection, exam: &exam::Model) -> exam_session::Model {
    SessionRepository::new(db)
        .get_or_create(exam.exam_id, exam.start_date, 1)
        .await
        .unwrap()
}
