mod common;

use exam_service::error::ServiceError;
use exam_service::repositories::{AttendanceRepository, RegistrationRepository};
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn sheet_defaults_every_registrant_to_absent() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);

    for n in 1..=3 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        registrations
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }

    let session = common::seed_session(&db, &fixture.exam).await;
    let repo = AttendanceRepository::new(&db);

    let sheet = repo.create_sheet(session.session_id).await.unwrap();
    assert_eq!(sheet.len(), 3);
    assert!(sheet.iter().all(|row| !row.is_present));

    // Recreating the sheet is idempotent.
    let again = repo.create_sheet(session.session_id).await.unwrap();
    assert_eq!(again.len(), 3);
    assert_eq!(repo.find_by_session(session.session_id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn recording_attendance_upserts_per_registrant() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);

    let mut students = Vec::new();
    for n in 1..=3 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        registrations
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
        students.push(student);
    }

    let session = common::seed_session(&db, &fixture.exam).await;
    let repo = AttendanceRepository::new(&db);

    let present: HashSet<Uuid> = [students[0].student_id, students[2].student_id]
        .into_iter()
        .collect();
    repo.record_attendance(session.session_id, &present)
        .await
        .unwrap();

    let rows = repo.find_by_session(session.session_id).await.unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.is_present, present.contains(&row.student_id));
    }

    // A second pass can flip a student back to absent.
    let only_first: HashSet<Uuid> = [students[0].student_id].into_iter().collect();
    repo.record_attendance(session.session_id, &only_first)
        .await
        .unwrap();

    let rows = repo.find_by_session(session.session_id).await.unwrap();
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.is_present, row.student_id == students[0].student_id);
    }
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let db = common::setup_db().await;
    let repo = AttendanceRepository::new(&db);

    let result = repo.create_sheet(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}
