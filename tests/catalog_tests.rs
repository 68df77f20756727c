mod common;

use exam_service::repositories::{
    ExamRepository, SemesterRepository, SessionRepository, SubjectRepository,
};

#[tokio::test]
async fn deactivating_a_semester_leaves_its_subjects_alone() {
    let db = common::setup_db().await;
    let semester = common::seed_semester(&db).await;
    let subject = common::seed_subject(&db, &semester).await;

    let semesters = SemesterRepository::new(&db);
    let deactivated = semesters.deactivate(semester.semester_id).await.unwrap();
    assert!(!deactivated.is_active);
    assert!(semesters.find_active().await.unwrap().is_empty());

    // No cascade: the subject row is untouched and still active.
    let subjects = SubjectRepository::new(&db);
    let survivor = subjects
        .find_by_id(subject.subject_id)
        .await
        .unwrap()
        .unwrap();
    assert!(survivor.is_active);
    assert_eq!(survivor.semester_id, semester.semester_id);
}

#[tokio::test]
async fn toggle_active_flips_both_ways() {
    let db = common::setup_db().await;
    let semester = common::seed_semester(&db).await;
    let subject = common::seed_subject(&db, &semester).await;

    let subjects = SubjectRepository::new(&db);
    let off = subjects.toggle_active(subject.subject_id).await.unwrap();
    assert!(!off.is_active);
    let on = subjects.toggle_active(subject.subject_id).await.unwrap();
    assert!(on.is_active);
}

#[tokio::test]
async fn publishing_writes_an_audit_row_and_reshelves_the_exam() {
    let db = common::setup_db().await;
    let semester = common::seed_semester(&db).await;
    let subject = common::seed_subject(&db, &semester).await;
    let exam = common::seed_exam(&db, &subject).await;

    let exams = ExamRepository::new(&db);
    assert_eq!(exams.find_unpublished().await.unwrap().len(), 1);
    assert!(exams.find_published().await.unwrap().is_empty());
    assert!(exams.schedule_history(exam.exam_id).await.unwrap().is_empty());

    let published = exams.publish(exam.exam_id).await.unwrap();
    assert!(published.is_published);

    assert!(exams.find_unpublished().await.unwrap().is_empty());
    assert_eq!(exams.find_published().await.unwrap().len(), 1);

    let history = exams.schedule_history(exam.exam_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_published);
    assert!(history[0].published_at.is_some());

    // Publishing again appends a second audit row.
    exams.publish(exam.exam_id).await.unwrap();
    assert_eq!(exams.schedule_history(exam.exam_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn session_get_or_create_is_idempotent_per_sitting() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;

    let sessions = SessionRepository::new(&db);
    let first = sessions
        .get_or_create(fixture.exam.exam_id, fixture.exam.start_date, 1)
        .await
        .unwrap();
    let again = sessions
        .get_or_create(fixture.exam.exam_id, fixture.exam.start_date, 1)
        .await
        .unwrap();
    assert_eq!(first.session_id, again.session_id);

    // A new session inherits the exam's time window.
    assert_eq!(first.start_time, fixture.exam.start_time);
    assert_eq!(first.end_time, fixture.exam.end_time);

    // A different session number is its own sitting.
    let second = sessions
        .get_or_create(fixture.exam.exam_id, fixture.exam.start_date, 2)
        .await
        .unwrap();
    assert_ne!(first.session_id, second.session_id);
    assert_eq!(
        sessions
            .find_by_exam(fixture.exam.exam_id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn session_overview_reports_seating_versus_registration_counts() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;

    for n in 1..=3 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        exam_service::repositories::RegistrationRepository::new(&db)
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }

    let session = common::seed_session(&db, &fixture.exam).await;
    exam_service::repositories::SeatingRepository::new(&db)
        .assign_seating(session.session_id)
        .await
        .unwrap();

    let summaries = SessionRepository::new(&db)
        .find_all_with_counts()
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].session.session_id, session.session_id);
    assert_eq!(summaries[0].seating_count, 3);
    assert_eq!(summaries[0].registration_count, 3);
}
