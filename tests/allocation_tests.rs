mod common;

use exam_service::error::ServiceError;
use exam_service::repositories::{AnswerSheetRepository, RegistrationRepository};
use uuid::Uuid;

#[tokio::test]
async fn allocation_covers_every_registrant_once() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);

    for n in 1..=5 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        registrations
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }

    let faculty_a = common::seed_faculty(&db, "faculty_a").await;
    let repo = AnswerSheetRepository::new(&db);

    let allocated = repo
        .allocate_papers(faculty_a.faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();
    assert_eq!(allocated, 5);

    let stats = repo.allocation_stats(fixture.exam.exam_id).await.unwrap();
    assert_eq!(stats.total_students, 5);
    assert_eq!(stats.allocated_papers, 5);
    assert_eq!(stats.unallocated_papers, 0);

    let queue = repo.queue_for_faculty(faculty_a.faculty_id).await.unwrap();
    assert_eq!(queue.len(), 5);
    assert!(queue.iter().all(|s| s.is_allocated && !s.is_checked));
}

#[tokio::test]
async fn allocated_sheets_are_never_reassigned() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);

    for n in 1..=5 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        registrations
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }

    let faculty_a = common::seed_faculty(&db, "faculty_a").await;
    let faculty_b = common::seed_faculty(&db, "faculty_b").await;
    let repo = AnswerSheetRepository::new(&db);

    repo.allocate_papers(faculty_a.faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();

    // Re-allocation to a different grader is a no-op for claimed sheets.
    let reallocated = repo
        .allocate_papers(faculty_b.faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();
    assert_eq!(reallocated, 0);

    let queue_a = repo.queue_for_faculty(faculty_a.faculty_id).await.unwrap();
    assert_eq!(queue_a.len(), 5);
    assert!(repo
        .queue_for_faculty(faculty_b.faculty_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn late_registrant_picked_up_by_reallocation() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);

    let first = common::seed_student(&db, fixture.semester.semester_id, 1).await;
    registrations
        .register(first.student_id, fixture.exam.exam_id)
        .await
        .unwrap();

    let faculty_a = common::seed_faculty(&db, "faculty_a").await;
    let faculty_b = common::seed_faculty(&db, "faculty_b").await;
    let repo = AnswerSheetRepository::new(&db);

    assert_eq!(
        repo.allocate_papers(faculty_a.faculty_id, fixture.exam.exam_id)
            .await
            .unwrap(),
        1
    );

    let late = common::seed_student(&db, fixture.semester.semester_id, 2).await;
    registrations
        .register(late.student_id, fixture.exam.exam_id)
        .await
        .unwrap();

    // Only the new registrant's sheet goes to faculty B.
    assert_eq!(
        repo.allocate_papers(faculty_b.faculty_id, fixture.exam.exam_id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        repo.queue_for_faculty(faculty_a.faculty_id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        repo.queue_for_faculty(faculty_b.faculty_id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn unknown_faculty_or_exam_is_not_found() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty = common::seed_faculty(&db, "faculty_a").await;
    let repo = AnswerSheetRepository::new(&db);

    let bad_faculty = repo
        .allocate_papers(Uuid::new_v4(), fixture.exam.exam_id)
        .await;
    assert!(matches!(bad_faculty, Err(ServiceError::NotFound(_))));

    let bad_exam = repo.allocate_papers(faculty.faculty_id, Uuid::new_v4()).await;
    assert!(matches!(bad_exam, Err(ServiceError::NotFound(_))));
}
