mod common;

use exam_service::error::ServiceError;
use exam_service::repositories::{AnswerSheetRepository, FacultyRepository, RegistrationRepository};
use uuid::Uuid;

async fn allocated_sheet(
    db: &sea_orm::DatabaseConnection,
    faculty_id: Uuid,
    fixture: &common::ExamFixture,
    n: u32,
) -> exam_service::entities::answer_sheet::Model {
    let student = common::seed_student(db, fixture.semester.semester_id, n).await;
    RegistrationRepository::new(db)
        .register(student.student_id, fixture.exam.exam_id)
        .await
        .unwrap();

    let repo = AnswerSheetRepository::new(db);
    repo.allocate_papers(faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();
    repo.queue_for_faculty(faculty_id)
        .await
        .unwrap()
        .into_iter()
        .find(|s| s.student_id == student.student_id)
        .unwrap()
}

#[tokio::test]
async fn checking_records_marks_and_timestamp() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty = common::seed_faculty(&db, "faculty_a").await;
    let sheet = allocated_sheet(&db, faculty.faculty_id, &fixture, 1).await;

    let repo = AnswerSheetRepository::new(&db);
    let checked = repo
        .check_paper(
            faculty.faculty_id,
            sheet.sheet_id,
            Some(87),
            "Good work".to_string(),
        )
        .await
        .unwrap();

    assert!(checked.is_checked);
    assert!(checked.checked_at.is_some());
    assert_eq!(checked.marks_obtained, Some(87));
    assert_eq!(checked.remarks, "Good work");

    let results = repo.results_for_student(sheet.student_id).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn checking_without_marks_leaves_a_pending_marks_sheet() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty = common::seed_faculty(&db, "faculty_a").await;
    let sheet = allocated_sheet(&db, faculty.faculty_id, &fixture, 1).await;

    let repo = AnswerSheetRepository::new(&db);
    let checked = repo
        .check_paper(faculty.faculty_id, sheet.sheet_id, None, String::new())
        .await
        .unwrap();
    assert!(checked.is_checked);
    assert_eq!(checked.marks_obtained, None);

    // The sheet sits in the checked-without-marks state.
    let pending = repo.pending_marks().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert!(repo.pending_checking().await.unwrap().is_empty());
    assert!(repo
        .results_for_student(sheet.student_id)
        .await
        .unwrap()
        .is_empty());

    // Entering marks completes the lifecycle.
    let marked = repo
        .enter_marks(faculty.faculty_id, sheet.sheet_id, 64)
        .await
        .unwrap();
    assert_eq!(marked.marks_obtained, Some(64));
    assert!(repo.pending_marks().await.unwrap().is_empty());
    assert_eq!(
        repo.results_for_student(sheet.student_id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn marks_require_a_checked_sheet() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty = common::seed_faculty(&db, "faculty_a").await;
    let sheet = allocated_sheet(&db, faculty.faculty_id, &fixture, 1).await;

    let repo = AnswerSheetRepository::new(&db);
    let premature = repo.enter_marks(faculty.faculty_id, sheet.sheet_id, 50).await;
    assert!(matches!(premature, Err(ServiceError::InvalidTransition(_))));

    // The guard held: no marks reached an unchecked sheet.
    let queue = repo.queue_for_faculty(faculty.faculty_id).await.unwrap();
    assert_eq!(queue[0].marks_obtained, None);
    assert!(!queue[0].is_checked);
}

#[tokio::test]
async fn no_backward_or_repeat_transitions() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty = common::seed_faculty(&db, "faculty_a").await;
    let sheet = allocated_sheet(&db, faculty.faculty_id, &fixture, 1).await;

    let repo = AnswerSheetRepository::new(&db);
    repo.check_paper(faculty.faculty_id, sheet.sheet_id, Some(70), String::new())
        .await
        .unwrap();

    let recheck = repo
        .check_paper(faculty.faculty_id, sheet.sheet_id, Some(95), String::new())
        .await;
    assert!(matches!(recheck, Err(ServiceError::InvalidTransition(_))));

    let remark = repo.enter_marks(faculty.faculty_id, sheet.sheet_id, 95).await;
    assert!(matches!(remark, Err(ServiceError::InvalidTransition(_))));
}

#[tokio::test]
async fn faculty_can_only_touch_their_own_sheets() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let faculty_a = common::seed_faculty(&db, "faculty_a").await;
    let faculty_b = common::seed_faculty(&db, "faculty_b").await;
    let sheet = allocated_sheet(&db, faculty_a.faculty_id, &fixture, 1).await;

    let repo = AnswerSheetRepository::new(&db);
    let stolen = repo
        .check_paper(faculty_b.faculty_id, sheet.sheet_id, Some(10), String::new())
        .await;
    assert!(matches!(stolen, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn pending_breakdown_sorts_heaviest_first() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let registrations = RegistrationRepository::new(&db);
    let repo = AnswerSheetRepository::new(&db);

    let faculty_a = common::seed_faculty(&db, "faculty_a").await;
    let faculty_b = common::seed_faculty(&db, "faculty_b").await;
    let faculty_idle = common::seed_faculty(&db, "faculty_idle").await;

    // One registrant for faculty A, then three more for faculty B.
    let student = common::seed_student(&db, fixture.semester.semester_id, 1).await;
    registrations
        .register(student.student_id, fixture.exam.exam_id)
        .await
        .unwrap();
    repo.allocate_papers(faculty_a.faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();

    for n in 2..=4 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        registrations
            .register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }
    repo.allocate_papers(faculty_b.faculty_id, fixture.exam.exam_id)
        .await
        .unwrap();

    let breakdown = repo.faculty_pending_breakdown().await.unwrap();
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].faculty_id, faculty_b.faculty_id);
    assert_eq!(breakdown[0].pending_count, 3);
    assert_eq!(breakdown[1].faculty_id, faculty_a.faculty_id);
    assert_eq!(breakdown[1].pending_count, 1);
    assert!(breakdown
        .iter()
        .all(|entry| entry.faculty_id != faculty_idle.faculty_id));

    // Deactivated graders drop out of the dashboard even with work left.
    FacultyRepository::new(&db)
        .deactivate(faculty_a.faculty_id)
        .await
        .unwrap();
    let breakdown = repo.faculty_pending_breakdown().await.unwrap();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].faculty_id, faculty_b.faculty_id);
}
