mod common;

use exam_service::entities::student_exam_registration;
use exam_service::error::ServiceError;
use exam_service::repositories::RegistrationRepository;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn register_creates_single_row() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let student = common::seed_student(&db, fixture.semester.semester_id, 1).await;

    let repo = RegistrationRepository::new(&db);
    let registration = repo
        .register(student.student_id, fixture.exam.exam_id)
        .await
        .unwrap();

    assert_eq!(registration.student_id, student.student_id);
    assert_eq!(registration.exam_id, fixture.exam.exam_id);
    assert!(registration.is_registered);
    assert!(repo
        .is_registered(student.student_id, fixture.exam.exam_id)
        .await
        .unwrap());
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;
    let student = common::seed_student(&db, fixture.semester.semester_id, 1).await;

    let repo = RegistrationRepository::new(&db);
    repo.register(student.student_id, fixture.exam.exam_id)
        .await
        .unwrap();

    let second = repo.register(student.student_id, fixture.exam.exam_id).await;
    assert!(matches!(second, Err(ServiceError::AlreadyRegistered)));

    // Exactly one row survives the duplicate attempt.
    let total = student_exam_registration::Entity::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn registrations_listed_per_exam() {
    let db = common::setup_db().await;
    let fixture = common::seed_published_exam(&db).await;

    let repo = RegistrationRepository::new(&db);
    for n in 1..=3 {
        let student = common::seed_student(&db, fixture.semester.semester_id, n).await;
        repo.register(student.student_id, fixture.exam.exam_id)
            .await
            .unwrap();
    }

    assert_eq!(
        repo.find_by_exam(fixture.exam.exam_id).await.unwrap().len(),
        3
    );
    assert_eq!(repo.count_by_exam(fixture.exam.exam_id).await.unwrap(), 3);
}
