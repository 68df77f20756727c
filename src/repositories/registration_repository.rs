use crate::entities::student_exam_registration;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct RegistrationRepository {
    db: DatabaseConnection,
}

impl RegistrationRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Register a student for an exam. A second call for the same
    /// (student, exam) pair fails with `AlreadyRegistered` and leaves
    /// the existing row untouched; registration is permanent.
    pub async fn register(
        &self,
        student_id: Uuid,
        exam_id: Uuid,
    ) -> Result<student_exam_registration::Model> {
        let existing = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::StudentId.eq(student_id))
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(ServiceError::AlreadyRegistered);
        }

        let registration = student_exam_registration::ActiveModel {
            registration_id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            exam_id: Set(exam_id),
            registration_date: Set(Utc::now().naive_utc()),
            is_registered: Set(true),
        };

        let result = registration.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn find_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<student_exam_registration::Model>> {
        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::StudentId.eq(student_id))
            .order_by_asc(student_exam_registration::Column::RegistrationDate)
            .all(&self.db)
            .await?;
        Ok(registrations)
    }

    /// Registrants of an exam in registration order. Seating and paper
    /// allocation both iterate this set.
    pub async fn find_by_exam(
        &self,
        exam_id: Uuid,
    ) -> Result<Vec<student_exam_registration::Model>> {
        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .order_by_asc(student_exam_registration::Column::RegistrationDate)
            .order_by_asc(student_exam_registration::Column::RegistrationId)
            .all(&self.db)
            .await?;
        Ok(registrations)
    }

    pub async fn count_by_exam(&self, exam_id: Uuid) -> Result<u64> {
        let count = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub async fn is_registered(&self, student_id: Uuid, exam_id: Uuid) -> Result<bool> {
        let count = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::StudentId.eq(student_id))
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}
