use crate::entities::{exam, exam_schedule};
use crate::error::{Result, ServiceError};
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

pub struct ExamRepository {
    db: DatabaseConnection,
}

impl ExamRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<exam::Model>> {
        let exams = exam::Entity::find()
            .order_by_desc(exam::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(exams)
    }

    /// Exams visible to students.
    pub async fn find_published(&self) -> Result<Vec<exam::Model>> {
        let exams = exam::Entity::find()
            .filter(exam::Column::IsPublished.eq(true))
            .order_by_desc(exam::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(exams)
    }

    pub async fn find_unpublished(&self) -> Result<Vec<exam::Model>> {
        let exams = exam::Entity::find()
            .filter(exam::Column::IsPublished.eq(false))
            .order_by_desc(exam::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(exams)
    }

    pub async fn find_by_id(&self, exam_id: Uuid) -> Result<Option<exam::Model>> {
        let exam = exam::Entity::find_by_id(exam_id).one(&self.db).await?;
        Ok(exam)
    }

    pub async fn create(
        &self,
        subject_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        total_marks: i32,
    ) -> Result<exam::Model> {
        let exam_model = exam::ActiveModel {
            exam_id: Set(Uuid::new_v4()),
            subject_id: Set(subject_id),
            start_date: Set(start_date),
            end_date: Set(end_date),
            start_time: Set(start_time),
            end_time: Set(end_time),
            total_marks: Set(total_marks),
            is_published: Set(false),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = exam_model.insert(&self.db).await?;
        Ok(result)
    }

    /// Publish the exam schedule: flips `is_published` and writes the
    /// exam_schedule audit row in the same transaction.
    pub async fn publish(&self, exam_id: Uuid) -> Result<exam::Model> {
        let txn = self.db.begin().await?;

        let exam = exam::Entity::find_by_id(exam_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("exam"))?;

        let now = Utc::now().naive_utc();

        let mut active_exam: exam::ActiveModel = exam.into();
        active_exam.is_published = Set(true);
        let result = active_exam.update(&txn).await?;

        let schedule = exam_schedule::ActiveModel {
            schedule_id: Set(Uuid::new_v4()),
            exam_id: Set(exam_id),
            is_published: Set(true),
            published_at: Set(Some(now)),
            created_at: Set(now),
        };
        schedule.insert(&txn).await?;

        txn.commit().await?;

        tracing::info!(exam_id = %exam_id, "exam schedule published");
        Ok(result)
    }

    pub async fn schedule_history(&self, exam_id: Uuid) -> Result<Vec<exam_schedule::Model>> {
        let schedules = exam_schedule::Entity::find()
            .filter(exam_schedule::Column::ExamId.eq(exam_id))
            .order_by_asc(exam_schedule::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(schedules)
    }
}
