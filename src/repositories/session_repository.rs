use crate::entities::{exam, exam_session, seating_arrangement, student_exam_registration};
use crate::error::{Result, ServiceError};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Serialize;
use uuid::Uuid;

pub struct SessionRepository {
    db: DatabaseConnection,
}

/// A session with its seating/registration counts, for the seating
/// overview.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session: exam_session::Model,
    pub seating_count: u64,
    pub registration_count: u64,
}

impl SessionRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_by_id(&self, session_id: Uuid) -> Result<Option<exam_session::Model>> {
        let session = exam_session::Entity::find_by_id(session_id)
            .one(&self.db)
            .await?;
        Ok(session)
    }

    pub async fn find_by_exam(&self, exam_id: Uuid) -> Result<Vec<exam_session::Model>> {
        let sessions = exam_session::Entity::find()
            .filter(exam_session::Column::ExamId.eq(exam_id))
            .order_by_asc(exam_session::Column::Date)
            .order_by_asc(exam_session::Column::SessionNumber)
            .all(&self.db)
            .await?;
        Ok(sessions)
    }

    /// Find or create the sitting identified by (exam, date,
    /// session_number). A new session inherits the exam's time window.
    pub async fn get_or_create(
        &self,
        exam_id: Uuid,
        date: NaiveDate,
        session_number: i32,
    ) -> Result<exam_session::Model> {
        let existing = exam_session::Entity::find()
            .filter(exam_session::Column::ExamId.eq(exam_id))
            .filter(exam_session::Column::Date.eq(date))
            .filter(exam_session::Column::SessionNumber.eq(session_number))
            .one(&self.db)
            .await?;

        if let Some(session) = existing {
            return Ok(session);
        }

        let exam = exam::Entity::find_by_id(exam_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("exam"))?;

        let session = exam_session::ActiveModel {
            session_id: Set(Uuid::new_v4()),
            exam_id: Set(exam_id),
            date: Set(date),
            session_number: Set(session_number),
            start_time: Set(exam.start_time),
            end_time: Set(exam.end_time),
            max_students: Set(50),
        };

        let result = session.insert(&self.db).await?;
        Ok(result)
    }

    /// All sessions, newest first, each with how many seats have been
    /// assigned versus how many students are registered for its exam.
    pub async fn find_all_with_counts(&self) -> Result<Vec<SessionSummary>> {
        let sessions = exam_session::Entity::find()
            .order_by_desc(exam_session::Column::Date)
            .all(&self.db)
            .await?;

        let mut summaries = Vec::with_capacity(sessions.len());
        for session in sessions {
            let seating_count = seating_arrangement::Entity::find()
                .filter(seating_arrangement::Column::SessionId.eq(session.session_id))
                .count(&self.db)
                .await?;
            let registration_count = student_exam_registration::Entity::find()
                .filter(student_exam_registration::Column::ExamId.eq(session.exam_id))
                .count(&self.db)
                .await?;

            summaries.push(SessionSummary {
                session,
                seating_count,
                registration_count,
            });
        }

        Ok(summaries)
    }
}
