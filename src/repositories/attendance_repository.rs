use crate::entities::{attendance, exam_session, student_exam_registration};
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct AttendanceRepository {
    db: DatabaseConnection,
}

impl AttendanceRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Ensure a default-absent attendance row exists for every
    /// registrant of the session's exam. Existing rows keep their
    /// recorded state.
    pub async fn create_sheet(&self, session_id: Uuid) -> Result<Vec<attendance::Model>> {
        let txn = self.db.begin().await?;

        let session = exam_session::Entity::find_by_id(session_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("exam session"))?;

        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(session.exam_id))
            .order_by_asc(student_exam_registration::Column::RegistrationDate)
            .all(&txn)
            .await?;

        let mut sheet = Vec::with_capacity(registrations.len());
        for registration in registrations {
            let row = Self::get_or_create_row(&txn, registration.student_id, session_id).await?;
            sheet.push(row);
        }

        txn.commit().await?;
        Ok(sheet)
    }

    /// Record attendance for a session: every registrant is marked
    /// present or absent according to `present_student_ids`. Rows are
    /// created on demand, all within one transaction.
    pub async fn record_attendance(
        &self,
        session_id: Uuid,
        present_student_ids: &HashSet<Uuid>,
    ) -> Result<()> {
        let txn = self.db.begin().await?;

        let session = exam_session::Entity::find_by_id(session_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("exam session"))?;

        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(session.exam_id))
            .all(&txn)
            .await?;

        for registration in registrations {
            let is_present = present_student_ids.contains(&registration.student_id);
            let row = Self::get_or_create_row(&txn, registration.student_id, session_id).await?;

            let mut active_row: attendance::ActiveModel = row.into();
            active_row.is_present = Set(is_present);
            active_row.update(&txn).await?;
        }

        txn.commit().await?;

        tracing::info!(session_id = %session_id, "attendance recorded");
        Ok(())
    }

    async fn get_or_create_row(
        txn: &DatabaseTransaction,
        student_id: Uuid,
        session_id: Uuid,
    ) -> Result<attendance::Model> {
        let existing = attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .filter(attendance::Column::SessionId.eq(session_id))
            .one(txn)
            .await?;

        if let Some(row) = existing {
            return Ok(row);
        }

        let row = attendance::ActiveModel {
            attendance_id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            session_id: Set(session_id),
            is_present: Set(false),
            attendance_date: Set(Utc::now().naive_utc()),
        };

        let result = row.insert(txn).await?;
        Ok(result)
    }

    pub async fn find_by_session(&self, session_id: Uuid) -> Result<Vec<attendance::Model>> {
        let rows = attendance::Entity::find()
            .filter(attendance::Column::SessionId.eq(session_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<attendance::Model>> {
        let rows = attendance::Entity::find()
            .filter(attendance::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
