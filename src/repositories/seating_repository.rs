use crate::entities::{exam_session, seating_arrangement, student_exam_registration};
use crate::error::{Result, ServiceError};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

/// Seats are laid out on a fixed 10-column grid.
const GRID_COLUMNS: i32 = 10;

pub struct SeatingRepository {
    db: DatabaseConnection,
}

impl SeatingRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Regenerate the seating arrangement for a session.
    ///
    /// Wholesale replace: all existing seats for the session are
    /// dropped, then every registrant of the session's exam (in
    /// registration order) gets a sequential seat starting at "A01".
    /// Delete and recreate run in one transaction, so a failure leaves
    /// the previous arrangement in place.
    pub async fn assign_seating(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<seating_arrangement::Model>> {
        let txn = self.db.begin().await?;

        let session = exam_session::Entity::find_by_id(session_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("exam session"))?;

        // Registration is per exam, not per session: every registrant
        // is seated in whichever session is being arranged.
        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(session.exam_id))
            .order_by_asc(student_exam_registration::Column::RegistrationDate)
            .order_by_asc(student_exam_registration::Column::RegistrationId)
            .all(&txn)
            .await?;

        seating_arrangement::Entity::delete_many()
            .filter(seating_arrangement::Column::SessionId.eq(session_id))
            .exec(&txn)
            .await?;

        let mut assigned = Vec::with_capacity(registrations.len());
        for (index, registration) in registrations.into_iter().enumerate() {
            let seat = index as i32 + 1;
            let row = (seat - 1) / GRID_COLUMNS + 1;
            let column = (seat - 1) % GRID_COLUMNS + 1;

            let seating = seating_arrangement::ActiveModel {
                seating_id: Set(Uuid::new_v4()),
                student_id: Set(registration.student_id),
                session_id: Set(session_id),
                seat_number: Set(format!("A{:02}", seat)),
                row_number: Set(row),
                column_number: Set(column),
            };

            assigned.push(seating.insert(&txn).await?);
        }

        txn.commit().await?;

        tracing::info!(
            session_id = %session_id,
            seats = assigned.len(),
            "seating arrangement regenerated"
        );
        Ok(assigned)
    }

    pub async fn find_by_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<seating_arrangement::Model>> {
        let seats = seating_arrangement::Entity::find()
            .filter(seating_arrangement::Column::SessionId.eq(session_id))
            .order_by_asc(seating_arrangement::Column::SeatNumber)
            .all(&self.db)
            .await?;
        Ok(seats)
    }

    pub async fn find_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<seating_arrangement::Model>> {
        let seats = seating_arrangement::Entity::find()
            .filter(seating_arrangement::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await?;
        Ok(seats)
    }

    pub async fn count_by_session(&self, session_id: Uuid) -> Result<u64> {
        let count = seating_arrangement::Entity::find()
            .filter(seating_arrangement::Column::SessionId.eq(session_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
