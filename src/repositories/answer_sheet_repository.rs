use crate::entities::{answer_sheet, exam, faculty, student_exam_registration};
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

pub struct AnswerSheetRepository {
    db: DatabaseConnection,
}

/// Per-exam allocation progress.
#[derive(Debug, Serialize)]
pub struct AllocationStats {
    pub exam_id: Uuid,
    pub total_students: u64,
    pub allocated_papers: u64,
    pub unallocated_papers: u64,
}

/// One faculty's share of the pending workload.
#[derive(Debug, Serialize)]
pub struct FacultyPending {
    pub faculty_id: Uuid,
    pub name: String,
    pub pending_count: u64,
}

impl AnswerSheetRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Allocate answer sheets for every registrant of an exam to a
    /// faculty grader. Sheets that are already allocated are never
    /// reassigned; once claimed, a sheet stays with its grader.
    /// Returns the number of sheets newly allocated by this call.
    pub async fn allocate_papers(&self, faculty_id: Uuid, exam_id: Uuid) -> Result<u64> {
        let txn = self.db.begin().await?;

        faculty::Entity::find_by_id(faculty_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        exam::Entity::find_by_id(exam_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("exam"))?;

        let registrations = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .order_by_asc(student_exam_registration::Column::RegistrationDate)
            .order_by_asc(student_exam_registration::Column::RegistrationId)
            .all(&txn)
            .await?;

        let mut allocated_count = 0u64;
        for registration in registrations {
            let existing = answer_sheet::Entity::find()
                .filter(answer_sheet::Column::StudentId.eq(registration.student_id))
                .filter(answer_sheet::Column::ExamId.eq(exam_id))
                .one(&txn)
                .await?;

            match existing {
                None => {
                    let sheet = answer_sheet::ActiveModel {
                        sheet_id: Set(Uuid::new_v4()),
                        student_id: Set(registration.student_id),
                        exam_id: Set(exam_id),
                        faculty_id: Set(Some(faculty_id)),
                        is_allocated: Set(true),
                        is_checked: Set(false),
                        marks_obtained: Set(None),
                        remarks: Set(String::new()),
                        checked_at: Set(None),
                        created_at: Set(Utc::now().naive_utc()),
                    };
                    sheet.insert(&txn).await?;
                    allocated_count += 1;
                }
                Some(sheet) if !sheet.is_allocated => {
                    let mut active_sheet: answer_sheet::ActiveModel = sheet.into();
                    active_sheet.faculty_id = Set(Some(faculty_id));
                    active_sheet.is_allocated = Set(true);
                    active_sheet.update(&txn).await?;
                    allocated_count += 1;
                }
                Some(_) => {}
            }
        }

        txn.commit().await?;

        tracing::info!(
            faculty_id = %faculty_id,
            exam_id = %exam_id,
            allocated = allocated_count,
            "papers allocated"
        );
        Ok(allocated_count)
    }

    /// Check a paper held by the given faculty: marks the sheet
    /// checked, timestamps it, and records remarks. Marks may be
    /// entered in the same step or deferred to `enter_marks`.
    pub async fn check_paper(
        &self,
        faculty_id: Uuid,
        sheet_id: Uuid,
        marks: Option<i32>,
        remarks: String,
    ) -> Result<answer_sheet::Model> {
        let sheet = self.sheet_held_by(faculty_id, sheet_id).await?;

        if sheet.is_checked {
            return Err(ServiceError::InvalidTransition("sheet is already checked"));
        }

        let mut active_sheet: answer_sheet::ActiveModel = sheet.into();
        active_sheet.is_checked = Set(true);
        active_sheet.checked_at = Set(Some(Utc::now().naive_utc()));
        active_sheet.remarks = Set(remarks);
        if let Some(marks) = marks {
            active_sheet.marks_obtained = Set(Some(marks));
        }

        let result = active_sheet.update(&self.db).await?;
        Ok(result)
    }

    /// Enter marks on a sheet that was checked without them. Unchecked
    /// sheets are refused; marks are never overwritten.
    pub async fn enter_marks(
        &self,
        faculty_id: Uuid,
        sheet_id: Uuid,
        marks: i32,
    ) -> Result<answer_sheet::Model> {
        let sheet = self.sheet_held_by(faculty_id, sheet_id).await?;

        if !sheet.is_checked {
            return Err(ServiceError::InvalidTransition(
                "marks require a checked sheet",
            ));
        }
        if sheet.marks_obtained.is_some() {
            return Err(ServiceError::InvalidTransition("marks already entered"));
        }

        let mut active_sheet: answer_sheet::ActiveModel = sheet.into();
        active_sheet.marks_obtained = Set(Some(marks));

        let result = active_sheet.update(&self.db).await?;
        Ok(result)
    }

    async fn sheet_held_by(&self, faculty_id: Uuid, sheet_id: Uuid) -> Result<answer_sheet::Model> {
        let sheet = answer_sheet::Entity::find_by_id(sheet_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("answer sheet"))?;

        if !sheet.is_allocated || sheet.faculty_id != Some(faculty_id) {
            return Err(ServiceError::NotFound("answer sheet"));
        }

        Ok(sheet)
    }

    /// Sheets allocated but not yet checked.
    pub async fn pending_checking(&self) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::IsAllocated.eq(true))
            .filter(answer_sheet::Column::IsChecked.eq(false))
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    /// Sheets checked without marks.
    pub async fn pending_marks(&self) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::IsChecked.eq(true))
            .filter(answer_sheet::Column::MarksObtained.is_null())
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    /// A faculty's unchecked queue.
    pub async fn queue_for_faculty(&self, faculty_id: Uuid) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::FacultyId.eq(faculty_id))
            .filter(answer_sheet::Column::IsAllocated.eq(true))
            .filter(answer_sheet::Column::IsChecked.eq(false))
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    pub async fn checked_by_faculty(&self, faculty_id: Uuid) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::FacultyId.eq(faculty_id))
            .filter(answer_sheet::Column::IsChecked.eq(true))
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    /// Checked sheets awaiting marks for a given faculty.
    pub async fn marks_queue_for_faculty(
        &self,
        faculty_id: Uuid,
    ) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::FacultyId.eq(faculty_id))
            .filter(answer_sheet::Column::IsChecked.eq(true))
            .filter(answer_sheet::Column::MarksObtained.is_null())
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    /// Published results for a student: checked sheets with marks.
    pub async fn results_for_student(&self, student_id: Uuid) -> Result<Vec<answer_sheet::Model>> {
        let sheets = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::StudentId.eq(student_id))
            .filter(answer_sheet::Column::IsChecked.eq(true))
            .filter(answer_sheet::Column::MarksObtained.is_not_null())
            .all(&self.db)
            .await?;
        Ok(sheets)
    }

    pub async fn allocation_stats(&self, exam_id: Uuid) -> Result<AllocationStats> {
        let total_students = student_exam_registration::Entity::find()
            .filter(student_exam_registration::Column::ExamId.eq(exam_id))
            .count(&self.db)
            .await?;
        let allocated_papers = answer_sheet::Entity::find()
            .filter(answer_sheet::Column::ExamId.eq(exam_id))
            .filter(answer_sheet::Column::IsAllocated.eq(true))
            .count(&self.db)
            .await?;

        Ok(AllocationStats {
            exam_id,
            total_students,
            allocated_papers,
            unallocated_papers: total_students.saturating_sub(allocated_papers),
        })
    }

    /// Active faculty with sheets awaiting checking, heaviest workload
    /// first. Ties keep the faculty iteration order (stable sort).
    pub async fn faculty_pending_breakdown(&self) -> Result<Vec<FacultyPending>> {
        self.faculty_breakdown(false).await
    }

    /// Active faculty with checked sheets awaiting marks, heaviest
    /// workload first.
    pub async fn faculty_pending_marks_breakdown(&self) -> Result<Vec<FacultyPending>> {
        self.faculty_breakdown(true).await
    }

    async fn faculty_breakdown(&self, marks_stage: bool) -> Result<Vec<FacultyPending>> {
        let faculties = faculty::Entity::find()
            .filter(faculty::Column::IsActive.eq(true))
            .order_by_desc(faculty::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let mut breakdown = Vec::new();
        for faculty in faculties {
            let query = answer_sheet::Entity::find()
                .filter(answer_sheet::Column::FacultyId.eq(faculty.faculty_id));
            let pending_count = if marks_stage {
                query
                    .filter(answer_sheet::Column::IsChecked.eq(true))
                    .filter(answer_sheet::Column::MarksObtained.is_null())
                    .count(&self.db)
                    .await?
            } else {
                query
                    .filter(answer_sheet::Column::IsAllocated.eq(true))
                    .filter(answer_sheet::Column::IsChecked.eq(false))
                    .count(&self.db)
                    .await?
            };

            if pending_count > 0 {
                breakdown.push(FacultyPending {
                    faculty_id: faculty.faculty_id,
                    name: faculty.name,
                    pending_count,
                });
            }
        }

        breakdown.sort_by(|a, b| b.pending_count.cmp(&a.pending_count));
        Ok(breakdown)
    }
}
