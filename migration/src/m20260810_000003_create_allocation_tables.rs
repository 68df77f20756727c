use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatingArrangement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeatingArrangement::SeatingId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeatingArrangement::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatingArrangement::SessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatingArrangement::SeatNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatingArrangement::RowNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SeatingArrangement::ColumnNumber)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seating_student")
                            .from_tbl(SeatingArrangement::Table)
                            .from_col(SeatingArrangement::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seating_session")
                            .from_tbl(SeatingArrangement::Table)
                            .from_col(SeatingArrangement::SessionId)
                            .to_tbl(ExamSession::Table)
                            .to_col(ExamSession::SessionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_session_seat_number")
                    .table(SeatingArrangement::Table)
                    .col(SeatingArrangement::SessionId)
                    .col(SeatingArrangement::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::AttendanceId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Attendance::SessionId).uuid().not_null())
                    .col(
                        ColumnDef::new(Attendance::IsPresent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Attendance::AttendanceDate)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_student")
                            .from_tbl(Attendance::Table)
                            .from_col(Attendance::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_session")
                            .from_tbl(Attendance::Table)
                            .from_col(Attendance::SessionId)
                            .to_tbl(ExamSession::Table)
                            .to_col(ExamSession::SessionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_student_session_attendance")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AnswerSheet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnswerSheet::SheetId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AnswerSheet::StudentId).uuid().not_null())
                    .col(ColumnDef::new(AnswerSheet::ExamId).uuid().not_null())
                    .col(ColumnDef::new(AnswerSheet::FacultyId).uuid().null())
                    .col(
                        ColumnDef::new(AnswerSheet::IsAllocated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AnswerSheet::IsChecked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AnswerSheet::MarksObtained).integer().null())
                    .col(
                        ColumnDef::new(AnswerSheet::Remarks)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(AnswerSheet::CheckedAt).timestamp().null())
                    .col(ColumnDef::new(AnswerSheet::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_sheet_student")
                            .from_tbl(AnswerSheet::Table)
                            .from_col(AnswerSheet::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_sheet_exam")
                            .from_tbl(AnswerSheet::Table)
                            .from_col(AnswerSheet::ExamId)
                            .to_tbl(Exam::Table)
                            .to_col(Exam::ExamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_sheet_faculty")
                            .from_tbl(AnswerSheet::Table)
                            .from_col(AnswerSheet::FacultyId)
                            .to_tbl(Faculty::Table)
                            .to_col(Faculty::FacultyId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_student_exam_sheet")
                    .table(AnswerSheet::Table)
                    .col(AnswerSheet::StudentId)
                    .col(AnswerSheet::ExamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_answer_sheet_faculty_id")
                    .table(AnswerSheet::Table)
                    .col(AnswerSheet::FacultyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnswerSheet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SeatingArrangement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SeatingArrangement {
    Table,
    SeatingId,
    StudentId,
    SessionId,
    SeatNumber,
    RowNumber,
    ColumnNumber,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    AttendanceId,
    StudentId,
    SessionId,
    IsPresent,
    AttendanceDate,
}

#[derive(DeriveIden)]
enum AnswerSheet {
    Table,
    SheetId,
    StudentId,
    ExamId,
    FacultyId,
    IsAllocated,
    IsChecked,
    MarksObtained,
    Remarks,
    CheckedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
}

#[derive(DeriveIden)]
enum Exam {
    Table,
    ExamId,
}

#[derive(DeriveIden)]
enum Faculty {
    Table,
    FacultyId,
}

#[derive(DeriveIden)]
enum ExamSession {
    Table,
    SessionId,
}
