use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exam::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Exam::ExamId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Exam::SubjectId).uuid().not_null())
                    .col(ColumnDef::new(Exam::StartDate).date().not_null())
                    .col(ColumnDef::new(Exam::EndDate).date().not_null())
                    .col(ColumnDef::new(Exam::StartTime).time().not_null())
                    .col(ColumnDef::new(Exam::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(Exam::TotalMarks)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(Exam::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Exam::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_subject")
                            .from_tbl(Exam::Table)
                            .from_col(Exam::SubjectId)
                            .to_tbl(Subject::Table)
                            .to_col(Subject::SubjectId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExamSchedule::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamSchedule::ScheduleId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamSchedule::ExamId).uuid().not_null())
                    .col(
                        ColumnDef::new(ExamSchedule::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ExamSchedule::PublishedAt).timestamp().null())
                    .col(
                        ColumnDef::new(ExamSchedule::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_schedule_exam")
                            .from_tbl(ExamSchedule::Table)
                            .from_col(ExamSchedule::ExamId)
                            .to_tbl(Exam::Table)
                            .to_col(Exam::ExamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentExamRegistration::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentExamRegistration::RegistrationId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentExamRegistration::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentExamRegistration::ExamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentExamRegistration::RegistrationDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentExamRegistration::IsRegistered)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_student")
                            .from_tbl(StudentExamRegistration::Table)
                            .from_col(StudentExamRegistration::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_exam")
                            .from_tbl(StudentExamRegistration::Table)
                            .from_col(StudentExamRegistration::ExamId)
                            .to_tbl(Exam::Table)
                            .to_col(Exam::ExamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_student_exam_registration")
                    .table(StudentExamRegistration::Table)
                    .col(StudentExamRegistration::StudentId)
                    .col(StudentExamRegistration::ExamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExamSession::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamSession::SessionId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamSession::ExamId).uuid().not_null())
                    .col(ColumnDef::new(ExamSession::Date).date().not_null())
                    .col(
                        ColumnDef::new(ExamSession::SessionNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamSession::StartTime).time().not_null())
                    .col(ColumnDef::new(ExamSession::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(ExamSession::MaxStudents)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_session_exam")
                            .from_tbl(ExamSession::Table)
                            .from_col(ExamSession::ExamId)
                            .to_tbl(Exam::Table)
                            .to_col(Exam::ExamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exam_session_exam_id")
                    .table(ExamSession::Table)
                    .col(ExamSession::ExamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExamSession::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(StudentExamRegistration::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ExamSchedule::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Exam {
    Table,
    ExamId,
    SubjectId,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    TotalMarks,
    IsPublished,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExamSchedule {
    Table,
    ScheduleId,
    ExamId,
    IsPublished,
    PublishedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentExamRegistration {
    Table,
    RegistrationId,
    StudentId,
    ExamId,
    RegistrationDate,
    IsRegistered,
}

#[derive(DeriveIden)]
enum ExamSession {
    Table,
    SessionId,
    ExamId,
    Date,
    SessionNumber,
    StartTime,
    EndTime,
    MaxStudents,
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    SubjectId,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
}
