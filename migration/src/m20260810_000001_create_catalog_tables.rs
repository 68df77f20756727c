use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Semester::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semester::SemesterId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semester::Name).string().not_null())
                    .col(
                        ColumnDef::new(Semester::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Semester::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subject::SubjectId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subject::Name).string().not_null())
                    .col(ColumnDef::new(Subject::Code).string().not_null())
                    .col(ColumnDef::new(Subject::SemesterId).uuid().not_null())
                    .col(
                        ColumnDef::new(Subject::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Subject::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_semester")
                            .from_tbl(Subject::Table)
                            .from_col(Subject::SemesterId)
                            .to_tbl(Semester::Table)
                            .to_col(Semester::SemesterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_subject_code")
                    .table(Subject::Table)
                    .col(Subject::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admin::AdminId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admin::Username).string().not_null())
                    .col(ColumnDef::new(Admin::Password).string().not_null())
                    .col(ColumnDef::new(Admin::Name).string().not_null())
                    .col(ColumnDef::new(Admin::Email).string().not_null())
                    .col(
                        ColumnDef::new(Admin::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Admin::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_admin_username")
                    .table(Admin::Table)
                    .col(Admin::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculty::FacultyId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculty::Username).string().not_null())
                    .col(ColumnDef::new(Faculty::Password).string().not_null())
                    .col(ColumnDef::new(Faculty::Name).string().not_null())
                    .col(ColumnDef::new(Faculty::Email).string().not_null())
                    .col(ColumnDef::new(Faculty::Department).string().not_null())
                    .col(
                        ColumnDef::new(Faculty::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Faculty::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_faculty_username")
                    .table(Faculty::Table)
                    .col(Faculty::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Username).string().not_null())
                    .col(ColumnDef::new(Student::Password).string().not_null())
                    .col(ColumnDef::new(Student::Name).string().not_null())
                    .col(ColumnDef::new(Student::Email).string().not_null())
                    .col(ColumnDef::new(Student::RollNumber).string().not_null())
                    .col(ColumnDef::new(Student::SemesterId).uuid().not_null())
                    .col(
                        ColumnDef::new(Student::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Student::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_semester")
                            .from_tbl(Student::Table)
                            .from_col(Student::SemesterId)
                            .to_tbl(Semester::Table)
                            .to_col(Semester::SemesterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_student_username")
                    .table(Student::Table)
                    .col(Student::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_student_roll_number")
                    .table(Student::Table)
                    .col(Student::RollNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semester::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Semester {
    Table,
    SemesterId,
    Name,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subject {
    Table,
    SubjectId,
    Name,
    Code,
    SemesterId,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    AdminId,
    Username,
    Password,
    Name,
    Email,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Faculty {
    Table,
    FacultyId,
    Username,
    Password,
    Name,
    Email,
    Department,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
    Username,
    Password,
    Name,
    Email,
    RollNumber,
    SemesterId,
    IsActive,
    CreatedAt,
}
