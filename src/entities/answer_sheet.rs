//! `SeaORM` Entity for answer_sheet table
//!
//! Lifecycle: unallocated -> allocated -> checked -> marked. The
//! transition rules live in `AnswerSheetRepository`; the row itself
//! only stores the flags.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "answer_sheet"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub sheet_id: Uuid,
    pub student_id: Uuid,
    pub exam_id: Uuid,
    pub faculty_id: Option<Uuid>,
    pub is_allocated: bool,
    pub is_checked: bool,
    pub marks_obtained: Option<i32>,
    pub remarks: String,
    pub checked_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
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

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    SheetId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Exam,
    Faculty,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::SheetId => ColumnType::Uuid.def(),
            Self::StudentId => ColumnType::Uuid.def(),
            Self::ExamId => ColumnType::Uuid.def(),
            Self::FacultyId => ColumnType::Uuid.def().null(),
            Self::IsAllocated => ColumnType::Boolean.def(),
            Self::IsChecked => ColumnType::Boolean.def(),
            Self::MarksObtained => ColumnType::Integer.def().null(),
            Self::Remarks => ColumnType::Text.def(),
            Self::CheckedAt => ColumnType::DateTime.def().null(),
            Self::CreatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(super::student::Entity)
                .from(Column::StudentId)
                .to(super::student::Column::StudentId)
                .into(),
            Self::Exam => Entity::belongs_to(super::exam::Entity)
                .from(Column::ExamId)
                .to(super::exam::Column::ExamId)
                .into(),
            Self::Faculty => Entity::belongs_to(super::faculty::Entity)
                .from(Column::FacultyId)
                .to(super::faculty::Column::FacultyId)
                .into(),
        }
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::faculty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
