//! `SeaORM` Entity for exam table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "exam"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub exam_id: Uuid,
    pub subject_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub total_marks: i32,
    pub is_published: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
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

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ExamId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Subject,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ExamId => ColumnType::Uuid.def(),
            Self::SubjectId => ColumnType::Uuid.def(),
            Self::StartDate => ColumnType::Date.def(),
            Self::EndDate => ColumnType::Date.def(),
            Self::StartTime => ColumnType::Time.def(),
            Self::EndTime => ColumnType::Time.def(),
            Self::TotalMarks => ColumnType::Integer.def(),
            Self::IsPublished => ColumnType::Boolean.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Subject => Entity::belongs_to(super::subject::Entity)
                .from(Column::SubjectId)
                .to(super::subject::Column::SubjectId)
                .into(),
        }
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
