//! `SeaORM` Entity for exam_session table
//!
//! One sitting of an exam: (date, session_number) with its own time
//! window. `max_students` is advisory and never checked against the
//! seating count.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "exam_session"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub session_id: Uuid,
    pub exam_id: Uuid,
    pub date: Date,
    pub session_number: i32,
    pub start_time: Time,
    pub end_time: Time,
    pub max_students: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    SessionId,
    ExamId,
    Date,
    SessionNumber,
    StartTime,
    EndTime,
    MaxStudents,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    SessionId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Exam,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::SessionId => ColumnType::Uuid.def(),
            Self::ExamId => ColumnType::Uuid.def(),
            Self::Date => ColumnType::Date.def(),
            Self::SessionNumber => ColumnType::Integer.def(),
            Self::StartTime => ColumnType::Time.def(),
            Self::EndTime => ColumnType::Time.def(),
            Self::MaxStudents => ColumnType::Integer.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Exam => Entity::belongs_to(super::exam::Entity)
                .from(Column::ExamId)
                .to(super::exam::Column::ExamId)
                .into(),
        }
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
