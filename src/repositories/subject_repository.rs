use crate::entities::subject;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct SubjectRepository {
    db: DatabaseConnection,
}

impl SubjectRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<subject::Model>> {
        let subjects = subject::Entity::find()
            .order_by_desc(subject::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(subjects)
    }

    pub async fn find_active(&self) -> Result<Vec<subject::Model>> {
        let subjects = subject::Entity::find()
            .filter(subject::Column::IsActive.eq(true))
            .order_by_desc(subject::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(subjects)
    }

    pub async fn find_by_id(&self, subject_id: Uuid) -> Result<Option<subject::Model>> {
        let subject = subject::Entity::find_by_id(subject_id).one(&self.db).await?;
        Ok(subject)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<subject::Model>> {
        let subject = subject::Entity::find()
            .filter(subject::Column::Code.eq(code))
            .one(&self.db)
            .await?;
        Ok(subject)
    }

    pub async fn create(
        &self,
        name: String,
        code: String,
        semester_id: Uuid,
    ) -> Result<subject::Model> {
        let subject_model = subject::ActiveModel {
            subject_id: Set(Uuid::new_v4()),
            name: Set(name),
            code: Set(code),
            semester_id: Set(semester_id),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = subject_model.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, subject_id: Uuid, updates: SubjectUpdate) -> Result<subject::Model> {
        let subject = self
            .find_by_id(subject_id)
            .await?
            .ok_or(ServiceError::NotFound("subject"))?;

        let mut active_model: subject::ActiveModel = subject.into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(code) = updates.code {
            active_model.code = Set(code);
        }
        if let Some(semester_id) = updates.semester_id {
            active_model.semester_id = Set(semester_id);
        }

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    pub async fn deactivate(&self, subject_id: Uuid) -> Result<subject::Model> {
        let subject = self
            .find_by_id(subject_id)
            .await?
            .ok_or(ServiceError::NotFound("subject"))?;

        let mut active_model: subject::ActiveModel = subject.into();
        active_model.is_active = Set(false);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    pub async fn toggle_active(&self, subject_id: Uuid) -> Result<subject::Model> {
        let subject = self
            .find_by_id(subject_id)
            .await?
            .ok_or(ServiceError::NotFound("subject"))?;

        let is_active = subject.is_active;
        let mut active_model: subject::ActiveModel = subject.into();
        active_model.is_active = Set(!is_active);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct SubjectUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub semester_id: Option<Uuid>,
}
