use crate::entities::semester;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct SemesterRepository {
    db: DatabaseConnection,
}

impl SemesterRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<semester::Model>> {
        let semesters = semester::Entity::find()
            .order_by_desc(semester::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(semesters)
    }

    pub async fn find_active(&self) -> Result<Vec<semester::Model>> {
        let semesters = semester::Entity::find()
            .filter(semester::Column::IsActive.eq(true))
            .order_by_desc(semester::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(semesters)
    }

    pub async fn find_by_id(&self, semester_id: Uuid) -> Result<Option<semester::Model>> {
        let semester = semester::Entity::find_by_id(semester_id)
            .one(&self.db)
            .await?;
        Ok(semester)
    }

    pub async fn create(&self, name: String) -> Result<semester::Model> {
        let semester_model = semester::ActiveModel {
            semester_id: Set(Uuid::new_v4()),
            name: Set(name),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = semester_model.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn rename(&self, semester_id: Uuid, name: String) -> Result<semester::Model> {
        let semester = self
            .find_by_id(semester_id)
            .await?
            .ok_or(ServiceError::NotFound("semester"))?;

        let mut active_model: semester::ActiveModel = semester.into();
        active_model.name = Set(name);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    /// Soft delete. Historical records referencing this semester are
    /// left untouched.
    pub async fn deactivate(&self, semester_id: Uuid) -> Result<semester::Model> {
        let semester = self
            .find_by_id(semester_id)
            .await?
            .ok_or(ServiceError::NotFound("semester"))?;

        let mut active_model: semester::ActiveModel = semester.into();
        active_model.is_active = Set(false);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    pub async fn toggle_active(&self, semester_id: Uuid) -> Result<semester::Model> {
        let semester = self
            .find_by_id(semester_id)
            .await?
            .ok_or(ServiceError::NotFound("semester"))?;

        let is_active = semester.is_active;
        let mut active_model: semester::ActiveModel = semester.into();
        active_model.is_active = Set(!is_active);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }
}
