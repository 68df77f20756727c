use crate::entities::faculty;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct FacultyRepository {
    db: DatabaseConnection,
}

impl FacultyRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<faculty::Model>> {
        let faculties = faculty::Entity::find()
            .order_by_desc(faculty::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(faculties)
    }

    pub async fn find_active(&self) -> Result<Vec<faculty::Model>> {
        let faculties = faculty::Entity::find()
            .filter(faculty::Column::IsActive.eq(true))
            .order_by_desc(faculty::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(faculties)
    }

    pub async fn find_by_id(&self, faculty_id: Uuid) -> Result<Option<faculty::Model>> {
        let faculty = faculty::Entity::find_by_id(faculty_id).one(&self.db).await?;
        Ok(faculty)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<faculty::Model>> {
        let faculty = faculty::Entity::find()
            .filter(faculty::Column::Username.eq(username))
            .filter(faculty::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;
        Ok(faculty)
    }

    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        name: String,
        email: String,
        department: String,
    ) -> Result<faculty::Model> {
        let faculty_model = faculty::ActiveModel {
            faculty_id: Set(Uuid::new_v4()),
            username: Set(username),
            password: Set(password_hash),
            name: Set(name),
            email: Set(email),
            department: Set(department),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = faculty_model.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, faculty_id: Uuid, updates: FacultyUpdate) -> Result<faculty::Model> {
        let faculty = self
            .find_by_id(faculty_id)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        let mut active_model: faculty::ActiveModel = faculty.into();

        if let Some(username) = updates.username {
            active_model.username = Set(username);
        }
        if let Some(password_hash) = updates.password_hash {
            active_model.password = Set(password_hash);
        }
        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(email) = updates.email {
            active_model.email = Set(email);
        }
        if let Some(department) = updates.department {
            active_model.department = Set(department);
        }

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    /// Soft delete. Sheets already assigned to this faculty keep their
    /// assignment.
    pub async fn deactivate(&self, faculty_id: Uuid) -> Result<faculty::Model> {
        let faculty = self
            .find_by_id(faculty_id)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        let mut active_model: faculty::ActiveModel = faculty.into();
        active_model.is_active = Set(false);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    pub async fn toggle_active(&self, faculty_id: Uuid) -> Result<faculty::Model> {
        let faculty = self
            .find_by_id(faculty_id)
            .await?
            .ok_or(ServiceError::NotFound("faculty"))?;

        let is_active = faculty.is_active;
        let mut active_model: faculty::ActiveModel = faculty.into();
        active_model.is_active = Set(!is_active);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct FacultyUpdate {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}
