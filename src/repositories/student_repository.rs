use crate::entities::student;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<student::Model>> {
        let students = student::Entity::find()
            .order_by_desc(student::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(students)
    }

    pub async fn find_active(&self) -> Result<Vec<student::Model>> {
        let students = student::Entity::find()
            .filter(student::Column::IsActive.eq(true))
            .order_by_desc(student::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(students)
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<student::Model>> {
        let student = student::Entity::find_by_id(student_id).one(&self.db).await?;
        Ok(student)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<student::Model>> {
        let student = student::Entity::find()
            .filter(student::Column::Username.eq(username))
            .filter(student::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;
        Ok(student)
    }

    pub async fn find_by_roll_number(&self, roll_number: &str) -> Result<Option<student::Model>> {
        let student = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .one(&self.db)
            .await?;
        Ok(student)
    }

    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        name: String,
        email: String,
        roll_number: String,
        semester_id: Uuid,
    ) -> Result<student::Model> {
        let student_model = student::ActiveModel {
            student_id: Set(Uuid::new_v4()),
            username: Set(username),
            password: Set(password_hash),
            name: Set(name),
            email: Set(email),
            roll_number: Set(roll_number),
            semester_id: Set(semester_id),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = student_model.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, student_id: Uuid, updates: StudentUpdate) -> Result<student::Model> {
        let student = self
            .find_by_id(student_id)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;

        let mut active_model: student::ActiveModel = student.into();

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
        if let Some(roll_number) = updates.roll_number {
            active_model.roll_number = Set(roll_number);
        }
        if let Some(semester_id) = updates.semester_id {
            active_model.semester_id = Set(semester_id);
        }

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    /// Soft delete. Registrations, seating and answer sheets for this
    /// student are kept.
    pub async fn deactivate(&self, student_id: Uuid) -> Result<student::Model> {
        let student = self
            .find_by_id(student_id)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;

        let mut active_model: student::ActiveModel = student.into();
        active_model.is_active = Set(false);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }

    pub async fn toggle_active(&self, student_id: Uuid) -> Result<student::Model> {
        let student = self
            .find_by_id(student_id)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;

        let is_active = student.is_active;
        let mut active_model: student::ActiveModel = student.into();
        active_model.is_active = Set(!is_active);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct StudentUpdate {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<String>,
    pub semester_id: Option<Uuid>,
}
