use crate::entities::admin;
use crate::error::{Result, ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

pub struct AdminRepository {
    db: DatabaseConnection,
}

impl AdminRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_all(&self) -> Result<Vec<admin::Model>> {
        let admins = admin::Entity::find()
            .order_by_desc(admin::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(admins)
    }

    pub async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<admin::Model>> {
        let admin = admin::Entity::find_by_id(admin_id).one(&self.db).await?;
        Ok(admin)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<admin::Model>> {
        let admin = admin::Entity::find()
            .filter(admin::Column::Username.eq(username))
            .filter(admin::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;
        Ok(admin)
    }

    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        name: String,
        email: String,
    ) -> Result<admin::Model> {
        let admin_model = admin::ActiveModel {
            admin_id: Set(Uuid::new_v4()),
            username: Set(username),
            password: Set(password_hash),
            name: Set(name),
            email: Set(email),
            is_active: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = admin_model.insert(&self.db).await?;
        Ok(result)
    }

    pub async fn deactivate(&self, admin_id: Uuid) -> Result<admin::Model> {
        let admin = self
            .find_by_id(admin_id)
            .await?
            .ok_or(ServiceError::NotFound("admin"))?;

        let mut active_model: admin::ActiveModel = admin.into();
        active_model.is_active = Set(false);

        let result = active_model.update(&self.db).await?;
        Ok(result)
    }
}
