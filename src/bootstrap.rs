use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::auth::hash_password;
use crate::config::APP_CONFIG;
use crate::entities::admin;

pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let admin_username: &str = &APP_CONFIG.admin_username;
    let default_password: &str = &APP_CONFIG.admin_password;

    let existing_admin = admin::Entity::find()
        .filter(admin::Column::Username.eq(admin_username))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let hashed_password =
        hash_password(default_password).context("Failed to hash admin password")?;

    let now = Utc::now().naive_utc();

    let admin_user = admin::ActiveModel {
        admin_id: Set(Uuid::new_v4()),
        username: Set(admin_username.to_string()),
        password: Set(hashed_password),
        name: Set("System Administrator".to_string()),
        email: Set(APP_CONFIG.admin_email.clone()),
        is_active: Set(true),
        created_at: Set(now),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("Admin user created successfully");
    tracing::info!("  Username: {}", admin_username);
    tracing::warn!("Please change the default password after first login!");

    Ok(())
}
