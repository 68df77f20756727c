use exam_service::bootstrap::initialize_admin_user;
use exam_service::{config::APP_CONFIG, utils::tracing::init_standard_tracing};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!("Starting exam service...");

    let db = Database::connect(&APP_CONFIG.database_url).await?;

    tracing::info!("Running migrations...");
    Migrator::up(&db, None).await?;

    tracing::info!("Checking admin user...");
    initialize_admin_user(&db).await?;

    tracing::info!(env = %APP_CONFIG.app_env, "exam service ready");

    Ok(())
}
