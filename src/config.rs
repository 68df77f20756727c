use clap::Parser;
use once_cell::sync::Lazy;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env, default_value = "admin")]
    pub admin_username: String,

    #[clap(long, env)]
    pub admin_password: String,

    #[clap(long, env, default_value = "admin@university.edu")]
    pub admin_email: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
