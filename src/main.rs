use std::env;

use config::Config;
use dotenvy::dotenv;
use product_catalog::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()
        .map_err(|e| {
            log::error!("Failed to load configuration: {e}");
            std::io::Error::other(format!("Configuration error: {e}"))
        })?;

    let server_config: ServerConfig = settings.try_deserialize().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::other(format!("Configuration error: {e}"))
    })?;

    product_catalog::run(server_config).await
}
