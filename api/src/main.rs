use kw_api::{
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use kw_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    // `.env` first, then the environment-specific file on top of it
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    let config = AppConfig::from_env();

    let subscriber = get_subscriber(&config.logging, std::io::stdout);
    init_subscriber(subscriber)?;

    tracing::info!("Starting Keywarden");

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
