use app_lib::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    app_lib::telemetry::init(&config.log_level);
    app_lib::run(config).await?;
    Ok(())
}
