use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match run().await {
        Ok(report) => {
            info!(
                service = "seed",
                event = "done",
                restaurants = report.restaurants,
                pizzas = report.pizzas,
                restaurant_pizzas = report.restaurant_pizzas,
                "database seeded"
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "seeding failed");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<service::seed::SeedReport> {
    let mut cfg = configs::AppConfig::load_and_validate()?;
    // seeding needs the tables regardless of the server's setting
    cfg.database.auto_migrate = true;
    let db = server::startup::connect_database(&cfg.database).await?;
    Ok(service::seed::seed(&db).await?)
}
