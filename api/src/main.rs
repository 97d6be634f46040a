use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use wl_api::telemetry::init_tracing;
use wl_api::{create_app, AppState};
use wl_core::{DeliveryLogger, MessengerConfig, MessengerService, RecipientResolver};
use wl_infra::config::SmsConfig;
use wl_infra::database::{
    DatabasePool, MySqlClientRepository, MySqlContactRepository, MySqlDeliveryLogRepository,
    MySqlStaffRepository,
};
use wl_infra::sms::create_provider_client;
use wl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let _logging = init_tracing(&config.logging).context("failed to initialize tracing")?;

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting Webline messenger API"
    );

    let sms_config = SmsConfig::from_env()?;
    tracing::info!(sms = ?sms_config, "Loaded SMS configuration");

    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.ensure_schema().await?;
    let db = pool.get_pool().clone();

    let resolver = RecipientResolver::new(
        Arc::new(MySqlStaffRepository::new(db.clone())),
        Arc::new(MySqlClientRepository::new(db.clone())),
        Arc::new(MySqlContactRepository::new(db.clone())),
    );
    let messenger = MessengerService::new(
        resolver,
        Arc::new(create_provider_client(&sms_config)?),
        DeliveryLogger::new(Arc::new(MySqlDeliveryLogRepository::new(db))),
        sms_config.credentials(),
        MessengerConfig::default().with_country_code(&sms_config.country_code),
    );

    let state = web::Data::new(AppState::new(messenger));
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || create_app(state.clone(), max_payload_size));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Webline messenger API stopped");
    Ok(())
}
