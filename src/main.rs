use actix_web::{App, HttpServer, middleware, web};
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use discount_service::MIGRATIONS;
use discount_service::clients::product::HttpProductClient;
use discount_service::config::ServerConfig;
use discount_service::repository::DieselRepository;
use discount_service::routes::discounts;
use discount_service::services::diagnostics::LogSink;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }
    let repo = DieselRepository::new(pool);

    let product_client = match HttpProductClient::new(
        &config.product_service_url,
        config.product_service_timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build product service client: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Using product service at {}",
        product_client.base_url()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(discounts::configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(product_client.clone()))
            .app_data(web::Data::new(LogSink))
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
