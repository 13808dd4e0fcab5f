use std::io;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use cleany::config::AppConfig;
use cleany::services::{Services, Stores};
use cleany::{db, handlers};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config)
        .await
        .map_err(|e| startup_error("failed to create pool", e))?;

    log::info!("Running migrations...");
    db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| startup_error("failed to run migrations", e))?;

    let services = web::Data::new(Services::new(Stores::sqlite(pool)));

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(services.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
