use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use dotenv::dotenv;

use calorie_knapsack::config::ServerConfig;
use calorie_knapsack::handlers::{configure, json_config};

// ---------- Server bootstrap ----------
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    // Sentry must be initialised before the actix runtime starts
    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    actix_web::rt::System::new().block_on(run(config))
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let json_limit = config.json_limit;

    log::info!("Starting server on http://127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .app_data(json_config(json_limit))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
