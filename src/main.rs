use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use edugen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    config.warn_if_unconfigured();

    let state = AppState::new(config.clone());

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::generate_content)
            .service(handlers::get_content)
            .service(handlers::copy_content)
            .service(handlers::copy_label)
            .service(handlers::download_content)
            .service(handlers::toggle_answer)
            .service(handlers::get_options)
            .service(handlers::health)
            .service(handlers::model_health)
    })
    .bind((config.web_server_host.clone(), config.web_server_port))?
    .run()
    .await
}
