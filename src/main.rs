use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quizbar_server::{
    app_state::AppState, auth::TokenVerifier, config::Config, handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(&config).await.map_err(std::io::Error::other)?;
    let verifier = TokenVerifier::bootstrap(&config)
        .await
        .map_err(std::io::Error::other)?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PATCH", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE]);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(verifier.clone()))
            .app_data(handlers::json_config())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
