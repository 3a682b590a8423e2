use actix_web::{middleware::Logger, web, App, HttpServer};
use mcq_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::generate_mcqs)
            .service(handlers::generate_mcq_from_pdf)
            .service(handlers::initialize_chat)
            .service(handlers::send_chat_message)
    })
    .bind((host, port))?
    .run()
    .await
}
