pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Settings;
pub use state::AppState;

use errors::AppError;
use handlers::checkout;

#[derive(OpenApi)]
#[openapi(
    paths(checkout::checkout, checkout::health),
    components(schemas(checkout::CheckoutRequest, checkout::OrderItemDto, checkout::OrderResponse)),
    tags((name = "checkout", description = "Order checkout"))
)]
pub struct ApiDoc;

/// Registers the checkout routes and the API docs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/checkout", web::post().to(checkout::checkout))
    .route("/health", web::get().to(checkout::health))
    .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(state: AppState, host: &str, port: u16) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.to_string(), port))?
    .run())
}
