use checkout_service::{build_server, AppState, Settings};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().expect("Invalid configuration");
    let host = settings.host.clone();
    let port = settings.port;

    log::info!(
        "Orders at {}, coupons at {}, payments at {}",
        settings.order_api_url,
        settings.coupon_api_url,
        settings.payment_link_url
    );

    let state = AppState::new(settings).expect("Failed to create HTTP client");

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(state, &host, port)?.await
}
