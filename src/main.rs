use std::sync::Mutex;

use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use url::Url;

mod configuration;
mod data_structures;
mod errors;
mod expiring_dict;
mod fetcher;
mod normalizer;
mod web;

use configuration::{get_bind_address, get_opensky_url, LOG_LEVEL};
use fetcher::Fetcher;
use web::AppState;

fn main() {
    TermLogger::init(LOG_LEVEL, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("logger init failed");

    let url = get_opensky_url();
    Url::parse(&url).expect(&format!("Invalid states url '{url}'!"));

    // the blocking http client must be built outside the async runtime
    let state = AppState::new(Fetcher::new(&url));

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime failed");
    runtime.block_on(serve(state, &url));

    info!("Bye.");
}

async fn serve(state: AppState, url: &str) {
    let router = web::build_router(state);

    let addr = get_bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await
        .expect(&format!("Could not bind '{addr}'!"));
    info!("Dashboard listening on http://{addr}, states source {url}");

    // ctrl-c ends the server loop, then main returns normally
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown_tx = Mutex::new(Some(shutdown_tx));
    ctrlc::set_handler(move || {
        if let Some(tx) = shutdown_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }).expect("ctrl-c handler failed");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("Shutting down..");
        })
        .await
        .expect("server failed");
}
