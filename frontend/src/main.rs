mod auth;
mod components;
mod config;
mod dashboard;
mod dialogs;
mod error;
mod http;
mod logging;
mod models;
mod navigation;
mod storage;
#[cfg(test)]
mod test_utils;

use components::App;
use config::AppConfig;

fn main() {
    let config = AppConfig::from_build_env();
    logging::init(&config);
    tracing::info!("starting expense tracker against {}", config.api_base_url);
    yew::Renderer::<App>::new().render();
}
