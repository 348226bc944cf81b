//! Yew single-page client for the CU Dispatch landing site.

mod api;
mod app;
mod auth;
mod components;
mod config;
mod content;
mod language;
mod messages;
mod navigation;
mod pages;
mod storage;
mod util;

#[cfg(all(test, target_arch = "wasm32"))]
mod storage_test;

use app::App;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::{DEFAULT_LANGUAGE, translations};
use std::str::FromStr;
use yew::Renderer;
use yew::{Html, function_component, html};

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <I18nProvider ..config>
            <App />
        </I18nProvider>
    }
}

fn init_logging(level: &str) {
    let level = log::Level::from_str(level).unwrap_or(log::Level::Info);
    if let Err(error) = console_log::init_with_level(level) {
        web_sys::console::log_1(&format!("Logger already installed: {error}").into());
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let (dispatch_config, problems) = config::load();
    init_logging(&dispatch_config.log_level);
    for problem in &problems {
        log::warn!("ignoring configuration: {problem}");
    }
    if !dispatch_config.has_api_key() {
        log::warn!("no Gemini API key configured; the campus assistant is offline");
    }
    config::install(dispatch_config);

    log::info!("Starting CU Dispatch");

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .expect("document body to mount into");
    Renderer::<InternationalApp>::with_root(root.into()).render();
}
