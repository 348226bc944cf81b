//! Frontend configuration module
//!
//! Settings are baked in at compile time: `trunk build` runs with the
//! `DISPATCH_*` variables (or the legacy `API_KEY` / `GEMINI_API_KEY`) in
//! its environment and `option_env!` captures them.

use once_cell::unsync::OnceCell;
use shared::DispatchConfig;
use std::rc::Rc;

thread_local! {
    static CURRENT: OnceCell<Rc<DispatchConfig>> = const { OnceCell::new() };
}

fn compile_time_var(name: &str) -> Option<String> {
    let value = match name {
        "DISPATCH_API_KEY" => option_env!("DISPATCH_API_KEY"),
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "API_KEY" => option_env!("API_KEY"),
        "DISPATCH_MODEL" => option_env!("DISPATCH_MODEL"),
        "DISPATCH_ENDPOINT" => option_env!("DISPATCH_ENDPOINT"),
        "DISPATCH_REQUEST_TIMEOUT_MS" => option_env!("DISPATCH_REQUEST_TIMEOUT_MS"),
        "DISPATCH_AUTH_LATENCY_MS" => option_env!("DISPATCH_AUTH_LATENCY_MS"),
        "DISPATCH_CONTACT_DELIVERY_MS" => option_env!("DISPATCH_CONTACT_DELIVERY_MS"),
        "DISPATCH_STATUS_RESET_MS" => option_env!("DISPATCH_STATUS_RESET_MS"),
        "DISPATCH_INSTITUTION_DOMAIN" => option_env!("DISPATCH_INSTITUTION_DOMAIN"),
        "DISPATCH_LOG_LEVEL" => option_env!("DISPATCH_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Resolves the configuration from `lookup`, falling back to the defaults
/// when an override is malformed or the result is unusable.
///
/// Problems are returned alongside so they can be logged once the console
/// logger is up.
pub fn resolve<F>(lookup: F) -> (DispatchConfig, Vec<String>)
where
    F: Fn(&str) -> Option<String>,
{
    let config = match DispatchConfig::default().with_overrides(lookup) {
        Ok(config) => config,
        Err(error) => return (DispatchConfig::default(), vec![error.to_string()]),
    };

    match config.validate() {
        Ok(()) => (config, Vec::new()),
        Err(errors) => (
            DispatchConfig::default(),
            errors.iter().map(ToString::to_string).collect(),
        ),
    }
}

/// Loads the compile-time configuration.
pub fn load() -> (DispatchConfig, Vec<String>) {
    resolve(compile_time_var)
}

/// Installs `config` as the process-wide configuration.
///
/// Only the first call has an effect.
pub fn install(config: DispatchConfig) {
    CURRENT.with(|cell| {
        let _ = cell.set(Rc::new(config));
    });
}

/// The installed configuration, or the compile-time one when none was
/// installed.
pub fn current() -> Rc<DispatchConfig> {
    CURRENT.with(|cell| cell.get_or_init(|| Rc::new(load().0)).clone())
}
