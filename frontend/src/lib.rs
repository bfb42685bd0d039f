use leptos::*;

rust_i18n::i18n!("locales", fallback = "zh-CN");

mod components;
pub mod config;
pub mod i18n;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting 小微书 frontend (wasm)");

    // Config is loaded before mounting so the first render already uses it.
    // window.__WEBOOK_CONFIG takes precedence over ./config.json.
    spawn_local(async move {
        let cfg = config::init().await;
        i18n::apply_locale(cfg.locale.as_deref());
        log::debug!("runtime config initialized: {:?}", cfg);
        router::mount_app(cfg.landing);
    });
}
