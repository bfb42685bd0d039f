use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

const WINDOW_CONFIG_KEY: &str = "__WEBOOK_CONFIG";
#[cfg(target_arch = "wasm32")]
const CONFIG_PATH: &str = "./config.json";

pub const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed runtime config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to fetch runtime config: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("runtime config request returned status {0}")]
    Status(u16),
    #[error("no global `window` exists")]
    NoWindow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingStyle {
    #[default]
    Card,
    Plain,
}

/// How the article id is placed into the view link's query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleIdEncoding {
    /// Interpolated as typed. Reserved characters pass through untouched.
    #[default]
    Verbatim,
    Percent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingMode {
    /// Viewport width is sampled once when the page renders.
    #[default]
    OneShot,
    /// Viewport width follows window resizes.
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingSettings {
    pub style: LandingStyle,
    pub article_id_encoding: ArticleIdEncoding,
    pub padding_mode: PaddingMode,
    pub narrow_breakpoint_px: u32,
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            style: LandingStyle::default(),
            article_id_encoding: ArticleIdEncoding::default(),
            padding_mode: PaddingMode::default(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub locale: Option<String>,
    pub landing: LandingSettings,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Snapshot of the loaded config, or defaults before `init` has finished.
pub fn current() -> RuntimeConfig {
    snapshot(RUNTIME_CONFIG.get())
}

fn snapshot(cached: Option<&RuntimeConfig>) -> RuntimeConfig {
    cached.cloned().unwrap_or_default()
}

pub fn landing_settings() -> LandingSettings {
    current().landing
}

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    current()
}

#[cfg(target_arch = "wasm32")]
fn config_from_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    // Expect optional global object: window.__WEBOOK_CONFIG = { locale: "...", landing: {...} }
    let w = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let any = match js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(WINDOW_CONFIG_KEY)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(None),
    };
    let raw = js_sys::JSON::stringify(&any)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    RuntimeConfig::from_json(&raw).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    Ok(None)
}

#[cfg(target_arch = "wasm32")]
fn config_url() -> Result<String, ConfigError> {
    let w = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let base = w.location().href().map_err(|_| ConfigError::NoWindow)?;
    web_sys::Url::new_with_base(CONFIG_PATH, &base)
        .map(|url| url.href())
        .map_err(|_| ConfigError::NoWindow)
}

pub async fn fetch_runtime_config(url: &str) -> Result<RuntimeConfig, ConfigError> {
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    let body = resp.text().await?;
    RuntimeConfig::from_json(&body)
}

async fn resolve() -> RuntimeConfig {
    match config_from_globals() {
        Ok(Some(cfg)) => {
            log::debug!("runtime config taken from window.{}", WINDOW_CONFIG_KEY);
            return cfg;
        }
        Ok(None) => {}
        Err(err) => log::warn!("ignoring window.{}: {}", WINDOW_CONFIG_KEY, err),
    }

    #[cfg(target_arch = "wasm32")]
    {
        let fetched = match config_url() {
            Ok(url) => fetch_runtime_config(&url).await,
            Err(err) => Err(err),
        };
        match fetched {
            Ok(cfg) => {
                log::debug!("runtime config loaded from {}", CONFIG_PATH);
                return cfg;
            }
            Err(err) => log::warn!("ignoring {}: {}", CONFIG_PATH, err),
        }
    }
    RuntimeConfig::default()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let cfg = resolve().await;
    cache_config(cfg)
}


#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod fetch_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetches_config_from_server() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(200).json_body(json!({
                    "landing": { "style": "plain", "narrow_breakpoint_px": 600 }
                }));
            })
            .await;

        let cfg = fetch_runtime_config(&server.url("/config.json"))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(cfg.landing.style, LandingStyle::Plain);
        assert_eq!(cfg.landing.narrow_breakpoint_px, 600);
        assert!(cfg.locale.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(404);
            })
            .await;

        let err = fetch_runtime_config(&server.url("/config.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Status(404)));
    }

    #[tokio::test]
    async fn init_on_host_settles_on_defaults() {
        let cfg = init().await;
        assert_eq!(cfg, current());
    }
}
