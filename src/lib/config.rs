//! Build-time configuration for the API endpoint and client storage with an
//! optional runtime override. The runtime config is read from
//! `window.USERDESK_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Storage key holding the bearer token when nothing else is configured.
pub const DEFAULT_TOKEN_KEY: &str = "token";
/// Rows requested per admin page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub page_size: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build_time = RuntimeConfig {
            api_base_url: option_env!("USERDESK_API_BASE_URL").and_then(normalize_runtime_value),
            token_key: option_env!("USERDESK_TOKEN_KEY").and_then(normalize_runtime_value),
            page_size: option_env!("USERDESK_PAGE_SIZE").and_then(parse_page_size),
            log_level: option_env!("USERDESK_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Replaces the API base URL, used by the console front end.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        if let Some(value) = normalize_runtime_value(api_base_url) {
            self.api_base_url = value;
        }
        self
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    token_key: Option<String>,
    page_size: Option<u32>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.token_key {
        config.token_key = value;
    }
    if let Some(value) = runtime.page_size {
        config.page_size = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USERDESK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        token_key: read_runtime_value(&object, "token_key"),
        page_size: read_runtime_value(&object, "page_size")
            .as_deref()
            .and_then(parse_page_size),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_page_size(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|size| *size > 0)
}
