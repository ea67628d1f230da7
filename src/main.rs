#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;
    use userdesk::{app::App, app_lib::config::AppConfig};

    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    userdesk::app_lib::logging::init(&config.log_level);
    tracing::info!(version = %userdesk::app_lib::build_info::version_label(), "starting userdesk");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
