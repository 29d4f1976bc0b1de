// ============================================================================
// OJ WEB - Client core of the online judge front end
// ============================================================================
// - Models:   payloads shared with the backend
// - Services: HTTP only (transport, headers, error normalization, endpoints)
// - State:    session store (theme, identity, UI flags) with subscribers
// - Hooks:    Yew context/provider over the session store
// - Theme:    color tokens for the component library
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;

pub use config::{AppConfig, CONFIG};
pub use models::{ErrorMessage, JudgeResult, Overview, PagedData, Role, User, UserInfo};
pub use services::{build_headers, resolve_error, resolve_token, ApiClient};
pub use state::{SessionAction, SessionState, SessionStore};
pub use theme::Theme;

/// Panic hook and console logging. Call once before mounting the UI.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.log_level().to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 OJ web client ({})", CONFIG.environment);
}
