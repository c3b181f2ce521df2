//! Thin wrappers over blocking browser dialogs, history and timers.
//!
//! On native targets the dialogs log instead of blocking, `confirm` answers
//! yes, and history navigation is a no-op.

use std::time::Duration;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(message, "alert");
    }
}

/// Ask a yes/no question. Dismissing the dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(message, "confirm (auto-accepted)");
        true
    }
}

/// Go one entry back in browser history.
pub fn history_back() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(Ok(history)) = web_sys::window().map(|window| window.history()) {
            let _ = history.back();
        }
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
