//! Console-level diagnostics.
//!
//! These never reach the learner-facing log. In the browser they land in the
//! devtools console, natively they go through `tracing`.

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("{}", message);
    }
}

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{}", message);
    }
}
