//! Host actions that differ between web and native builds.

/// Throw away the whole page context. Returns `false` when the host cannot
/// reload, in which case callers rebuild their state from scratch.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.location().reload() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(?err, "page reload refused");
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() -> bool {
    false
}
