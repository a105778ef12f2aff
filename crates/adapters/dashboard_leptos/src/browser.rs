//! Thin wrappers over the few `window` APIs the dashboard needs.

use chrono::Local;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Send the browser to `path`.
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window()
        && let Err(err) = window.location().set_href(path)
    {
        leptos::logging::warn!("failed to redirect to {path}: {err:?}");
    }
}

/// Whether a click landed on a modal's backdrop rather than its content.
pub fn is_backdrop_click(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|el| el.class_list().contains("modal"))
}

/// Ask the user to confirm a destructive action. Declines when no window
/// is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Format a server timestamp in the browser's local time zone.
pub fn local_timestamp(raw: Option<&str>) -> String {
    homewatch_domain::time::format_timestamp(raw, &Local)
}

/// Wall-clock time of day, `HH:MM:SS`.
pub fn clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
