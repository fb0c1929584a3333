//! Browser Dialogs

/// Show a blocking `window.alert` with `message`.
pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::error!("could not show alert: {}", message);
    }
}
