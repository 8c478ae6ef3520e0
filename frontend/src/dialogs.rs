//! Blocking confirm/alert prompts.

pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
