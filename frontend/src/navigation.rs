//! Browser location: reading the current path and redirecting.

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/";

pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

/// Whether `path` is one of the pages a signed-out user is allowed to see.
pub fn is_auth_page(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// `window.location`. Redirecting is a full page load.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| DASHBOARD_PATH.to_owned())
    }

    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window to redirect to {path}");
            return;
        };
        if window.location().set_href(path).is_err() {
            tracing::error!("could not redirect to {path}");
        }
    }
}
