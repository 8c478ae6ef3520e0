use yew::prelude::*;

use crate::{
    auth::{self, AuthContext, AuthMode},
    models::session,
    navigation::{BrowserNavigator, Navigator, DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH},
    storage::LocalStorage,
};

use super::{auth_screen::AuthScreen, dashboard::DashboardPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Redirect(&'static str),
}

/// Which page to show for `path`. Signed-out users only see the auth pages;
/// signed-in users skip them.
pub fn resolve_route(path: &str, signed_in: bool) -> Route {
    match (path, signed_in) {
        (LOGIN_PATH | REGISTER_PATH, true) => Route::Redirect(DASHBOARD_PATH),
        (LOGIN_PATH, false) => Route::Login,
        (REGISTER_PATH, false) => Route::Register,
        (_, false) => Route::Redirect(LOGIN_PATH),
        (_, true) => Route::Dashboard,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(|| session::load(&LocalStorage));
    let route = resolve_route(&BrowserNavigator.current_path(), session.is_some());

    use_effect_with_deps(
        move |route| {
            if let Route::Redirect(target) = *route {
                tracing::debug!("redirecting to {target}");
                BrowserNavigator.redirect(target);
            }
            || ()
        },
        route,
    );

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            auth::logout(&LocalStorage, &BrowserNavigator);
            session.set(None);
        })
    };

    match route {
        Route::Login => html! { <AuthScreen mode={AuthMode::Login} /> },
        Route::Register => html! { <AuthScreen mode={AuthMode::Register} /> },
        Route::Dashboard => {
            let context = AuthContext {
                user: (*session).as_ref().map(|session| session.user.clone()),
                logout,
            };
            html! {
                <ContextProvider<AuthContext> context={context}>
                    <DashboardPage />
                </ContextProvider<AuthContext>>
            }
        }
        Route::Redirect(_) => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Redirecting..."}
            </div>
        },
    }
}
