use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    auth::{self, AuthMode, Credentials},
    config::AppConfig,
    http::ApiClient,
    navigation::{BrowserNavigator, Navigator, DASHBOARD_PATH},
};

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub mode: AuthMode,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let mode = props.mode;
    let credentials = use_state(Credentials::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let credentials = credentials.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(invalid) = credentials.validate(mode) {
                error.set(Some(invalid.to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let credentials = (*credentials).clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let client = ApiClient::browser(AppConfig::from_build_env());
                match auth::authenticate(&client, mode, &credentials).await {
                    Ok(_) => BrowserNavigator.redirect(DASHBOARD_PATH),
                    Err(failure) => {
                        tracing::warn!("{}: {failure}", mode.fallback_error());
                        error.set(Some(failure.user_message(mode.fallback_error()).to_owned()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_field_input = |apply: fn(&mut Credentials, String)| {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*credentials).clone();
            apply(&mut next, input.value());
            credentials.set(next);
        })
    };

    let is_login = mode == AuthMode::Login;
    let other_page = match mode {
        AuthMode::Login => AuthMode::Register.page(),
        AuthMode::Register => AuthMode::Login.page(),
    };
    let input_class = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{ if is_login { "Welcome back" } else { "Create account" } }</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        { if is_login { "Sign in to track your expenses." } else { "Start tracking your expenses." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    if !is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Name"}</label>
                            <input type="text" class={input_class} value={credentials.name.clone()}
                                oninput={on_field_input(|c, value| c.name = value)} />
                        </div>
                    }
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Email"}</label>
                        <input type="email" class={input_class} value={credentials.email.clone()}
                            oninput={on_field_input(|c, value| c.email = value)} />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input type="password" class={input_class} value={credentials.password.clone()}
                            oninput={on_field_input(|c, value| c.password = value)} />
                    </div>

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else if is_login { "Login" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    { if is_login { "No account?" } else { "Already have an account?" } }
                    <a class="ml-2 text-primary font-semibold" href={other_page}>
                        { if is_login { "Sign up" } else { "Login" } }
                    </a>
                </div>
            </div>
        </div>
    }
}
