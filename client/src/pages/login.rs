//! Login page: username + password (and optional 2FA code) against the
//! course API's `/authenticate` endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::GuardConfig;
use crate::net::token::TokenPayload;
use crate::net::types::Credentials;
use crate::state::persistence::BrowserPersistence;
use crate::state::session::Session;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim inputs and build credentials, or explain what is missing.
pub(crate) fn validate_login_input(username: &str, password: &str, two_factor: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let code = two_factor.trim();
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
        two_factor_token: (!code.is_empty()).then(|| code.to_owned()),
    })
}

/// Where a fresh login lands: the admin root for admins, home otherwise.
pub(crate) fn landing_path<'a>(payload: &TokenPayload, config: &'a GuardConfig) -> &'a str {
    if payload.roles.iter().any(|r| r.matches(&config.admin_role)) {
        &config.admin_prefix
    } else {
        &config.home_path
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let persistence = expect_context::<BrowserPersistence>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let two_factor = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Set by the sign-in task; the effect below performs the navigation.
    let landing = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if let Some(target) = landing.get() {
                navigate(&target, leptos_router::NavigateOptions::default());
            }
        });
    }
    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let on_submit = {
        let persistence = persistence.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let credentials = match validate_login_input(&username.get(), &password.get(), &two_factor.get()) {
                Ok(c) => c,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            info.set("Signing in...".to_owned());

            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let persistence = persistence.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::authenticate(&config, &credentials).await {
                        Ok(jwt) => match session.try_update(|s| s.login(&jwt, &persistence)) {
                            Some(Ok(payload)) => {
                                password.set(String::new());
                                info.set(String::new());
                                landing.set(Some(landing_path(&payload, &config.guard).to_owned()));
                            }
                            Some(Err(e)) => {
                                log::warn!("login rejected: {e}");
                                info.set("Invalid credentials.".to_owned());
                            }
                            None => info.set("Session unavailable.".to_owned()),
                        },
                        Err(e) => info.set(format!("Sign-in failed: {e}")),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (credentials, &persistence, landing);
                busy.set(false);
            }
        }
    };

    let on_logout = move |_| session.update(|s| s.logout(&persistence));

    let signed_in_form = move || {
        view! {
            <div class="login-card">
                <h1>"Signed in"</h1>
                <p class="login-card__subtitle">
                    "You are signed in as " {move || session.with(|s| s.display_name().to_owned())} "."
                </p>
                <button class="login-button" on:click=on_logout.clone()>"Sign out"</button>
            </div>
        }
    };

    view! {
        <div class="login-page">
            <Show when=move || !session.with(Session::is_logged_in) fallback=signed_in_form>
                <div class="login-card">
                    <h1>"Log in"</h1>
                    <p class="login-card__subtitle">"Use your course catalog account."</p>
                    <form class="login-form" on:submit=on_submit.clone()>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            placeholder="2FA code (if enabled)"
                            prop:value=move || two_factor.get()
                            on:input=move |ev| two_factor.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Log in"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
