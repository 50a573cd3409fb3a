//! Account page showing the identity decoded from the session token.

use leptos::prelude::*;

use crate::state::persistence::BrowserPersistence;
use crate::state::session::Session;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let persistence = expect_context::<BrowserPersistence>();

    let field = move |pick: fn(&Session) -> Option<&str>| {
        move || session.with(|s| pick(s).unwrap_or("-").to_owned())
    };
    let roles = move || {
        session.with(|s| {
            let names: Vec<&str> = s.roles().iter().map(|r| r.bare()).collect();
            if names.is_empty() { "none".to_owned() } else { names.join(", ") }
        })
    };

    view! {
        <section class="account-page">
            <h1>"Your account"</h1>
            <dl class="account-page__facts">
                <dt>"Name"</dt>
                <dd>{field(Session::name)}</dd>
                <dt>"Email"</dt>
                <dd>{field(Session::email)}</dd>
                <dt>"User ID"</dt>
                <dd>{field(Session::user_id)}</dd>
                <dt>"Roles"</dt>
                <dd>{roles}</dd>
            </dl>
            <a class="btn" href="/favorites">"My favorites"</a>
            <button class="btn" on:click=move |_| session.update(|s| s.logout(&persistence))>
                "Log out"
            </button>
        </section>
    }
}
