//! Email + password sign-in page.
//!
//! On success the session becomes authenticated and `PublicRoute` moves the
//! user on to the dashboard.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::field::{TextField, bind};
use crate::net::error::ErrorMessage;
use crate::state::session::SessionContext;
use crate::util::forms::LoginDraft;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let draft = RwSignal::new(LoginDraft::default());
    let error = RwSignal::new(None::<ErrorMessage>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email, password) = match draft.with_untracked(LoginDraft::credentials) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(ErrorMessage::text(message)));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(message) = session.login(&email, &password).await {
                    error.set(Some(message));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, email, password);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"WaveMinder"</h1>
                <p class="auth-card__subtitle">"Sign in to log sightings and beach reports"</p>
                <ErrorBanner error=error/>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        kind="email"
                        placeholder="you@example.com"
                        required=true
                        binding=bind!(draft, email)
                    />
                    <TextField label="Password" kind="password" required=true binding=bind!(draft, password)/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">"New here? " <a href="/signup">"Create an account"</a></p>
            </div>
        </div>
    }
}
