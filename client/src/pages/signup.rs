//! Account creation page. A successful signup signs the user straight in.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::field::{TextField, bind};
use crate::net::error::ErrorMessage;
use crate::state::session::SessionContext;
use crate::util::forms::SignupDraft;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let draft = RwSignal::new(SignupDraft::default());
    let error = RwSignal::new(None::<ErrorMessage>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(SignupDraft::request) {
            Ok(request) => request,
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
                if let Err(message) = session.signup(&request).await {
                    error.set(Some(message));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, request);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join WaveMinder"</h1>
                <p class="auth-card__subtitle">"Help track and protect marine life"</p>
                <ErrorBanner error=error/>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="Name" required=true binding=bind!(draft, name)/>
                    <TextField
                        label="Email"
                        kind="email"
                        placeholder="you@example.com"
                        required=true
                        binding=bind!(draft, email)
                    />
                    <TextField label="Location" placeholder="e.g., San Diego, CA" binding=bind!(draft, location)/>
                    <TextField label="Password" kind="password" required=true binding=bind!(draft, password)/>
                    <TextField
                        label="Confirm Password"
                        kind="password"
                        required=true
                        binding=bind!(draft, confirm_password)
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Already have an account? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
