//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::pages::action_form::ActionFormPage;
use crate::pages::actions::ActionsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::report_form::ReportFormPage;
use crate::pages::reports::ReportsPage;
use crate::pages::sighting_form::SightingFormPage;
use crate::pages::sightings::SightingsPage;
use crate::pages::signup::SignupPage;
use crate::state::session::SessionContext;
use crate::util::auth::DASHBOARD_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts the persisted-session check, and
/// sets up client-side routing. Every route sits behind a guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::browser();
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move { session.init().await });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/waveminder.css"/>
        <Title text="WaveMinder"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=DASHBOARD_PATH/> }>
                <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                <Route path=StaticSegment("signup") view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("sightings") view=|| view! { <ProtectedRoute><SightingsPage/></ProtectedRoute> }/>
                <Route
                    path=(StaticSegment("sightings"), StaticSegment("new"))
                    view=|| view! { <ProtectedRoute><SightingFormPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("reports") view=|| view! { <ProtectedRoute><ReportsPage/></ProtectedRoute> }/>
                <Route path=(StaticSegment("reports"), StaticSegment("new")) view=|| view! { <ProtectedRoute><ReportFormPage/></ProtectedRoute> }/>
                <Route path=StaticSegment("actions") view=|| view! { <ProtectedRoute><ActionsPage/></ProtectedRoute> }/>
                <Route path=(StaticSegment("actions"), StaticSegment("new")) view=|| view! { <ProtectedRoute><ActionFormPage/></ProtectedRoute> }/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
            </Routes>
        </Router>
    }
}
