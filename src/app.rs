//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::session::AppSession;
use crate::pages::analysis::AnalysisPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::HistoryPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::plans::PlansPage;
use crate::pages::privacy::PrivacyPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::setup_password::SetupPasswordPage;
use crate::pages::shared::SharedAnalysisPage;
use crate::pages::terms::TermsPage;
use crate::pages::upload::UploadPage;

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
/// Provides the shared session context, runs the startup token check once,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new_default();
    provide_context(session.clone());

    // Startup check: restore a persisted token and resolve the user.
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.bootstrap().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/facematch.css"/>
        <Title text="FaceMatch"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("plans") view=PlansPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route
                        path=(StaticSegment("setup-password"), ParamSegment("userId"))
                        view=SetupPasswordPage
                    />
                    <Route
                        path=(StaticSegment("analysis"), StaticSegment("share"), ParamSegment("token"))
                        view=SharedAnalysisPage
                    />
                    <Route path=(StaticSegment("analysis"), ParamSegment("id")) view=AnalysisPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
