//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{Guard, GuardPolicy};
use crate::components::nav_bar::NavBar;
use crate::components::route_watcher::RouteWatcher;
use crate::pages::{
    chat::ChatPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    profile::ProfilePage, quiz::QuizPage, signup::SignupPage,
};
use crate::state::{
    auth::AuthProbe, chat::ChatState, quiz::QuizState, session::SessionStore, ui::UiState,
};

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
/// Provides the session store, the shared auth probe, and per-page state
/// contexts, then sets up client-side routing with a guard composed around
/// every page and the redirect watcher mounted once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let quiz = RwSignal::new(QuizState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(SessionStore);
    provide_context(AuthProbe::new());
    provide_context(ui);
    provide_context(quiz);
    provide_context(chat);

    // Apply the persisted theme before first paint.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/compass-ui.css"/>
        <Title text="Compass"/>

        <Router>
            <RouteWatcher/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Public>
                                <LandingPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Public>
                                <LoginPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Public>
                                <SignupPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Protected>
                                <NavBar/>
                                <DashboardPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("quiz")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Protected>
                                <NavBar/>
                                <QuizPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("chat")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Protected>
                                <NavBar/>
                                <ChatPage/>
                            </Guard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <Guard policy=GuardPolicy::Protected>
                                <NavBar/>
                                <ProfilePage/>
                            </Guard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
