//! Top navigation bar for protected pages.
//!
//! Shows the portal links, the cached display name, a dark-mode toggle, and
//! the logout button. Logout is client-authoritative: the backend call is
//! best effort and the session store is cleared regardless.

use leptos::prelude::*;

use crate::net::http::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let ui = expect_context::<RwSignal<UiState>>();

    let display_name = move || {
        session
            .load()
            .map(|s| s.display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Student".to_owned())
    };

    let on_toggle_dark = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(session).await;
            session.clear();
            if let Some(window) = web_sys::window() {
                let _ = window.location().replace(LOGIN_PATH);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = LOGIN_PATH;
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/dashboard">"Compass"</a>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href="/dashboard">"Dashboard"</a>
                <a class="nav-bar__link" href="/quiz">"Quiz"</a>
                <a class="nav-bar__link" href="/chat">"Advisor"</a>
                <a class="nav-bar__link" href="/profile">"Profile"</a>
            </div>
            <div class="nav-bar__actions">
                <span class="nav-bar__user">{display_name}</span>
                <button
                    class="nav-bar__icon-button"
                    title="Toggle dark mode"
                    on:click=on_toggle_dark
                >
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
                <button class="nav-bar__icon-button" title="Sign out" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
