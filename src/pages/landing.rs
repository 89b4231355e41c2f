//! Public landing page at `/`.

use leptos::prelude::*;

use crate::components::reveal_text::RevealText;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1><RevealText text="Find your direction".to_owned()/></h1>
            <p class="landing-page__blurb">
                "Compass helps school and college students pick streams, prepare for "
                "placements, and talk through career choices with an AI advisor."
            </p>
            <div class="landing-page__actions">
                <a class="btn btn--primary" href="/signup">"Get started"</a>
                <a class="btn" href="/login">"Sign in"</a>
            </div>
        </div>
    }
}
