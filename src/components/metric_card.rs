//! Reusable card component for dashboard tiles.

use leptos::prelude::*;

/// A clickable tile on the dashboard linking to one of the portal pages.
#[component]
pub fn MetricCard(title: String, blurb: String, href: String) -> impl IntoView {
    view! {
        <a class="metric-card" href=href>
            <span class="metric-card__title">{title}</span>
            <span class="metric-card__blurb">{blurb}</span>
        </a>
    }
}
