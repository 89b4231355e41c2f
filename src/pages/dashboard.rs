//! Dashboard landing page for signed-in students.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::components::reveal_text::RevealText;
use crate::state::session::{AccountType, SessionStore};

fn greeting(display_name: &str) -> String {
    if display_name.is_empty() {
        "Welcome back".to_owned()
    } else {
        format!("Welcome back, {display_name}")
    }
}

/// Account-flavor copy under the greeting.
fn track_blurb(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::School => "Explore streams and find the subjects that fit you.",
        AccountType::College => "Sharpen your degree plan and get placement-ready.",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let heading = move || {
        let record = session.load();
        greeting(record.as_ref().map_or("", |s| s.display_name.as_str()))
    };
    let blurb = move || {
        let account_type = session.load().map(|s| s.account_type).unwrap_or_default();
        track_blurb(account_type)
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1><RevealText text=heading()/></h1>
                <p class="dashboard-page__blurb">{blurb}</p>
            </header>

            <div class="dashboard-page__cards">
                <MetricCard
                    title="Career quiz".to_owned()
                    blurb="Answer a short quiz and get guidance on where to head next.".to_owned()
                    href="/quiz".to_owned()
                />
                <MetricCard
                    title="Ask the advisor".to_owned()
                    blurb="Chat with the AI advisor about courses, exams, and careers.".to_owned()
                    href="/chat".to_owned()
                />
                <MetricCard
                    title="Your profile".to_owned()
                    blurb="Keep your details and interests up to date.".to_owned()
                    href="/profile".to_owned()
                />
            </div>
        </div>
    }
}
