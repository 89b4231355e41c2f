//! Staggered text reveal for page headings.
//!
//! Characters appear one at a time on a fixed cadence. On the server the
//! full text renders immediately so SSR output and crawlers see the heading;
//! the client restarts the reveal on hydration.

#[cfg(test)]
#[path = "reveal_text_test.rs"]
mod reveal_text_test;

use leptos::prelude::*;

/// Milliseconds between characters.
const DEFAULT_STEP_MS: u32 = 40;

/// The first `count` characters of `text`, respecting char boundaries.
#[must_use]
pub fn visible_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Heading with a staggered per-character reveal.
#[component]
pub fn RevealText(text: String, #[prop(optional)] step_ms: Option<u32>) -> impl IntoView {
    let total = text.chars().count();
    let visible = RwSignal::new(total);

    #[cfg(feature = "hydrate")]
    {
        visible.set(0);
        let step = step_ms.unwrap_or(DEFAULT_STEP_MS);
        leptos::task::spawn_local(async move {
            for shown in 1..=total {
                gloo_timers::future::TimeoutFuture::new(step).await;
                // Stop if the heading unmounted mid-reveal.
                if visible.try_set(shown).is_some() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = step_ms;
    }

    view! {
        <span class="reveal-text">{move || visible_prefix(&text, visible.get())}</span>
    }
}
