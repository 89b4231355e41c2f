//! Profile editing page.
//!
//! Saving PATCHes the backend and refreshes the cached session fields so the
//! nav greeting tracks the new name. Domain failures surface inline and
//! never touch the session record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::Profile;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;
use crate::state::session::{AccountType, SessionStore};

/// Parse the CGPA field: empty means unset, otherwise 0.0..=10.0.
fn parse_cgpa(input: &str) -> Result<Option<f64>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(value) if (0.0..=10.0).contains(&value) => Ok(Some(value)),
        _ => Err("CGPA must be a number between 0 and 10."),
    }
}

/// Split the comma-separated interests field into clean tags.
fn parse_interests(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

fn interests_text(interests: &[String]) -> String {
    interests.join(", ")
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let profile = LocalResource::new(move || crate::net::api::fetch_profile(session));

    let name = RwSignal::new(String::new());
    let account_type = RwSignal::new(AccountType::School);
    let cgpa = RwSignal::new(String::new());
    let interests = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Seed the form once the fetch resolves.
    Effect::new(move || {
        if let Some(Some(fetched)) = profile.get() {
            name.set(fetched.name.clone());
            account_type.set(AccountType::from_tag(&fetched.account_type));
            cgpa.set(fetched.cgpa.map(|v| v.to_string()).unwrap_or_default());
            interests.set(interests_text(&fetched.interests));
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            saved.set(false);
            message.set("Enter a display name.".to_owned());
            return;
        }
        let cgpa_value = match parse_cgpa(&cgpa.get()) {
            Ok(value) => value,
            Err(e) => {
                saved.set(false);
                message.set(e.to_owned());
                return;
            }
        };
        let update = Profile {
            name: name_value,
            account_type: account_type.get().as_tag().to_owned(),
            cgpa: cgpa_value,
            interests: parse_interests(&interests.get()),
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(session, &update).await {
                Ok(stored) => {
                    // Keep the cached session fields in step with the save.
                    if let Some(record) = session.load() {
                        session.set(&Session {
                            token: record.token,
                            email: record.email,
                            display_name: stored.name.clone(),
                            account_type: AccountType::from_tag(&stored.account_type),
                        });
                    }
                    saved.set(true);
                    message.set("Profile saved.".to_owned());
                }
                Err(e) => {
                    saved.set(false);
                    message.set(e);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (update, session);
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Your profile"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|_| {
                            view! {
                                <form class="profile-form" on:submit=on_save>
                                    <label class="profile-form__label">
                                        "Display name"
                                        <input
                                            class="profile-form__input"
                                            type="text"
                                            prop:value=move || name.get()
                                            on:input=move |ev| name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <div class="profile-form__flavor">
                                        <label>
                                            <input
                                                type="radio"
                                                name="profile-account-type"
                                                checked=move || account_type.get() == AccountType::School
                                                on:change=move |_| account_type.set(AccountType::School)
                                            />
                                            "School"
                                        </label>
                                        <label>
                                            <input
                                                type="radio"
                                                name="profile-account-type"
                                                checked=move || account_type.get() == AccountType::College
                                                on:change=move |_| account_type.set(AccountType::College)
                                            />
                                            "College"
                                        </label>
                                    </div>
                                    <Show when=move || account_type.get() == AccountType::College>
                                        <label class="profile-form__label">
                                            "CGPA"
                                            <input
                                                class="profile-form__input"
                                                type="text"
                                                placeholder="e.g. 8.2"
                                                prop:value=move || cgpa.get()
                                                on:input=move |ev| cgpa.set(event_target_value(&ev))
                                            />
                                        </label>
                                    </Show>
                                    <label class="profile-form__label">
                                        "Interests (comma separated)"
                                        <input
                                            class="profile-form__input"
                                            type="text"
                                            placeholder="robotics, music, biology"
                                            prop:value=move || interests.get()
                                            on:input=move |ev| interests.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        disabled=move || busy.get()
                                    >
                                        "Save"
                                    </button>
                                </form>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || !message.get().is_empty()>
                <p class=move || {
                    if saved.get() {
                        "profile-page__message profile-page__message--ok"
                    } else {
                        "profile-page__message profile-page__message--error"
                    }
                }>{move || message.get()}</p>
            </Show>
        </div>
    }
}
