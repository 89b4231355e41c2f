//! Signup page: login fields plus display name and account flavor.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::session::{AccountType, SessionStore};

/// Trim and require every field before hitting the network.
fn validate_signup_input(
    email: &str,
    password: &str,
    name: &str,
) -> Result<(String, String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    let name = name.trim();
    if email.is_empty() || name.is_empty() {
        return Err("Enter your name and email.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok((email.to_owned(), password.to_owned(), name.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let account_type = RwSignal::new(AccountType::School);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, name_value) =
            match validate_signup_input(&email.get(), &password.get(), &name.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let tag = account_type.get().as_tag();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&email_value, &password_value, &name_value, tag)
                    .await
                {
                    Ok(resp) => {
                        session.set(&crate::pages::login::session_from_login(&resp));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => {
                        error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, name_value, session);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join Compass"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="login-flavor">
                        <label class="login-flavor__option">
                            <input
                                type="radio"
                                name="account-type"
                                checked=move || account_type.get() == AccountType::School
                                on:change=move |_| account_type.set(AccountType::School)
                            />
                            "School student"
                        </label>
                        <label class="login-flavor__option">
                            <input
                                type="radio"
                                name="account-type"
                                checked=move || account_type.get() == AccountType::College
                                on:change=move |_| account_type.set(AccountType::College)
                            />
                            "College student"
                        </label>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
