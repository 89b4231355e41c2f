//! AI advisor chat page.

use leptos::prelude::*;

use crate::state::chat::{ChatAuthor, ChatState};
use crate::state::session::SessionStore;
use crate::util::markdown;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the scroll to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let text = text.trim().to_owned();
        if text.is_empty() || chat.get().pending {
            return;
        }
        input.set(String::new());
        error.set(String::new());
        chat.update(|c| c.push_student(uuid::Uuid::new_v4().to_string(), text.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(session, &text).await {
                Ok(reply) => {
                    chat.update(|c| c.push_advisor(uuid::Uuid::new_v4().to_string(), reply.reply));
                }
                Err(e) => {
                    chat.update(|c| c.pending = false);
                    error.set(e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (text, session);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Ask the advisor"</h1>
            </header>

            <div class="chat-page__messages" node_ref=messages_ref>
                <For
                    each=move || chat.get().messages
                    key=|m| m.id.clone()
                    children=|m| {
                        match m.author {
                            ChatAuthor::Student => view! {
                                <div class="chat-message chat-message--student">
                                    <p>{m.content.clone()}</p>
                                </div>
                            }
                            .into_any(),
                            ChatAuthor::Advisor => view! {
                                <div
                                    class="chat-message chat-message--advisor"
                                    inner_html=markdown::render(&m.content)
                                ></div>
                            }
                            .into_any(),
                        }
                    }
                />
                <Show when=move || chat.get().pending>
                    <div class="chat-message chat-message--advisor chat-message--pending">
                        <p>"Thinking..."</p>
                    </div>
                </Show>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="chat-page__error">{move || error.get()}</p>
            </Show>

            <div class="chat-page__composer">
                <textarea
                    class="chat-page__input"
                    placeholder="Ask about courses, exams, careers..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || chat.get().pending
                    on:click=on_click
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
