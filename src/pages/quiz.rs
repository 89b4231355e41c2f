//! Career quiz page: generate questions, answer, submit for guidance.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use leptos::prelude::*;

use crate::net::types::QuizResult;
use crate::state::quiz::QuizState;
use crate::state::session::SessionStore;
use crate::util::markdown;

fn score_line(result: &QuizResult) -> String {
    format!("You scored {} of {}", result.score, result.total)
}

/// Topic must be non-empty after trimming.
fn validate_topic(topic: &str) -> Result<String, &'static str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err("Enter a topic first.");
    }
    Ok(topic.to_owned())
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let quiz = expect_context::<RwSignal<QuizState>>();

    let topic = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let topic_value = match validate_topic(&topic.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_quiz(session, &topic_value).await {
                Ok(questions) => quiz.update(|q| q.start(questions)),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (topic_value, session);
    };

    let on_submit = move |_| {
        if busy.get() || !quiz.get().is_complete() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let answers = quiz.get_untracked().to_answers();
            match crate::net::api::submit_quiz(session, &answers).await {
                Ok(result) => quiz.update(|q| q.result = Some(result)),
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    view! {
        <div class="quiz-page">
            <header class="quiz-page__header">
                <h1>"Career quiz"</h1>
            </header>

            <form class="quiz-page__setup" on:submit=on_generate>
                <input
                    class="quiz-page__topic"
                    type="text"
                    placeholder="Topic, e.g. engineering, design, medicine"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Generate quiz"
                </button>
            </form>

            <Show when=move || !error.get().is_empty()>
                <p class="quiz-page__message quiz-page__message--error">{move || error.get()}</p>
            </Show>

            <div class="quiz-page__questions">
                <For
                    each=move || quiz.get().questions
                    key=|q| q.id.clone()
                    children=move |q| {
                        let question_id = q.id.clone();
                        view! {
                            <div class="quiz-question">
                                <p class="quiz-question__prompt">{q.prompt.clone()}</p>
                                <div class="quiz-question__options">
                                    {q
                                        .options
                                        .iter()
                                        .enumerate()
                                        .map(|(index, option)| {
                                            let question_id = question_id.clone();
                                            let selected_class = {
                                                let question_id = question_id.clone();
                                                move || {
                                                    if quiz.get().selections.get(&question_id)
                                                        == Some(&index)
                                                    {
                                                        "quiz-option quiz-option--selected"
                                                    } else {
                                                        "quiz-option"
                                                    }
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=selected_class
                                                    on:click=move |_| {
                                                        quiz.update(|q| q.select(&question_id, index));
                                                    }
                                                >
                                                    {option.clone()}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !quiz.get().questions.is_empty() && quiz.get().result.is_none()>
                <button
                    class="btn btn--primary quiz-page__submit"
                    disabled=move || busy.get() || !quiz.get().is_complete()
                    on:click=on_submit
                >
                    "Submit answers"
                </button>
            </Show>

            <Show when=move || quiz.get().result.is_some()>
                {move || {
                    quiz.get()
                        .result
                        .map(|result| {
                            view! {
                                <div class="quiz-result">
                                    <h2>{score_line(&result)}</h2>
                                    <div
                                        class="quiz-result__guidance"
                                        inner_html=markdown::render(&result.guidance)
                                    ></div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
