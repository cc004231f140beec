//! Answer text, cited sources and the error line for the last submission.

use leptos::prelude::*;

use crate::state::query::QueryState;

#[component]
pub fn AnswerPanel(query: RwSignal<QueryState>) -> impl IntoView {
    let error = move || query.with(|q| q.error.clone());

    view! {
        <Show when=move || error().is_some()>
            <p id="query-error" class="query-error" role="alert">
                {move || error().unwrap_or_default()}
            </p>
        </Show>
        <section
            id="results-section"
            class="results-section"
            style:display=move || if query.with(QueryState::has_answer) { "block" } else { "none" }
        >
            <h2>"Respuesta"</h2>
            <p id="answer-text" class="results-section__answer">{move || query.with(|q| q.answer.clone())}</p>
            <h3>"Fuentes"</h3>
            <ul id="sources-list" class="results-section__sources">
                {move || {
                    query.with(|q| {
                        q.sources
                            .iter()
                            .map(|doc| view! { <li>{doc.clone()}</li> })
                            .collect_view()
                    })
                }}
            </ul>
        </section>
    }
}
