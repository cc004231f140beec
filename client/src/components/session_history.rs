//! Recent questions of this page session.

use leptos::prelude::*;

use crate::state::session::SessionHistory;

/// Fully re-renders the list on every change; hidden until the first entry.
#[component]
pub fn SessionHistoryPanel(session: RwSignal<SessionHistory>) -> impl IntoView {
    view! {
        <section
            id="history-section"
            class="history-section"
            style:display=move || if session.with(SessionHistory::is_visible) { "block" } else { "none" }
        >
            <h2>"Preguntas recientes"</h2>
            <div id="history-list" class="history-list">
                {move || {
                    session.with(|s| {
                        s.entries()
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="history-item">
                                        <div class="history-question">{entry.question.clone()}</div>
                                        <div class="history-answer">{entry.answer.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}
