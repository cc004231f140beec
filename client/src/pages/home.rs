//! Question-answering page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Submitting the form calls `POST /api/query` and, on
//! success, feeds the session history. The history button independently
//! calls `GET /api/historial` and opens the modal. Both flows only touch the
//! state signals provided by `App`.

use leptos::prelude::*;

use crate::components::answer_panel::AnswerPanel;
use crate::components::historial_modal::HistorialModal;
use crate::components::query_form::QueryForm;
use crate::components::session_history::SessionHistoryPanel;
use crate::state::historial::HistorialState;
use crate::state::query::QueryState;
use crate::state::session::SessionHistory;

#[component]
pub fn HomePage() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let session = expect_context::<RwSignal<SessionHistory>>();
    let historial = expect_context::<RwSignal<HistorialState>>();
    let input = RwSignal::new(String::new());

    let on_submit = Callback::new(move |()| {
        let raw = input.get_untracked();
        let mut accepted = None;
        query.update(|q| accepted = q.begin(&raw));
        if let Some(question) = accepted {
            send_query(query, session, question);
        }
    });

    let on_open_historial = move |_| load_historial(historial);

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Asistente TEA Andalucía"</h1>
                <p class="page__subtitle">
                    "Consulta trámites y ayudas para familias con miembros con autismo."
                </p>
                <button id="btnHistorial" class="page__historial-btn" type="button" on:click=on_open_historial>
                    "Ver historial completo"
                </button>
                <Show when=move || historial.with(|h| h.error.is_some())>
                    <p class="page__notice" role="status">
                        {move || historial.with(|h| h.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </header>

            <main class="page__main">
                <QueryForm input=input query=query on_submit=on_submit/>
                <AnswerPanel query=query/>
                <SessionHistoryPanel session=session/>
            </main>

            <HistorialModal historial=historial/>
        </div>
    }
}

/// Run one query request and settle the form state with its outcome.
fn send_query(query: RwSignal<QueryState>, session: RwSignal<SessionHistory>, question: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::submit_query(&question).await;
        if let Err(e) = &result {
            log::warn!("query failed: {e}");
        }
        let mut entry = None;
        query.update(|q| entry = q.finish(&question, result));
        if let Some(entry) = entry {
            session.update(|s| s.push(entry));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, session, question);
    }
}

/// Fetch the fixed user's history and open the modal with it.
fn load_historial(historial: RwSignal<HistorialState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_historial(wire::DEFAULT_USER_ID).await;
        if let Err(e) = &result {
            log::warn!("historial fetch failed: {e}");
        }
        historial.update(|h| h.apply(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = historial;
    }
}
