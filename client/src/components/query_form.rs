//! Question input form.

use leptos::prelude::*;

use crate::state::query::QueryState;

/// Text input and submit button.
///
/// The button is disabled and carries the `loading` class while a request is
/// outstanding.
#[component]
pub fn QueryForm(input: RwSignal<String>, query: RwSignal<QueryState>, on_submit: Callback<()>) -> impl IntoView {
    let busy = move || query.with(QueryState::is_busy);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form id="query-form" class="query-form" on:submit=on_form_submit>
            <input
                id="question-input"
                class="query-form__input"
                type="text"
                autocomplete="off"
                placeholder="Escribe tu pregunta sobre trámites..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button
                id="submit-btn"
                class="query-form__submit"
                class:loading=busy
                type="submit"
                disabled=busy
            >
                {move || if busy() { "Consultando..." } else { "Preguntar" }}
            </button>
        </form>
    }
}
