//! Overlay listing the user's full conversation history.

use leptos::prelude::*;

use crate::net::types::Conversation;
use crate::state::historial::HistorialState;
use crate::util::scroll_lock;

/// History modal.
///
/// Closes on the close button, a click on the backdrop, or `Escape`. Clicks
/// inside the content box stop propagating so they never reach the backdrop.
/// Page scrolling is locked while open. The modal stays mounted and is only
/// hidden, so opening it moves focus into the content to receive `Escape`.
#[component]
pub fn HistorialModal(historial: RwSignal<HistorialState>) -> impl IntoView {
    let content_ref = NodeRef::<leptos::html::Div>::new();
    let is_open = move || historial.with(|h| h.open);
    let close = move || historial.update(HistorialState::close);

    Effect::new(move || historial.with(|h| scroll_lock::set_overflow(h.overflow())));

    Effect::new(move || {
        if is_open() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(content) = content_ref.get() {
                    let _ = content.focus();
                }
            }
        }
    });

    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        let target_is_backdrop = ev.target() == ev.current_target();
        historial.update(|h| h.overlay_click(target_is_backdrop));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div id="modalHistorial" class="modal" class:hidden=move || !is_open() on:click=on_backdrop_click>
            <div
                node_ref=content_ref
                class="modal-content"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="modal-header">
                    <h2>"Historial completo"</h2>
                    <button id="cerrarModal" class="modal-close" title="Cerrar" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>
                <div id="historialContent" class="modal-body">
                    {move || {
                        let conversations = historial.with(|h| h.conversations.clone());
                        if conversations.is_empty() {
                            view! { <p class="history-empty">"Todavía no hay conversaciones guardadas."</p> }
                                .into_any()
                        } else {
                            conversations.into_iter().map(conversation_block).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn conversation_block(conversation: Conversation) -> impl IntoView {
    view! {
        <div class="history-item">
            {conversation.date.map(|date| view! { <p class="history-date">{date}</p> })}
            <p><strong>"Usuario:"</strong>" "{conversation.user}</p>
            <p><strong>"Asistente:"</strong>" "{conversation.agent}</p>
        </div>
    }
}
