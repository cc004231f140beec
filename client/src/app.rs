//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{historial::HistorialState, query::QueryState, session::SessionHistory};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page state and provides it to child components. Nothing lives in
/// module-level globals; a reload starts from fresh state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = RwSignal::new(QueryState::default());
    let session = RwSignal::new(SessionHistory::default());
    let historial = RwSignal::new(HistorialState::default());

    provide_context(query);
    provide_context(session);
    provide_context(historial);

    view! {
        <Stylesheet id="leptos" href="/pkg/asistente.css"/>
        <Title text="Asistente TEA Andalucía"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
