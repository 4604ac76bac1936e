//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{article::ArticlePage, cat::CatPage, metro::MetroPage, news::NewsPage};
use crate::state::{cat::CatState, map::MapState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let map = RwSignal::new(MapState::default());
    let ui = RwSignal::new(UiState::default());
    let cat = RwSignal::new(CatState::default());

    provide_context(map);
    provide_context(ui);
    provide_context(cat);

    view! {
        <Stylesheet id="leptos" href="/pkg/metro-ui.css"/>
        <Title text="Metro Map"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MetroPage/>
                <Route path=StaticSegment("news") view=NewsPage/>
                <Route path=(StaticSegment("news"), ParamSegment("id")) view=ArticlePage/>
                <Route path=StaticSegment("cat") view=CatPage/>
            </Routes>
        </Router>
    }
}
