//! News page listing articles from the backend feed.

use leptos::prelude::*;

use crate::state::news::NewsState;
use crate::util::dark_mode;

/// News listing page with per-page theme.
#[component]
pub fn NewsPage() -> impl IntoView {
    let news = RwSignal::new(NewsState {
        loading: true,
        ..NewsState::default()
    });
    let dark = RwSignal::new(false);

    Effect::new(move || {
        let preference = dark_mode::read_preference(dark_mode::NEWS_THEME_KEY);
        dark_mode::apply(preference);
        dark.set(preference);
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_articles().await {
                Ok(articles) => news.set(NewsState {
                    articles,
                    loading: false,
                    error: None,
                }),
                Err(err) => {
                    leptos::logging::warn!("article fetch failed: {err}");
                    news.set(NewsState {
                        articles: Vec::new(),
                        loading: false,
                        error: Some("Could not load articles.".to_owned()),
                    });
                }
            }
        });
    }

    let on_toggle_theme = move |_| {
        dark.update(|value| {
            *value = dark_mode::toggle(dark_mode::NEWS_THEME_KEY, *value);
        });
    };

    let articles = move || {
        news.with(|state| {
            state
                .articles
                .iter()
                .map(|article| {
                    let href = format!("/news/{}", article.id);
                    let summary = article.summary.clone().unwrap_or_default();
                    let byline = match (&article.author, &article.date) {
                        (Some(author), Some(date)) => format!("{author} · {date}"),
                        (Some(author), None) => author.clone(),
                        (None, Some(date)) => date.clone(),
                        (None, None) => String::new(),
                    };
                    view! {
                        <a class="news-card" href=href>
                            <h2 class="news-card__title">{article.title.clone()}</h2>
                            <p class="news-card__summary">{summary}</p>
                            <span class="news-card__byline">{byline}</span>
                            <span class="news-card__category">
                                {article.category.clone().unwrap_or_default()}
                            </span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="news-page">
            <header class="news-page__header">
                <h1>"News"</h1>
                <button class="btn" on:click=on_toggle_theme>
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
            </header>

            <Show when=move || news.with(|state| state.loading)>
                <p class="news-page__status">"Loading articles..."</p>
            </Show>
            <Show when=move || news.with(|state| state.error.is_some())>
                <p class="news-page__status news-page__status--error">
                    {move || news.with(|state| state.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <main class="news-page__grid">{articles}</main>
        </div>
    }
}
