//! Single-article page, routed as `/news/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::fetch_article;
use crate::net::types::Article;
use crate::util::dark_mode;

fn article_view(article: &Article) -> impl IntoView {
    let byline = match (&article.author, &article.date) {
        (Some(author), Some(date)) => format!("{author} · {date}"),
        (Some(author), None) => author.clone(),
        (None, Some(date)) => date.clone(),
        (None, None) => String::new(),
    };
    view! {
        <article class="article-page__body">
            <h1>{article.title.clone()}</h1>
            <p class="article-page__byline">{byline}</p>
            <div class="article-page__content">
                {article
                    .content
                    .clone()
                    .or_else(|| article.summary.clone())
                    .unwrap_or_default()}
            </div>
        </article>
    }
}

/// Article detail page. Shares the news page's color scheme.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();

    Effect::new(move || {
        dark_mode::apply(dark_mode::read_preference(dark_mode::NEWS_THEME_KEY));
    });

    let article = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { fetch_article(&id).await }
    });

    view! {
        <div class="article-page">
            <a class="article-page__back" href="/news">"Back to news"</a>
            <Suspense fallback=move || view! { <p>"Loading article..."</p> }>
                {move || {
                    article.get().map(|result| match result {
                        Ok(article) => article_view(&article).into_any(),
                        Err(err) => {
                            view! {
                                <p class="article-page__error">
                                    {format!("Could not load this article: {err}")}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
