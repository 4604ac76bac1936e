//! Article-list state for the news guide.
//!
//! DESIGN
//! ======
//! Separating list state from the map workspace avoids coupling the two
//! pages; the list is fetched once on mount and kept as-is on failure.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use crate::net::types::Article;

/// Shared article-list state for the news page.
#[derive(Clone, Debug, Default)]
pub struct NewsState {
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
}
