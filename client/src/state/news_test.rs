use super::*;

#[test]
fn default_news_state_is_empty_and_idle() {
    let state = NewsState::default();
    assert!(state.articles.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}
