use super::*;

#[test]
fn default_cat_state_uses_initial_snapshot() {
    let state = CatState::default();
    assert_eq!(state.cat, CatPayload::initial());
    assert!(state.thread_id.is_none());
    assert!(state.speech.is_none());
}
