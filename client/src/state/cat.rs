//! Cat-lounge state: the current snapshot plus ephemeral bubble text.

#[cfg(test)]
#[path = "cat_test.rs"]
mod cat_test;

use crate::net::types::CatPayload;

/// State for the cat lounge page.
#[derive(Clone, Debug)]
pub struct CatState {
    /// Latest snapshot; starts as the backend's initial cat.
    pub cat: CatPayload,
    /// Conversation thread the snapshot belongs to, if any.
    pub thread_id: Option<String>,
    /// Transient speech-bubble text; cleared by a timer.
    pub speech: Option<String>,
}

impl Default for CatState {
    fn default() -> Self {
        Self {
            cat: CatPayload::initial(),
            thread_id: None,
            speech: None,
        }
    }
}
