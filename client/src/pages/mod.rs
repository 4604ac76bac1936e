//! Routed pages.

pub mod article;
pub mod cat;
pub mod metro;
pub mod news;
