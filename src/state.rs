// src/state.rs
// Shared application state handed to the HTTP handlers.

use std::sync::Arc;

use crate::llm::{ArtworkGenerator, TextGenerator};

pub struct AppState {
    pub text: Arc<dyn TextGenerator>,
    pub artwork: Arc<dyn ArtworkGenerator>,
}

impl AppState {
    pub fn new(text: Arc<dyn TextGenerator>, artwork: Arc<dyn ArtworkGenerator>) -> Self {
        Self { text, artwork }
    }
}
