//! Destination autosuggest controller
//!
//! Keeps the bookkeeping for a debounced place lookup independent of any
//! timer API. Each keystroke starts a new generation, and a query scheduled
//! under an older generation must not fire. Picking a suggestion writes its
//! name back into the input; the keystroke that write produces is swallowed
//! so the chosen value is not looked up again.

use crate::config::SUGGEST_MIN_LEN;
use crate::models::DestinationSuggestion;
use crate::slices::{Action, DestinationsAction};
use crate::thunk::Dispatcher;

/// Query waiting for its debounce delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autosuggest {
    min_len: usize,
    generation: u64,
    skip_next: bool,
}

impl Default for Autosuggest {
    fn default() -> Self {
        Self::new(SUGGEST_MIN_LEN)
    }
}

impl Autosuggest {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            generation: 0,
            skip_next: false,
        }
    }

    /// Register a change of the input text.
    ///
    /// Always cancels whatever was scheduled before. Returns the query to
    /// schedule, if any.
    pub fn on_input(&mut self, text: &str) -> Option<PendingQuery> {
        self.generation += 1;
        if std::mem::take(&mut self.skip_next) {
            return None;
        }
        let query = text.trim();
        if query.chars().count() < self.min_len {
            return None;
        }
        Some(PendingQuery {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Whether `pending` may still fire once its delay elapsed
    pub fn is_current(&self, pending: &PendingQuery) -> bool {
        pending.generation == self.generation
    }

    /// Accept a suggestion: clear the list, cancel any scheduled query and
    /// swallow the input change the selection causes.
    pub fn select<D: Dispatcher + ?Sized>(
        &mut self,
        dispatcher: &D,
        suggestion: &DestinationSuggestion,
    ) -> String {
        self.generation += 1;
        self.skip_next = true;
        dispatcher.dispatch(Action::Destinations(DestinationsAction::Clear));
        suggestion.display_name.clone()
    }

    /// Input lost focus: drop the list and anything scheduled
    pub fn blur<D: Dispatcher + ?Sized>(&mut self, dispatcher: &D) {
        self.generation += 1;
        dispatcher.dispatch(Action::Destinations(DestinationsAction::Clear));
    }
}
