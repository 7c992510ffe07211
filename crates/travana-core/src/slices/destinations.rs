//! Destinations slice: ephemeral autosuggest candidates.

use super::Phase;
use crate::models::DestinationSuggestion;
use crate::request::Latest;

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationsAction {
    Fetch(Phase<Vec<DestinationSuggestion>>),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationsState {
    pub suggestions: Vec<DestinationSuggestion>,
    pub loading: bool,
    pub error: Option<String>,
    latest: Latest,
}

impl DestinationsState {
    pub fn reduce(mut self, action: DestinationsAction) -> Self {
        match action {
            DestinationsAction::Fetch(phase) => match phase {
                Phase::Pending(id) => {
                    self.latest.begin(id);
                    self.loading = true;
                    self.error = None;
                }
                Phase::Fulfilled(id, suggestions) => {
                    if self.latest.accepts(id) {
                        self.loading = false;
                        self.suggestions = suggestions;
                    }
                }
                Phase::Rejected(id, message) => {
                    if self.latest.accepts(id) {
                        self.loading = false;
                        self.error = Some(message);
                        self.suggestions.clear();
                    }
                }
            },
            DestinationsAction::Clear => {
                self.latest.invalidate();
                self.loading = false;
                self.suggestions.clear();
            }
        }
        self
    }
}
