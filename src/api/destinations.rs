//! Place lookup for the destination autosuggest

use travana_core::endpoints;
use travana_core::models::DestinationSuggestion;
use travana_core::thunks;

use super::ApiClient;

pub async fn fetch_suggestions(api: ApiClient, query: String) -> Result<Vec<DestinationSuggestion>, String> {
    let path = endpoints::cities(&query);
    thunks::FETCH_SUGGESTIONS
        .run(api.dispatch(), &query, api.get(&path))
        .await
}
