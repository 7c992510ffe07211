//! Activity commands

use travana_core::endpoints;
use travana_core::models::{Activity, ActivityId, TripId};
use travana_core::thunks;
use travana_core::validation::ActivityDraft;

use super::ApiClient;

pub async fn fetch_activities(api: ApiClient, trip_id: TripId) -> Result<Vec<Activity>, String> {
    let path = endpoints::activities(&trip_id);
    thunks::FETCH_ACTIVITIES
        .run(api.dispatch(), &trip_id, api.get(&path))
        .await
}

pub async fn create_activity(
    api: ApiClient,
    trip_id: TripId,
    draft: ActivityDraft,
) -> Result<Activity, String> {
    let path = endpoints::activities(&trip_id);
    let arg = (trip_id, draft);
    thunks::CREATE_ACTIVITY
        .run(api.dispatch(), &arg, api.post(&path, &arg.1))
        .await
}

pub async fn update_activity(
    api: ApiClient,
    trip_id: TripId,
    activity_id: ActivityId,
    draft: ActivityDraft,
) -> Result<Activity, String> {
    let path = endpoints::activity(&trip_id, &activity_id);
    let arg = (trip_id, activity_id, draft);
    thunks::UPDATE_ACTIVITY
        .run(api.dispatch(), &arg, api.put(&path, &arg.2))
        .await
}
