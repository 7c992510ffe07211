//! Trip commands

use travana_core::endpoints;
use travana_core::models::{Trip, TripId, TripOverview};
use travana_core::thunks;
use travana_core::validation::{AiTripRequest, NewTrip};

use super::ApiClient;

pub async fn fetch_trips(api: ApiClient) -> Result<Vec<Trip>, String> {
    thunks::FETCH_TRIPS
        .run(api.dispatch(), &(), api.get(endpoints::TRIPS))
        .await
}

pub async fn create_trip(api: ApiClient, body: NewTrip) -> Result<Trip, String> {
    thunks::CREATE_TRIP
        .run(api.dispatch(), &body, api.post(endpoints::TRIPS, &body))
        .await
}

pub async fn generate_ai_trip(api: ApiClient, body: AiTripRequest) -> Result<Trip, String> {
    thunks::GENERATE_AI_TRIP
        .run(api.dispatch(), &body, api.post(endpoints::GENERATE_TRIP, &body))
        .await
}

pub async fn fetch_trip_by_id(api: ApiClient, trip_id: TripId) -> Result<Trip, String> {
    let path = endpoints::trip(&trip_id);
    thunks::FETCH_TRIP_BY_ID
        .run(api.dispatch(), &trip_id, api.get(&path))
        .await
}

pub async fn fetch_trip_overview(api: ApiClient, trip_id: TripId) -> Result<TripOverview, String> {
    let path = endpoints::trip_overview(&trip_id);
    thunks::FETCH_TRIP_OVERVIEW
        .run(api.dispatch(), &trip_id, api.get(&path))
        .await
}

pub async fn update_trip(api: ApiClient, trip_id: TripId, body: NewTrip) -> Result<Trip, String> {
    let path = endpoints::trip(&trip_id);
    let arg = (trip_id, body);
    thunks::UPDATE_TRIP
        .run(api.dispatch(), &arg, api.put(&path, &arg.1))
        .await
}
