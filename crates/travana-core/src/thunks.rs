//! Thunk table
//!
//! One [`Thunk`] per remote action, with its loading/error policy. The HTTP
//! work itself is supplied by the caller.

use crate::models::{
    Activity, ActivityId, AuthResponse, DestinationSuggestion, LoginRequest, RegisterRequest, Trip, TripId,
    TripOverview, User,
};
use crate::slices::{
    Action, ActivitiesAction, DestinationsAction, Phase, SessionAction, TripsAction,
};
use crate::thunk::{Thunk, ThunkOptions};
use crate::validation::{ActivityDraft, AiTripRequest, NewTrip};

const NO_POPUP: ThunkOptions = ThunkOptions {
    show_error_popup: false,
    ..ThunkOptions::DEFAULT
};

const BLOCKING: ThunkOptions = ThunkOptions {
    show_close_button: false,
    ..ThunkOptions::DEFAULT
};

const SILENT: ThunkOptions = ThunkOptions {
    show_loading: false,
    show_error_popup: false,
    show_close_button: true,
};

// ========================
// Auth
// ========================

pub static LOGIN: Thunk<LoginRequest, AuthResponse> = Thunk::new("auth/login", NO_POPUP, |_, phase| {
    Action::Session(SessionAction::Login(phase))
});

pub static REGISTER: Thunk<RegisterRequest, AuthResponse> = Thunk::new("auth/register", NO_POPUP, |_, phase| {
    Action::Session(SessionAction::Register(phase))
});

pub static FETCH_CURRENT_USER: Thunk<(), User> = Thunk::new(
    "auth/fetchCurrentUser",
    ThunkOptions::DEFAULT,
    |_, phase| Action::Session(SessionAction::FetchCurrentUser(phase)),
);

// ========================
// Trips
// ========================

pub static FETCH_TRIPS: Thunk<(), Vec<Trip>> = Thunk::new("trips/fetchTrips", BLOCKING, |_, phase| {
    Action::Trips(TripsAction::Fetch(phase))
});

pub static GENERATE_AI_TRIP: Thunk<AiTripRequest, Trip> = Thunk::new(
    "trips/generateAITrip",
    ThunkOptions::DEFAULT,
    |_, phase| Action::Trips(TripsAction::GenerateAi(phase)),
);

pub static CREATE_TRIP: Thunk<NewTrip, Trip> = Thunk::new("trips/createTrip", ThunkOptions::DEFAULT, |_, phase| {
    Action::Trips(TripsAction::Create(phase))
});

pub static FETCH_TRIP_BY_ID: Thunk<TripId, Trip> = Thunk::new("trips/fetchTripById", BLOCKING, |_, phase| {
    Action::Trips(TripsAction::FetchById(phase))
});

pub static FETCH_TRIP_OVERVIEW: Thunk<TripId, TripOverview> =
    Thunk::new("trips/fetchTripOverview", BLOCKING, |_, phase| {
        Action::Trips(TripsAction::FetchOverview(phase))
    });

pub static UPDATE_TRIP: Thunk<(TripId, NewTrip), Trip> = Thunk::new(
    "trips/updateTrip",
    ThunkOptions::DEFAULT,
    |_, phase| Action::Trips(TripsAction::Update(phase)),
);

// ========================
// Activities
// ========================

fn settle_fetch_activities(trip_id: &TripId, phase: Phase<Vec<Activity>>) -> Action {
    Action::Activities(ActivitiesAction::Fetch {
        trip_id: trip_id.clone(),
        phase,
    })
}

pub static FETCH_ACTIVITIES: Thunk<TripId, Vec<Activity>> = Thunk::new(
    "activities/fetchActivities",
    ThunkOptions::DEFAULT,
    settle_fetch_activities,
);

pub static CREATE_ACTIVITY: Thunk<(TripId, ActivityDraft), Activity> = Thunk::new(
    "activities/createActivity",
    ThunkOptions::DEFAULT,
    |_, phase| Action::Activities(ActivitiesAction::Create(phase)),
);

pub static UPDATE_ACTIVITY: Thunk<(TripId, ActivityId, ActivityDraft), Activity> = Thunk::new(
    "activities/updateActivity",
    ThunkOptions::DEFAULT,
    |_, phase| Action::Activities(ActivitiesAction::Update(phase)),
);

// ========================
// Destinations
// ========================

/// Autosuggest failures stay silent
pub static FETCH_SUGGESTIONS: Thunk<String, Vec<DestinationSuggestion>> =
    Thunk::new("destination/fetchSuggestions", SILENT, |_, phase| {
        Action::Destinations(DestinationsAction::Fetch(phase))
    });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::slices::UiAction;
    use crate::thunk::Recorder;
    use crate::validation::TripForm;

    fn echo(body: &NewTrip) -> Trip {
        Trip {
            id: "t-goa".into(),
            user: "u1".into(),
            title: body.title.clone(),
            destination: body.destination.clone(),
            description: body.description.clone(),
            start_date: body.start_date.clone(),
            end_date: body.end_date.clone(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_unplanned_goa_trip() {
        let recorder = Recorder::default();
        let form = TripForm {
            title: "Goa Trip".into(),
            destination: "Goa".into(),
            ..TripForm::default()
        };
        let body = form.validate().expect("valid form");

        let created = CREATE_TRIP
            .run(&recorder, &body, async { Ok(echo(&body)) })
            .await
            .unwrap();

        assert_eq!(created.start_date, "");
        assert_eq!(created.end_date, "");
        let state = recorder.state();
        assert_eq!(state.trips.find("t-goa").map(|t| t.title.as_str()), Some("Goa Trip"));
        assert!(!state.ui.is_loading());
    }

    #[tokio::test]
    async fn test_login_failure_stays_local() {
        let recorder = Recorder::default();
        let body = LoginRequest {
            email: "asha@example.com".into(),
            password: "nope".into(),
        };
        let err = ApiError::Server {
            status: 400,
            message: Some("Invalid credentials".into()),
        };

        let result = LOGIN.run(&recorder, &body, async { Err(err) }).await;

        assert_eq!(result, Err("Invalid credentials".to_string()));
        let state = recorder.state();
        assert!(state.ui.error.is_none());
        assert_eq!(state.session.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_fetch_trips_error_is_not_dismissible() {
        let recorder = Recorder::default();
        let _ = FETCH_TRIPS
            .run(&recorder, &(), async { Err(ApiError::Server { status: 500, message: None }) })
            .await;

        let error = recorder.state().ui.error.expect("global error");
        assert!(!error.show_close_button);
    }

    #[tokio::test]
    async fn test_suggestions_never_touch_global_ui() {
        let recorder = Recorder::default();
        let _ = FETCH_SUGGESTIONS
            .run(&recorder, &"Go".to_string(), async { Err(ApiError::Network("offline".into())) })
            .await;

        assert!(recorder
            .actions()
            .iter()
            .all(|a| !matches!(a, Action::Ui(_))));
        assert_eq!(recorder.state().destinations.error.as_deref(), Some("offline"));
    }

    #[tokio::test]
    async fn test_fetch_activities_tags_trip() {
        let recorder = Recorder::default();
        let _ = FETCH_ACTIVITIES
            .run(&recorder, &"t1".to_string(), async { Ok(vec![]) })
            .await;

        assert_eq!(recorder.state().activities.trip_id.as_deref(), Some("t1"));
        assert!(recorder
            .actions()
            .iter()
            .any(|a| matches!(a, Action::Ui(UiAction::StartLoading))));
    }
}
