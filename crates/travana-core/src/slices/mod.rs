//! State slices
//!
//! Each slice owns one piece of the client state and only changes through
//! its pure `reduce`. [`AppState`] routes the root [`Action`] to them.

pub mod activities;
pub mod destinations;
pub mod session;
pub mod trips;
pub mod ui;

pub use activities::{ActivitiesAction, ActivitiesState};
pub use destinations::{DestinationsAction, DestinationsState};
pub use session::{SessionAction, SessionState};
pub use trips::{TripsAction, TripsState};
pub use ui::{GlobalError, UiAction, UiState};

use crate::request::RequestId;

/// Outcome sequence of one async action invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending(RequestId),
    Fulfilled(RequestId, T),
    Rejected(RequestId, String),
}

impl<T> Phase<T> {
    pub fn request_id(&self) -> RequestId {
        match self {
            Phase::Pending(id) | Phase::Fulfilled(id, _) | Phase::Rejected(id, _) => *id,
        }
    }
}

/// Request status of a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Ui(UiAction),
    Session(SessionAction),
    Trips(TripsAction),
    Activities(ActivitiesAction),
    Destinations(DestinationsAction),
    /// Drop every piece of user data
    Logout,
}

/// Root client state
#[cfg_attr(feature = "reactive-store", derive(reactive_stores::Store))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub ui: UiState,
    pub session: SessionState,
    pub trips: TripsState,
    pub activities: ActivitiesState,
    pub destinations: DestinationsState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: Action) -> Self {
        let AppState {
            ui,
            session,
            mut trips,
            activities,
            destinations,
        } = self;

        match action {
            Action::Ui(action) => AppState {
                ui: ui.reduce(action),
                session,
                trips,
                activities,
                destinations,
            },
            Action::Session(action) => AppState {
                ui,
                session: session.reduce(action),
                trips,
                activities,
                destinations,
            },
            Action::Trips(action) => AppState {
                ui,
                session,
                trips: trips.reduce(action),
                activities,
                destinations,
            },
            Action::Activities(action) => {
                // Saved activities also show up in the open trip overview
                if let ActivitiesAction::Create(Phase::Fulfilled(_, activity))
                | ActivitiesAction::Update(Phase::Fulfilled(_, activity)) = &action
                {
                    trips.sync_overview_activity(activity);
                }
                AppState {
                    ui,
                    session,
                    trips,
                    activities: activities.reduce(action),
                    destinations,
                }
            }
            Action::Destinations(action) => AppState {
                ui,
                session,
                trips,
                activities,
                destinations: destinations.reduce(action),
            },
            Action::Logout => AppState {
                ui,
                session: SessionState::default(),
                trips: TripsState::default(),
                activities: ActivitiesState::default(),
                destinations: DestinationsState::default(),
            },
        }
    }

    /// In-place variant of [`AppState::reduce`] for stores that hand out `&mut`
    pub fn apply(&mut self, action: Action) {
        let state = std::mem::take(self);
        *self = state.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthResponse, Trip, User};

    fn trip(id: &str) -> Trip {
        Trip {
            id: id.to_string(),
            user: "u1".into(),
            title: format!("Trip {}", id),
            destination: "Goa".into(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_logout_clears_user_and_trips_but_keeps_loading_count() {
        let req = RequestId::next();
        let user = User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            profile_pic: None,
        };
        let state = AppState::new()
            .reduce(Action::Ui(UiAction::StartLoading))
            .reduce(Action::Session(SessionAction::Login(Phase::Fulfilled(
                req,
                AuthResponse { token: "tok".into(), user, message: None },
            ))))
            .reduce(Action::Trips(TripsAction::Fetch(Phase::Pending(req))))
            .reduce(Action::Trips(TripsAction::Fetch(Phase::Fulfilled(req, vec![trip("a")]))));
        assert!(state.session.is_authenticated());
        assert_eq!(state.trips.trips.len(), 1);

        let state = state.reduce(Action::Logout);
        assert!(!state.session.is_authenticated());
        assert!(state.trips.trips.is_empty());
        assert!(state.ui.is_loading());
    }

    #[test]
    fn test_apply_matches_reduce() {
        let mut state = AppState::new();
        state.apply(Action::Ui(UiAction::StartLoading));
        assert_eq!(state, AppState::new().reduce(Action::Ui(UiAction::StartLoading)));
    }
}
