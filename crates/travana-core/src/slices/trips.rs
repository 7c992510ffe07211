//! Trips slice: the user's trips plus the overview of the open trip.

use super::{Phase, Status};
use crate::entity::EntityMap;
use crate::models::{Activity, Trip, TripOverview};
use crate::request::Latest;

#[derive(Debug, Clone, PartialEq)]
pub enum TripsAction {
    Fetch(Phase<Vec<Trip>>),
    GenerateAi(Phase<Trip>),
    Create(Phase<Trip>),
    FetchById(Phase<Trip>),
    FetchOverview(Phase<TripOverview>),
    Update(Phase<Trip>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripsState {
    pub trips: EntityMap<Trip>,
    pub overview: Option<TripOverview>,
    pub status: Status,
    pub error: Option<String>,
    latest_list: Latest,
    latest_overview: Latest,
}

impl TripsState {
    pub fn reduce(mut self, action: TripsAction) -> Self {
        match action {
            TripsAction::Fetch(phase) => match phase {
                Phase::Pending(id) => {
                    self.latest_list.begin(id);
                    self.begin();
                }
                Phase::Fulfilled(id, trips) => {
                    if !self.latest_list.accepts(id) {
                        log::debug!("[TRIPS] dropping stale trip list {}", id);
                        return self;
                    }
                    self.status = Status::Succeeded;
                    self.trips.replace_all(trips);
                }
                Phase::Rejected(id, message) => {
                    if self.latest_list.accepts(id) {
                        self.fail(message);
                    }
                }
            },
            // The generated trip is picked up by the follow-up fetch
            TripsAction::GenerateAi(phase) => self.track(phase, |_, _| {}),
            TripsAction::Create(phase) => self.track(phase, |state, trip| state.trips.upsert(trip)),
            TripsAction::FetchById(phase) => self.track(phase, |state, trip| state.trips.upsert(trip)),
            TripsAction::FetchOverview(phase) => match phase {
                Phase::Pending(id) => {
                    self.latest_overview.begin(id);
                    self.begin();
                }
                Phase::Fulfilled(id, overview) => {
                    if !self.latest_overview.accepts(id) {
                        log::debug!("[TRIPS] dropping stale overview {}", id);
                        return self;
                    }
                    self.status = Status::Succeeded;
                    self.overview = Some(overview);
                }
                Phase::Rejected(id, message) => {
                    if self.latest_overview.accepts(id) {
                        self.fail(message);
                    }
                }
            },
            TripsAction::Update(phase) => match phase {
                Phase::Pending(_) => {}
                Phase::Fulfilled(_, trip) => {
                    if let Some(overview) = self.overview.as_mut().filter(|o| o.trip.id == trip.id) {
                        overview.trip = trip.clone();
                    }
                    self.trips.update(trip);
                }
                Phase::Rejected(_, message) => self.error = Some(message),
            },
        }
        self
    }

    /// Trip by id from the list, falling back to the open overview
    pub fn find(&self, id: &str) -> Option<&Trip> {
        self.trips
            .get(&id.to_string())
            .or_else(|| self.overview.as_ref().map(|o| &o.trip).filter(|t| t.id == id))
    }

    /// Overview for `trip_id`, if that is the one currently loaded
    pub fn overview_for(&self, trip_id: &str) -> Option<&TripOverview> {
        self.overview.as_ref().filter(|o| o.trip.id == trip_id)
    }

    pub(crate) fn sync_overview_activity(&mut self, activity: &Activity) {
        let Some(overview) = self.overview.as_mut() else {
            return;
        };
        if !activity.trip.is_empty() && activity.trip != overview.trip.id {
            return;
        }
        match overview.activities.iter_mut().find(|a| a.id == activity.id) {
            Some(existing) => *existing = activity.clone(),
            None => overview.activities.push(activity.clone()),
        }
    }

    fn begin(&mut self) {
        self.status = Status::Loading;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.status = Status::Failed;
        self.error = Some(message);
    }

    fn track(&mut self, phase: Phase<Trip>, on_trip: impl FnOnce(&mut Self, Trip)) {
        match phase {
            Phase::Pending(_) => self.begin(),
            Phase::Fulfilled(_, trip) => {
                self.status = Status::Succeeded;
                on_trip(self, trip);
            }
            Phase::Rejected(_, message) => self.fail(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ActivityCategory;
    use crate::request::RequestId;

    fn trip(id: &str, title: &str) -> Trip {
        Trip {
            id: id.to_string(),
            user: "u1".into(),
            title: title.to_string(),
            destination: "Goa".into(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn overview(trip: Trip) -> TripOverview {
        TripOverview {
            trip,
            activities: vec![],
            expenses: vec![],
            wishlist: vec![],
            bookings: vec![],
            checklist_items: vec![],
        }
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let slow = RequestId::next();
        let fast = RequestId::next();

        let state = TripsState::default()
            .reduce(TripsAction::Fetch(Phase::Pending(slow)))
            .reduce(TripsAction::Fetch(Phase::Pending(fast)))
            .reduce(TripsAction::Fetch(Phase::Fulfilled(fast, vec![trip("new", "Fresh")])))
            .reduce(TripsAction::Fetch(Phase::Fulfilled(slow, vec![trip("old", "Stale")])));

        assert_eq!(state.trips.len(), 1);
        assert!(state.find("new").is_some());
        assert!(state.find("old").is_none());
    }

    #[test]
    fn test_create_appends_and_fetch_by_id_upserts() {
        let id = RequestId::next();
        let state = TripsState::default()
            .reduce(TripsAction::Create(Phase::Fulfilled(id, trip("a", "Goa Trip"))))
            .reduce(TripsAction::FetchById(Phase::Fulfilled(id, trip("a", "Goa Trip v2"))))
            .reduce(TripsAction::FetchById(Phase::Fulfilled(id, trip("b", "Pune"))));

        let titles: Vec<_> = state.trips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Goa Trip v2", "Pune"]);
    }

    #[test]
    fn test_update_touches_list_and_overview() {
        let id = RequestId::next();
        let state = TripsState::default()
            .reduce(TripsAction::Fetch(Phase::Pending(id)))
            .reduce(TripsAction::Fetch(Phase::Fulfilled(id, vec![trip("a", "Before")])))
            .reduce(TripsAction::FetchOverview(Phase::Pending(id)))
            .reduce(TripsAction::FetchOverview(Phase::Fulfilled(id, overview(trip("a", "Before")))))
            .reduce(TripsAction::Update(Phase::Fulfilled(id, trip("a", "After"))));

        assert_eq!(state.find("a").map(|t| t.title.as_str()), Some("After"));
        assert_eq!(state.overview_for("a").map(|o| o.trip.title.as_str()), Some("After"));
    }

    #[test]
    fn test_rejection_records_message() {
        let id = RequestId::next();
        let state = TripsState::default()
            .reduce(TripsAction::Create(Phase::Pending(id)))
            .reduce(TripsAction::Create(Phase::Rejected(id, "Title is required".into())));

        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.error.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_sync_overview_activity_inserts_and_replaces() {
        let id = RequestId::next();
        let mut state = TripsState::default()
            .reduce(TripsAction::FetchOverview(Phase::Pending(id)))
            .reduce(TripsAction::FetchOverview(Phase::Fulfilled(id, overview(trip("a", "Goa")))));

        let mut activity = Activity {
            id: "act1".into(),
            trip: "a".into(),
            name: "Beach".into(),
            description: String::new(),
            location: "Baga".into(),
            coordinates: None,
            category: ActivityCategory::Sightseeing,
            time: String::new(),
            expense: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        state.sync_overview_activity(&activity);
        activity.name = "Sunset at the beach".into();
        state.sync_overview_activity(&activity);

        let activities = &state.overview_for("a").unwrap().activities;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Sunset at the beach");
    }
}
