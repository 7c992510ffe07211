//! Activities slice: activities of one trip.

use super::Phase;
use crate::entity::EntityMap;
use crate::models::{Activity, TripId};
use crate::request::Latest;

#[derive(Debug, Clone, PartialEq)]
pub enum ActivitiesAction {
    Fetch { trip_id: TripId, phase: Phase<Vec<Activity>> },
    Create(Phase<Activity>),
    Update(Phase<Activity>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitiesState {
    /// Trip the list belongs to
    pub trip_id: Option<TripId>,
    pub activities: EntityMap<Activity>,
    pub in_flight: u32,
    pub error: Option<String>,
    latest: Latest,
}

impl ActivitiesState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Activities of `trip_id` if that trip is the one loaded
    pub fn for_trip(&self, trip_id: &str) -> Vec<Activity> {
        match &self.trip_id {
            Some(loaded) if loaded == trip_id => self.activities.to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn reduce(mut self, action: ActivitiesAction) -> Self {
        match action {
            ActivitiesAction::Fetch { trip_id, phase } => match phase {
                Phase::Pending(id) => {
                    if self.trip_id.as_ref() != Some(&trip_id) {
                        self.activities.clear();
                        self.trip_id = Some(trip_id);
                    }
                    self.latest.begin(id);
                    self.start();
                }
                Phase::Fulfilled(id, activities) => {
                    self.finish();
                    if !self.latest.accepts(id) {
                        log::debug!("[ACTIVITIES] dropping stale list {}", id);
                        return self;
                    }
                    self.activities.replace_all(activities);
                }
                Phase::Rejected(id, message) => {
                    self.finish();
                    if self.latest.accepts(id) {
                        self.error = Some(message);
                    }
                }
            },
            ActivitiesAction::Create(phase) | ActivitiesAction::Update(phase) => match phase {
                Phase::Pending(_) => self.start(),
                Phase::Fulfilled(_, activity) => {
                    self.finish();
                    if self.owns(&activity) {
                        self.activities.upsert(activity);
                    }
                }
                Phase::Rejected(_, message) => {
                    self.finish();
                    self.error = Some(message);
                }
            },
        }
        self
    }

    fn owns(&self, activity: &Activity) -> bool {
        match &self.trip_id {
            Some(trip_id) => activity.trip.is_empty() || &activity.trip == trip_id,
            None => true,
        }
    }

    fn start(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ActivityCategory;
    use crate::request::RequestId;

    fn activity(id: &str, trip: &str, name: &str) -> Activity {
        Activity {
            id: id.into(),
            trip: trip.into(),
            name: name.into(),
            description: String::new(),
            location: "Old Goa".into(),
            coordinates: None,
            category: ActivityCategory::Sightseeing,
            time: "2025-06-01T10:00:00.000Z".into(),
            expense: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn fetch(trip_id: &str, phase: Phase<Vec<Activity>>) -> ActivitiesAction {
        ActivitiesAction::Fetch { trip_id: trip_id.into(), phase }
    }

    #[test]
    fn test_switching_trip_clears_previous_list() {
        let first = RequestId::next();
        let second = RequestId::next();
        let state = ActivitiesState::default()
            .reduce(fetch("t1", Phase::Pending(first)))
            .reduce(fetch("t1", Phase::Fulfilled(first, vec![activity("a", "t1", "Fort")])))
            .reduce(fetch("t2", Phase::Pending(second)));

        assert!(state.activities.is_empty());
        assert!(state.for_trip("t1").is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn test_late_response_for_previous_trip_is_dropped() {
        let first = RequestId::next();
        let second = RequestId::next();
        let state = ActivitiesState::default()
            .reduce(fetch("t1", Phase::Pending(first)))
            .reduce(fetch("t2", Phase::Pending(second)))
            .reduce(fetch("t2", Phase::Fulfilled(second, vec![activity("b", "t2", "Market")])))
            .reduce(fetch("t1", Phase::Fulfilled(first, vec![activity("a", "t1", "Fort")])));

        assert_eq!(state.for_trip("t2").len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_create_and_update_in_place() {
        let id = RequestId::next();
        let state = ActivitiesState::default()
            .reduce(fetch("t1", Phase::Pending(id)))
            .reduce(fetch("t1", Phase::Fulfilled(id, vec![activity("a", "t1", "Fort")])))
            .reduce(ActivitiesAction::Create(Phase::Fulfilled(id, activity("b", "t1", "Market"))))
            .reduce(ActivitiesAction::Update(Phase::Fulfilled(id, activity("a", "t1", "Fort Aguada"))))
            .reduce(ActivitiesAction::Create(Phase::Fulfilled(id, activity("c", "t9", "Elsewhere"))));

        let names: Vec<_> = state.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Fort Aguada", "Market"]);
    }
}
