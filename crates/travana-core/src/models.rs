//! Models
//!
//! Data structures matching the remote API's JSON.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

use crate::category::{ActivityCategory, ExpenseCategory};
use crate::entity::Entity;
use crate::validation::{self, ValidationError};

pub type TripId = String;
pub type ActivityId = String;

/// Trip as returned by `/trips`. Empty or null dates mean "unplanned".
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id")]
    pub id: TripId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub user: String,
    pub title: String,
    pub destination: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub start_date: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub end_date: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub updated_at: String,
}

impl Trip {
    pub fn dates(&self) -> Result<TripDates, ValidationError> {
        TripDates::parse(&self.start_date, &self.end_date)
    }
}

impl Entity for Trip {
    type Id = TripId;
    fn id(&self) -> &TripId {
        &self.id
    }
}

/// A trip either has no dates at all or a well-ordered range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripDates {
    Unplanned,
    Planned { start: NaiveDate, end: NaiveDate },
}

impl TripDates {
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        match (start.trim(), end.trim()) {
            ("", "") => Ok(TripDates::Unplanned),
            ("", _) | (_, "") => Err(ValidationError::DatesIncomplete),
            (start, end) => {
                let start = validation::parse_date(start)?;
                let end = validation::parse_date(end)?;
                if start > end {
                    return Err(ValidationError::DatesOutOfOrder);
                }
                Ok(TripDates::Planned { start, end })
            }
        }
    }

    /// Inclusive number of days, `None` when unplanned
    pub fn days(&self) -> Option<i64> {
        match self {
            TripDates::Unplanned => None,
            TripDates::Planned { start, end } => Some((*end - *start).num_days() + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Expense fields captured together with an activity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Activities reference their expense either by id or populated inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkedExpense {
    Id(String),
    Details(ExpenseDetails),
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: ActivityId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub trip: TripId,
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub category: ActivityCategory,
    /// ISO-8601 timestamp
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub expense: Option<LinkedExpense>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub updated_at: String,
}

impl Activity {
    pub fn scheduled_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time).ok()
    }
}

impl Entity for Activity {
    type Id = ActivityId;
    fn id(&self) -> &ActivityId {
        &self.id
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub trip: TripId,
    #[serde(default)]
    pub activity: Option<ActivityId>,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub notes: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "generatedByAI")]
    pub generated_by_ai: bool,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub trip: TripId,
    /// e.g. "packing", "task"
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "type", default)]
    pub kind: String,
    pub text: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub completed: bool,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub notes: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub trip: TripId,
    pub title: String,
    /// e.g. "food", "activity"
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub notes: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub visited: bool,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub location: String,
}

/// `/trips/:id/overview` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOverview {
    pub trip: Trip,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
    #[serde(default)]
    pub bookings: Vec<serde_json::Value>,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Geocoding candidate from `/cities`. Never persisted.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationSuggestion {
    #[serde(rename = "display_name", alias = "displayName")]
    pub display_name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lat: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lon: f64,
}

impl DestinationSuggestion {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_decodes_mongo_shape() {
        let json = r#"{
            "_id": "t1", "user": "u1", "title": "Goa Trip", "destination": "Goa",
            "description": "", "startDate": "", "endDate": "",
            "createdAt": "2025-01-01T00:00:00.000Z", "updatedAt": "2025-01-01T00:00:00.000Z", "__v": 0
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, "t1");
        assert_eq!(trip.dates().unwrap(), TripDates::Unplanned);
    }

    #[test]
    fn test_trip_null_dates_are_unplanned() {
        let json = r#"{
            "_id": "t1", "user": "u1", "title": "Goa Trip", "destination": "Goa",
            "description": null, "startDate": null, "endDate": null
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.description, "");
        assert_eq!(trip.dates(), Ok(TripDates::Unplanned));
    }

    #[test]
    fn test_trip_list_survives_one_null_dated_trip() {
        let json = r#"[
            {"_id": "t1", "title": "Goa Trip", "destination": "Goa", "startDate": null, "endDate": null},
            {"_id": "t2", "title": "Pune", "destination": "Pune", "startDate": "2025-06-01", "endDate": "2025-06-03"}
        ]"#;
        let trips: Vec<Trip> = serde_json::from_str(json).unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[1].dates().unwrap().days(), Some(3));
    }

    #[test]
    fn test_activity_null_fields_default() {
        let json = r#"{"_id":"a1","trip":"t1","name":"Dinner","category":"food","time":null,"description":null,"location":null}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.time, "");
        assert!(activity.scheduled_at().is_none());
    }

    #[test]
    fn test_trip_dates_accept_iso_timestamps() {
        let dates = TripDates::parse("2025-06-01T00:00:00.000Z", "2025-06-03").unwrap();
        assert_eq!(dates.days(), Some(3));
    }

    #[test]
    fn test_suggestion_coordinates_from_strings_or_numbers() {
        let json = r#"[
            {"display_name": "Goa, India", "lat": "15.3", "lon": "74.1"},
            {"display_name": "Panaji", "lat": 15.49, "lon": 73.82}
        ]"#;
        let list: Vec<DestinationSuggestion> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].lat, 15.3);
        assert_eq!(list[1].coordinates().lng, 73.82);
    }

    #[test]
    fn test_activity_expense_by_id_or_inline() {
        let by_id = r#"{"_id":"a1","name":"Dinner","category":"food","expense":"e1"}"#;
        let inline = r#"{"_id":"a2","name":"Dinner","category":"food","expense":{"title":"Meal","amount":40}}"#;

        let a: Activity = serde_json::from_str(by_id).unwrap();
        assert_eq!(a.expense, Some(LinkedExpense::Id("e1".into())));

        let b: Activity = serde_json::from_str(inline).unwrap();
        match b.expense {
            Some(LinkedExpense::Details(details)) => assert_eq!(details.amount, Some(40.0)),
            other => panic!("unexpected expense: {:?}", other),
        }
    }
}
