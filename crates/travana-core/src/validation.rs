//! Form rules
//!
//! Forms are validated locally; only a valid form produces the request
//! payload, so invalid input never reaches the network.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::category::{ActivityCategory, ExpenseCategory};
use crate::config::MAX_AI_TRIP_DAYS;
use crate::models::{
    Activity, Coordinates, ExpenseDetails, LinkedExpense, LoginRequest, RegisterRequest, Trip, TripDates,
};

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 300;
const PLACE_MIN: usize = 2;
const NAME_MIN: usize = 2;
const PASSWORD_MIN: usize = 3;
const DEFAULT_ACTIVITY_TIME: &str = "12:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Must be at most {max} characters")]
    TooLong { max: usize },
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid time, expected HH:MM")]
    InvalidTime,
    #[error("Start and end dates must both be filled and valid")]
    DatesIncomplete,
    #[error("Start date must be on or before the end date")]
    DatesOutOfOrder,
    #[error("Please select a valid start and end date for your trip")]
    DatesRequired,
    #[error("Trip duration cannot exceed {max} days (selected {days})")]
    MaxDurationExceeded { max: i64, days: i64 },
    #[error("Choose one of the listed categories")]
    UnknownCategory,
    #[error("Amount is required when adding an expense")]
    AmountRequired,
    #[error("Amount must be a non-negative number")]
    InvalidAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Origin,
    Destination,
    StartDate,
    EndDate,
    Name,
    Email,
    Password,
    Location,
    Category,
    Date,
    Time,
    ExpenseAmount,
    ExpenseCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

/// Every problem found in one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn push(&mut self, field: Field, error: ValidationError) {
        self.0.push(FieldError { field, error });
    }

    fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.push(field, error);
        }
    }

    /// First error reported for `field`
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field).map(|e| &e.error)
    }

    /// Message for `field`, empty when valid. Handy for views.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.error.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// `YYYY-MM-DD`, or a full RFC 3339 timestamp as the API returns them
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

fn length(field_value: &str, min: usize, max: Option<usize>) -> Result<(), ValidationError> {
    let len = field_value.trim().chars().count();
    if len < min {
        return Err(if len == 0 && min > 0 {
            ValidationError::Required
        } else {
            ValidationError::TooShort { min }
        });
    }
    match max {
        Some(max) if len > max => Err(ValidationError::TooLong { max }),
        _ => Ok(()),
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

fn email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn format_dates(dates: TripDates) -> (String, String) {
    match dates {
        TripDates::Unplanned => (String::new(), String::new()),
        TripDates::Planned { start, end } => (start.to_string(), end.to_string()),
    }
}

// ========================
// Trips
// ========================

/// Body of `POST /trips` and `PUT /trips/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub title: String,
    pub description: String,
    pub destination: String,
    /// Empty when the trip is unplanned
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub title: String,
    pub description: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
}

impl TripForm {
    pub fn from_trip(trip: &Trip) -> Self {
        let (start_date, end_date) = trip
            .dates()
            .map(format_dates)
            .unwrap_or_else(|_| (trip.start_date.clone(), trip.end_date.clone()));
        Self {
            title: trip.title.clone(),
            description: trip.description.clone(),
            destination: trip.destination.clone(),
            start_date,
            end_date,
        }
    }

    /// Rules of the create form
    pub fn validate(&self) -> Result<NewTrip, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Title, length(&self.title, TITLE_MIN, Some(TITLE_MAX)));
        errors.check(Field::Description, length(&self.description, 0, Some(DESCRIPTION_MAX)));
        errors.check(Field::Destination, length(&self.destination, PLACE_MIN, None));
        self.finish(errors)
    }

    /// Rules of the edit form: title and destination just need a value
    pub fn validate_update(&self) -> Result<NewTrip, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Title, required(&self.title));
        errors.check(Field::Destination, required(&self.destination));
        errors.check(Field::Description, length(&self.description, 0, Some(DESCRIPTION_MAX)));
        self.finish(errors)
    }

    fn finish(&self, mut errors: FormErrors) -> Result<NewTrip, FormErrors> {
        let dates = TripDates::parse(&self.start_date, &self.end_date);
        if let Err(error) = &dates {
            errors.push(Field::EndDate, error.clone());
        }
        errors.into_result(|| {
            let (start_date, end_date) = dates.map(format_dates).unwrap_or_default();
            NewTrip {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                destination: self.destination.trim().to_string(),
                start_date,
                end_date,
            }
        })
    }
}

/// Body of `POST /ai/generate-trip`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTripRequest {
    pub title: String,
    pub description: String,
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiTripForm {
    pub title: String,
    pub description: String,
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
}

impl AiTripForm {
    pub fn validate(&self) -> Result<AiTripRequest, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Title, length(&self.title, TITLE_MIN, Some(TITLE_MAX)));
        errors.check(Field::Description, length(&self.description, 0, Some(DESCRIPTION_MAX)));
        errors.check(Field::Origin, length(&self.origin, PLACE_MIN, None));
        errors.check(Field::Destination, length(&self.destination, PLACE_MIN, None));

        let dates = match TripDates::parse(&self.start_date, &self.end_date) {
            Ok(TripDates::Unplanned) | Err(ValidationError::DatesIncomplete) => {
                Err(ValidationError::DatesRequired)
            }
            Ok(planned) => match planned.days() {
                Some(days) if days > MAX_AI_TRIP_DAYS => Err(ValidationError::MaxDurationExceeded {
                    max: MAX_AI_TRIP_DAYS,
                    days,
                }),
                _ => Ok(planned),
            },
            Err(other) => Err(other),
        };
        if let Err(error) = &dates {
            errors.push(Field::EndDate, error.clone());
        }

        errors.into_result(|| {
            let (start_date, end_date) = dates.map(format_dates).unwrap_or_default();
            AiTripRequest {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                origin: self.origin.trim().to_string(),
                destination: self.destination.trim().to_string(),
                start_date,
                end_date,
            }
        })
    }
}

// ========================
// Activities
// ========================

/// Body of `POST /trips/:id/activities` and the matching `PUT`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub category: ActivityCategory,
    /// RFC 3339, UTC
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<ExpenseDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub name: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub show_expense: bool,
    pub expense_title: String,
    pub expense_amount: String,
    pub expense_category: String,
    pub expense_notes: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location: String::new(),
            coordinates: None,
            category: String::new(),
            date: String::new(),
            time: DEFAULT_ACTIVITY_TIME.to_string(),
            show_expense: false,
            expense_title: String::new(),
            expense_amount: String::new(),
            expense_category: String::new(),
            expense_notes: String::new(),
        }
    }
}

impl ActivityForm {
    /// Prefill for editing
    pub fn from_activity(activity: &Activity) -> Self {
        let mut form = Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            location: activity.location.clone(),
            coordinates: activity.coordinates,
            category: activity.category.as_str().to_string(),
            ..Self::default()
        };
        if let Some(at) = activity.scheduled_at() {
            let at = at.with_timezone(&Utc);
            form.date = at.format("%Y-%m-%d").to_string();
            form.time = at.format("%H:%M").to_string();
        }
        if let Some(LinkedExpense::Details(expense)) = &activity.expense {
            form.show_expense = true;
            form.expense_title = expense.title.clone().unwrap_or_default();
            form.expense_amount = expense.amount.map(|a| a.to_string()).unwrap_or_default();
            form.expense_category = expense.category.map(|c| c.as_str().to_string()).unwrap_or_default();
            form.expense_notes = expense.notes.clone().unwrap_or_default();
        }
        form
    }

    pub fn validate(&self) -> Result<ActivityDraft, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Name, required(&self.name));
        errors.check(Field::Location, required(&self.location));

        let category = ActivityCategory::parse(&self.category);
        if category.is_none() {
            errors.push(
                Field::Category,
                if self.category.trim().is_empty() {
                    ValidationError::Required
                } else {
                    ValidationError::UnknownCategory
                },
            );
        }

        let date = if self.date.trim().is_empty() {
            errors.push(Field::Date, ValidationError::Required);
            None
        } else {
            parse_date(&self.date).map_err(|e| errors.push(Field::Date, e)).ok()
        };
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| errors.push(Field::Time, ValidationError::InvalidTime))
            .ok();

        let expense = if self.show_expense { self.expense(&mut errors) } else { None };

        match (category, date, time) {
            (Some(category), Some(date), Some(time)) if errors.is_empty() => Ok(ActivityDraft {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                location: self.location.trim().to_string(),
                coordinates: self.coordinates,
                category,
                time: NaiveDateTime::new(date, time)
                    .and_utc()
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                expense,
            }),
            _ => Err(errors),
        }
    }

    fn expense(&self, errors: &mut FormErrors) -> Option<ExpenseDetails> {
        let text = |v: &str| Some(v.trim().to_string()).filter(|v| !v.is_empty());
        let title = text(&self.expense_title);
        let notes = text(&self.expense_notes);

        let category = match text(&self.expense_category) {
            None => None,
            Some(raw) => match ExpenseCategory::parse(&raw) {
                Some(category) => Some(category),
                None => {
                    errors.push(Field::ExpenseCategory, ValidationError::UnknownCategory);
                    None
                }
            },
        };

        let has_fields = title.is_some() || notes.is_some() || !self.expense_category.trim().is_empty();
        let amount = match text(&self.expense_amount) {
            None if has_fields => {
                errors.push(Field::ExpenseAmount, ValidationError::AmountRequired);
                None
            }
            None => return None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
                _ => {
                    errors.push(Field::ExpenseAmount, ValidationError::InvalidAmount);
                    None
                }
            },
        };

        Some(ExpenseDetails {
            title,
            amount,
            category,
            notes,
        })
    }
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Email, email(&self.email));
        errors.check(Field::Password, length(&self.password, PASSWORD_MIN, None));
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(Field::Name, length(&self.name, NAME_MIN, None));
        errors.check(Field::Email, email(&self.email));
        errors.check(Field::Password, length(&self.password, PASSWORD_MIN, None));
        errors.into_result(|| RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_form(start: &str, end: &str) -> TripForm {
        TripForm {
            title: "Goa Trip".into(),
            description: String::new(),
            destination: "Goa".into(),
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    fn ai_form(start: &str, end: &str) -> AiTripForm {
        AiTripForm {
            title: "Goa Trip".into(),
            description: "Beaches".into(),
            origin: "Pune".into(),
            destination: "Goa".into(),
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn test_unplanned_trip_serializes_empty_dates() {
        let trip = trip_form("", "").validate().expect("valid");
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["title"], "Goa Trip");
        assert_eq!(json["startDate"], "");
        assert_eq!(json["endDate"], "");
    }

    #[test]
    fn test_half_filled_dates_fail() {
        let errors = trip_form("2025-06-01", "").validate().unwrap_err();
        assert_eq!(errors.get(Field::EndDate), Some(&ValidationError::DatesIncomplete));

        let errors = trip_form("", "2025-06-01").validate().unwrap_err();
        assert_eq!(errors.get(Field::EndDate), Some(&ValidationError::DatesIncomplete));
    }

    #[test]
    fn test_start_after_end_fails() {
        let errors = trip_form("2025-06-10", "2025-06-01").validate().unwrap_err();
        assert_eq!(errors.get(Field::EndDate), Some(&ValidationError::DatesOutOfOrder));
    }

    #[test]
    fn test_same_day_trip_is_valid() {
        let trip = trip_form("2025-06-01", "2025-06-01").validate().unwrap();
        assert_eq!(trip.start_date, "2025-06-01");
    }

    #[test]
    fn test_title_bounds() {
        let mut form = trip_form("", "");
        form.title = "Go".into();
        assert_eq!(form.validate().unwrap_err().get(Field::Title), Some(&ValidationError::TooShort { min: 3 }));

        form.title = "x".repeat(51);
        assert_eq!(form.validate().unwrap_err().get(Field::Title), Some(&ValidationError::TooLong { max: 50 }));
    }

    #[test]
    fn test_update_only_needs_title_and_destination() {
        let mut form = trip_form("", "");
        form.title = "Go".into();
        assert!(form.validate_update().is_ok());

        form.destination = "  ".into();
        assert_eq!(form.validate_update().unwrap_err().get(Field::Destination), Some(&ValidationError::Required));
    }

    #[test]
    fn test_ai_trip_longer_than_fifteen_days_is_rejected() {
        let errors = ai_form("2025-07-01", "2025-07-16").validate().unwrap_err();
        assert_eq!(
            errors.get(Field::EndDate),
            Some(&ValidationError::MaxDurationExceeded { max: 15, days: 16 })
        );
    }

    #[test]
    fn test_ai_trip_of_fifteen_days_is_accepted() {
        let request = ai_form("2025-07-01", "2025-07-15").validate().unwrap();
        assert_eq!(request.end_date, "2025-07-15");
        assert_eq!(request.origin, "Pune");
    }

    #[test]
    fn test_ai_trip_requires_dates() {
        let errors = ai_form("", "").validate().unwrap_err();
        assert_eq!(errors.get(Field::EndDate), Some(&ValidationError::DatesRequired));
    }

    fn activity_form() -> ActivityForm {
        ActivityForm {
            name: "Fort Aguada".into(),
            location: "Candolim, Goa".into(),
            category: "sightseeing".into(),
            date: "2025-06-02".into(),
            time: "09:30".into(),
            ..ActivityForm::default()
        }
    }

    #[test]
    fn test_activity_time_is_combined_utc() {
        let draft = activity_form().validate().unwrap();
        assert_eq!(draft.time, "2025-06-02T09:30:00.000Z");
        assert_eq!(draft.category, ActivityCategory::Sightseeing);
        assert!(draft.expense.is_none());
    }

    #[test]
    fn test_expense_fields_require_amount() {
        let mut form = activity_form();
        form.show_expense = true;
        form.expense_title = "Entry ticket".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::ExpenseAmount), Some(&ValidationError::AmountRequired));

        form.expense_amount = "-5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::ExpenseAmount), Some(&ValidationError::InvalidAmount));

        form.expense_amount = "250".into();
        form.expense_category = "activity".into();
        let draft = form.validate().unwrap();
        let expense = draft.expense.unwrap();
        assert_eq!(expense.amount, Some(250.0));
        assert_eq!(expense.category, Some(ExpenseCategory::Activity));
    }

    #[test]
    fn test_hidden_expense_section_is_ignored() {
        let mut form = activity_form();
        form.expense_title = "Entry ticket".into();
        assert!(form.validate().unwrap().expense.is_none());
    }

    #[test]
    fn test_activity_roundtrips_through_edit_form() {
        let draft = activity_form().validate().unwrap();
        let activity = Activity {
            id: "a1".into(),
            trip: "t1".into(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            coordinates: None,
            category: draft.category,
            time: draft.time.clone(),
            expense: None,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let form = ActivityForm::from_activity(&activity);
        assert_eq!(form.date, "2025-06-02");
        assert_eq!(form.time, "09:30");
    }

    #[test]
    fn test_auth_forms() {
        let login = LoginForm {
            email: "asha@example".into(),
            password: "pw".into(),
        };
        let errors = login.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(&ValidationError::InvalidEmail));
        assert_eq!(errors.get(Field::Password), Some(&ValidationError::TooShort { min: 3 }));

        let register = RegisterForm {
            name: "Asha".into(),
            email: " asha@example.com ".into(),
            password: "secret".into(),
        };
        assert_eq!(register.validate().unwrap().email, "asha@example.com");
    }
}
