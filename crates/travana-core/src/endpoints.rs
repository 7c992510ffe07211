//! REST paths, relative to the API base URL

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same set `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const CURRENT_USER: &str = "/auth/me";
pub const TRIPS: &str = "/trips";
pub const GENERATE_TRIP: &str = "/ai/generate-trip";

pub fn trip(id: &str) -> String {
    format!("/trips/{}", encode(id))
}

pub fn trip_overview(id: &str) -> String {
    format!("/trips/{}/overview", encode(id))
}

pub fn activities(trip_id: &str) -> String {
    format!("/trips/{}/activities", encode(trip_id))
}

pub fn activity(trip_id: &str, activity_id: &str) -> String {
    format!("/trips/{}/activities/{}", encode(trip_id), encode(activity_id))
}

pub fn cities(query: &str) -> String {
    format!("/cities?q={}", encode(query))
}

/// Join the configured base URL and a path without doubling slashes
pub fn url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(trip_overview("66a1"), "/trips/66a1/overview");
        assert_eq!(activity("t1", "a9"), "/trips/t1/activities/a9");
    }

    #[test]
    fn test_city_query_is_encoded() {
        assert_eq!(cities("São Paulo & co"), "/cities?q=S%C3%A3o%20Paulo%20%26%20co");
    }

    #[test]
    fn test_url_join() {
        assert_eq!(url("http://localhost:5000/api/", "/trips"), "http://localhost:5000/api/trips");
    }
}
