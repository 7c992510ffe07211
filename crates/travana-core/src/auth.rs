//! Session plumbing shared by the router and the HTTP client

use crate::config::ENTRY_ROUTE;
use crate::models::Trip;
use crate::slices::Action;
use crate::thunk::Dispatcher;

/// Outcome of the protected-route check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Session restore still running; render nothing yet
    Wait,
    Redirect(&'static str),
}

pub fn guard(is_authenticated: bool) -> Guard {
    if is_authenticated {
        Guard::Allow
    } else {
        Guard::Redirect(ENTRY_ROUTE)
    }
}

/// Where the bearer token lives between page loads
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Full-page navigation outside the router
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Reaction to a 401: forget the token and the user, then leave.
pub fn handle_unauthorized<T, D, N>(tokens: &T, dispatcher: &D, navigator: &N)
where
    T: TokenStore + ?Sized,
    D: Dispatcher + ?Sized,
    N: Navigator + ?Sized,
{
    log::warn!("[AUTH] unauthorized response, clearing session");
    tokens.clear();
    dispatcher.dispatch(Action::Logout);
    navigator.hard_redirect(ENTRY_ROUTE);
}

pub fn trip_route(trip_id: &str) -> String {
    format!("/trip/{}", trip_id)
}

/// Where to go right after signing in
pub fn landing_route(trips: &[Trip]) -> String {
    match trips {
        [] => "/addtrips".to_string(),
        [only] => trip_route(&only.id),
        _ => "/alltrips".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::{AppState, Phase, SessionAction, TripsAction};
    use crate::models::{AuthResponse, User};
    use crate::request::RequestId;
    use crate::thunk::Recorder;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryTokens(RefCell<Option<String>>);

    impl TokenStore for MemoryTokens {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }
        fn set(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }
        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn hard_redirect(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    fn trip(id: &str) -> Trip {
        Trip {
            id: id.into(),
            user: "u1".into(),
            title: "Goa Trip".into(),
            destination: "Goa".into(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(guard(true), Guard::Allow);
        assert_eq!(guard(false), Guard::Redirect("/"));
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
    }

    #[test]
    fn test_unauthorized_clears_token_user_and_redirects() {
        let id = RequestId::next();
        let recorder = Recorder::new(AppState::new());
        recorder.dispatch(Action::Session(SessionAction::Login(Phase::Fulfilled(
            id,
            AuthResponse {
                token: "tok".into(),
                user: User {
                    id: "u1".into(),
                    name: "Asha".into(),
                    email: "asha@example.com".into(),
                    profile_pic: None,
                },
                message: None,
            },
        ))));
        recorder.dispatch(Action::Trips(TripsAction::Create(Phase::Fulfilled(id, trip("t1")))));

        let tokens = MemoryTokens::default();
        tokens.set("tok");
        let navigator = RecordingNavigator::default();

        handle_unauthorized(&tokens, &recorder, &navigator);

        assert_eq!(tokens.get(), None);
        let state = recorder.state();
        assert!(!state.session.is_authenticated());
        assert!(state.trips.trips.is_empty());
        assert_eq!(state.session.guard(), Guard::Redirect("/"));
        assert_eq!(navigator.0.borrow().as_slice(), ["/".to_string()]);
    }

    #[test]
    fn test_landing_route_depends_on_trip_count() {
        assert_eq!(landing_route(&[]), "/addtrips");
        assert_eq!(landing_route(&[trip("t1")]), "/trip/t1");
        assert_eq!(landing_route(&[trip("t1"), trip("t2")]), "/alltrips");
    }
}
