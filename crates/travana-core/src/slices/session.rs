//! Session slice: the authenticated user.

use super::{Phase, Status};
use crate::auth::{guard, Guard};
use crate::models::{AuthResponse, User};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Login(Phase<AuthResponse>),
    Register(Phase<AuthResponse>),
    /// Restores the user behind a stored token
    FetchCurrentUser(Phase<User>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: Status,
    pub error: Option<String>,
    /// A stored token is being exchanged for the user
    pub restoring: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Route guard decision; waits while a stored session is being restored
    pub fn guard(&self) -> Guard {
        if self.restoring && self.user.is_none() {
            Guard::Wait
        } else {
            guard(self.is_authenticated())
        }
    }

    pub fn reduce(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::Login(phase) | SessionAction::Register(phase) => match phase {
                Phase::Pending(_) => {
                    self.status = Status::Loading;
                    self.error = None;
                }
                Phase::Fulfilled(_, response) => {
                    self.status = Status::Succeeded;
                    self.user = Some(response.user);
                }
                Phase::Rejected(_, message) => {
                    self.status = Status::Failed;
                    self.error = Some(message);
                }
            },
            SessionAction::FetchCurrentUser(phase) => match phase {
                Phase::Pending(_) => {
                    self.status = Status::Loading;
                    self.restoring = true;
                }
                Phase::Fulfilled(_, user) => {
                    self.status = Status::Succeeded;
                    self.restoring = false;
                    self.user = Some(user);
                }
                Phase::Rejected(_, message) => {
                    self.status = Status::Failed;
                    self.restoring = false;
                    self.error = Some(message);
                }
            },
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENTRY_ROUTE;
    use crate::request::RequestId;

    fn user() -> User {
        User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            profile_pic: None,
        }
    }

    #[test]
    fn test_login_rejected_records_message() {
        let id = RequestId::next();
        let state = SessionState::default()
            .reduce(SessionAction::Login(Phase::Pending(id)))
            .reduce(SessionAction::Login(Phase::Rejected(id, "Invalid credentials".into())));

        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(state.status, Status::Failed);
    }

    #[test]
    fn test_guard_waits_while_restoring() {
        let id = RequestId::next();
        let state = SessionState::default().reduce(SessionAction::FetchCurrentUser(Phase::Pending(id)));
        assert_eq!(state.guard(), Guard::Wait);

        let state = state.reduce(SessionAction::FetchCurrentUser(Phase::Fulfilled(id, user())));
        assert_eq!(state.guard(), Guard::Allow);
    }

    #[test]
    fn test_guard_redirects_after_failed_restore() {
        let id = RequestId::next();
        let state = SessionState::default()
            .reduce(SessionAction::FetchCurrentUser(Phase::Pending(id)))
            .reduce(SessionAction::FetchCurrentUser(Phase::Rejected(id, "jwt expired".into())));
        assert_eq!(state.guard(), Guard::Redirect(ENTRY_ROUTE));
    }
}
