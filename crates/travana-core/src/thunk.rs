//! Async Action Factory
//!
//! A [`Thunk`] wraps one remote call: it brackets the call with loading
//! signals, reports `Pending`/`Fulfilled`/`Rejected` to the slices, and turns
//! failures into a user-facing message (optionally raised as the global
//! error). Views only ever see `Result<T, String>`.

use std::cell::RefCell;
use std::future::Future;

use crate::error::ApiError;
use crate::request::RequestId;
use crate::slices::{Action, AppState, GlobalError, Phase, UiAction};

/// Anything that accepts actions: the reactive store in the app, a
/// [`Recorder`] in tests.
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThunkOptions {
    /// Bump the global loading counter while the call runs
    pub show_loading: bool,
    /// Raise failures as the global error modal
    pub show_error_popup: bool,
    /// Whether that modal can be dismissed
    pub show_close_button: bool,
}

impl ThunkOptions {
    pub const DEFAULT: ThunkOptions = ThunkOptions {
        show_loading: true,
        show_error_popup: true,
        show_close_button: true,
    };
}

impl Default for ThunkOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Async action taking `A` and producing `T`
pub struct Thunk<A, T> {
    pub type_prefix: &'static str,
    pub options: ThunkOptions,
    settle: fn(&A, Phase<T>) -> Action,
}

impl<A, T: Clone> Thunk<A, T> {
    pub const fn new(
        type_prefix: &'static str,
        options: ThunkOptions,
        settle: fn(&A, Phase<T>) -> Action,
    ) -> Self {
        Self {
            type_prefix,
            options,
            settle,
        }
    }

    /// Run `work` for `arg`, dispatching the outcome sequence.
    ///
    /// Loading start/stop are paired exactly once per call, including when
    /// the returned future is dropped before it completes.
    pub async fn run<D, F>(&self, dispatcher: &D, arg: &A, work: F) -> Result<T, String>
    where
        D: Dispatcher + ?Sized,
        F: Future<Output = Result<T, ApiError>>,
    {
        let id = RequestId::next();
        let _loading = self
            .options
            .show_loading
            .then(|| LoadingGuard::start(dispatcher));

        log::debug!("[THUNK] {} {} pending", self.type_prefix, id);
        dispatcher.dispatch((self.settle)(arg, Phase::Pending(id)));

        match work.await {
            Ok(value) => {
                log::debug!("[THUNK] {} {} fulfilled", self.type_prefix, id);
                dispatcher.dispatch((self.settle)(arg, Phase::Fulfilled(id, value.clone())));
                Ok(value)
            }
            Err(err) => {
                let message = err.user_message();
                log::warn!("[THUNK] {} {} rejected: {}", self.type_prefix, id, message);
                dispatcher.dispatch((self.settle)(arg, Phase::Rejected(id, message.clone())));
                if self.options.show_error_popup {
                    dispatcher.dispatch(Action::Ui(UiAction::SetGlobalError(GlobalError {
                        message: message.clone(),
                        show_close_button: self.options.show_close_button,
                    })));
                }
                Err(message)
            }
        }
    }
}

/// Dispatches `StopLoading` when dropped
struct LoadingGuard<'a, D: Dispatcher + ?Sized> {
    dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> LoadingGuard<'a, D> {
    fn start(dispatcher: &'a D) -> Self {
        dispatcher.dispatch(Action::Ui(UiAction::StartLoading));
        Self { dispatcher }
    }
}

impl<D: Dispatcher + ?Sized> Drop for LoadingGuard<'_, D> {
    fn drop(&mut self) {
        self.dispatcher.dispatch(Action::Ui(UiAction::StopLoading));
    }
}

/// Single-threaded store that also keeps every dispatched action.
#[derive(Debug, Default)]
pub struct Recorder {
    state: RefCell<AppState>,
    actions: RefCell<Vec<Action>>,
}

impl Recorder {
    pub fn new(state: AppState) -> Self {
        Self {
            state: RefCell::new(state),
            actions: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }
}

impl Dispatcher for Recorder {
    fn dispatch(&self, action: Action) {
        self.actions.borrow_mut().push(action.clone());
        self.state.borrow_mut().apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DEFAULT_ERROR_MESSAGE;
    use crate::models::DestinationSuggestion;
    use crate::slices::{DestinationsAction, UiState};
    use std::time::Duration;
    use tokio::time::sleep;

    type Places = Vec<DestinationSuggestion>;

    fn settle_places(_: &&'static str, phase: Phase<Places>) -> Action {
        Action::Destinations(DestinationsAction::Fetch(phase))
    }

    const PLAIN: Thunk<&'static str, Places> = Thunk::new("test/plain", ThunkOptions::DEFAULT, settle_places);

    const QUIET: Thunk<&'static str, Places> = Thunk::new(
        "test/quiet",
        ThunkOptions {
            show_loading: false,
            show_error_popup: false,
            show_close_button: true,
        },
        settle_places,
    );

    const STICKY: Thunk<&'static str, Places> = Thunk::new(
        "test/sticky",
        ThunkOptions {
            show_close_button: false,
            ..ThunkOptions::DEFAULT
        },
        settle_places,
    );

    fn places(n: usize) -> Places {
        (0..n)
            .map(|i| DestinationSuggestion {
                display_name: format!("Place {}", i),
                lat: 0.0,
                lon: 0.0,
            })
            .collect()
    }

    async fn after(ms: u64, result: Result<Places, ApiError>) -> Result<Places, ApiError> {
        sleep(Duration::from_millis(ms)).await;
        result
    }

    /// Replays loading signals and returns the counter after each one
    fn loading_trace(actions: &[Action]) -> Vec<u32> {
        let mut ui = UiState::default();
        let mut trace = Vec::new();
        for action in actions {
            if let Action::Ui(ui_action @ (UiAction::StartLoading | UiAction::StopLoading)) = action {
                ui = ui.reduce(ui_action.clone());
                trace.push(ui.pending);
            }
        }
        trace
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_calls_keep_loading_until_last_finishes() {
        let recorder = Recorder::default();

        let (slow, fast, middle) = tokio::join!(
            PLAIN.run(&recorder, &"slow", after(30, Ok(places(1)))),
            PLAIN.run(&recorder, &"fast", after(5, Ok(places(2)))),
            PLAIN.run(&recorder, &"middle", after(15, Err(ApiError::Network("offline".into())))),
        );
        assert_eq!(slow.map(|p| p.len()), Ok(1));
        assert_eq!(fast.map(|p| p.len()), Ok(2));
        assert_eq!(middle, Err("offline".to_string()));

        let trace = loading_trace(&recorder.actions());
        assert_eq!(trace.len(), 6);
        let (last, before_last) = trace.split_last().unwrap();
        assert_eq!(*last, 0);
        assert!(before_last.iter().all(|pending| *pending > 0), "trace: {:?}", trace);
        assert!(!recorder.state().ui.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_call_still_stops_loading() {
        let recorder = Recorder::default();

        let timed_out = tokio::time::timeout(
            Duration::from_millis(5),
            PLAIN.run(&recorder, &"abandoned", after(50, Ok(places(1)))),
        )
        .await;
        assert!(timed_out.is_err());

        assert_eq!(loading_trace(&recorder.actions()), vec![1, 0]);
    }

    #[tokio::test]
    async fn test_rejection_raises_global_error_with_server_message() {
        let recorder = Recorder::default();
        let err = ApiError::Server {
            status: 422,
            message: Some("Destination is required".into()),
        };

        let result = STICKY.run(&recorder, &"create", async { Err(err) }).await;

        assert_eq!(result.map(|p| p.len()), Err("Destination is required".to_string()));
        let error = recorder.state().ui.error.expect("global error");
        assert_eq!(error.message, "Destination is required");
        assert!(!error.show_close_button);
    }

    #[tokio::test]
    async fn test_quiet_thunk_skips_loading_and_popup() {
        let recorder = Recorder::default();

        let result = QUIET
            .run(&recorder, &"suggest", async { Err(ApiError::Network(String::new())) })
            .await;

        assert_eq!(result.map(|p| p.len()), Err(DEFAULT_ERROR_MESSAGE.to_string()));
        assert!(recorder.state().ui.error.is_none());
        assert!(loading_trace(&recorder.actions()).is_empty());
    }

    #[tokio::test]
    async fn test_outcome_sequence_is_pending_then_settled() {
        let recorder = Recorder::default();
        let _ = PLAIN.run(&recorder, &"ok", async { Ok(places(3)) }).await;

        let phases: Vec<_> = recorder
            .actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Destinations(DestinationsAction::Fetch(phase)) => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(phases.len(), 2);
        assert!(matches!(phases[0], Phase::Pending(_)));
        assert!(matches!(&phases[1], Phase::Fulfilled(_, list) if list.len() == 3));
        assert_eq!(recorder.state().destinations.suggestions.len(), 3);
        assert_eq!(phases[0].request_id(), phases[1].request_id());
    }
}
