//! UI slice: global loading counter and the single global error.

/// Error shown in the blocking modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalError {
    pub message: String,
    pub show_close_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    StartLoading,
    StopLoading,
    SetGlobalError(GlobalError),
    ClearGlobalError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Loading-enabled actions currently in flight
    pub pending: u32,
    pub error: Option<GlobalError>,
}

impl UiState {
    /// Overlay stays up until the last in-flight action settles
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn reduce(mut self, action: UiAction) -> Self {
        match action {
            UiAction::StartLoading => self.pending += 1,
            UiAction::StopLoading => {
                if self.pending == 0 {
                    log::warn!("[UI] stop loading without a matching start");
                }
                self.pending = self.pending.saturating_sub(1);
            }
            UiAction::SetGlobalError(error) => self.error = Some(error),
            UiAction::ClearGlobalError => self.error = None,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_reference_counted() {
        let state = UiState::default()
            .reduce(UiAction::StartLoading)
            .reduce(UiAction::StartLoading)
            .reduce(UiAction::StopLoading);
        assert!(state.is_loading());

        let state = state.reduce(UiAction::StopLoading);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_unbalanced_stop_saturates() {
        let state = UiState::default().reduce(UiAction::StopLoading);
        assert_eq!(state.pending, 0);
    }

    #[test]
    fn test_global_error_set_and_clear() {
        let state = UiState::default().reduce(UiAction::SetGlobalError(GlobalError {
            message: "Trip fetch failed".into(),
            show_close_button: false,
        }));
        assert_eq!(state.error.as_ref().map(|e| e.show_close_button), Some(false));

        let state = state.reduce(UiAction::ClearGlobalError);
        assert!(state.error.is_none());
    }
}
