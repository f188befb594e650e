//! Resource screens.
//!
//! Each screen owns its local state (listed records, active filter, form draft,
//! last error) and exposes the user actions that talk to the backend. Every
//! action follows the same cycle:
//!
//! `Idle -> Pending -> Succeeded | Failed`
//!
//! The error is cleared when an action starts. A successful list fetch
//! replaces the whole list; a failed one empties it. Failed mutations keep the
//! list and the draft as they were. Successful mutations reload the list with
//! the active filter and report the reload's outcome.
//!
//! Actions take `&mut self`, so one screen never has two requests in flight.

mod clients;
mod products;
mod sales;

pub use clients::*;
pub use products::*;
pub use sales::*;

use crate::errors::ApiError;

/// Where a screen is in its request cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Result of a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and local state was reconciled
    Completed,
    /// The action or its follow-up reload failed; the screen's error is set
    Failed,
    /// Nothing was submitted (dismissed or blank prompt)
    Skipped,
}

/// List snapshot plus the error and phase of the last action.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    error: Option<String>,
    phase: Phase,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            phase: Phase::Idle,
        }
    }
}

impl<T> ListState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter `Pending` and clear the previous error.
    pub(crate) fn begin(&mut self) {
        self.error = None;
        self.phase = Phase::Pending;
    }

    /// Mark the current action as successful without touching the list.
    pub(crate) fn succeed(&mut self) {
        self.error = None;
        self.phase = Phase::Succeeded;
    }

    /// Replace the list with a fresh snapshot.
    pub(crate) fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.succeed();
    }

    /// Empty the list and record an error.
    pub(crate) fn clear_with_error(&mut self, message: String) {
        self.items.clear();
        self.error = Some(message);
        self.phase = Phase::Failed;
    }

    /// Record an error and keep the list as it is.
    pub(crate) fn keep_with_error(&mut self, message: String) {
        self.error = Some(message);
        self.phase = Phase::Failed;
    }

    /// Apply the result of a list fetch.
    pub(crate) fn reconcile(&mut self, result: Result<Vec<T>, ApiError>, failure: &str) -> Outcome {
        match result {
            Ok(items) => {
                self.replace(items);
                Outcome::Completed
            }
            Err(err) => {
                log_failure(&err, failure);
                self.clear_with_error(user_message(&err, failure));
                Outcome::Failed
            }
        }
    }

    /// Apply a failed mutation.
    pub(crate) fn fail(&mut self, err: &ApiError, failure: &str) -> Outcome {
        log_failure(err, failure);
        self.keep_with_error(user_message(err, failure));
        Outcome::Failed
    }
}

/// Message shown to the user. Backend details stay in the log; input errors
/// carry only the validation message and are shown as is.
pub(crate) fn user_message(err: &ApiError, fixed: &str) -> String {
    if err.is_input() {
        err.to_string()
    } else {
        fixed.to_string()
    }
}

pub(crate) fn log_failure(err: &ApiError, context: &str) {
    if err.is_input() {
        tracing::debug!(code = err.error_code(), "{}: {}", context, err);
    } else {
        tracing::warn!(code = err.error_code(), "{}: {}", context, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_success_replaces_and_clears_error() {
        let mut state: ListState<i32> = ListState::default();
        state.keep_with_error("old".to_string());

        state.begin();
        assert_eq!(state.phase(), Phase::Pending);
        assert!(state.error().is_none());

        let outcome = state.reconcile(Ok(vec![1, 2, 3]), "Could not load");
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(state.items(), &[1, 2, 3]);
        assert!(state.error().is_none());
        assert_eq!(state.phase(), Phase::Succeeded);
    }

    #[test]
    fn test_reconcile_failure_empties_list() {
        let mut state: ListState<i32> = ListState::default();
        state.replace(vec![1, 2]);

        state.begin();
        let outcome = state.reconcile(
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
            "Could not load",
        );

        assert_eq!(outcome, Outcome::Failed);
        assert!(state.items().is_empty());
        assert_eq!(state.error(), Some("Could not load"));
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[test]
    fn test_failed_mutation_keeps_list() {
        let mut state: ListState<i32> = ListState::default();
        state.replace(vec![1, 2]);

        state.begin();
        state.fail(&ApiError::Transport("refused".to_string()), "Could not save");
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.error(), Some("Could not save"));

        state.begin();
        state.fail(&ApiError::input("Price must be a number"), "Could not save");
        assert_eq!(state.error(), Some("Price must be a number"));
    }
}
