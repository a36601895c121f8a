use crate::config::ContactInfo;
use crate::contact::{validate, ErrorMap, FieldChange, FieldState, ValidationReport};

/// What a submit handler is allowed to do to the browser's submission.
///
/// Implemented over the real DOM event in the app and by recording fakes in
/// tests.
pub trait SubmitEvent {
    /// Stop the browser's default navigation-inducing submission.
    fn prevent_native_action(&self);

    /// Submit the underlying form natively, bypassing submit handlers.
    fn submit_native(&self);
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and native submission was triggered.
    Submitted,
    /// Validation failed; the error map holds the reasons.
    Rejected,
}

/// Owns the contact form's field values and current errors.
///
/// Has no rendering opinion. The UI layer feeds it [`FieldChange`]s and
/// submit events, and re-renders from [`FormController::state`] and
/// [`FormController::errors`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    info: ContactInfo,
    state: FieldState,
    errors: ErrorMap,
}

impl FormController {
    pub fn new(info: ContactInfo) -> Self {
        Self {
            info,
            state: FieldState::default(),
            errors: ErrorMap::default(),
        }
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Replace the named field. Any string is accepted; rules only run on
    /// submit.
    pub fn on_field_change(&mut self, change: FieldChange) {
        self.state = self.state.with_field(change.field, change.value);
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.state)
    }

    /// Suppress the default submission, validate, store the fresh error
    /// map, and resubmit natively only when every rule passed.
    pub fn on_submit<E: SubmitEvent + ?Sized>(&mut self, event: &E) -> SubmitOutcome {
        event.prevent_native_action();

        let report = self.validate();
        self.errors = report.errors;

        if report.success {
            event.submit_native();
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Rejected
        }
    }
}
