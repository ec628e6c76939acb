//! The submit cycle of one form, as decisions over plain values. The
//! frontend applies them to its state, notice slot and timers.

use crate::error::SubmitError;
use crate::forms::notice::NoticeKind;
use crate::forms::payload::FormPayload;
use crate::forms::phase::{FormEvent, FormPhase};
use crate::forms::schema::FormSchema;
use crate::forms::validate::validate;
use crate::forms::values::FormValues;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already running.
    Ignored,
    /// Nothing is sent; mark `marked` and show `notice` as an error.
    Invalid { marked: Vec<String>, notice: String },
    /// Markers are cleared and `payload` goes to the submitter.
    Send { payload: FormPayload },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStep {
    pub phase: FormPhase,
    pub outcome: SubmitOutcome,
}

/// Handles a press of the submit button.
pub fn on_submit(phase: FormPhase, schema: &FormSchema, values: &FormValues) -> SubmitStep {
    if phase.is_busy() {
        return SubmitStep {
            phase,
            outcome: SubmitOutcome::Ignored,
        };
    }

    let phase = phase.next(FormEvent::Submit);
    let result = validate(schema, values);
    if !result.valid {
        return SubmitStep {
            phase: phase.next(FormEvent::ValidationFailed),
            outcome: SubmitOutcome::Invalid {
                marked: result.marked_fields().into_iter().map(str::to_string).collect(),
                notice: result.summary(schema),
            },
        };
    }

    SubmitStep {
        phase: phase.next(FormEvent::ValidationPassed),
        outcome: SubmitOutcome::Send {
            payload: FormPayload::from_values(schema, values),
        },
    }
}

/// What to show once the submitter has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub phase: FormPhase,
    pub notice_kind: NoticeKind,
    pub notice: String,
    /// Clear every field.
    pub reset: bool,
    pub marked: Vec<String>,
}

pub fn on_completion(
    phase: FormPhase,
    schema: &FormSchema,
    result: &Result<(), SubmitError>,
) -> Completion {
    match result {
        Ok(()) => Completion {
            phase: phase.next(FormEvent::SubmissionSucceeded),
            notice_kind: NoticeKind::Success,
            notice: schema.success_message.to_string(),
            reset: true,
            marked: Vec::new(),
        },
        Err(e) => Completion {
            phase: phase.next(FormEvent::SubmissionFailed),
            notice_kind: NoticeKind::Error,
            notice: e.notice_message(),
            reset: false,
            marked: e.marked_fields().to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::forms::catalog::{sample_values, REGISTRATION, VOLUNTEER};
    use crate::forms::schema::FormKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_volunteer_form_succeeds_and_resets() {
        let values = sample_values(FormKind::Volunteer);

        let step = on_submit(FormPhase::Idle, &VOLUNTEER, &values);
        assert_eq!(
            step,
            SubmitStep {
                phase: FormPhase::Submitting,
                outcome: SubmitOutcome::Send {
                    payload: FormPayload::from_values(&VOLUNTEER, &values),
                },
            }
        );

        let done = on_completion(step.phase, &VOLUNTEER, &Ok(()));
        assert_eq!(
            done,
            Completion {
                phase: FormPhase::SuccessShown,
                notice_kind: NoticeKind::Success,
                notice: VOLUNTEER.success_message.to_string(),
                reset: true,
                marked: vec![],
            }
        );
        assert_eq!(done.phase.next(FormEvent::NoticeDismissed), FormPhase::Idle);
    }

    #[test]
    fn test_missing_email_marks_only_email() {
        let mut values = sample_values(FormKind::Volunteer);
        values.remove("email");

        let step = on_submit(FormPhase::Idle, &VOLUNTEER, &values);
        assert_eq!(step.phase, FormPhase::ErrorShown);
        assert_eq!(
            step.outcome,
            SubmitOutcome::Invalid {
                marked: vec!["email".to_string()],
                notice: "Please fix the following: Email Address is required.".to_string(),
            }
        );
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let values = sample_values(FormKind::Volunteer);
        let step = on_submit(FormPhase::Submitting, &VOLUNTEER, &values);
        assert_eq!(
            step,
            SubmitStep {
                phase: FormPhase::Submitting,
                outcome: SubmitOutcome::Ignored,
            }
        );
    }

    #[test]
    fn test_fixing_errors_then_resubmitting_sends() {
        let mut values = sample_values(FormKind::Volunteer).with_text("email", "nope");
        let first = on_submit(FormPhase::Idle, &VOLUNTEER, &values);
        assert_eq!(first.phase, FormPhase::ErrorShown);

        values.set_text("email", "adebayo@example.com");
        let second = on_submit(first.phase, &VOLUNTEER, &values);
        assert_eq!(second.phase, FormPhase::Submitting);
        assert!(matches!(second.outcome, SubmitOutcome::Send { .. }));
    }

    #[test]
    fn test_server_rejection_marks_its_fields() {
        let rejected = SubmitError::rejected(
            "Please fix the following: Participant Categories: select at least 1 option.",
            &[ValidationError::GroupCardinality {
                group: "participantCategories".to_string(),
                actual: 0,
                min: 1,
                max: 3,
            }],
        );

        let done = on_completion(FormPhase::Submitting, &REGISTRATION, &Err(rejected));
        assert_eq!(done.phase, FormPhase::ErrorShown);
        assert_eq!(done.notice_kind, NoticeKind::Error);
        assert_eq!(done.marked, vec!["participantCategories".to_string()]);
        assert!(!done.reset);
    }

    #[test]
    fn test_network_failure_keeps_values() {
        let failed = SubmitError::SubmissionFailed("offline".to_string());
        let done = on_completion(FormPhase::Submitting, &VOLUNTEER, &Err(failed.clone()));
        assert_eq!(done.notice, failed.notice_message());
        assert!(done.marked.is_empty());
        assert!(!done.reset);
    }
}
