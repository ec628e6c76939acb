/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    ErrorShown,
    Submitting,
    SuccessShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ValidationFailed,
    ValidationPassed,
    SubmissionSucceeded,
    SubmissionFailed,
    NoticeDismissed,
}

impl FormPhase {
    /// Next phase after `event`. Events that don't apply leave the phase as is.
    pub fn next(self, event: FormEvent) -> FormPhase {
        use FormEvent::*;
        use FormPhase::*;

        match (self, event) {
            (Idle | ErrorShown | SuccessShown, Submit) => Validating,
            (Validating, ValidationFailed) => ErrorShown,
            (Validating, ValidationPassed) => Submitting,
            (Submitting, SubmissionSucceeded) => SuccessShown,
            (Submitting, SubmissionFailed) => ErrorShown,
            (ErrorShown | SuccessShown, NoticeDismissed) => Idle,
            (phase, _) => phase,
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[FormEvent]) -> FormPhase {
        events
            .iter()
            .fold(FormPhase::default(), |phase, event| phase.next(*event))
    }

    #[test]
    fn test_success_path() {
        use FormEvent::*;
        assert_eq!(
            run(&[Submit, ValidationPassed, SubmissionSucceeded]),
            FormPhase::SuccessShown
        );
        assert_eq!(
            run(&[Submit, ValidationPassed, SubmissionSucceeded, NoticeDismissed]),
            FormPhase::Idle
        );
    }

    #[test]
    fn test_failures_show_error() {
        use FormEvent::*;
        assert_eq!(run(&[Submit, ValidationFailed]), FormPhase::ErrorShown);
        assert_eq!(
            run(&[Submit, ValidationPassed, SubmissionFailed]),
            FormPhase::ErrorShown
        );
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        use FormEvent::*;
        let phase = run(&[Submit, ValidationPassed]);
        assert!(phase.is_busy());
        assert_eq!(phase.next(Submit), FormPhase::Submitting);
    }

    #[test]
    fn test_resubmit_from_error() {
        use FormEvent::*;
        assert_eq!(run(&[Submit, ValidationFailed, Submit]), FormPhase::Validating);
    }

    #[test]
    fn test_stray_events_are_ignored() {
        assert_eq!(FormPhase::Idle.next(FormEvent::SubmissionSucceeded), FormPhase::Idle);
        assert_eq!(FormPhase::Idle.next(FormEvent::NoticeDismissed), FormPhase::Idle);
    }
}
