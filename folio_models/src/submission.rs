/// Lifecycle of one contact-form submission attempt.
///
/// Transitions are owned by the form controller: `Idle -> Submitting`,
/// `Submitting -> Success | Error`, `Success -> Idle` (deferred, automatic),
/// `Error -> Submitting` (retry) and any state back to `Idle` on reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
