//! Contact form controller
//!
//! Owns the one contact form on the page and drives it through
//! `Idle → Submitting → Submitted`, falling back to `Idle` when the
//! collaborator reports a failure. The submission runs on a spawned task
//! and reports back through a single completion channel that the UI loop
//! drains once per frame.

use crate::events::{Event, SubmitGesture};
use crate::state::{ContactForm, FieldId, MessageKind, ValidationResult, SENDING_LABEL};
use crate::submission::{SubmissionOutcome, Submitter};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    /// Terminal; the form stays hidden for the rest of the session
    Submitted,
}

pub struct ContactFormController {
    form: ContactForm,
    submitter: Arc<dyn Submitter>,
    state: SubmissionState,
    /// Submit label to restore after a failed attempt
    original_label: Option<String>,
    completion_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    completion_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl ContactFormController {
    /// Bind the controller to a form instance
    pub fn attach(form: ContactForm, submitter: Arc<dyn Submitter>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            form,
            submitter,
            state: SubmissionState::Idle,
            original_label: None,
            completion_tx,
            completion_rx,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Handle the submit gesture
    ///
    /// Returns true if a submission was started.
    pub fn on_submit(&mut self, event: &mut Event<SubmitGesture>) -> bool {
        event.prevent_default();

        if self.state != SubmissionState::Idle || self.form.submit.disabled {
            tracing::debug!("Submit ignored while {:?}", self.state);
            return false;
        }

        let snapshot = self.form.snapshot();
        let validation = ValidationResult::of(&snapshot);
        if let Some(message) = validation.message() {
            let failing: Vec<_> = validation.failing_fields().map(|id| id.as_str()).collect();
            tracing::debug!("Contact form rejected ({}): {message}", failing.join(", "));
            self.show_message(MessageKind::Error, message);
            return false;
        }

        // Disable the control before the collaborator is invoked
        self.original_label = Some(std::mem::replace(
            &mut self.form.submit.label,
            SENDING_LABEL.to_string(),
        ));
        self.form.submit.disabled = true;
        self.state = SubmissionState::Submitting;

        let submitter = Arc::clone(&self.submitter);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = submitter.submit(snapshot).await;
            // The receiver lives as long as the controller
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply a completed submission, if one has arrived
    pub fn poll_completion(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.completion_rx.try_recv().ok()?;
        self.complete(outcome.clone());
        Some(outcome)
    }

    /// Wait for the in-flight submission and apply its outcome
    #[cfg(test)]
    pub async fn wait_for_completion(&mut self) -> Option<SubmissionOutcome> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        let outcome = self.completion_rx.recv().await?;
        self.complete(outcome.clone());
        Some(outcome)
    }

    fn complete(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => {
                tracing::info!("Contact form submitted");
                self.form.hidden = true;
                self.form.error_panel_visible = false;
                self.form.success_panel_visible = true;
                self.form.reset();
                self.state = SubmissionState::Submitted;
            }
            SubmissionOutcome::Failure(reason) => {
                tracing::error!("Form submission error: {reason}");
                self.form.error_panel_visible = true;
                self.form.success_panel_visible = false;
                if let Some(label) = self.original_label.take() {
                    self.form.submit.label = label;
                }
                self.form.submit.disabled = false;
                self.state = SubmissionState::Idle;
            }
        }
    }

    /// Validate one field (on blur)
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        self.form.validate_field(id)
    }

    /// Re-validate a field after input, only while it is marked invalid
    pub fn on_input(&mut self, id: FieldId) {
        if self.form.field(id).invalid {
            self.form.validate_field(id);
        }
    }

    /// Show a banner inside the form; it hides itself after five seconds
    pub fn show_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.form.banner.show(kind, text);
    }

    /// Fire expired banner timers
    pub fn tick(&mut self, now: Instant) {
        self.form.banner.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormSnapshot, SUBMIT_LABEL};
    use crate::submission::MockSubmitter;

    fn fill(form: &mut ContactForm, name: &str, email: &str, phone: &str, description: &str) {
        form.field_mut(FieldId::Name).set_text(name);
        form.field_mut(FieldId::Email).set_text(email);
        form.field_mut(FieldId::Phone).set_text(phone);
        form.field_mut(FieldId::Description).set_text(description);
    }

    fn controller_with(
        mock: MockSubmitter,
        name: &str,
        email: &str,
        phone: &str,
        description: &str,
    ) -> ContactFormController {
        let mut form = ContactForm::new();
        fill(&mut form, name, email, phone, description);
        ContactFormController::attach(form, Arc::new(mock))
    }

    fn never_called() -> MockSubmitter {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().never();
        mock
    }

    fn answers(outcome: SubmissionOutcome) -> MockSubmitter {
        let mut mock = MockSubmitter::new();
        mock.expect_submit()
            .times(1)
            .returning(move |_| outcome.clone());
        mock
    }

    fn submit(controller: &mut ContactFormController) -> (bool, Event<SubmitGesture>) {
        let mut event = Event::new(SubmitGesture);
        let started = controller.on_submit(&mut event);
        (started, event)
    }

    mod validation_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_name_is_rejected_without_submitting() {
            let mut controller = controller_with(never_called(), "", "a@b.com", "123", "hi");
            let (started, event) = submit(&mut controller);

            assert!(!started);
            assert!(event.default_prevented());
            assert_eq!(controller.state(), SubmissionState::Idle);
            let banner = &controller.form().banner;
            assert!(banner.is_visible());
            assert_eq!(banner.kind(), Some(MessageKind::Error));
            assert_eq!(banner.text(), "Ver snill og fyll ut alle påkravde felt.");
        }

        #[tokio::test]
        async fn test_bad_email_is_rejected_without_submitting() {
            let mut controller =
                controller_with(never_called(), "A", "not-an-email", "123", "hi");
            let (started, _) = submit(&mut controller);

            assert!(!started);
            assert_eq!(
                controller.form().banner.text(),
                "Ver snill og oppgje ein gyldig e-postadresse."
            );
        }

        #[tokio::test]
        async fn test_each_missing_required_field_blocks_submission() {
            let cases = [
                ("", "a@b.com", "123", "hi"),
                ("A", "", "123", "hi"),
                ("A", "a@b.com", " ", "hi"),
                ("A", "a@b.com", "123", "\n"),
            ];
            for (name, email, phone, description) in cases {
                let mut controller =
                    controller_with(never_called(), name, email, phone, description);
                let (started, _) = submit(&mut controller);
                assert!(!started);
                assert_eq!(
                    controller.form().banner.text(),
                    "Ver snill og fyll ut alle påkravde felt."
                );
            }
        }

        #[tokio::test]
        async fn test_rejected_form_keeps_values_and_control() {
            let mut controller = controller_with(never_called(), "A", "nope", "123", "hi");
            submit(&mut controller);

            let form = controller.form();
            assert_eq!(form.field(FieldId::Email).as_text(), "nope");
            assert_eq!(form.field(FieldId::Name).as_text(), "A");
            assert!(!form.submit.disabled);
            assert_eq!(form.submit.label, SUBMIT_LABEL);
            assert!(!form.hidden);
        }

        #[tokio::test]
        async fn test_rejected_submit_leaves_field_markers_alone() {
            let mut controller = controller_with(never_called(), "A", "a@b.com", "", "hi");
            let (started, _) = submit(&mut controller);

            assert!(!started);
            assert!(controller.form().banner.is_visible());
            for id in FieldId::ALL {
                assert!(!controller.form().field(id).invalid, "{id:?} was marked");
            }
        }

        #[tokio::test]
        async fn test_typing_after_rejected_submit_does_not_mark() {
            let mut controller = controller_with(never_called(), "A", "a@b.com", "", "hi");
            submit(&mut controller);

            controller.form_mut().field_mut(FieldId::Phone).set_text(" ");
            controller.on_input(FieldId::Phone);
            assert!(!controller.form().field(FieldId::Phone).invalid);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submit_disables_control_before_resolving() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Success),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            let (started, event) = submit(&mut controller);

            assert!(started);
            assert!(event.default_prevented());
            assert_eq!(controller.state(), SubmissionState::Submitting);
            assert!(controller.form().submit.disabled);
            assert_eq!(controller.form().submit.label, "Sender...");

            controller.wait_for_completion().await;
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_noop() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Success),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            assert!(submit(&mut controller).0);
            let (again, event) = submit(&mut controller);
            assert!(!again);
            assert!(event.default_prevented());

            assert_eq!(
                controller.wait_for_completion().await,
                Some(SubmissionOutcome::Success)
            );
        }

        #[tokio::test]
        async fn test_collaborator_receives_trimmed_snapshot() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .withf(|snapshot: &FormSnapshot| {
                    *snapshot == FormSnapshot::new("A", "a@b.com", "123", "", None, "hi", false)
                })
                .times(1)
                .returning(|_| SubmissionOutcome::Success);
            let mut controller = controller_with(mock, " A ", "a@b.com ", "123", " hi");

            submit(&mut controller);
            controller.wait_for_completion().await;
        }

        #[tokio::test]
        async fn test_success_hides_form_and_clears_values() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Success),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            submit(&mut controller);
            let outcome = controller.wait_for_completion().await;

            assert_eq!(outcome, Some(SubmissionOutcome::Success));
            assert_eq!(controller.state(), SubmissionState::Submitted);
            let form = controller.form();
            assert!(form.hidden);
            assert!(form.success_panel_visible);
            assert!(!form.error_panel_visible);
            assert_eq!(
                form.snapshot(),
                FormSnapshot::new("", "", "", "", None, "", false)
            );
        }

        #[tokio::test]
        async fn test_submitted_is_terminal() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Success),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            submit(&mut controller);
            controller.wait_for_completion().await;

            fill(controller.form_mut(), "B", "b@c.no", "456", "igjen");
            let (started, _) = submit(&mut controller);
            assert!(!started);
            assert_eq!(controller.state(), SubmissionState::Submitted);
            assert!(controller.wait_for_completion().await.is_none());
        }

        #[tokio::test]
        async fn test_failure_restores_control_and_keeps_values() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Failure("boom".to_string())),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            submit(&mut controller);
            let outcome = controller.wait_for_completion().await;

            assert_eq!(outcome, Some(SubmissionOutcome::Failure("boom".to_string())));
            assert_eq!(controller.state(), SubmissionState::Idle);
            let form = controller.form();
            assert!(form.error_panel_visible);
            assert!(!form.success_panel_visible);
            assert!(!form.hidden);
            assert!(!form.submit.disabled);
            assert_eq!(form.submit.label, SUBMIT_LABEL);
            assert_eq!(
                form.snapshot(),
                FormSnapshot::new("A", "a@b.com", "123", "", None, "hi", false)
            );
        }

        #[tokio::test]
        async fn test_retry_after_failure_submits_again() {
            let mut mock = MockSubmitter::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| SubmissionOutcome::Failure("nettverk".to_string()));
            mock.expect_submit()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| SubmissionOutcome::Success);
            let mut controller = controller_with(mock, "A", "a@b.com", "123", "hi");

            submit(&mut controller);
            controller.wait_for_completion().await;
            assert!(controller.form().error_panel_visible);

            assert!(submit(&mut controller).0);
            controller.wait_for_completion().await;
            assert!(controller.form().success_panel_visible);
            assert!(!controller.form().error_panel_visible);
        }

        #[tokio::test]
        async fn test_poll_completion_applies_outcome() {
            let mut controller = controller_with(
                answers(SubmissionOutcome::Success),
                "A",
                "a@b.com",
                "123",
                "hi",
            );
            assert!(controller.poll_completion().is_none());
            submit(&mut controller);

            let mut outcome = None;
            for _ in 0..100 {
                tokio::task::yield_now().await;
                outcome = controller.poll_completion();
                if outcome.is_some() {
                    break;
                }
            }
            assert_eq!(outcome, Some(SubmissionOutcome::Success));
            assert!(controller.form().hidden);
        }
    }

    mod field_validation {
        use super::*;

        #[tokio::test]
        async fn test_blur_marks_and_input_clears() {
            let mut controller = controller_with(never_called(), "", "", "", "");
            assert!(!controller.validate_field(FieldId::Email));
            assert!(controller.form().field(FieldId::Email).invalid);

            controller
                .form_mut()
                .field_mut(FieldId::Email)
                .set_text("a@b.com");
            controller.on_input(FieldId::Email);
            assert!(!controller.form().field(FieldId::Email).invalid);
        }

        #[tokio::test]
        async fn test_input_on_valid_field_does_not_mark() {
            let mut controller = controller_with(never_called(), "", "", "", "");
            controller.form_mut().field_mut(FieldId::Email).set_text("a");
            controller.on_input(FieldId::Email);
            assert!(!controller.form().field(FieldId::Email).invalid);
        }
    }

    mod messages {
        use super::*;
        use std::time::Duration;

        #[tokio::test]
        async fn test_show_message_then_expire() {
            let mut controller = controller_with(never_called(), "", "", "", "");
            controller.show_message(MessageKind::Success, "Takk!");
            assert!(controller.form().banner.is_visible());

            controller.tick(Instant::now() + Duration::from_secs(6));
            assert!(!controller.form().banner.is_visible());
        }
    }
}
