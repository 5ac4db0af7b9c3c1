//! Contact form state machine and the submission flow.
//!
//! Field edits clear that field's error immediately; errors are recomputed
//! only on blur or on submit. Each accepted submission starts a new epoch,
//! and resolution and auto-dismissal carry the epoch they belong to, so a
//! stale dismissal timer can never reset a newer submission.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::SendError;
use crate::validate::{validate_all, validate_field, Field, FieldErrors, FormValues};

/// How long a success or error banner stays up.
pub const DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Artificial latency of [`SimulatedSender`].
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_secs(2);

/// Lifecycle of a send attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// The payload handed to the send collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormValues> for ContactMessage {
    fn from(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            subject: values.subject.clone(),
            message: values.message.clone(),
        }
    }
}

/// Proof that a submission was accepted, tied to its epoch.
#[derive(Debug)]
pub struct SubmitTicket {
    epoch: u64,
    message: ContactMessage,
}

impl SubmitTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }
}

/// Permission to return a resolved submission to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    epoch: u64,
}

impl DismissTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Why `begin_submit` refused to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Field values, per-field errors, focus and submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: FormValues,
    errors: FieldErrors,
    focused: Option<Field>,
    status: SubmissionStatus,
    submitting: bool,
    epoch: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused == Some(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The submit control is enabled only when nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Sets a raw value and drops any recorded error for that field.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.errors.remove(&field).is_some() {
            debug!(%field, "Cleared field error on edit");
        }
    }

    pub fn focus_field(&mut self, field: Field) {
        self.focused = Some(field);
    }

    /// Validates the field and records the result as its error.
    pub fn blur_field(&mut self, field: Field) {
        match validate_field(field, self.values.get(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Validates every field and, if all pass, enters `Submitting`.
    ///
    /// On failure all errors are stored and the status is left untouched.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        let errors = validate_all(&self.values);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Submission blocked by validation");
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        self.errors.clear();
        self.epoch += 1;
        self.submitting = true;
        self.status = SubmissionStatus::Submitting;
        info!(epoch = self.epoch, "Submitting contact message");
        Ok(SubmitTicket {
            epoch: self.epoch,
            message: ContactMessage::from(&self.values),
        })
    }

    /// Records the outcome of a send. Returns the ticket for the matching
    /// auto-dismissal, or `None` if the ticket is stale.
    pub fn resolve(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), SendError>,
    ) -> Option<DismissTicket> {
        if ticket.epoch != self.epoch {
            debug!(ticket = ticket.epoch, current = self.epoch, "Ignoring stale submission result");
            return None;
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                self.values = FormValues::default();
                self.status = SubmissionStatus::Success;
                info!(epoch = self.epoch, "Contact message sent");
            }
            Err(e) => {
                // The draft is kept so the user can retry.
                self.status = SubmissionStatus::Error;
                warn!(epoch = self.epoch, error = %e, "Contact message failed");
            }
        }
        Some(DismissTicket { epoch: self.epoch })
    }

    /// Returns a resolved submission to idle if the ticket is still current.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        let resolved = matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        );
        if ticket.epoch != self.epoch || !resolved {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        debug!(epoch = self.epoch, "Submission banner dismissed");
        true
    }
}

/// External "send contact message" collaborator.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError>;
}

#[async_trait]
impl<T: MessageSender + ?Sized> MessageSender for Arc<T> {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        (**self).send(message).await
    }
}

/// Stand-in transport that always succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(SIMULATED_SEND_DELAY)
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        tokio::time::sleep(self.delay).await;
        info!(from = %message.email, subject = %message.subject, "Simulated message delivery");
        Ok(())
    }
}

/// Shared storage the submission flow reads and writes the form through.
pub trait FormCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for Arc<Mutex<ContactForm>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut *self.lock())
    }
}

/// Carries an accepted submission to completion: sends it, records the
/// outcome, waits `dismiss_delay` and returns the form to idle.
///
/// The dismissal only applies while no newer submission has started.
/// Returns the resolved status, or `None` if the ticket was already stale.
pub async fn deliver<C, M>(
    mut cell: C,
    sender: M,
    ticket: SubmitTicket,
    dismiss_delay: Duration,
) -> Option<SubmissionStatus>
where
    C: FormCell,
    M: MessageSender,
{
    let epoch = ticket.epoch();
    let result = sender.send(ticket.message()).await;
    let (dismiss, status) = cell.update(|form| {
        let dismiss = form.resolve(ticket, result);
        (dismiss, form.status())
    });
    let dismiss = dismiss?;

    tokio::time::sleep(dismiss_delay).await;
    if !cell.update(|form| form.dismiss(dismiss)) {
        debug!(epoch, "Superseded before its banner was dismissed");
    }
    Some(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{EMAIL_ERROR, NAME_ERROR};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Richie");
        form.update_field(Field::Email, "richie@example.com");
        form.update_field(Field::Subject, "Hello there");
        form.update_field(Field::Message, "Let's build something together.");
        form
    }

    #[test]
    fn test_blur_records_and_edit_clears() {
        let mut form = ContactForm::new();
        form.focus_field(Field::Name);
        form.update_field(Field::Name, "A");
        form.blur_field(Field::Name);
        assert_eq!(form.error(Field::Name), Some(NAME_ERROR));
        assert_eq!(form.focused(), None);

        // Still too short, but editing alone clears the error.
        form.update_field(Field::Name, "B");
        assert_eq!(form.error(Field::Name), None);
        form.blur_field(Field::Name);
        assert_eq!(form.error(Field::Name), Some(NAME_ERROR));
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = filled();
        form.update_field(Field::Email, "nope");
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, SubmitRejected::Invalid(FieldErrors::from([(Field::Email, EMAIL_ERROR)])));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.is_submitting());
        assert_eq!(form.error(Field::Email), Some(EMAIL_ERROR));
        assert_eq!(form.epoch(), 0);
    }

    #[test]
    fn test_second_begin_while_in_flight_is_rejected() {
        let mut form = filled();
        let _ticket = form.begin_submit().unwrap();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::InFlight);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        let dismiss = form
            .resolve(ticket, Err(SendError::Transport("offline".into())))
            .unwrap();
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Name), "Richie");
        assert!(form.dismiss(dismiss));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        let first = form.resolve(ticket, Ok(())).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.values().is_empty());

        let mut form2 = form.clone();
        form2.update_field(Field::Name, "Richie");
        form2.update_field(Field::Email, "richie@example.com");
        form2.update_field(Field::Subject, "Again");
        form2.update_field(Field::Message, "A second message body.");
        let _second = form2.begin_submit().unwrap();

        // The first banner's timer fires during the second submission.
        assert!(!form2.dismiss(first));
        assert_eq!(form2.status(), SubmissionStatus::Submitting);
    }
}
