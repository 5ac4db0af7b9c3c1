use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::validate::{MESSAGE_ERROR, NAME_ERROR};
use folio_core::*;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

type SharedForm = Arc<Mutex<ContactForm>>;

fn filled(subject: &str) -> SharedForm {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    refill(&form, subject);
    form
}

fn refill(form: &SharedForm, subject: &str) {
    let mut form = form.lock();
    form.update_field(Field::Name, "Richie");
    form.update_field(Field::Email, "richie@example.com");
    form.update_field(Field::Subject, subject);
    form.update_field(Field::Message, "Would love to collaborate on a project.");
}

fn status(form: &SharedForm) -> SubmissionStatus {
    form.lock().status()
}

/// Begins a submission on the form and delivers it in the background,
/// the same two steps the contact section performs.
fn submit<M: MessageSender + 'static>(
    form: &SharedForm,
    sender: M,
    dismiss_delay: Duration,
) -> Result<JoinHandle<Option<SubmissionStatus>>, SubmitRejected> {
    let ticket = form.lock().begin_submit()?;
    Ok(tokio::spawn(deliver(Arc::clone(form), sender, ticket, dismiss_delay)))
}

struct OfflineSender;

#[async_trait]
impl MessageSender for OfflineSender {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SendError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Err(SendError::Transport("network unreachable".into()))
    }
}

// ----------------------------------------------------------------------------
// Successful submission
// ----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_success_clears_fields_and_returns_to_idle() {
    let form = filled("Project inquiry");
    let handle = submit(&form, SimulatedSender::default(), DISMISS_DELAY).unwrap();
    tokio::task::yield_now().await;

    assert_eq!(status(&form), SubmissionStatus::Submitting);
    assert!(!form.lock().can_submit());

    // The simulated send takes two seconds.
    tokio::time::sleep(Duration::from_millis(2_001)).await;
    {
        let snapshot = form.lock();
        assert_eq!(snapshot.status(), SubmissionStatus::Success);
        assert!(snapshot.values().is_empty());
        assert!(snapshot.can_submit());
    }

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(status(&form), SubmissionStatus::Success);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(status(&form), SubmissionStatus::Idle);
    assert_eq!(handle.await.unwrap(), Some(SubmissionStatus::Success));
}

#[tokio::test(start_paused = true)]
async fn test_stale_dismissal_does_not_reset_newer_banner() {
    let form = filled("First message");
    let first = submit(&form, SimulatedSender::new(Duration::ZERO), DISMISS_DELAY).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(status(&form), SubmissionStatus::Success);

    // Two seconds into the first banner, send again. The first delivery is
    // left running so its timer really fires.
    tokio::time::sleep(Duration::from_secs(2)).await;
    refill(&form, "Second message");
    let second = submit(&form, SimulatedSender::new(Duration::ZERO), DISMISS_DELAY).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(status(&form), SubmissionStatus::Success);

    // First timer fires at ~5s and must be ignored.
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert!(first.is_finished());
    assert_eq!(first.await.unwrap(), Some(SubmissionStatus::Success));
    assert_eq!(status(&form), SubmissionStatus::Success);

    // Second timer fires at ~7s.
    tokio::time::sleep(Duration::from_millis(1_600)).await;
    assert_eq!(status(&form), SubmissionStatus::Idle);
    assert_eq!(second.await.unwrap(), Some(SubmissionStatus::Success));
    assert_eq!(form.lock().epoch(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_dismiss_delay() {
    let form = filled("Quick one");
    let handle = submit(
        &form,
        SimulatedSender::new(Duration::ZERO),
        Duration::from_millis(10),
    )
    .unwrap();

    assert_eq!(handle.await.unwrap(), Some(SubmissionStatus::Success));
    assert_eq!(status(&form), SubmissionStatus::Idle);
}

// ----------------------------------------------------------------------------
// Rejected and failed submissions
// ----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_invalid_submission_never_leaves_idle() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    {
        let mut form = form.lock();
        form.update_field(Field::Name, "R");
        form.update_field(Field::Email, "richie@example.com");
        form.update_field(Field::Subject, "Hello");
        form.update_field(Field::Message, "too short");
    }

    let err = submit(&form, SimulatedSender::default(), DISMISS_DELAY).unwrap_err();
    let errors = match err {
        SubmitRejected::Invalid(errors) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert_eq!(errors.get(&Field::Name), Some(&NAME_ERROR));
    assert_eq!(errors.get(&Field::Message), Some(&MESSAGE_ERROR));

    tokio::time::sleep(Duration::from_secs(10)).await;
    let snapshot = form.lock();
    assert_eq!(snapshot.status(), SubmissionStatus::Idle);
    assert_eq!(snapshot.epoch(), 0);
    assert_eq!(snapshot.value(Field::Subject), "Hello");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submit_is_rejected() {
    let form = filled("Only once");
    let first = submit(&form, SimulatedSender::default(), DISMISS_DELAY).unwrap();
    tokio::task::yield_now().await;

    let err = submit(&form, SimulatedSender::default(), DISMISS_DELAY).unwrap_err();
    assert_eq!(err, SubmitRejected::InFlight);
    assert_eq!(first.await.unwrap(), Some(SubmissionStatus::Success));
    assert_eq!(form.lock().epoch(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_keeps_draft() {
    let form = filled("Will this arrive?");
    let handle = submit(&form, OfflineSender, DISMISS_DELAY).unwrap();

    tokio::time::sleep(Duration::from_millis(501)).await;
    {
        let snapshot = form.lock();
        assert_eq!(snapshot.status(), SubmissionStatus::Error);
        assert_eq!(snapshot.value(Field::Subject), "Will this arrive?");
        assert!(snapshot.can_submit());
    }

    tokio::time::sleep(DISMISS_DELAY).await;
    assert_eq!(status(&form), SubmissionStatus::Idle);
    assert_eq!(handle.await.unwrap(), Some(SubmissionStatus::Error));
}

// ----------------------------------------------------------------------------
// Field editing
// ----------------------------------------------------------------------------

#[test]
fn test_first_keystroke_clears_existing_error() {
    let mut form = ContactForm::new();
    form.update_field(Field::Message, "short");
    form.blur_field(Field::Message);
    assert_eq!(form.error(Field::Message), Some(MESSAGE_ERROR));

    form.focus_field(Field::Message);
    form.update_field(Field::Message, "short!");
    assert_eq!(form.error(Field::Message), None);
    for text in ["short!!", "short!!!", "s"] {
        form.update_field(Field::Message, text);
        assert_eq!(form.error(Field::Message), None);
    }
    assert!(form.is_focused(Field::Message));
}
