//! Contact form submission on the Dioxus runtime.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::{deliver, ContactForm, FormCell, MessageSender, SimulatedSender, SubmitRejected};

use crate::settings;

/// Contact form state and its pending submission task.
#[derive(Clone, Copy, PartialEq)]
pub struct ContactState {
    pub form: Signal<ContactForm>,
    /// Send-then-dismiss task of the latest accepted submission.
    task: Signal<Option<Task>>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: Signal::new(ContactForm::new()),
            task: Signal::new(None),
        }
    }

    /// Submits with the simulated transport from the site configuration.
    pub fn submit(&mut self) {
        let config = settings::site_config();
        self.submit_with(SimulatedSender::new(config.submit_delay()), config.dismiss_delay());
    }

    /// Validates and, if accepted, delivers the message in the background.
    /// A previous submission's pending dismissal is cancelled first.
    pub fn submit_with<M: MessageSender + 'static>(&mut self, sender: M, dismiss_delay: Duration) {
        let ticket = match self.form.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(SubmitRejected::InFlight) => return,
            Err(SubmitRejected::Invalid(errors)) => {
                tracing::debug!(fields = errors.len(), "Contact form has errors");
                return;
            }
        };

        if let Some(previous) = self.task.write().take() {
            previous.cancel();
        }

        let cell = SignalForm(self.form);
        let task = spawn(async move {
            deliver(cell, sender, ticket, dismiss_delay).await;
        });
        self.task.set(Some(task));
    }
}

/// The form signal as the cell the core submission flow writes through.
struct SignalForm(Signal<ContactForm>);

impl FormCell for SignalForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut *self.0.write())
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}
