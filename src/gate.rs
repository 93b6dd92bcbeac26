use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::domain::{ContactSubmission, FieldErrors};
use crate::forwarder::{FormForwarder, ForwardError};

/// How long a successful submission stays on screen before the form wipes
/// itself and asks to be closed.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// Where one submission attempt currently stands. `Succeeded` and `Failed`
/// only return to `Idle` through an explicit reset (close or the success
/// timer); no other transition order is reachable.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(FieldErrors),
}

/// What `submit` decided to do with one attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend accepted the submission.
    Delivered,
    /// The backend turned it down; the mapping says why, per field.
    Rejected(FieldErrors),
    /// The honeypot tripped. Nothing was sent, nobody is told.
    Discarded,
    /// Another attempt was already in flight on this instance.
    Ignored,
}

/// Emitted when the presentation hosting the form should close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSignal {
    Close,
}

/// The draft the user typed, kept so a reset can wipe it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactSubmission> for ContactFields {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            full_name: submission.name.as_ref().to_string(),
            email: submission.email.clone(),
            subject: submission.subject.as_str().to_string(),
            message: submission.message.as_ref().to_string(),
        }
    }
}

struct FormInner {
    fields: ContactFields,
    state: SubmissionState,
    reset_timer: Option<JoinHandle<()>>,
    // Bumped on close so a submission resolving afterwards cannot touch
    // an instance the user already dismissed.
    generation: u64,
}

/// One contact-form instance: lives for a single user interaction, owns its
/// own state, and is the only thing allowed to mutate it. Constructed fresh
/// each time the form is opened.
pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
    forwarder: FormForwarder,
    signals: UnboundedSender<FormSignal>,
}

impl ContactForm {
    pub fn new(forwarder: FormForwarder) -> (Self, UnboundedReceiver<FormSignal>) {
        let (signals, receiver) = mpsc::unbounded_channel();
        let form = Self {
            inner: Arc::new(Mutex::new(FormInner {
                fields: ContactFields::default(),
                state: SubmissionState::Idle,
                reset_timer: None,
                generation: 0,
            })),
            forwarder,
            signals,
        };
        (form, receiver)
    }

    /// Run one submission attempt through the gate.
    ///
    /// Honeypot first: a filled trap means the submission never leaves this
    /// process. The rejection is silent so automation learns nothing from it.
    pub async fn submit(&self, submission: ContactSubmission) -> SubmissionOutcome {
        if submission.is_suspected_automation() {
            tracing::info!("Honeypot tripped; discarding automated submission.");
            let _ = self.signals.send(FormSignal::Close);
            return SubmissionOutcome::Discarded;
        }

        let generation = {
            let mut inner = self.lock();
            if inner.state == SubmissionState::Submitting {
                return SubmissionOutcome::Ignored;
            }
            inner.state = SubmissionState::Submitting;
            inner.fields = ContactFields::from(&submission);
            inner.generation
        };

        let outcome = match self.forwarder.forward(&submission).await {
            Ok(()) => SubmissionOutcome::Delivered,
            Err(ForwardError::Rejected(errors)) => SubmissionOutcome::Rejected(errors),
            Err(ForwardError::Transport(error)) => {
                tracing::error!("Failed to reach the form backend: {:?}", error);
                SubmissionOutcome::Rejected(FieldErrors::form_wide(
                    "We could not send your message. Please try again later.",
                ))
            }
        };

        let mut inner = self.lock();
        if inner.generation != generation {
            // The form was closed while the request was in flight. The
            // backend has the submission either way; the dismissed instance
            // stays untouched.
            return outcome;
        }
        match &outcome {
            SubmissionOutcome::Delivered => {
                inner.state = SubmissionState::Succeeded;
                inner.reset_timer = Some(self.schedule_reset());
            }
            SubmissionOutcome::Rejected(errors) => {
                inner.state = SubmissionState::Failed(errors.clone());
            }
            SubmissionOutcome::Discarded | SubmissionOutcome::Ignored => unreachable!(),
        }
        outcome
    }

    /// Dismiss the form: cancel any pending reset, wipe the draft, return to
    /// `Idle`. Safe to call on every exit path, any number of times.
    pub fn close(&self) {
        let mut inner = self.lock();
        if let Some(timer) = inner.reset_timer.take() {
            timer.abort();
        }
        inner.fields = ContactFields::default();
        inner.state = SubmissionState::Idle;
        inner.generation += 1;
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    pub fn fields(&self) -> ContactFields {
        self.lock().fields.clone()
    }

    fn schedule_reset(&self) -> JoinHandle<()> {
        let inner: Weak<Mutex<FormInner>> = Arc::downgrade(&self.inner);
        let signals = self.signals.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_RESET_DELAY).await;
            // A dropped form means there is nothing left to reset.
            if let Some(inner) = inner.upgrade() {
                if let Ok(mut inner) = inner.lock() {
                    inner.fields = ContactFields::default();
                    inner.state = SubmissionState::Idle;
                    inner.reset_timer = None;
                }
                let _ = signals.send(FormSignal::Close);
            }
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FormInner> {
        // Never held across an await; poisoning would mean a panic while
        // mutating plain fields.
        self.inner.lock().expect("Contact form state lock poisoned.")
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(timer) = inner.reset_timer.take() {
                timer.abort();
            }
        }
    }
}
