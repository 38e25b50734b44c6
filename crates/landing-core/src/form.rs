//! Contact form state machine.
//!
//! [`transition`] is the only place state changes. It returns the next state
//! plus at most one [`Effect`] for the caller to run. [`ContactController`]
//! runs those effects against an injected [`SubmitHandler`].

use crate::constants::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS, SUCCESS_BANNER_DURATION};
use fnv::FnvHashMap;
use futures::future::LocalBoxFuture;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::RefCell;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Values handed to the submit handler once validation passes.
pub type ContactPayload = FormValues;

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    InvalidFormat,
    SubmissionFailed,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required."),
            FieldError::TooShort { min } => write!(f, "Must be at least {min} characters."),
            FieldError::InvalidFormat => write!(f, "Please enter a valid email address."),
            FieldError::SubmissionFailed => {
                write!(f, "Failed to send your message. Please try again.")
            }
        }
    }
}

pub type FieldErrors = FnvHashMap<Field, FieldError>;

fn check_min_chars(value: &str, min: usize) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required)
    } else if trimmed.chars().count() < min {
        Some(FieldError::TooShort { min })
    } else {
        None
    }
}

/// Validate all fields at once; an empty map means the form may be sent.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Some(e) = check_min_chars(&values.name, NAME_MIN_CHARS) {
        errors.insert(Field::Name, e);
    }
    if values.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !EMAIL_RE.is_match(&values.email) {
        errors.insert(Field::Email, FieldError::InvalidFormat);
    }
    if let Some(e) = check_min_chars(&values.message, MESSAGE_MIN_CHARS) {
        errors.insert(Field::Message, e);
    }
    errors
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted { remaining: Duration },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            status: FormStatus::Editing,
        }
    }
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FormStatus::Submitted { .. })
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("submission timed out")]
    Timeout,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    Edit { field: Field, value: String },
    Submit,
    SubmitResolved(Result<(), SubmitError>),
    Tick(Duration),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Hand the payload to the submit handler.
    Submit(ContactPayload),
    /// Clear the success banner after this long.
    ScheduleReset(Duration),
}

pub fn transition(state: FormState, event: FormEvent) -> (FormState, Option<Effect>) {
    let mut next = state;
    match event {
        FormEvent::Edit { field, value } => {
            next.values.set(field, value);
            next.errors.remove(&field);
            (next, None)
        }
        FormEvent::Submit => {
            if next.is_submitting() {
                log::debug!("[form] submit ignored, already in flight");
                return (next, None);
            }
            let errors = validate(&next.values);
            if !errors.is_empty() {
                log::debug!("[form] validation failed on {} field(s)", errors.len());
                next.errors = errors;
                next.status = FormStatus::Editing;
                return (next, None);
            }
            next.errors.clear();
            next.status = FormStatus::Submitting;
            let payload = next.values.clone();
            (next, Some(Effect::Submit(payload)))
        }
        FormEvent::SubmitResolved(result) => {
            if !next.is_submitting() {
                log::warn!("[form] resolution arrived while not submitting");
                return (next, None);
            }
            match result {
                Ok(()) => {
                    next.values = FormValues::default();
                    next.errors.clear();
                    next.status = FormStatus::Submitted {
                        remaining: SUCCESS_BANNER_DURATION,
                    };
                    (next, Some(Effect::ScheduleReset(SUCCESS_BANNER_DURATION)))
                }
                Err(e) => {
                    log::debug!("[form] submission failed: {e}");
                    next.errors.clear();
                    next.errors.insert(Field::Message, FieldError::SubmissionFailed);
                    next.status = FormStatus::Editing;
                    (next, None)
                }
            }
        }
        FormEvent::Tick(dt) => {
            if let FormStatus::Submitted { remaining } = next.status {
                let left = remaining.saturating_sub(dt);
                next.status = if left.is_zero() {
                    FormStatus::Editing
                } else {
                    FormStatus::Submitted { remaining: left }
                };
            }
            (next, None)
        }
    }
}

/// Milliseconds for a browser timer; saturates instead of wrapping.
pub fn timer_millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// Async sink for validated contact submissions.
pub trait SubmitHandler {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

impl<H: SubmitHandler + ?Sized> SubmitHandler for std::rc::Rc<H> {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        (**self).submit(payload)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAttempt {
    /// A submission is already in flight.
    Ignored,
    /// Validation failed; errors are on the state.
    Invalid,
    Sent { reset_after: Duration },
    Failed(SubmitError),
}

pub struct ContactController<H> {
    state: RefCell<FormState>,
    handler: H,
}

impl<H: SubmitHandler> ContactController<H> {
    pub fn new(handler: H) -> Self {
        Self {
            state: RefCell::new(FormState::default()),
            handler,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    fn dispatch(&self, event: FormEvent) -> Option<Effect> {
        let mut slot = self.state.borrow_mut();
        let current = std::mem::take(&mut *slot);
        let (next, effect) = transition(current, event);
        *slot = next;
        effect
    }

    pub fn edit(&self, field: Field, value: impl Into<String>) {
        self.dispatch(FormEvent::Edit {
            field,
            value: value.into(),
        });
    }

    pub fn tick(&self, dt: Duration) {
        self.dispatch(FormEvent::Tick(dt));
    }

    /// Await a pending submission from [`begin_submit`](Self::begin_submit)
    /// and always feed its outcome back, so the form cannot stay `Submitting`.
    pub async fn finish_submit(
        &self,
        pending: LocalBoxFuture<'static, Result<(), SubmitError>>,
    ) -> SubmitAttempt {
        let result = pending.await;
        self.resolve(result)
    }

    /// Synchronous half of a submit: validate and, when valid, enter
    /// `Submitting` and hand back the handler's pending future.
    pub fn begin_submit(
        &self,
    ) -> Result<LocalBoxFuture<'static, Result<(), SubmitError>>, SubmitAttempt> {
        match self.dispatch(FormEvent::Submit) {
            Some(Effect::Submit(payload)) => Ok(self.handler.submit(payload)),
            _ if self.state.borrow().is_submitting() => Err(SubmitAttempt::Ignored),
            _ => Err(SubmitAttempt::Invalid),
        }
    }

    /// Feed the handler's outcome back into the state machine.
    pub fn resolve(&self, result: Result<(), SubmitError>) -> SubmitAttempt {
        match self.dispatch(FormEvent::SubmitResolved(result.clone())) {
            Some(Effect::ScheduleReset(reset_after)) => SubmitAttempt::Sent { reset_after },
            _ => match result {
                Err(e) => SubmitAttempt::Failed(e),
                Ok(()) => SubmitAttempt::Ignored,
            },
        }
    }

    pub async fn submit(&self) -> SubmitAttempt {
        match self.begin_submit() {
            Ok(pending) => self.finish_submit(pending).await,
            Err(attempt) => attempt,
        }
    }
}
