use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use regex::Regex;
use thiserror::Error;
use tracing::info;

/// Errors raised by the contact form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Form field '{field}' failed validation")]
    InvalidField { field: &'static str },

    #[error("A submission is already in progress")]
    SubmissionInProgress,
}

/// The fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// Resolve a field name coming off an input event
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FieldKind::Name),
            "email" => Some(FieldKind::Email),
            "message" => Some(FieldKind::Message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Message => "message",
        }
    }
}

/// Validation outcome for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

/// Per-field validation rules
pub struct FieldValidator {
    email: Regex,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self { email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid") }
    }

    /// Email fields must match the address pattern; everything else must be
    /// non-empty after trimming
    pub fn validate(&self, kind: FieldKind, value: &str) -> FieldStatus {
        let valid = match kind {
            FieldKind::Email => self.email.is_match(value),
            _ => !value.trim().is_empty(),
        };

        if valid { FieldStatus::Valid } else { FieldStatus::Invalid }
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase of the simulated submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Sent,
}

/// Delays of the simulated submission flow
#[derive(Debug, Clone, Copy)]
pub struct SubmitTiming {
    /// Time spent in `Sending` before the submission "completes"
    pub send_delay: Duration,

    /// Time the success state is held before the form resets
    pub reset_delay: Duration,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self { send_delay: Duration::from_millis(1500), reset_delay: Duration::from_millis(2000) }
    }
}

/// Contact form state: field values, their validation, and the submission
/// phase
pub struct ContactForm {
    validator: FieldValidator,
    values: HashMap<FieldKind, String>,
    state: SubmitState,
    timing: SubmitTiming,
}

impl ContactForm {
    pub fn new(timing: SubmitTiming) -> Self {
        Self { validator: FieldValidator::new(), values: HashMap::new(), state: SubmitState::Idle, timing }
    }

    /// Record input on a field and validate it
    pub fn input(&mut self, kind: FieldKind, value: &str) -> FieldStatus {
        self.values.insert(kind, value.to_string());
        self.validator.validate(kind, value)
    }

    /// Current value of a field
    pub fn value(&self, kind: FieldKind) -> &str {
        self.values.get(&kind).map_or("", String::as_str)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Validate every field, reporting the first failure
    pub fn validate_all(&self) -> Result<(), FormError> {
        for kind in FieldKind::ALL {
            if self.validator.validate(kind, self.value(kind)) == FieldStatus::Invalid {
                return Err(FormError::InvalidField { field: kind.name() });
            }
        }
        Ok(())
    }
}

/// Run the simulated submission flow
///
/// Validates the form, then walks Idle → Sending → Sent → Idle on the Tokio
/// clock, reporting each transition to the observer. The form resets (values
/// cleared) when the flow completes.
pub async fn submit<F>(form: &Mutex<ContactForm>, mut on_state: F) -> Result<(), FormError>
where
    F: FnMut(SubmitState),
{
    let timing = {
        let mut locked = form.lock();
        locked.validate_all()?;
        if locked.state != SubmitState::Idle {
            return Err(FormError::SubmissionInProgress);
        }
        locked.state = SubmitState::Sending;
        locked.timing
    };
    on_state(SubmitState::Sending);
    info!("Contact form submission started");

    tokio::time::sleep(timing.send_delay).await;
    form.lock().state = SubmitState::Sent;
    on_state(SubmitState::Sent);
    info!("Contact form submission confirmed");

    tokio::time::sleep(timing.reset_delay).await;
    {
        let mut locked = form.lock();
        locked.state = SubmitState::Idle;
        locked.values.clear();
    }
    on_state(SubmitState::Idle);

    Ok(())
}
