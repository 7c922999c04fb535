// Contact form state: per-field validation and the submit lifecycle.
// Nothing here touches the DOM; the web layer feeds events in and renders
// whatever state comes back out.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    #[inline]
    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Callsign required")]
    NameRequired,
    #[error("Frequency required")]
    EmailRequired,
    #[error("Invalid frequency format (expected name@domain.tld)")]
    EmailFormat,
    #[error("Message required")]
    MessageRequired,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    #[inline]
    pub fn is_touched(self) -> bool {
        !matches!(self, FieldState::Untouched)
    }

    #[inline]
    pub fn error(self) -> Option<FieldError> {
        match self {
            FieldState::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

/// Loose `local@domain.tld` check: one `@`, no whitespace, a dot in the
/// domain with non-empty labels on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}

pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    match field {
        Field::Name if trimmed.is_empty() => Err(FieldError::NameRequired),
        Field::Message if trimmed.is_empty() => Err(FieldError::MessageRequired),
        Field::Email if trimmed.is_empty() => Err(FieldError::EmailRequired),
        Field::Email if !is_valid_email(trimmed) => Err(FieldError::EmailFormat),
        _ => Ok(()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        slot.clear();
        slot.push_str(value);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    /// Confirmation is showing; only a timer carrying the same token clears it.
    Sent { token: u32 },
}

/// Result of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Local validation failed; nothing is sent.
    Blocked(Vec<(Field, FieldError)>),
    /// A request is already outstanding.
    InFlight,
    /// Validation passed; hand these values to the mail relay.
    Ready(ContactValues),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Success => "Transmission successful. Message received.",
            Notice::Failure => "Transmission failed. Please try again.",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub values: ContactValues,
    fields: [FieldState; 3],
    status: SubmitStatus,
    next_token: u32,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn field(&self, field: Field) -> FieldState {
        self.fields[field.index()]
    }

    #[inline]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[inline]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    #[inline]
    pub fn is_sent(&self) -> bool {
        matches!(self.status, SubmitStatus::Sent { .. })
    }

    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .iter()
            .filter_map(|f| self.field(*f).error().map(|e| (*f, e)))
            .collect()
    }

    fn revalidate(&mut self, field: Field) -> FieldState {
        let state = match validate(field, self.values.get(field)) {
            Ok(()) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e),
        };
        self.fields[field.index()] = state;
        state
    }

    /// Keystroke: store the value, re-check only fields already touched.
    pub fn on_input(&mut self, field: Field, value: &str) -> FieldState {
        self.values.set(field, value);
        if self.field(field).is_touched() {
            self.revalidate(field)
        } else {
            FieldState::Untouched
        }
    }

    /// Blur or committed change: the field becomes touched.
    pub fn on_blur(&mut self, field: Field, value: &str) -> FieldState {
        self.values.set(field, value);
        self.revalidate(field)
    }

    pub fn on_change(&mut self, field: Field, value: &str) -> FieldState {
        self.on_blur(field, value)
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if self.is_sending() {
            return SubmitAttempt::InFlight;
        }
        for f in Field::ALL {
            self.revalidate(f);
        }
        let errors = self.errors();
        if !errors.is_empty() {
            return SubmitAttempt::Blocked(errors);
        }
        self.status = SubmitStatus::Sending;
        SubmitAttempt::Ready(self.values.clone())
    }

    /// Relay call succeeded: clear everything and show the confirmation.
    /// Returns the token the expiry timer must present.
    pub fn complete_success(&mut self) -> (Notice, u32) {
        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.values = ContactValues::default();
        self.fields = [FieldState::Untouched; 3];
        self.status = SubmitStatus::Sent { token };
        (Notice::Success, token)
    }

    /// Relay call failed: values stay for a retry.
    pub fn complete_failure(&mut self) -> Notice {
        self.status = SubmitStatus::Idle;
        Notice::Failure
    }

    /// Timer callback. Returns true if the confirmation was cleared.
    pub fn expire_sent(&mut self, token: u32) -> bool {
        match self.status {
            SubmitStatus::Sent { token: current } if current == token => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }
}
