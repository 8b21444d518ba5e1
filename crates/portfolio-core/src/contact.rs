//! Contact form state machine.
//!
//! Submission is simulated locally (there is no backend): a valid submit is
//! accepted as pending and the host completes it after its fake latency,
//! while an invalid submit records per-field errors immediately. The host
//! also decides when the success/error status expires back to idle.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Id of the corresponding input element in the page.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Validation failure for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// What a submit attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid; the host owes a `complete_submission` after its delay.
    Accepted,
    /// Invalid; field errors are standing and status is `Error`.
    Rejected,
}

/// User-visible submission status driving the toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    errors: FnvHashMap<Field, &'static str>,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Store a field edit. Typing into a field retires its standing error.
    pub fn input(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.to_owned();
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Check every field without mutating anything.
    pub fn validate(&self) -> SmallVec<[FieldError; 4]> {
        let mut errors = SmallVec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name is required",
            });
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Email,
                message: "Email is required",
            });
        } else if !email_looks_valid(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Email is invalid",
            });
        }
        if self.subject.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Subject,
                message: "Subject is required",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message: "Message is required",
            });
        }
        errors
    }

    /// Attempt a submit. Values survive either way; only a completed
    /// submission clears them.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = self.validate();
        if errors.is_empty() {
            return SubmitOutcome::Accepted;
        }
        self.errors = errors.iter().map(|e| (e.field, e.message)).collect();
        self.status = SubmitStatus::Error;
        SubmitOutcome::Rejected
    }

    /// Land a previously accepted submit: wipe the form, show success.
    pub fn complete_submission(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.errors.clear();
        self.status = SubmitStatus::Success;
    }

    /// Expire the success/error toast back to idle.
    pub fn clear_status(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

/// Shape test for an email address: no whitespace, something before an `@`,
/// and an interior `.` with a non-empty tail somewhere after it.
pub fn email_looks_valid(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    email.char_indices().any(|(i, c)| {
        c == '@' && i > 0 && {
            let rest = &email[i + 1..];
            rest.char_indices()
                .any(|(j, d)| d == '.' && j > 0 && j + 1 < rest.len())
        }
    })
}
