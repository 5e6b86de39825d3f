//! Contact form state machine
//!
//! Submission is simulated: `begin_submit` moves the form to `Submitting`,
//! and the caller schedules `complete_submit` after [`SUBMIT_DELAY_MS`].
//! Completion always succeeds.

use serde::Serialize;

/// Simulated network latency of a submission
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// Self-reported trading experience
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Professional,
    Institutional,
}

impl ExperienceLevel {
    /// Option order in the select control
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Professional,
        ExperienceLevel::Institutional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Professional => "Professional",
            ExperienceLevel::Institutional => "Institutional",
        }
    }

    /// Parse a select option value; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field values of the form
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub level: ExperienceLevel,
}

impl FormState {
    /// Apply the same checks a browser performs for `required` and
    /// `type="email"` inputs. A text input's value is taken as-is, while an
    /// email input's value has surrounding whitespace stripped first.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_email_address(self.email.trim()) {
            return Err(ContactFormError::MalformedEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// `local@domain` with exactly one `@`, both sides non-empty, no whitespace
fn is_email_address(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Contact form errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Full name is required")]
    MissingName,

    #[error("Email address is required")]
    MissingEmail,

    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),

    #[error("Form cannot be submitted while {0:?}")]
    NotIdle(SubmissionStatus),
}

/// Form fields plus submission status
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub fields: FormState,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether the submit control is disabled
    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.fields.email = email.into();
    }

    pub fn set_level(&mut self, level: ExperienceLevel) {
        self.fields.level = level;
    }

    /// Idle -> Submitting, provided the fields are valid
    pub fn begin_submit(&mut self) -> Result<(), ContactFormError> {
        if self.status != SubmissionStatus::Idle {
            return Err(ContactFormError::NotIdle(self.status));
        }
        self.fields.validate()?;
        self.status = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Submitting -> Success with all fields reset.
    ///
    /// Returns false and leaves the form untouched when no submission is in
    /// flight.
    pub fn complete_submit(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = SubmissionStatus::Success;
        self.fields = FormState::default();
        true
    }

    /// Success -> Idle ("Send another"); no-op elsewhere
    pub fn send_another(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Jane Doe");
        form.set_email("jane@example.com");
        form.set_level(ExperienceLevel::Professional);
        form
    }

    #[test]
    fn test_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields.level, ExperienceLevel::Beginner);
        assert!(form.fields.name.is_empty());
        assert!(!form.is_busy());
    }

    #[test]
    fn test_full_submission_cycle() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.is_busy());
        // Fields stay visible while submitting
        assert_eq!(form.fields.name, "Jane Doe");

        assert!(form.complete_submit());
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields, FormState::default());

        form.send_another();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields.level, ExperienceLevel::Beginner);
    }

    #[test]
    fn test_required_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(ContactFormError::MissingName));

        form.set_name("Jane");
        assert_eq!(form.begin_submit(), Err(ContactFormError::MissingEmail));
        form.set_email("   ");
        assert_eq!(form.begin_submit(), Err(ContactFormError::MissingEmail));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_whitespace_name_satisfies_required() {
        let mut form = ContactForm::new();
        form.set_name("   ");
        form.set_email(" jane@example.com ");
        assert_eq!(form.begin_submit(), Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_malformed_email() {
        let mut form = filled();
        for bad in ["jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c"] {
            form.set_email(bad);
            assert_eq!(
                form.begin_submit(),
                Err(ContactFormError::MalformedEmail(bad.to_string())),
                "{bad}"
            );
        }
        form.set_email("jane@localhost");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(
            form.begin_submit(),
            Err(ContactFormError::NotIdle(SubmissionStatus::Submitting))
        );
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut form = filled();
        assert!(!form.complete_submit());
        assert_eq!(form.fields.name, "Jane Doe");

        form.begin_submit().unwrap();
        assert!(form.complete_submit());
        assert!(!form.complete_submit());
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_send_another_only_from_success() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.send_another();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_level_parse() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(ExperienceLevel::parse("expert"), None);
    }

    #[test]
    fn test_level_serde_matches_option_value() {
        let json = serde_json::to_string(&ExperienceLevel::Institutional).unwrap();
        assert_eq!(json, "\"Institutional\"");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactFormError::MalformedEmail("x".into()).to_string(),
            "'x' is not a valid email address"
        );
        assert_eq!(
            ContactFormError::NotIdle(SubmissionStatus::Success).to_string(),
            "Form cannot be submitted while Success"
        );
    }
}
