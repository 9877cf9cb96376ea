//! Lead-capture form model: field values, validation and the submission
//! lifecycle. Rendering lives in `components::contact_form`.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config;
use crate::error::ValidationError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    BusinessName,
    Name,
    Email,
    Phone,
    Frustration,
    CurrentSite,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::BusinessName => "businessName",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Frustration => "frustration",
            Field::CurrentSite => "currentSite",
        }
    }
}

/// The visitor's biggest complaint about their current site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frustration {
    NoGoogle,
    Mobile,
    Bookings,
    Broken,
    Ai,
    Other,
}

impl Frustration {
    pub const ALL: [Frustration; 6] = [
        Frustration::NoGoogle,
        Frustration::Mobile,
        Frustration::Bookings,
        Frustration::Broken,
        Frustration::Ai,
        Frustration::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Frustration::NoGoogle => "no-google",
            Frustration::Mobile => "mobile",
            Frustration::Bookings => "bookings",
            Frustration::Broken => "broken",
            Frustration::Ai => "ai",
            Frustration::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frustration::NoGoogle => "\"No one finds us on Google\"",
            Frustration::Mobile => "\"Site looks dated on mobile\"",
            Frustration::Bookings => "\"No online bookings/enquiries\"",
            Frustration::Broken => "\"Took weeks to build, still broken\"",
            Frustration::Ai => "\"Want AI chat/booking but don't know how\"",
            Frustration::Other => "Other (we'll call you)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }
}

/// Raw form state exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub business_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub frustration: String,
    pub current_site: String,
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::BusinessName => self.business_name = value,
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Frustration => self.frustration = value,
            Field::CurrentSite => self.current_site = value,
        }
    }

    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<Lead, FieldErrors> {
        let mut errors = FieldErrors::default();

        if !has_min_chars(&self.business_name, 2) {
            errors.insert(Field::BusinessName, ValidationError::BusinessNameRequired);
        }
        if !has_min_chars(&self.name, 2) {
            errors.insert(Field::Name, ValidationError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, ValidationError::InvalidEmail);
        }
        let frustration = Frustration::from_value(self.frustration.trim());
        if frustration.is_none() {
            errors.insert(Field::Frustration, ValidationError::FrustrationRequired);
        }

        match frustration {
            Some(frustration) if errors.is_empty() => Ok(Lead {
                business_name: self.business_name.trim().to_string(),
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: optional(&self.phone),
                frustration,
                current_site: optional(&self.current_site),
            }),
            _ => Err(errors),
        }
    }
}

/// A validated lead, ready to hand to the submission handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub business_name: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub frustration: Frustration,
    pub current_site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let local = value.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
}

impl SubmissionState {
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmissionState::Pending)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionState::Pending => "Sending...",
            _ => "Get My Custom Quote (2 mins)",
        }
    }

    pub fn shows_success(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }
}

/// Everything the contact form tracks between renders.
///
/// `generation` counts accepted submissions so the delayed success clear
/// only applies to the submission that scheduled it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub form: LeadForm,
    pub errors: FieldErrors,
    /// Messages only appear once the visitor has tried to submit.
    pub attempted: bool,
    pub state: SubmissionState,
    generation: u32,
}

impl FormSession {
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.attempted {
            self.errors = self.form.validate().err().unwrap_or_default();
        }
    }

    /// Validates and moves to `Pending`. Returns the lead and the ticket to
    /// hand back to [`FormSession::clear_success`], or `None` when the
    /// submit is ignored or rejected.
    pub fn begin(&mut self) -> Option<(Lead, u32)> {
        if !self.state.can_submit() {
            return None;
        }
        self.attempted = true;
        match self.form.validate() {
            Ok(lead) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::Pending;
                self.generation = self.generation.wrapping_add(1);
                Some((lead, self.generation))
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        self.form = LeadForm::default();
        self.errors = FieldErrors::default();
        self.attempted = false;
        self.state = SubmissionState::Succeeded;
    }

    /// Returns to `Idle` unless a newer submission has started since.
    pub fn clear_success(&mut self, ticket: u32) -> bool {
        if ticket != self.generation || self.state != SubmissionState::Succeeded {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

/// Stand-in for a real backend. Waits, logs the payload and always succeeds.
pub async fn submit_lead(lead: &Lead) {
    gloo_timers::future::TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    match serde_json::to_string(lead) {
        Ok(payload) => gloo_console::log!("Form data:", payload),
        Err(e) => log::warn!("Could not serialise lead: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> LeadForm {
        LeadForm {
            business_name: "Joe's Coffee".to_string(),
            name: "Joe Smith".to_string(),
            email: "joe@joescoffee.co.uk".to_string(),
            phone: String::new(),
            frustration: "mobile".to_string(),
            current_site: "  ".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = LeadForm::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![Field::BusinessName, Field::Name, Field::Email, Field::Frustration]
        );
        assert_eq!(
            errors.message(Field::BusinessName).as_deref(),
            Some("Business name is required")
        );
        assert_eq!(errors.message(Field::Name).as_deref(), Some("Your name is required"));
        assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message(Field::Frustration).as_deref(),
            Some("Please select an option")
        );
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn each_required_field_fails_on_its_own() {
        let cases = [
            (Field::BusinessName, ValidationError::BusinessNameRequired),
            (Field::Name, ValidationError::NameRequired),
            (Field::Email, ValidationError::InvalidEmail),
            (Field::Frustration, ValidationError::FrustrationRequired),
        ];
        for (field, expected) in cases {
            let mut form = filled();
            form.set(field, String::new());
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.fields(), vec![field]);
            assert_eq!(errors.get(field), Some(expected));
        }
    }

    #[test]
    fn names_need_two_non_blank_characters() {
        let mut form = filled();
        form.name = " J ".to_string();
        form.business_name = "Zé".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Name]);
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "plainaddress",
            "@no-local.com",
            "joe@",
            "joe@domain",
            "joe@domain.c",
            "joe@@domain.com",
            ".joe@domain.com",
            "jo..e@domain.com",
            "joe.@domain.com",
            "joe@-domain.com",
            "joe@domain..com",
            "joe smith@domain.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
            let mut form = filled();
            form.email = email.to_string();
            assert_eq!(
                form.validate().unwrap_err().get(Field::Email),
                Some(ValidationError::InvalidEmail)
            );
        }
    }

    #[test]
    fn accepts_common_emails() {
        for email in [
            "joe@joescoffee.co.uk",
            "first.last+tag@example.com",
            "o'neil@pub-group.london",
            "  padded@example.org  ",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn unknown_frustration_is_rejected() {
        let mut form = filled();
        form.frustration = "pricing".to_string();
        assert_eq!(
            form.validate().unwrap_err().fields(),
            vec![Field::Frustration]
        );
    }

    #[test]
    fn valid_form_produces_trimmed_lead() {
        let mut form = filled();
        form.phone = " 020 7946 0123 ".to_string();
        let lead = form.validate().unwrap();
        assert_eq!(
            lead,
            Lead {
                business_name: "Joe's Coffee".to_string(),
                name: "Joe Smith".to_string(),
                email: "joe@joescoffee.co.uk".to_string(),
                phone: Some("020 7946 0123".to_string()),
                frustration: Frustration::Mobile,
                current_site: None,
            }
        );
    }

    #[test]
    fn lead_serialises_with_form_field_names() {
        let lead = filled().validate().unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["businessName"], "Joe's Coffee");
        assert_eq!(json["frustration"], "mobile");
        assert!(json["phone"].is_null());
    }

    #[test]
    fn frustration_values_round_trip() {
        for f in Frustration::ALL {
            assert_eq!(Frustration::from_value(f.value()), Some(f));
        }
        assert_eq!(Frustration::from_value(""), None);
    }

    #[test]
    fn pending_blocks_resubmission() {
        assert!(SubmissionState::Idle.can_submit());
        assert!(!SubmissionState::Pending.can_submit());
        assert!(SubmissionState::Succeeded.can_submit());
        assert_eq!(SubmissionState::Pending.button_label(), "Sending...");
        assert!(SubmissionState::Succeeded.shows_success());
        assert!(!SubmissionState::Idle.shows_success());
    }

    fn submitted_session() -> (FormSession, u32) {
        let mut session = FormSession {
            form: filled(),
            ..FormSession::default()
        };
        let (_, ticket) = session.begin().expect("filled form is accepted");
        (session, ticket)
    }

    #[test]
    fn invalid_submit_shows_errors_and_stays_idle() {
        let mut session = FormSession::default();
        assert!(session.begin().is_none());
        assert!(session.attempted);
        assert_eq!(session.state, SubmissionState::Idle);
        assert_eq!(session.errors.fields().len(), 4);
    }

    #[test]
    fn edits_revalidate_only_after_an_attempt() {
        let mut session = FormSession::default();
        session.edit(Field::Name, "J".to_string());
        assert!(session.errors.is_empty());

        session.begin();
        assert!(session.errors.get(Field::Name).is_some());
        session.edit(Field::Name, "Joe".to_string());
        assert!(session.errors.get(Field::Name).is_none());
        assert!(session.errors.get(Field::Email).is_some());
    }

    #[test]
    fn submit_while_pending_is_ignored() {
        let (mut session, _) = submitted_session();
        assert_eq!(session.state, SubmissionState::Pending);
        assert!(session.begin().is_none());
        assert_eq!(session.state, SubmissionState::Pending);
    }

    #[test]
    fn success_clears_the_form_then_returns_to_idle() {
        let (mut session, ticket) = submitted_session();
        session.succeed();
        assert_eq!(session.form, LeadForm::default());
        assert!(!session.attempted);
        assert!(session.errors.is_empty());
        assert!(session.state.shows_success());

        assert!(session.clear_success(ticket));
        assert_eq!(session.state, SubmissionState::Idle);
    }

    #[test]
    fn stale_clear_leaves_newer_success_visible() {
        let (mut session, first) = submitted_session();
        session.succeed();

        session.form = filled();
        let (_, second) = session.begin().expect("resubmit from success is allowed");
        session.succeed();

        assert!(!session.clear_success(first));
        assert!(session.state.shows_success());
        assert!(session.clear_success(second));
        assert_eq!(session.state, SubmissionState::Idle);
    }
}
