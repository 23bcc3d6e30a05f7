use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use yew::functional::Reducible;

use crate::leads::envelope::{ContactEnvelope, DemoEnvelope};
use crate::leads::models::{ContactField, ContactInquiry, DemoField, DemoRequest, FieldErrors};
use crate::leads::validation::{validate_contact, validate_demo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// A field set one of the lead modals collects.
pub trait LeadFields: Clone + Default + PartialEq + 'static {
    type Field: Copy + Ord + fmt::Debug + 'static;
    type Envelope: Serialize;

    /// Shown as a blocking alert when the submission fails for any reason.
    const FAILURE_NOTICE: &'static str;

    fn value(&self, field: Self::Field) -> &str;
    fn set_value(&mut self, field: Self::Field, value: String);
    fn validate(&self) -> FieldErrors<Self::Field>;
    fn envelope(&self, captured_at: DateTime<Utc>) -> Self::Envelope;
}

impl LeadFields for ContactInquiry {
    type Field = ContactField;
    type Envelope = ContactEnvelope;

    const FAILURE_NOTICE: &'static str =
        "There was an error submitting your form. Please try again.";

    fn value(&self, field: ContactField) -> &str {
        self.get(field)
    }

    fn set_value(&mut self, field: ContactField, value: String) {
        self.set(field, value)
    }

    fn validate(&self) -> FieldErrors<ContactField> {
        validate_contact(self)
    }

    fn envelope(&self, captured_at: DateTime<Utc>) -> ContactEnvelope {
        ContactEnvelope::new(self, captured_at)
    }
}

impl LeadFields for DemoRequest {
    type Field = DemoField;
    type Envelope = DemoEnvelope;

    const FAILURE_NOTICE: &'static str =
        "There was an error submitting your demo request. Please try again.";

    fn value(&self, field: DemoField) -> &str {
        self.get(field)
    }

    fn set_value(&mut self, field: DemoField, value: String) {
        self.set(field, value)
    }

    fn validate(&self) -> FieldErrors<DemoField> {
        validate_demo(self)
    }

    fn envelope(&self, captured_at: DateTime<Utc>) -> DemoEnvelope {
        DemoEnvelope::new(self, captured_at)
    }
}

/// Tags one accepted `begin_submit`. Outcomes carrying any other id are dropped.
pub type SubmissionId = u64;

/// Values, inline errors and lifecycle phase of one open form.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm<L: LeadFields> {
    values: L,
    errors: FieldErrors<L::Field>,
    phase: FormPhase,
    submission: SubmissionId,
}

impl<L: LeadFields> Default for LeadForm<L> {
    fn default() -> Self {
        Self {
            values: L::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            submission: 0,
        }
    }
}

impl<L: LeadFields> LeadForm<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &L {
        &self.values
    }

    pub fn value(&self, field: L::Field) -> &str {
        self.values.value(field)
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors<L::Field> {
        &self.errors
    }

    pub fn error(&self, field: L::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Id of the most recent accepted submit.
    pub fn submission(&self) -> SubmissionId {
        self.submission
    }

    /// Updates one field and drops that field's error, leaving the rest alone.
    pub fn edit(&mut self, field: L::Field, value: String) {
        self.values.set_value(field, value);
        self.errors.remove(&field);
        if matches!(self.phase, FormPhase::Succeeded | FormPhase::Failed) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Validates the current values. Returns the snapshot to send when the
    /// form is clean, `None` when there are inline errors or a submission
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<L> {
        if self.is_submitting() {
            return None;
        }

        self.phase = FormPhase::Validating;
        self.errors = self.values.validate();

        if self.errors.is_empty() {
            self.phase = FormPhase::Submitting;
            self.submission = self.submission.wrapping_add(1);
            Some(self.values.clone())
        } else {
            self.phase = FormPhase::Editing;
            None
        }
    }

    /// Applies the outcome of request `id`. Ignored unless that request is
    /// still the one in flight.
    pub fn complete(&mut self, id: SubmissionId, succeeded: bool) -> FormPhase {
        if !self.is_submitting() || id != self.submission {
            return self.phase;
        }

        if succeeded {
            self.values = L::default();
            self.errors.clear();
            self.phase = FormPhase::Succeeded;
        } else {
            self.phase = FormPhase::Failed;
        }
        self.phase
    }

    /// Back to editing after the failure notice was shown. Values stay.
    pub fn resume_editing(&mut self) {
        if self.phase == FormPhase::Failed {
            self.phase = FormPhase::Editing;
        }
    }

    /// Empty form. The submission counter survives so that requests sent
    /// before the reset stay stale.
    pub fn reset(&mut self) {
        *self = Self {
            submission: self.submission,
            ..Self::default()
        };
    }
}

pub enum FormAction<F> {
    Edit(F, String),
    Submit,
    Finished { id: SubmissionId, succeeded: bool },
    ResumeEditing,
    Reset,
}

impl<L: LeadFields> Reducible for LeadForm<L> {
    type Action = FormAction<L::Field>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                next.begin_submit();
            }
            FormAction::Finished { id, succeeded } => {
                next.complete(id, succeeded);
            }
            FormAction::ResumeEditing => next.resume_editing(),
            FormAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::leads::client::testing::FakeTransport;
    use crate::leads::client::{SubmissionClient, SubmissionError};
    use crate::leads::models::{CompanyType, Region};
    use chrono::{Duration, TimeZone};
    use futures::executor::block_on;

    fn filled_contact() -> LeadForm<ContactInquiry> {
        let mut form = LeadForm::new();
        form.edit(ContactField::Name, "Jane Doe".to_string());
        form.edit(ContactField::PhoneNumber, "555-123-4567".to_string());
        form.edit(ContactField::Email, "jane@studio.io".to_string());
        form.edit(ContactField::Query, "Which ad networks do you support?".to_string());
        form
    }

    fn captured(offset_ms: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap() + Duration::milliseconds(offset_ms)
    }

    /// Drives one submit the way the modals do.
    fn submit_once<L: LeadFields>(
        form: &mut LeadForm<L>,
        client: &SubmissionClient<FakeTransport>,
        captured_at: DateTime<Utc>,
    ) -> FormPhase {
        let Some(snapshot) = form.begin_submit() else {
            return form.phase();
        };
        let id = form.submission();
        let outcome = block_on(client.submit(&snapshot.envelope(captured_at)));
        form.complete(id, outcome.is_ok())
    }

    fn client(replies: Vec<Result<serde_json::Value, SubmissionError>>) -> SubmissionClient<FakeTransport> {
        SubmissionClient::new(FakeTransport::replying(replies), config::SUBMISSION_ENDPOINT)
    }

    #[test]
    fn invalid_form_never_reaches_the_network() {
        let client = client(vec![]);
        let mut form = LeadForm::<ContactInquiry>::new();
        form.edit(ContactField::Query, "hi".to_string());

        assert_eq!(submit_once(&mut form, &client, captured(0)), FormPhase::Editing);
        assert_eq!(client.transport().calls(), 0);
        assert_eq!(form.error(ContactField::Query), Some("Query must be at least 10 characters long"));
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = LeadForm::<ContactInquiry>::new();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().len(), 4);

        form.edit(ContactField::Email, "j".to_string());
        assert_eq!(form.error(ContactField::Email), None);
        assert_eq!(form.error(ContactField::Name), Some("Name is required"));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn success_clears_every_field() {
        let client = client(vec![]);
        let mut form = filled_contact();

        assert_eq!(submit_once(&mut form, &client, captured(0)), FormPhase::Succeeded);
        assert_eq!(form.values(), &ContactInquiry::default());
        assert!(form.errors().is_empty());
        assert_eq!(client.transport().calls(), 1);
    }

    #[test]
    fn failure_keeps_what_the_user_typed() {
        let client = client(vec![Err(SubmissionError::Network("connection reset".into()))]);
        let mut form = filled_contact();
        let before = form.values().clone();

        assert_eq!(submit_once(&mut form, &client, captured(0)), FormPhase::Failed);
        assert_eq!(form.values(), &before);

        form.resume_editing();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.values(), &before);
    }

    #[test]
    fn every_failure_kind_is_treated_alike() {
        for err in [
            SubmissionError::Network("dns".into()),
            SubmissionError::ServerStatus(500),
            SubmissionError::Parse("expected value".into()),
        ] {
            let client = client(vec![Err(err)]);
            let mut form = filled_contact();
            assert_eq!(submit_once(&mut form, &client, captured(0)), FormPhase::Failed);
            assert_eq!(form.value(ContactField::Name), "Jane Doe");
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_contact();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn repeated_submissions_are_independent() {
        let client = client(vec![]);
        let mut first = filled_contact();
        let mut second = filled_contact();

        assert_eq!(submit_once(&mut first, &client, captured(0)), FormPhase::Succeeded);
        assert_eq!(submit_once(&mut second, &client, captured(1_250)), FormPhase::Succeeded);

        let sent = client.transport().sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].1["query"], sent[1].1["query"]);
        assert_ne!(sent[0].1["timestamp"], sent[1].1["timestamp"]);
    }

    #[test]
    fn demo_submission_sends_the_summary() {
        let client = client(vec![]);
        let mut form = LeadForm::<DemoRequest>::new();
        for (field, value) in [
            (DemoField::FirstName, "Jane"),
            (DemoField::LastName, "Doe"),
            (DemoField::WorkEmail, "jane@studio.io"),
            (DemoField::CompanyName, "Pixel Forge"),
            (DemoField::CompanyRole, "CTO"),
            (DemoField::Region, Region::Europe.label()),
            (DemoField::CompanyType, CompanyType::GameStudio.label()),
            (DemoField::Expectations, "Better fill rates"),
        ] {
            form.edit(field, value.to_string());
        }

        assert_eq!(submit_once(&mut form, &client, captured(0)), FormPhase::Succeeded);
        let sent = client.transport().sent.borrow();
        let query = sent[0].1["query"].as_str().unwrap_or_default().to_string();
        assert!(query.contains("Region: Europe"));
        assert!(query.contains("Company Type: Game Studio"));
        assert_eq!(sent[0].1["source"], "request_demo");
    }

    #[test]
    fn reducer_follows_the_same_lifecycle() {
        let form = Rc::new(filled_contact());
        let form = form.reduce(FormAction::Submit);
        assert!(form.is_submitting());
        let first = form.submission();

        let form = form.reduce(FormAction::Finished { id: first, succeeded: false });
        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.value(ContactField::Email), "jane@studio.io");

        let form = form.reduce(FormAction::ResumeEditing).reduce(FormAction::Submit);
        let second = form.submission();
        assert_ne!(first, second);
        let form = form.reduce(FormAction::Finished { id: second, succeeded: true });
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.value(ContactField::Email), "");

        let form = form.reduce(FormAction::Edit(ContactField::Name, "x".into()));
        assert_eq!(form.phase(), FormPhase::Editing);
        let form = form.reduce(FormAction::Reset);
        assert_eq!(form.values(), &ContactInquiry::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.submission(), second);
    }

    #[test]
    fn late_outcome_after_reset_is_ignored() {
        let mut form = filled_contact();
        assert!(form.begin_submit().is_some());
        let id = form.submission();
        form.reset();
        assert_eq!(form.complete(id, true), FormPhase::Editing);
    }

    #[test]
    fn outcome_of_a_dismissed_request_leaves_the_next_one_alone() {
        let mut form = filled_contact();
        assert!(form.begin_submit().is_some());
        let dismissed = form.submission();

        form.reset();
        form.edit(ContactField::Name, "John Roe".to_string());
        form.edit(ContactField::PhoneNumber, "(555) 987 6543".to_string());
        form.edit(ContactField::Email, "john@studio.io".to_string());
        form.edit(ContactField::Query, "Do you support app open ads?".to_string());
        assert!(form.begin_submit().is_some());
        let current = form.submission();

        assert_eq!(form.complete(dismissed, false), FormPhase::Submitting);
        assert_eq!(form.complete(dismissed, true), FormPhase::Submitting);
        assert_eq!(form.value(ContactField::Name), "John Roe");
        assert!(form.begin_submit().is_none());

        assert_eq!(form.complete(current, false), FormPhase::Failed);
        assert_eq!(form.value(ContactField::Name), "John Roe");
    }

    #[test]
    fn stale_finish_action_is_a_no_op_in_the_reducer() {
        let form = Rc::new(filled_contact()).reduce(FormAction::Submit);
        let dismissed = form.submission();
        let form = form
            .reduce(FormAction::Reset)
            .reduce(FormAction::Edit(ContactField::Name, "Jane Doe".into()))
            .reduce(FormAction::Edit(ContactField::PhoneNumber, "5551234567".into()))
            .reduce(FormAction::Edit(ContactField::Email, "jane@studio.io".into()))
            .reduce(FormAction::Edit(ContactField::Query, "Tell me about pricing".into()))
            .reduce(FormAction::Submit);
        assert!(form.is_submitting());

        let form = form.reduce(FormAction::Finished { id: dismissed, succeeded: true });
        assert!(form.is_submitting());
        assert_eq!(form.value(ContactField::Query), "Tell me about pricing");
    }
}
