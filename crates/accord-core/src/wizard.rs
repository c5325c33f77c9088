//! Contract creation wizard.
//!
//! Five ordered steps gate forward movement on a per-step predicate over
//! the draft. Predicates look only at the draft, never at how the user got
//! there, so retreating and editing can never leave a stale "valid" flag.

use crate::error::{AccordError, StepViolation};
use crate::format::format_amount;
use crate::marketplace::featured_guarantors;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info};
use uuid::Uuid;

pub const TOTAL_STEPS: u8 = 5;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("email pattern compiles"));

// ── Catalogues ───────────────────────────────────────────────────────

/// Role the user plays in the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    ContractingParty,
    LegalRepresentative,
    FinancialGuarantor,
    AgentRealtor,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        Self::ContractingParty,
        Self::LegalRepresentative,
        Self::FinancialGuarantor,
        Self::AgentRealtor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContractingParty => "contracting-party",
            Self::LegalRepresentative => "legal-representative",
            Self::FinancialGuarantor => "financial-guarantor",
            Self::AgentRealtor => "agent-realtor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ContractingParty => "Contracting Party",
            Self::LegalRepresentative => "Legal Representative",
            Self::FinancialGuarantor => "Private Financial Guarantor",
            Self::AgentRealtor => "Agent/Realtor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ContractingParty => {
                "Direct party to the contract with full rights and obligations"
            }
            Self::LegalRepresentative => "Lawyer or legal entity representing one of the parties",
            Self::FinancialGuarantor => {
                "Third party providing financial guarantees for the contract"
            }
            Self::AgentRealtor => "Intermediary acting on behalf of one of the parties",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractKind {
    Property,
    Vehicle,
    Service,
    Freelance,
}

impl ContractKind {
    pub const ALL: [ContractKind; 4] = [
        Self::Property,
        Self::Vehicle,
        Self::Service,
        Self::Freelance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Property => "Property Rental",
            Self::Vehicle => "Vehicle Rental",
            Self::Service => "Service Agreement",
            Self::Freelance => "Freelance Contract",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractDuration {
    #[serde(rename = "1-month")]
    OneMonth,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "custom")]
    Custom,
}

impl ContractDuration {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1-month",
            Self::ThreeMonths => "3-months",
            Self::SixMonths => "6-months",
            Self::OneYear => "1-year",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentTerms {
    Monthly,
    Quarterly,
    OneTime,
    Milestone,
}

impl PaymentTerms {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::OneTime => "one-time",
            Self::Milestone => "milestone",
        }
    }
}

/// An attached file, by reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHandle {
    pub name: String,
    pub size_bytes: u64,
}

impl DocumentHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

// ── Draft ────────────────────────────────────────────────────────────

/// In-progress contract form. Empty selections are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardDraft {
    pub user_role: Option<UserRole>,
    #[serde(rename = "type")]
    pub contract_type: Option<ContractKind>,
    pub title: String,
    pub description: String,
    pub duration: Option<ContractDuration>,
    pub payment_terms: Option<PaymentTerms>,
    /// Raw text as typed.
    pub amount: String,
    pub counterparty: String,
    pub counterparty_email: String,
    pub use_guarantor: bool,
    pub selected_guarantor: Option<String>,
    pub documents: Vec<DocumentHandle>,
}

/// A single-field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    UserRole(UserRole),
    ContractType(ContractKind),
    Title(String),
    Description(String),
    Duration(ContractDuration),
    PaymentTerms(PaymentTerms),
    Amount(String),
    Counterparty(String),
    CounterpartyEmail(String),
    UseGuarantor(bool),
    SelectedGuarantor(String),
}

impl WizardDraft {
    pub fn apply(&mut self, field: DraftField) -> Result<(), AccordError> {
        match field {
            DraftField::UserRole(role) => self.user_role = Some(role),
            DraftField::ContractType(kind) => self.contract_type = Some(kind),
            DraftField::Title(title) => self.title = title,
            DraftField::Description(description) => self.description = description,
            DraftField::Duration(duration) => self.duration = Some(duration),
            DraftField::PaymentTerms(terms) => self.payment_terms = Some(terms),
            DraftField::Amount(amount) => self.amount = amount,
            DraftField::Counterparty(name) => self.counterparty = name,
            DraftField::CounterpartyEmail(email) => self.counterparty_email = email,
            DraftField::UseGuarantor(flag) => self.use_guarantor = flag,
            DraftField::SelectedGuarantor(id) => {
                if !is_featured_guarantor(&id) {
                    return Err(AccordError::unknown_token("guarantor", id));
                }
                self.selected_guarantor = Some(id);
            }
        }
        Ok(())
    }

    fn guarantor_name(&self) -> Option<String> {
        let id = self.selected_guarantor.as_deref()?;
        featured_guarantors()
            .into_iter()
            .find(|g| g.id == id)
            .map(|g| g.name)
    }
}

// ── Validation ───────────────────────────────────────────────────────

fn is_featured_guarantor(id: &str) -> bool {
    featured_guarantors().iter().any(|g| g.id == id)
}

fn check_amount(input: &str) -> Result<f64, StepViolation> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StepViolation::MissingAmount);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| StepViolation::MalformedAmount)?;
    if !value.is_finite() {
        return Err(StepViolation::MalformedAmount);
    }
    if value <= 0.0 {
        return Err(StepViolation::NonPositiveAmount);
    }
    Ok(value)
}

/// Parse the amount field: trimmed, finite and strictly positive.
pub fn parse_amount(input: &str) -> Result<f64, AccordError> {
    check_amount(input).map_err(|violation| AccordError::InvalidAmount {
        input: input.to_string(),
        reason: violation.to_string(),
    })
}

pub fn is_positive_amount(input: &str) -> bool {
    parse_amount(input).is_ok()
}

/// Minimal `x@y.z` shape check, not RFC 5322.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

/// One of the five wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    RoleSelection,
    ContractDetails,
    Terms,
    Counterparty,
    DocumentsReview,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::RoleSelection,
        Self::ContractDetails,
        Self::Terms,
        Self::Counterparty,
        Self::DocumentsReview,
    ];

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::RoleSelection => 1,
            Self::ContractDetails => 2,
            Self::Terms => 3,
            Self::Counterparty => 4,
            Self::DocumentsReview => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::RoleSelection => "Role Selection",
            Self::ContractDetails => "Contract Details",
            Self::Terms => "Terms",
            Self::Counterparty => "Counterparty & Guarantee",
            Self::DocumentsReview => "Documents & Review",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

/// Check one step's requirements against the draft.
pub fn validate_step(step: WizardStep, draft: &WizardDraft) -> Result<(), StepViolation> {
    match step {
        WizardStep::RoleSelection => {
            if draft.user_role.is_none() {
                return Err(StepViolation::MissingRole);
            }
        }
        WizardStep::ContractDetails => {
            if draft.contract_type.is_none() {
                return Err(StepViolation::MissingContractType);
            }
            if draft.title.trim().is_empty() {
                return Err(StepViolation::MissingTitle);
            }
        }
        WizardStep::Terms => {
            check_amount(&draft.amount)?;
            if draft.duration.is_none() {
                return Err(StepViolation::MissingDuration);
            }
            if draft.payment_terms.is_none() {
                return Err(StepViolation::MissingPaymentTerms);
            }
        }
        WizardStep::Counterparty => {
            if draft.counterparty.trim().is_empty() {
                return Err(StepViolation::MissingCounterparty);
            }
            if draft.counterparty_email.trim().is_empty() {
                return Err(StepViolation::MissingCounterpartyEmail);
            }
            if !is_valid_email(&draft.counterparty_email) {
                return Err(StepViolation::MalformedCounterpartyEmail);
            }
            // Also covers drafts built without `apply`.
            if draft.use_guarantor {
                if let Some(id) = draft.selected_guarantor.as_deref() {
                    if !is_featured_guarantor(id) {
                        return Err(StepViolation::UnknownGuarantor);
                    }
                }
            }
        }
        WizardStep::DocumentsReview => {}
    }
    Ok(())
}

pub fn is_step_valid(step: WizardStep, draft: &WizardDraft) -> bool {
    validate_step(step, draft).is_ok()
}

// ── Summary / submission ─────────────────────────────────────────────

const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

fn line(label: &str, value: impl Into<String>) -> SummaryLine {
    SummaryLine {
        label: label.to_string(),
        value: value.into(),
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Review-screen lines derived from the draft.
pub fn summarize(draft: &WizardDraft) -> Vec<SummaryLine> {
    let amount = if draft.amount.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        match draft.amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => format!("${}", format_amount(value)),
            _ => format!("${}", draft.amount),
        }
    };

    let guarantor = if draft.use_guarantor {
        draft
            .guarantor_name()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    } else {
        "Not requested".to_string()
    };

    vec![
        line("Role", draft.user_role.map_or(PLACEHOLDER, UserRole::label)),
        line(
            "Contract Type",
            draft.contract_type.map_or(PLACEHOLDER, ContractKind::label),
        ),
        line("Title", or_placeholder(&draft.title)),
        line("Value", amount),
        line(
            "Payment Terms",
            draft.payment_terms.map_or(PLACEHOLDER, PaymentTerms::as_str),
        ),
        line(
            "Duration",
            draft.duration.map_or(PLACEHOLDER, ContractDuration::as_str),
        ),
        line("Counterparty", or_placeholder(&draft.counterparty)),
        line("Counterparty Email", or_placeholder(&draft.counterparty_email)),
        line("Guarantor", guarantor),
    ]
}

/// What the wizard hands to its host on completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSubmission {
    pub submission_id: Uuid,
    pub session_id: Uuid,
    pub amount: f64,
    pub summary: Vec<SummaryLine>,
    pub draft: WizardDraft,
}

// ── Flow ─────────────────────────────────────────────────────────────

/// A wizard session: current step plus the draft it owns.
///
/// Invalid transitions are rejected with an error and leave the session
/// untouched. After [`WizardFlow::complete`] the session is closed and
/// every further call fails with [`AccordError::SessionClosed`].
#[derive(Debug, Clone)]
pub struct WizardFlow {
    session_id: Uuid,
    step: WizardStep,
    draft: WizardDraft,
    closed: bool,
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardFlow {
    pub fn new() -> Self {
        Self::with_draft(WizardDraft::default())
    }

    /// Start at step 1 with a pre-filled draft.
    pub fn with_draft(draft: WizardDraft) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            step: WizardStep::RoleSelection,
            draft,
            closed: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn can_advance(&self) -> bool {
        !self.closed && self.step.next().is_some() && is_step_valid(self.step, &self.draft)
    }

    pub fn can_retreat(&self) -> bool {
        !self.closed && self.step.previous().is_some()
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(TOTAL_STEPS) * 100.0
    }

    pub fn update_field(&mut self, field: DraftField) -> Result<(), AccordError> {
        self.ensure_open()?;
        self.draft.apply(field)
    }

    /// Append documents; no de-duplication.
    pub fn attach_files(
        &mut self,
        files: impl IntoIterator<Item = DocumentHandle>,
    ) -> Result<(), AccordError> {
        self.ensure_open()?;
        let before = self.draft.documents.len();
        self.draft.documents.extend(files);
        debug!(
            session = %self.session_id,
            attached = self.draft.documents.len() - before,
            total = self.draft.documents.len(),
            "documents attached"
        );
        Ok(())
    }

    pub fn advance(&mut self) -> Result<WizardStep, AccordError> {
        self.ensure_open()?;
        let next = self.step.next().ok_or(AccordError::NoNextStep)?;
        if let Err(violation) = validate_step(self.step, &self.draft) {
            debug!(
                session = %self.session_id,
                step = self.step.number(),
                %violation,
                "advance rejected"
            );
            return Err(AccordError::StepIncomplete {
                step: self.step.number(),
                violation,
            });
        }
        debug!(session = %self.session_id, from = self.step.number(), to = next.number(), "wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Step back without re-validating the step being left.
    pub fn retreat(&mut self) -> Result<WizardStep, AccordError> {
        self.ensure_open()?;
        let previous = self.step.previous().ok_or(AccordError::NoPreviousStep)?;
        debug!(session = %self.session_id, from = self.step.number(), to = previous.number(), "wizard retreated");
        self.step = previous;
        Ok(previous)
    }

    pub fn summary(&self) -> Vec<SummaryLine> {
        summarize(&self.draft)
    }

    /// Close the session and hand over the draft.
    pub fn complete(&mut self) -> Result<ContractSubmission, AccordError> {
        self.ensure_open()?;
        if self.step != WizardStep::DocumentsReview {
            return Err(AccordError::NotAtFinalStep {
                current: self.step.number(),
                final_step: TOTAL_STEPS,
            });
        }
        for step in WizardStep::ALL {
            validate_step(step, &self.draft).map_err(|violation| AccordError::StepIncomplete {
                step: step.number(),
                violation,
            })?;
        }
        let amount = parse_amount(&self.draft.amount)?;

        self.closed = true;
        let draft = std::mem::take(&mut self.draft);
        let submission = ContractSubmission {
            submission_id: Uuid::new_v4(),
            session_id: self.session_id,
            amount,
            summary: summarize(&draft),
            draft,
        };
        info!(
            session = %self.session_id,
            submission = %submission.submission_id,
            documents = submission.draft.documents.len(),
            "contract draft submitted"
        );
        Ok(submission)
    }

    fn ensure_open(&self) -> Result<(), AccordError> {
        if self.closed {
            return Err(AccordError::SessionClosed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> WizardDraft {
        WizardDraft {
            user_role: Some(UserRole::ContractingParty),
            contract_type: Some(ContractKind::Property),
            title: "Harbour View Lease".into(),
            description: String::new(),
            duration: Some(ContractDuration::OneYear),
            payment_terms: Some(PaymentTerms::Monthly),
            amount: "12000".into(),
            counterparty: "ABC Real Estate Corp".into(),
            counterparty_email: "leasing@abc.example".into(),
            use_guarantor: true,
            selected_guarantor: Some("1".into()),
            documents: Vec::new(),
        }
    }

    #[test]
    fn amount_parsing() {
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-5"));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("abc"));
        assert!(!is_positive_amount("inf"));
        assert!(is_positive_amount("12000"));
        assert!(is_positive_amount(" 0.5 "));
        assert_eq!(parse_amount("12000").unwrap(), 12_000.0);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a @b.co"));
    }

    #[test]
    fn step_numbers_and_neighbours() {
        assert_eq!(WizardStep::RoleSelection.previous(), None);
        assert_eq!(WizardStep::DocumentsReview.next(), None);
        assert_eq!(WizardStep::Terms.next(), Some(WizardStep::Counterparty));
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(6), None);
    }

    #[test]
    fn step_violations_name_the_first_missing_field() {
        let mut draft = WizardDraft::default();
        assert_eq!(
            validate_step(WizardStep::RoleSelection, &draft),
            Err(StepViolation::MissingRole)
        );
        draft.contract_type = Some(ContractKind::Vehicle);
        draft.title = "   ".into();
        assert_eq!(
            validate_step(WizardStep::ContractDetails, &draft),
            Err(StepViolation::MissingTitle)
        );
        draft.amount = "0".into();
        assert_eq!(
            validate_step(WizardStep::Terms, &draft),
            Err(StepViolation::NonPositiveAmount)
        );
        draft.amount = "ten".into();
        assert_eq!(
            validate_step(WizardStep::Terms, &draft),
            Err(StepViolation::MalformedAmount)
        );
        draft.counterparty = "Jo".into();
        draft.counterparty_email = "jo@nowhere".into();
        assert_eq!(
            validate_step(WizardStep::Counterparty, &draft),
            Err(StepViolation::MalformedCounterpartyEmail)
        );
        assert!(is_step_valid(WizardStep::DocumentsReview, &draft));
    }

    #[test]
    fn advance_is_rejected_on_an_empty_draft() {
        let mut flow = WizardFlow::new();
        assert!(!flow.can_advance());
        let err = flow.advance().unwrap_err();
        assert!(matches!(
            err,
            AccordError::StepIncomplete {
                step: 1,
                violation: StepViolation::MissingRole
            }
        ));
        assert_eq!(flow.current_step(), WizardStep::RoleSelection);
    }

    #[test]
    fn retreat_at_first_step_is_rejected() {
        let mut flow = WizardFlow::new();
        assert!(matches!(flow.retreat(), Err(AccordError::NoPreviousStep)));
        assert_eq!(flow.progress_percent(), 20.0);
    }

    #[test]
    fn update_field_never_moves_the_step() {
        let mut flow = WizardFlow::new();
        flow.update_field(DraftField::UserRole(UserRole::AgentRealtor))
            .unwrap();
        assert_eq!(flow.current_step(), WizardStep::RoleSelection);
        assert!(flow.can_advance());
    }

    #[test]
    fn unknown_guarantor_is_rejected() {
        let mut flow = WizardFlow::new();
        let err = flow
            .update_field(DraftField::SelectedGuarantor("99".into()))
            .unwrap_err();
        assert!(matches!(err, AccordError::UnknownToken { kind: "guarantor", .. }));
        assert_eq!(flow.draft().selected_guarantor, None);
    }

    #[test]
    fn summary_uses_labels_and_placeholders() {
        let empty = summarize(&WizardDraft::default());
        assert_eq!(empty.len(), 9);
        assert!(empty[..8].iter().all(|l| l.value == "--"));
        assert_eq!(empty[8].value, "Not requested");

        let full = summarize(&filled_draft());
        let value = |label: &str| {
            full.iter()
                .find(|l| l.label == label)
                .map(|l| l.value.clone())
                .unwrap()
        };
        assert_eq!(value("Role"), "Contracting Party");
        assert_eq!(value("Contract Type"), "Property Rental");
        assert_eq!(value("Value"), "$12,000");
        assert_eq!(value("Duration"), "1-year");
        assert_eq!(value("Guarantor"), "CityBank Financial");

        let unparsable = WizardDraft {
            amount: "twelve".into(),
            ..WizardDraft::default()
        };
        assert_eq!(summarize(&unparsable)[3].value, "$twelve");
    }

    #[test]
    fn complete_requires_final_step() {
        let mut flow = WizardFlow::with_draft(filled_draft());
        let err = flow.complete().unwrap_err();
        assert!(matches!(
            err,
            AccordError::NotAtFinalStep {
                current: 1,
                final_step: 5
            }
        ));
        assert!(!flow.is_closed());
    }

    #[test]
    fn complete_revalidates_edits_made_on_the_last_step() {
        let mut flow = WizardFlow::with_draft(filled_draft());
        for _ in 0..4 {
            flow.advance().unwrap();
        }
        flow.update_field(DraftField::Title(String::new())).unwrap();
        let err = flow.complete().unwrap_err();
        assert!(matches!(
            err,
            AccordError::StepIncomplete {
                step: 2,
                violation: StepViolation::MissingTitle
            }
        ));
        assert!(!flow.is_closed());
    }

    #[test]
    fn loaded_draft_with_unlisted_guarantor_cannot_pass_step_four() {
        let mut draft = filled_draft();
        draft.selected_guarantor = Some("99".into());
        assert_eq!(
            validate_step(WizardStep::Counterparty, &draft),
            Err(StepViolation::UnknownGuarantor)
        );

        let mut flow = WizardFlow::with_draft(draft.clone());
        for _ in 0..3 {
            flow.advance().unwrap();
        }
        assert!(!flow.can_advance());
        assert!(matches!(
            flow.advance(),
            Err(AccordError::StepIncomplete {
                step: 4,
                violation: StepViolation::UnknownGuarantor
            })
        ));

        // an unused selection is ignored
        draft.use_guarantor = false;
        assert!(is_step_valid(WizardStep::Counterparty, &draft));
    }

    #[test]
    fn draft_deserializes_from_wire_tokens() {
        let draft: WizardDraft = serde_json::from_str(
            r#"{
                "userRole": "legal-representative",
                "type": "freelance",
                "title": "Logo design",
                "duration": "3-months",
                "paymentTerms": "one-time",
                "amount": "900"
            }"#,
        )
        .unwrap();
        assert_eq!(draft.user_role, Some(UserRole::LegalRepresentative));
        assert_eq!(draft.contract_type, Some(ContractKind::Freelance));
        assert_eq!(draft.duration, Some(ContractDuration::ThreeMonths));
        assert_eq!(draft.payment_terms, Some(PaymentTerms::OneTime));
        assert!(draft.documents.is_empty());
    }
}
