use chrono::NaiveDate;
use thiserror::Error;

/// Which wizard requirement a draft fails to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepViolation {
    MissingRole,
    MissingContractType,
    MissingTitle,
    MissingAmount,
    NonPositiveAmount,
    MalformedAmount,
    MissingDuration,
    MissingPaymentTerms,
    MissingCounterparty,
    MissingCounterpartyEmail,
    MalformedCounterpartyEmail,
    UnknownGuarantor,
}

impl StepViolation {
    pub fn describe(self) -> &'static str {
        match self {
            Self::MissingRole => "a role must be selected",
            Self::MissingContractType => "a contract type must be selected",
            Self::MissingTitle => "the contract title is empty",
            Self::MissingAmount => "the contract value is empty",
            Self::NonPositiveAmount => "the contract value must be greater than zero",
            Self::MalformedAmount => "the contract value is not a number",
            Self::MissingDuration => "a duration must be selected",
            Self::MissingPaymentTerms => "payment terms must be selected",
            Self::MissingCounterparty => "the counterparty name is empty",
            Self::MissingCounterpartyEmail => "the counterparty email is empty",
            Self::MalformedCounterpartyEmail => "the counterparty email is not of the form x@y.z",
            Self::UnknownGuarantor => "the selected guarantor is not one of the featured guarantors",
        }
    }
}

impl std::fmt::Display for StepViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Accord errors.
#[derive(Debug, Error)]
pub enum AccordError {
    #[error("Step {step} is incomplete: {violation}")]
    StepIncomplete { step: u8, violation: StepViolation },

    #[error("Already at the final step")]
    NoNextStep,

    #[error("Already at the first step")]
    NoPreviousStep,

    #[error("Completion is only available from step {final_step}, current step is {current}")]
    NotAtFinalStep { current: u8, final_step: u8 },

    #[error("Wizard session is closed")]
    SessionClosed,

    #[error("No contract found for id '{0}'")]
    ContractNotFound(String),

    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("Date {offset_days:+} days from {anchor} is outside the supported calendar")]
    DateOutOfRange { anchor: NaiveDate, offset_days: i64 },

    #[error("Unknown {kind} '{value}'")]
    UnknownToken { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AccordError {
    pub fn unknown_token(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind,
            value: value.into(),
        }
    }
}
