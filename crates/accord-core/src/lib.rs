//! Accord core: contract drafting and portfolio analytics.
//!
//! Two independent pieces of logic live here, both pure transformations
//! over a read-only contract store:
//!
//! - [`WizardFlow`]: a five-step contract creation wizard whose forward
//!   transitions are gated on per-step predicates over the draft.
//! - The [`portfolio`] pipeline: filter the portfolio by status, type and
//!   free-text search, then derive KPIs (total value, average progress,
//!   status and risk histograms, upcoming renewals).
//!
//! Around them sit the sample [`SampleDataset`], the guarantor
//! [`marketplace`], and the [`review`] screen with its simulated analysis.
//!
//! # Example
//!
//! ```rust
//! use accord_core::*;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let data = SampleDataset::relative_to(today).unwrap();
//!
//! let filter = ContractFilter::default()
//!     .with_status(StatusFilter::Only(ContractStatus::Pending))
//!     .with_type(TypeFilter::Only("Property Rental".into()));
//! let snapshot = PortfolioAggregator::snapshot(&data.contracts, &filter, today, 4);
//! assert_eq!(snapshot.contracts[0].title, "Downtown Office Lease");
//!
//! let mut wizard = WizardFlow::new();
//! assert!(wizard.advance().is_err());
//! wizard.update_field(DraftField::UserRole(UserRole::ContractingParty)).unwrap();
//! assert_eq!(wizard.advance().unwrap(), WizardStep::ContractDetails);
//! ```

#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod marketplace;
pub mod portfolio;
pub mod review;
pub mod types;
pub mod wizard;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AccordConfig;
pub use dataset::SampleDataset;
pub use error::{AccordError, StepViolation};
pub use format::{format_amount, format_currency};
pub use marketplace::{
    featured_guarantors, guarantor_catalogue, search_guarantors, Guarantor, GuarantorCategory,
    GuarantorQuery, GuarantorSort,
};
pub use portfolio::{
    active_contracts, average_progress, contract_types, count_by_status, days_remaining,
    filter_contracts, renewal_schedule, risk_distribution, total_value, upcoming_renewals,
    ContractFilter, PortfolioAggregator, PortfolioSnapshot, RenewalEntry, StatusFilter,
    TypeFilter,
};
pub use review::{AiSuggestion, AnalysisReport, AnalysisSession, ContractReview, SuggestionKind};
pub use types::{
    ActivityKind, ContractActivity, ContractRecord, ContractStatus, ContractTask,
    RevenueTrendPoint, RiskLevel, TaskPriority, TaskStatus,
};
pub use wizard::{
    is_positive_amount, is_step_valid, is_valid_email, parse_amount, summarize, validate_step,
    ContractDuration, ContractKind, ContractSubmission, DocumentHandle, DraftField,
    PaymentTerms, SummaryLine, UserRole, WizardDraft, WizardFlow, WizardStep, TOTAL_STEPS,
};
