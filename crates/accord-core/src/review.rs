//! Contract review screen and the simulated AI analysis.

use crate::config::AccordConfig;
use crate::dataset::SampleDataset;
use crate::error::AccordError;
use crate::portfolio::days_remaining;
use crate::types::{ContractActivity, ContractRecord, ContractTask};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Warning,
    Improvement,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub kind: SuggestionKind,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Canned findings shown on every review.
pub fn standard_suggestions() -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            kind: SuggestionKind::Warning,
            category: "Legal Compliance".into(),
            title: "Missing Force Majeure Clause".into(),
            description: "Consider adding a force majeure clause to protect both parties in \
                          case of unforeseen circumstances."
                .into(),
            suggestion: Some(
                "Add standard force majeure language covering natural disasters, government \
                 actions, and other uncontrollable events."
                    .into(),
            ),
        },
        AiSuggestion {
            kind: SuggestionKind::Improvement,
            category: "Payment Terms".into(),
            title: "Late Fee Structure".into(),
            description: "The current late fee of $100 per day may be considered excessive in \
                          some jurisdictions."
                .into(),
            suggestion: Some(
                "Consider a percentage-based late fee (e.g., 1.5% per month) or a flat fee that \
                 complies with local regulations."
                    .into(),
            ),
        },
        AiSuggestion {
            kind: SuggestionKind::Success,
            category: "Security".into(),
            title: "Security Deposit Compliance".into(),
            description: "The security deposit amount (2x monthly rent) is within standard \
                          commercial lease practices."
                .into(),
            suggestion: None,
        },
    ]
}

/// Everything the review screen shows for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReview {
    pub contract: ContractRecord,
    pub days_remaining: i64,
    pub activities: Vec<ContractActivity>,
    pub tasks: Vec<ContractTask>,
    pub suggestions: Vec<AiSuggestion>,
}

impl ContractReview {
    /// Load the review for `contract_id`; unknown ids are an error, not a blank page.
    pub fn open(
        dataset: &SampleDataset,
        contract_id: &str,
        today: NaiveDate,
    ) -> Result<Self, AccordError> {
        let contract = dataset.contract(contract_id)?.clone();
        let activities = dataset
            .activities_for(contract_id)?
            .into_iter()
            .cloned()
            .collect();
        let tasks = dataset.tasks_for(contract_id)?.into_iter().cloned().collect();

        Ok(Self {
            days_remaining: days_remaining(contract.due_date, today),
            contract,
            activities,
            tasks,
            suggestions: standard_suggestions(),
        })
    }

    pub fn warnings(&self) -> usize {
        self.suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Warning)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub contract_id: String,
    pub suggestions: Vec<AiSuggestion>,
}

/// Start -> fixed delay -> end, with an `analyzing` flag in between.
///
/// Only one run may be pending at a time; a second call while the first is
/// still waiting fails with [`AccordError::AnalysisInProgress`]. Dropping a
/// pending run clears the flag.
#[derive(Debug)]
pub struct AnalysisSession {
    analyzing: AtomicBool,
    delay: Duration,
}

struct AnalyzingGuard<'a>(&'a AtomicBool);

impl Drop for AnalyzingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AnalysisSession {
    pub fn new(delay: Duration) -> Self {
        Self {
            analyzing: AtomicBool::new(false),
            delay,
        }
    }

    pub fn from_config(config: &AccordConfig) -> Self {
        Self::new(config.analysis_delay())
    }

    pub fn analyzing(&self) -> bool {
        self.analyzing.load(Ordering::Acquire)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run(&self, review: &ContractReview) -> Result<AnalysisReport, AccordError> {
        if self
            .analyzing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AccordError::AnalysisInProgress);
        }
        let _guard = AnalyzingGuard(&self.analyzing);

        info!(
            contract_id = %review.contract.id,
            delay_ms = self.delay.as_millis() as u64,
            "AI analysis started"
        );
        tokio::time::sleep(self.delay).await;
        info!(contract_id = %review.contract.id, "AI analysis finished");

        Ok(AnalysisReport {
            contract_id: review.contract.id.clone(),
            suggestions: review.suggestions.clone(),
        })
    }
}
