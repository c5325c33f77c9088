//! Dashboard filter and KPI pipeline.
//!
//! Every function here is pure over its inputs. "Today" is always an
//! argument, never read from the wall clock, so the same inputs always
//! yield the same KPIs.

use crate::error::AccordError;
use crate::types::{ContractRecord, ContractStatus, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

const ALL_TOKEN: &str = "all";

/// Status selector of the dashboard filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ContractStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: ContractStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AccordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_TOKEN {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOKEN),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Contract-type selector. Types are free text, matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    pub fn accepts(&self, contract_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == contract_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value == ALL_TOKEN {
            Self::All
        } else {
            Self::Only(value.to_string())
        })
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOKEN),
            Self::Only(contract_type) => f.write_str(contract_type),
        }
    }
}

/// The dashboard's three filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractFilter {
    pub status: StatusFilter,
    pub contract_type: TypeFilter,
    pub search: String,
}

impl ContractFilter {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_type(mut self, contract_type: TypeFilter) -> Self {
        self.contract_type = contract_type;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, record: &ContractRecord) -> bool {
        keep(record, &self.status, &self.contract_type, &self.search)
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ContractRecord>
    where
        I: IntoIterator<Item = &'a ContractRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

fn keep(
    record: &ContractRecord,
    status: &StatusFilter,
    contract_type: &TypeFilter,
    search: &str,
) -> bool {
    status.accepts(record.status)
        && contract_type.accepts(&record.contract_type)
        && matches_search(record, search)
}

fn matches_search(record: &ContractRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.guarantor.to_lowercase().contains(&needle)
}

/// Keep records passing every filter, preserving input order.
pub fn filter_contracts<'a, I>(
    records: I,
    status: &StatusFilter,
    contract_type: &TypeFilter,
    search: &str,
) -> Vec<&'a ContractRecord>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    records
        .into_iter()
        .filter(|record| keep(record, status, contract_type, search))
        .collect()
}

pub fn total_value<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    records.into_iter().map(|record| record.value).sum()
}

/// Mean progress rounded half-up; 0 for an empty set.
pub fn average_progress<'a, I>(records: I) -> u8
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), record| {
            (sum + u64::from(record.progress.min(100)), count + 1)
        });
    if count == 0 {
        return 0;
    }
    // Mean of values in 0..=100 stays in 0..=100.
    ((2 * sum + count) / (2 * count)) as u8
}

/// Histogram over every status, zero-filled.
pub fn count_by_status<'a, I>(records: I) -> BTreeMap<ContractStatus, usize>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut counts: BTreeMap<_, _> = ContractStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

/// Histogram over every risk level, zero-filled.
pub fn risk_distribution<'a, I>(records: I) -> BTreeMap<RiskLevel, usize>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut counts: BTreeMap<_, _> = RiskLevel::ALL.into_iter().map(|r| (r, 0)).collect();
    for record in records {
        *counts.entry(record.risk_level).or_insert(0) += 1;
    }
    counts
}

/// Contracts that are neither executed nor cancelled.
pub fn active_contracts<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    records
        .into_iter()
        .filter(|record| record.status.is_active())
        .count()
}

/// Distinct contract types in first-seen order.
pub fn contract_types<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut types: Vec<&str> = Vec::new();
    for record in records {
        if !types.contains(&record.contract_type.as_str()) {
            types.push(&record.contract_type);
        }
    }
    types
}

/// Non-cancelled contracts by ascending due date, at most `limit`.
///
/// The sort is stable: contracts due the same day keep input order.
pub fn upcoming_renewals<'a, I>(records: I, limit: usize) -> Vec<&'a ContractRecord>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    let mut candidates: Vec<_> = records
        .into_iter()
        .filter(|record| record.status != ContractStatus::Cancelled)
        .collect();
    candidates.sort_by_key(|record| record.due_date);
    candidates.truncate(limit);
    candidates
}

/// Calendar days from `today` until `due`; negative when past due.
pub fn days_remaining(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// One row of the renewals panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalEntry {
    pub contract_id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
}

impl RenewalEntry {
    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }
}

/// `upcoming_renewals` paired with the countdown for each row.
pub fn renewal_schedule<'a, I>(records: I, today: NaiveDate, limit: usize) -> Vec<RenewalEntry>
where
    I: IntoIterator<Item = &'a ContractRecord>,
{
    upcoming_renewals(records, limit)
        .into_iter()
        .map(|record| RenewalEntry {
            contract_id: record.id.clone(),
            title: record.title.clone(),
            due_date: record.due_date,
            days_remaining: days_remaining(record.due_date, today),
        })
        .collect()
}

/// Every dashboard KPI derived from one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub today: NaiveDate,
    pub filter: ContractFilter,
    /// Filtered contracts, input order.
    pub contracts: Vec<ContractRecord>,
    /// Over the filtered set.
    pub total_value: f64,
    /// Over the filtered set.
    pub average_progress: u8,
    pub active_contracts: usize,
    pub status_counts: BTreeMap<ContractStatus, usize>,
    pub risk_distribution: BTreeMap<RiskLevel, usize>,
    pub renewals: Vec<RenewalEntry>,
}

/// Assembles [`PortfolioSnapshot`]s; holds no state of its own.
pub struct PortfolioAggregator;

impl PortfolioAggregator {
    pub fn snapshot(
        all: &[ContractRecord],
        filter: &ContractFilter,
        today: NaiveDate,
        renewal_limit: usize,
    ) -> PortfolioSnapshot {
        let filtered = filter.apply(all);

        let snapshot = PortfolioSnapshot {
            today,
            filter: filter.clone(),
            total_value: total_value(filtered.iter().copied()),
            average_progress: average_progress(filtered.iter().copied()),
            contracts: filtered.into_iter().cloned().collect(),
            active_contracts: active_contracts(all),
            status_counts: count_by_status(all),
            risk_distribution: risk_distribution(all),
            renewals: renewal_schedule(all, today, renewal_limit),
        };

        debug!(
            status = %filter.status,
            contract_type = %filter.contract_type,
            matched = snapshot.contracts.len(),
            total = all.len(),
            "portfolio snapshot built"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SampleDataset;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn record(id: &str, progress: u8) -> ContractRecord {
        ContractRecord {
            id: id.to_string(),
            title: format!("Contract {id}"),
            contract_type: "Service Contract".into(),
            status: ContractStatus::Pending,
            value: 100.0,
            currency: "USD".into(),
            progress,
            start_date: today(),
            due_date: today(),
            guarantor: "None".into(),
            risk_level: RiskLevel::Low,
        }
    }

    #[test]
    fn average_progress_of_empty_set_is_zero() {
        let none: Vec<ContractRecord> = Vec::new();
        assert_eq!(average_progress(&none), 0);
    }

    #[test]
    fn average_progress_rounds_half_up() {
        assert_eq!(average_progress(&[record("a", 50), record("b", 100)]), 75);
        assert_eq!(average_progress(&[record("a", 0), record("b", 1)]), 1);
        assert_eq!(average_progress(&[record("a", 1), record("b", 1), record("c", 2)]), 1);
    }

    #[test]
    fn status_histogram_reports_zero_counts() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let counts = count_by_status(&data.contracts);
        assert_eq!(counts.len(), ContractStatus::ALL.len());
        assert_eq!(counts[&ContractStatus::Cancelled], 0);
        assert_eq!(counts[&ContractStatus::Pending], 3);
        assert_eq!(counts.values().sum::<usize>(), 8);
    }

    #[test]
    fn risk_histogram_covers_all_levels() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let risk = risk_distribution(&data.contracts);
        assert_eq!(risk[&RiskLevel::Low], 3);
        assert_eq!(risk[&RiskLevel::Medium], 4);
        assert_eq!(risk[&RiskLevel::High], 1);
        let none: Vec<ContractRecord> = Vec::new();
        assert_eq!(risk_distribution(&none)[&RiskLevel::High], 0);
    }

    #[test]
    fn pending_property_rentals_yield_the_office_lease() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let hits = filter_contracts(
            &data.contracts,
            &StatusFilter::Only(ContractStatus::Pending),
            &TypeFilter::Only("Property Rental".into()),
            "",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Downtown Office Lease");
    }

    #[test]
    fn search_matches_title_or_guarantor_case_insensitively() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let by_guarantor = ContractFilter::default().with_search("citybank").apply(&data.contracts);
        assert_eq!(by_guarantor.len(), 1);
        assert_eq!(by_guarantor[0].id, "1");

        let by_title = ContractFilter::default().with_search("LEASE").apply(&data.contracts);
        let ids: Vec<_> = by_title.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7"]);
    }

    #[test]
    fn free_function_and_filter_struct_agree() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let statuses = std::iter::once(StatusFilter::All)
            .chain(ContractStatus::ALL.into_iter().map(StatusFilter::Only));
        for status in statuses {
            for contract_type in std::iter::once(TypeFilter::All).chain(
                contract_types(&data.contracts)
                    .into_iter()
                    .map(|t| TypeFilter::Only(t.to_string())),
            ) {
                for search in ["", "lease", "corp"] {
                    let filter = ContractFilter::default()
                        .with_status(status)
                        .with_type(contract_type.clone())
                        .with_search(search);
                    assert_eq!(
                        filter_contracts(&data.contracts, &status, &contract_type, search),
                        filter.apply(&data.contracts)
                    );
                }
            }
        }
    }

    #[test]
    fn filter_tokens_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "at-risk".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ContractStatus::AtRisk)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            TypeFilter::Only("Vehicle Rental".into()).to_string(),
            "Vehicle Rental"
        );
    }

    #[test]
    fn renewals_skip_cancelled_and_sort_by_due_date() {
        let mut data = SampleDataset::relative_to(today()).unwrap();
        data.contracts[3].status = ContractStatus::Cancelled;

        let renewals = upcoming_renewals(&data.contracts, 4);
        let ids: Vec<_> = renewals.iter().map(|r| r.id.as_str()).collect();
        // contract 3 is past due, contract 4 is cancelled
        assert_eq!(ids, vec!["3", "2", "8", "1"]);
    }

    #[test]
    fn days_remaining_goes_negative_past_due() {
        let due = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(days_remaining(due, today()), 2);
        assert_eq!(days_remaining(today(), due), -2);
        assert_eq!(days_remaining(today(), today()), 0);
    }

    #[test]
    fn snapshot_combines_filtered_and_portfolio_views() {
        let data = SampleDataset::relative_to(today()).unwrap();
        let filter = ContractFilter::default().with_type(TypeFilter::Only("Service Contract".into()));
        let snapshot = PortfolioAggregator::snapshot(&data.contracts, &filter, today(), 4);

        assert_eq!(snapshot.contracts.len(), 3);
        assert_eq!(snapshot.total_value, 98_000.0);
        assert_eq!(snapshot.average_progress, 57);
        assert_eq!(snapshot.active_contracts, 7);
        assert_eq!(snapshot.status_counts.values().sum::<usize>(), 8);
        assert_eq!(snapshot.renewals.len(), 4);
        assert!(snapshot.renewals[0].is_overdue());
        assert_eq!(snapshot.renewals[1].days_remaining, 2);
    }

    #[test]
    fn contract_types_are_distinct_in_first_seen_order() {
        let data = SampleDataset::relative_to(today()).unwrap();
        assert_eq!(
            contract_types(&data.contracts),
            vec![
                "Property Rental",
                "Vehicle Rental",
                "Service Contract",
                "Trade Services",
                "Equipment Lease"
            ]
        );
    }
}
