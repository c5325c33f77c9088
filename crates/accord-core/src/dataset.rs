//! Sample portfolio used by the dashboard, review and CLI.
//!
//! Dates are laid out relative to a caller-supplied "today" so the data
//! always looks current while staying deterministic under test.

use crate::error::AccordError;
use crate::types::{
    ActivityKind, ContractActivity, ContractRecord, ContractStatus, ContractTask, RevenueTrendPoint,
    RiskLevel, TaskPriority, TaskStatus,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Read-only contract store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataset {
    pub contracts: Vec<ContractRecord>,
    pub activities: Vec<ContractActivity>,
    pub tasks: Vec<ContractTask>,
    pub revenue_trend: Vec<RevenueTrendPoint>,
}

impl SampleDataset {
    /// Build the eight-contract sample portfolio anchored at `today`.
    ///
    /// Fails when `today` sits so close to the calendar limits that an
    /// offset date cannot be represented.
    pub fn relative_to(today: NaiveDate) -> Result<Self, AccordError> {
        let day = |offset: i64| {
            today
                .checked_add_signed(Duration::days(offset))
                .ok_or(AccordError::DateOutOfRange {
                    anchor: today,
                    offset_days: offset,
                })
        };

        let contract = |id: &str,
                        title: &str,
                        contract_type: &str,
                        status: ContractStatus,
                        value: f64,
                        progress: u8,
                        (start, due): (i64, i64),
                        guarantor: &str,
                        risk_level: RiskLevel|
         -> Result<ContractRecord, AccordError> {
            Ok(ContractRecord {
                id: id.to_string(),
                title: title.to_string(),
                contract_type: contract_type.to_string(),
                status,
                value,
                currency: "USD".to_string(),
                progress,
                start_date: day(start)?,
                due_date: day(due)?,
                guarantor: guarantor.to_string(),
                risk_level,
            })
        };

        let contracts = [
            contract(
                "1",
                "Downtown Office Lease",
                "Property Rental",
                ContractStatus::Pending,
                12_000.0,
                68,
                (-20, 15),
                "CityBank",
                RiskLevel::Medium,
            ),
            contract(
                "2",
                "Fleet Vehicle Contract",
                "Vehicle Rental",
                ContractStatus::Signed,
                8_500.0,
                82,
                (-45, 5),
                "AutoFinance Corp",
                RiskLevel::Low,
            ),
            contract(
                "3",
                "Software Development Agreement",
                "Service Contract",
                ContractStatus::Executed,
                45_000.0,
                100,
                (-120, -15),
                "TechGuarantee Ltd",
                RiskLevel::Low,
            ),
            contract(
                "4",
                "Marketing Campaign Contract",
                "Service Contract",
                ContractStatus::AtRisk,
                15_000.0,
                24,
                (-12, 2),
                "None",
                RiskLevel::High,
            ),
            contract(
                "5",
                "International Freight Forwarding",
                "Trade Services",
                ContractStatus::Pending,
                72_000.0,
                35,
                (-7, 21),
                "GlobalTrade Guarantees",
                RiskLevel::Medium,
            ),
            contract(
                "6",
                "Co-working Space Agreement",
                "Property Rental",
                ContractStatus::Draft,
                5_400.0,
                12,
                (-3, 45),
                "SecureGuarantee Ltd",
                RiskLevel::Medium,
            ),
            contract(
                "7",
                "Renewable Energy Equipment Lease",
                "Equipment Lease",
                ContractStatus::Signed,
                28_000.0,
                74,
                (-65, 30),
                "EcoShield Capital",
                RiskLevel::Low,
            ),
            contract(
                "8",
                "Managed IT Services Renewal",
                "Service Contract",
                ContractStatus::Pending,
                38_000.0,
                48,
                (-28, 10),
                "TrustFactor Corp",
                RiskLevel::Medium,
            ),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

        let activity = |id: &str,
                        contract_id: &str,
                        offset: i64,
                        summary: &str,
                        owner: &str,
                        kind: ActivityKind|
         -> Result<ContractActivity, AccordError> {
            Ok(ContractActivity {
                id: id.to_string(),
                contract_id: contract_id.to_string(),
                timestamp: day(offset)?,
                summary: summary.to_string(),
                owner: owner.to_string(),
                kind,
            })
        };

        let activities = [
            activity(
                "a-1",
                "4",
                -1,
                "Payment reminder sent to counterparty",
                "Finance Team",
                ActivityKind::Alert,
            ),
            activity(
                "a-2",
                "2",
                -2,
                "Signature completed by City Logistics",
                "Legal Team",
                ActivityKind::Signature,
            ),
            activity(
                "a-3",
                "1",
                -3,
                "Reviewed revised rental clause",
                "Real Estate Lead",
                ActivityKind::Update,
            ),
            activity(
                "a-4",
                "3",
                -4,
                "Milestone payment released",
                "Accounts Payable",
                ActivityKind::Payment,
            ),
            activity(
                "a-5",
                "5",
                -5,
                "Customs compliance documents uploaded",
                "Trade Ops",
                ActivityKind::Update,
            ),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

        let task = |id: &str,
                    contract_id: &str,
                    owner: &str,
                    title: &str,
                    offset: i64,
                    status: TaskStatus,
                    priority: TaskPriority|
         -> Result<ContractTask, AccordError> {
            Ok(ContractTask {
                id: id.to_string(),
                contract_id: contract_id.to_string(),
                owner: owner.to_string(),
                title: title.to_string(),
                due_date: day(offset)?,
                status,
                priority,
            })
        };

        let tasks = [
            task(
                "t-1",
                "4",
                "Finance Team",
                "Escalate late marketing invoice",
                1,
                TaskStatus::InProgress,
                TaskPriority::High,
            ),
            task(
                "t-2",
                "1",
                "Legal Team",
                "Incorporate landlord insurance clause",
                3,
                TaskStatus::Open,
                TaskPriority::Medium,
            ),
            task(
                "t-3",
                "5",
                "Compliance",
                "Verify trade embargo screening",
                2,
                TaskStatus::Open,
                TaskPriority::High,
            ),
            task(
                "t-4",
                "6",
                "Sales",
                "Confirm deposit terms with tenant",
                7,
                TaskStatus::Open,
                TaskPriority::Low,
            ),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

        let revenue_trend = [
            ("Apr", 72_000.0, 64_000.0),
            ("May", 86_000.0, 81_000.0),
            ("Jun", 91_000.0, 87_000.0),
            ("Jul", 99_000.0, 93_000.0),
            ("Aug", 102_000.0, 96_000.0),
            ("Sep", 115_000.0, 108_000.0),
        ]
        .into_iter()
        .map(|(label, booked_value, realized_value)| RevenueTrendPoint {
            label: label.to_string(),
            booked_value,
            realized_value,
        })
        .collect();

        Ok(Self {
            contracts,
            activities,
            tasks,
            revenue_trend,
        })
    }

    pub fn contract(&self, id: &str) -> Result<&ContractRecord, AccordError> {
        self.contracts
            .iter()
            .find(|contract| contract.id == id)
            .ok_or_else(|| {
                warn!(contract_id = id, "contract lookup failed");
                AccordError::ContractNotFound(id.to_string())
            })
    }

    /// Resolve the contract an activity points at.
    pub fn activity_contract(
        &self,
        activity: &ContractActivity,
    ) -> Result<&ContractRecord, AccordError> {
        self.contract(&activity.contract_id)
    }

    /// Resolve the contract a task points at.
    pub fn task_contract(&self, task: &ContractTask) -> Result<&ContractRecord, AccordError> {
        self.contract(&task.contract_id)
    }

    /// Activities of an existing contract, in dataset order.
    pub fn activities_for(&self, contract_id: &str) -> Result<Vec<&ContractActivity>, AccordError> {
        self.contract(contract_id)?;
        Ok(self
            .activities
            .iter()
            .filter(|activity| activity.contract_id == contract_id)
            .collect())
    }

    /// Tasks of an existing contract, in dataset order.
    pub fn tasks_for(&self, contract_id: &str) -> Result<Vec<&ContractTask>, AccordError> {
        self.contract(contract_id)?;
        Ok(self
            .tasks
            .iter()
            .filter(|task| task.contract_id == contract_id)
            .collect())
    }

    /// Tasks not yet completed: soonest first, higher priority breaking ties.
    pub fn open_tasks(&self) -> Vec<&ContractTask> {
        let mut open: Vec<_> = self
            .tasks
            .iter()
            .filter(|task| task.status != TaskStatus::Completed)
            .collect();
        open.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| b.priority.cmp(&a.priority))
        });
        open
    }

    /// Newest activities first.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ContractActivity> {
        let mut recent: Vec<_> = self.activities.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(limit);
        recent
    }
}
