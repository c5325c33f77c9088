use crate::error::AccordError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractStatus {
    Draft,
    Pending,
    Signed,
    Executed,
    AtRisk,
    Cancelled,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 6] = [
        Self::Draft,
        Self::Pending,
        Self::Signed,
        Self::Executed,
        Self::AtRisk,
        Self::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Signed => "signed",
            Self::Executed => "executed",
            Self::AtRisk => "at-risk",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Signed => "Signed",
            Self::Executed => "Executed",
            Self::AtRisk => "At Risk",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Executed and cancelled contracts no longer need attention.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Executed | Self::Cancelled)
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = AccordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| AccordError::unknown_token("contract status", value))
    }
}

/// Coarse qualitative risk tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = AccordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| AccordError::unknown_token("risk level", value))
    }
}

/// A contract in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub title: String,
    /// Free-text category, e.g. "Property Rental".
    #[serde(rename = "type")]
    pub contract_type: String,
    pub status: ContractStatus,
    pub value: f64,
    /// ISO 4217 code.
    pub currency: String,
    /// 0..=100
    pub progress: u8,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Guarantor name, or "None".
    pub guarantor: String,
    pub risk_level: RiskLevel,
}

impl ContractRecord {
    pub fn has_guarantor(&self) -> bool {
        self.guarantor != "None"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Update,
    Signature,
    Payment,
    Alert,
}

/// Something that happened on a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractActivity {
    pub id: String,
    /// Weak reference; resolve through the dataset.
    pub contract_id: String,
    pub timestamp: NaiveDate,
    pub summary: String,
    pub owner: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A follow-up item attached to a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTask {
    pub id: String,
    /// Weak reference; resolve through the dataset.
    pub contract_id: String,
    pub owner: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

/// Booked versus realized value for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrendPoint {
    pub label: String,
    pub booked_value: f64,
    pub realized_value: f64,
}
