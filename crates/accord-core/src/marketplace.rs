use crate::error::AccordError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuarantorCategory {
    TraditionalBank,
    Fintech,
    Insurance,
    #[serde(rename = "defi")]
    DeFi,
    TradeFinance,
}

impl GuarantorCategory {
    pub const ALL: [GuarantorCategory; 5] = [
        Self::TraditionalBank,
        Self::Fintech,
        Self::Insurance,
        Self::DeFi,
        Self::TradeFinance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TraditionalBank => "traditional-bank",
            Self::Fintech => "fintech",
            Self::Insurance => "insurance",
            Self::DeFi => "defi",
            Self::TradeFinance => "trade-finance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TraditionalBank => "Traditional Bank",
            Self::Fintech => "Fintech",
            Self::Insurance => "Insurance",
            Self::DeFi => "DeFi",
            Self::TradeFinance => "Trade Finance",
        }
    }
}

impl FromStr for GuarantorCategory {
    type Err = AccordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value || category.label() == value)
            .ok_or_else(|| AccordError::unknown_token("guarantor category", value))
    }
}

/// A third party offering to back contract payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub id: String,
    pub name: String,
    pub category: GuarantorCategory,
    /// Out of 5.
    pub rating: f32,
    pub reviews: u32,
    pub fee_percent: f64,
    /// USD.
    pub max_coverage: u64,
    pub processing_hours: u32,
    pub specialties: Vec<String>,
    pub features: Vec<String>,
    pub verified: bool,
    pub description: String,
}

impl Guarantor {
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .specialties
                .iter()
                .any(|specialty| specialty.to_lowercase().contains(needle))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The marketplace listing.
pub fn guarantor_catalogue() -> Vec<Guarantor> {
    vec![
        Guarantor {
            id: "1".into(),
            name: "CityBank Financial".into(),
            category: GuarantorCategory::TraditionalBank,
            rating: 4.8,
            reviews: 1247,
            fee_percent: 2.5,
            max_coverage: 500_000,
            processing_hours: 24,
            specialties: strings(&["Property Rentals", "Commercial Leases"]),
            features: strings(&["Insurance Coverage", "24/7 Support", "Legal Assistance"]),
            verified: true,
            description: "Leading financial institution with over 50 years of experience in \
                          commercial guarantees and escrow services."
                .into(),
        },
        Guarantor {
            id: "2".into(),
            name: "SecureGuarantee Ltd".into(),
            category: GuarantorCategory::Fintech,
            rating: 4.6,
            reviews: 892,
            fee_percent: 3.0,
            max_coverage: 250_000,
            processing_hours: 12,
            specialties: strings(&["Vehicle Rentals", "Equipment Leasing"]),
            features: strings(&["Instant Approval", "Mobile App", "API Integration"]),
            verified: true,
            description: "Modern fintech company specializing in fast, technology-driven \
                          guarantee solutions for the digital age."
                .into(),
        },
        Guarantor {
            id: "3".into(),
            name: "TrustFactor Corp".into(),
            category: GuarantorCategory::Insurance,
            rating: 4.7,
            reviews: 654,
            fee_percent: 2.8,
            max_coverage: 1_000_000,
            processing_hours: 6,
            specialties: strings(&["Service Agreements", "Freelance Contracts"]),
            features: strings(&["Risk Assessment", "Fraud Protection", "Claims Support"]),
            verified: true,
            description: "Insurance-backed guarantee provider offering comprehensive coverage \
                          for service-based contracts."
                .into(),
        },
        Guarantor {
            id: "4".into(),
            name: "DeFi Guarantee Protocol".into(),
            category: GuarantorCategory::DeFi,
            rating: 4.4,
            reviews: 423,
            fee_percent: 1.8,
            max_coverage: 100_000,
            processing_hours: 2,
            specialties: strings(&["Crypto Payments", "Smart Contracts"]),
            features: strings(&["Decentralized", "Low Fees", "Crypto Native"]),
            verified: false,
            description: "Decentralized protocol providing guarantee services through smart \
                          contracts and community governance."
                .into(),
        },
        Guarantor {
            id: "5".into(),
            name: "GlobalTrade Guarantees".into(),
            category: GuarantorCategory::TradeFinance,
            rating: 4.9,
            reviews: 1834,
            fee_percent: 3.5,
            max_coverage: 2_000_000,
            processing_hours: 48,
            specialties: strings(&["International Trade", "Large Contracts"]),
            features: strings(&["Global Coverage", "Multi-Currency", "Trade Expertise"]),
            verified: true,
            description: "International trade finance specialist with global reach and \
                          expertise in large-scale commercial guarantees."
                .into(),
        },
    ]
}

/// Guarantors the contract wizard offers directly.
pub fn featured_guarantors() -> Vec<Guarantor> {
    guarantor_catalogue().into_iter().take(3).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuarantorSort {
    /// Highest rating first.
    #[default]
    Rating,
    /// Lowest fee first.
    Fee,
    /// Fastest processing first.
    Speed,
}

impl FromStr for GuarantorSort {
    type Err = AccordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rating" => Ok(Self::Rating),
            "fee" => Ok(Self::Fee),
            "speed" => Ok(Self::Speed),
            other => Err(AccordError::unknown_token("guarantor sort", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuarantorQuery {
    pub search: String,
    /// `None` means all categories.
    pub category: Option<GuarantorCategory>,
    pub sort: GuarantorSort,
}

/// Filter then sort the listing. Ties keep catalogue order.
pub fn search_guarantors<'a>(catalogue: &'a [Guarantor], query: &GuarantorQuery) -> Vec<&'a Guarantor> {
    let needle = query.search.to_lowercase();
    let mut hits: Vec<_> = catalogue
        .iter()
        .filter(|guarantor| needle.is_empty() || guarantor.matches_search(&needle))
        .filter(|guarantor| {
            query
                .category
                .map_or(true, |category| guarantor.category == category)
        })
        .collect();

    match query.sort {
        GuarantorSort::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        GuarantorSort::Fee => hits.sort_by(|a, b| a.fee_percent.total_cmp(&b.fee_percent)),
        GuarantorSort::Speed => hits.sort_by_key(|guarantor| guarantor.processing_hours),
    }
    hits
}
