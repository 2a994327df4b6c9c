use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// ENUMS
// =============================================================================

/// Practice areas a visitor can pick on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum LegalArea {
    ProjectFinancing,
    BankingFinance,
    CorporateLaw,
    CommercialLaw,
    ContractLaw,
    MaritimeLaw,
    MergersAcquisitions,
    EnergyLaw,
    CompetitionLaw,
    CapitalMarkets,
    DisputeResolution,
    LaborLaw,
    Compliance,
    RealEstate,
    Restructuring,
    CriminalLaw,
    FamilyLaw,
    AdministrativeLaw,
    ImmigrationLaw,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

// =============================================================================
// CREATE
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, max = 300, message = "Subject is required"))]
    pub subject: String,
    pub legal_area: LegalArea,
    pub urgency: Urgency,
    #[validate(length(min = 1, max = 10000, message = "Message is required"))]
    pub message: String,
}
