//! Financial health checklist: contact, then the checklist itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::contact::ContactInfo;
use super::wizard::{LeadFieldError, StepForm};

/// State of the prospect's books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookkeepingStatus {
    /// Reconciled through last month.
    #[default]
    UpToDate,
    /// Behind by less than a year.
    BehindUnderYear,
    /// Behind by more than a year.
    BehindOverYear,
    /// No books kept yet.
    NotStarted,
}

/// Legal form of the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Sole proprietorship.
    #[default]
    SoleProprietor,
    /// Partnership.
    Partnership,
    /// Limited liability company.
    Llc,
    /// S corporation.
    SCorp,
    /// C corporation.
    CCorp,
    /// Nonprofit.
    Nonprofit,
}

/// Checklist answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistInfo {
    /// Bookkeeping status.
    #[serde(default)]
    pub bookkeeping_status: BookkeepingStatus,
    /// Entity type.
    #[serde(default)]
    pub entity_type: EntityType,
    /// Runs payroll.
    #[serde(default)]
    pub has_payroll: bool,
    /// Collects and files sales tax.
    #[serde(default)]
    pub files_sales_tax: bool,
    /// Tax year the checklist is about.
    #[validate(range(min = 1990, max = 2100, message = "Tax year must be between 1990 and 2100"))]
    pub tax_year: i32,
    /// Anything worrying the prospect.
    #[serde(default)]
    #[validate(length(max = 2000, message = "Concerns must be at most 2000 characters"))]
    pub concerns: String,
}

/// Steps of the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistStep {
    /// Contact information.
    Contact,
    /// Checklist answers.
    Checklist,
}

/// Body of `POST /api/checklist`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRequest {
    /// Contact step.
    pub contact: ContactInfo,
    /// Checklist step.
    pub checklist: ChecklistInfo,
}

impl StepForm for ChecklistRequest {
    type Step = ChecklistStep;
    const STEPS: &'static [ChecklistStep] = &[ChecklistStep::Contact, ChecklistStep::Checklist];

    fn step_name(step: ChecklistStep) -> &'static str {
        match step {
            ChecklistStep::Contact => "contact",
            ChecklistStep::Checklist => "checklist",
        }
    }

    fn check_step(&self, step: ChecklistStep) -> Vec<LeadFieldError> {
        match step {
            ChecklistStep::Contact => self.contact.check(),
            ChecklistStep::Checklist => self
                .checklist
                .validate()
                .err()
                .map(|errors| LeadFieldError::from_validation(&errors))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1989, false)]
    #[case(1990, true)]
    #[case(2024, true)]
    #[case(2100, true)]
    #[case(2101, false)]
    fn test_tax_year_bounds(#[case] tax_year: i32, #[case] valid: bool) {
        let request = ChecklistRequest {
            checklist: ChecklistInfo {
                tax_year,
                ..ChecklistInfo::default()
            },
            ..ChecklistRequest::default()
        };
        assert_eq!(request.check_step(ChecklistStep::Checklist).is_empty(), valid);
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let info: ChecklistInfo =
            serde_json::from_str(r#"{"taxYear": 2024, "entityType": "s_corp"}"#).unwrap();
        assert_eq!(info.entity_type, EntityType::SCorp);
        assert_eq!(info.bookkeeping_status, BookkeepingStatus::UpToDate);
        assert!(!info.has_payroll);
    }
}
