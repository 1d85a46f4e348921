//! Consultation request: company, contact, then what they need.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::contact::ContactInfo;
use super::rules::non_blank;
use super::wizard::{LeadFieldError, StepForm};

/// Services a prospect can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Monthly bookkeeping.
    Bookkeeping,
    /// Tax preparation and filing.
    TaxPreparation,
    /// Payroll processing.
    Payroll,
    /// Fractional CFO advisory.
    CfoAdvisory,
    /// Catch-up and clean-up of past books.
    Cleanup,
    /// Anything else.
    Other,
}

/// The prospect's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    /// Legal or trading name.
    #[validate(custom(function = "non_blank", message = "Company name is required"))]
    pub company_name: String,
    /// Industry.
    #[validate(custom(function = "non_blank", message = "Industry is required"))]
    pub industry: String,
    /// Annual revenue band as chosen, e.g. `"250k-1m"`.
    #[serde(default)]
    pub annual_revenue: Option<String>,
    /// Head count.
    #[serde(default)]
    #[validate(range(min = 1, message = "Employee count must be at least 1"))]
    pub employee_count: Option<u32>,
}

/// What the prospect wants help with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationDetails {
    /// Services of interest.
    #[validate(length(min = 1, message = "Select at least one service"))]
    pub services: Vec<ServiceKind>,
    /// Free-form message.
    #[serde(default)]
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: String,
}

/// Steps of the consultation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationStep {
    /// Company information.
    Company,
    /// Contact information.
    Contact,
    /// Services and message.
    Details,
}

/// Body of `POST /api/consultation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    /// Company step.
    pub company: CompanyInfo,
    /// Contact step.
    pub contact: ContactInfo,
    /// Details step.
    pub details: ConsultationDetails,
}

impl StepForm for ConsultationRequest {
    type Step = ConsultationStep;
    const STEPS: &'static [ConsultationStep] = &[
        ConsultationStep::Company,
        ConsultationStep::Contact,
        ConsultationStep::Details,
    ];

    fn step_name(step: ConsultationStep) -> &'static str {
        match step {
            ConsultationStep::Company => "company",
            ConsultationStep::Contact => "contact",
            ConsultationStep::Details => "details",
        }
    }

    fn check_step(&self, step: ConsultationStep) -> Vec<LeadFieldError> {
        let result = match step {
            ConsultationStep::Company => self.company.validate(),
            ConsultationStep::Contact => return self.contact.check(),
            ConsultationStep::Details => self.details.validate(),
        };
        result
            .err()
            .map(|errors| LeadFieldError::from_validation(&errors))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::wizard::{LeadFormError, Wizard};

    fn company() -> CompanyInfo {
        CompanyInfo {
            company_name: "Harbor Bakery".to_string(),
            industry: "Food service".to_string(),
            annual_revenue: Some("250k-1m".to_string()),
            employee_count: Some(12),
        }
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            full_name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            ..ContactInfo::default()
        }
    }

    #[test]
    fn test_walk_through_steps() {
        let mut wizard = Wizard::new(ConsultationRequest::default());
        assert!(wizard.next().is_err());

        wizard.form_mut().company = company();
        assert_eq!(wizard.next(), Ok(ConsultationStep::Contact));

        wizard.form_mut().contact = contact();
        assert_eq!(wizard.next(), Ok(ConsultationStep::Details));

        match wizard.submission() {
            Err(LeadFormError::Incomplete { step, fields }) => {
                assert_eq!(step, "details");
                assert_eq!(fields[0].message, "Select at least one service");
            }
            other => panic!("unexpected: {other:?}"),
        }

        wizard.form_mut().details.services = vec![ServiceKind::Bookkeeping];
        assert!(wizard.submission().is_ok());
    }

    #[test]
    fn test_zero_employees_rejected() {
        let request = ConsultationRequest {
            company: CompanyInfo {
                employee_count: Some(0),
                ..company()
            },
            ..ConsultationRequest::default()
        };
        let errors = request.check_step(ConsultationStep::Company);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "employeeCount");
    }

    #[test]
    fn test_whitespace_company_fields_rejected() {
        let request = ConsultationRequest {
            company: CompanyInfo {
                company_name: " ".to_string(),
                industry: "\t".to_string(),
                ..company()
            },
            ..ConsultationRequest::default()
        };
        let fields: Vec<String> = request
            .check_step(ConsultationStep::Company)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, ["companyName", "industry"]);
    }

    #[test]
    fn test_wire_shape() {
        let request = ConsultationRequest {
            company: company(),
            contact: contact(),
            details: ConsultationDetails {
                services: vec![ServiceKind::TaxPreparation],
                message: String::new(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["company"]["companyName"], "Harbor Bakery");
        assert_eq!(value["contact"]["preferredContact"], "email");
        assert_eq!(value["details"]["services"][0], "tax_preparation");
    }
}
