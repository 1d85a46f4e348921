//! Gated lead-generation forms.
//!
//! Each form is a tagged record per step, walked by a [`Wizard`] that only
//! advances past valid steps.

pub mod checklist;
pub mod consultation;
pub mod contact;
mod rules;
pub mod wizard;

pub use checklist::{BookkeepingStatus, ChecklistInfo, ChecklistRequest, ChecklistStep, EntityType};
pub use consultation::{
    CompanyInfo, ConsultationDetails, ConsultationRequest, ConsultationStep, ServiceKind,
};
pub use contact::{ContactInfo, ContactMethod};
pub use wizard::{LeadFieldError, LeadFormError, StepForm, Wizard};
