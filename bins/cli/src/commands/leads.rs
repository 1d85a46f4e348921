use std::path::Path;

use anyhow::Result;
use ledgerdesk_client::ClientError;
use ledgerdesk_core::leads::{ChecklistRequest, ConsultationRequest, LeadFormError, Wizard};

use super::{Context, read_json};

pub async fn consultation(ctx: &Context, file: &Path) -> Result<()> {
    let wizard = Wizard::new(read_json::<ConsultationRequest>(file)?);
    let result = ctx.client()?.submit_consultation(&wizard).await;
    report(result, "Consultation request sent. We will be in touch shortly.")
}

pub async fn checklist(ctx: &Context, file: &Path) -> Result<()> {
    let wizard = Wizard::new(read_json::<ChecklistRequest>(file)?);
    let result = ctx.client()?.submit_checklist(&wizard).await;
    report(result, "Checklist sent. Your results will arrive by email.")
}

fn report(result: Result<(), ClientError>, success: &str) -> Result<()> {
    match result {
        Ok(()) => {
            println!("{success}");
            Ok(())
        }
        Err(err) => {
            if let ClientError::LeadForm(LeadFormError::Incomplete { step, fields }) = &err {
                println!("The {step} step needs attention:");
                for field in fields {
                    println!("  - {}: {}", field.field, field.message);
                }
            }
            Err(err.into())
        }
    }
}
