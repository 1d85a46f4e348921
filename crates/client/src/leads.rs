//! Lead-generation form submission.

use ledgerdesk_core::leads::{ChecklistRequest, ConsultationRequest, StepForm, Wizard};
use reqwest::Method;
use tracing::info;

use crate::client::{PortalClient, send_unit};
use crate::error::ClientResult;

impl PortalClient {
    /// `POST /api/consultation`.
    ///
    /// Every step is validated first; an incomplete form is never sent.
    pub async fn submit_consultation(
        &self,
        wizard: &Wizard<ConsultationRequest>,
    ) -> ClientResult<()> {
        self.submit_lead(wizard, "/api/consultation", "Failed to submit consultation request")
            .await?;
        info!("consultation request submitted");
        Ok(())
    }

    /// `POST /api/checklist`.
    ///
    /// Every step is validated first; an incomplete form is never sent.
    pub async fn submit_checklist(&self, wizard: &Wizard<ChecklistRequest>) -> ClientResult<()> {
        self.submit_lead(wizard, "/api/checklist", "Failed to submit checklist").await?;
        info!("financial checklist submitted");
        Ok(())
    }

    async fn submit_lead<F>(&self, wizard: &Wizard<F>, path: &str, fallback: &str) -> ClientResult<()>
    where
        F: StepForm + serde::Serialize + Sync,
    {
        let form = wizard.submission()?;
        let builder = self.request(Method::POST, path).json(form);
        send_unit(builder, fallback).await
    }
}
