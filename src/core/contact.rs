use crate::domain::model::ContactSubmission;
use crate::domain::ports::StorefrontApi;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Where the contact form is in its submit flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Editing,
    Submitted,
    Failed(String),
}

/// Contact form flow: one POST per submit action, then either the
/// confirmation state or a visible failure.
#[derive(Debug, Default)]
pub struct ContactForm {
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Validate and send the submission. Invalid input keeps the form
    /// in `Editing` without touching the network.
    pub async fn submit<A: StorefrontApi>(
        &mut self,
        api: &A,
        submission: ContactSubmission,
    ) -> Result<()> {
        submission.validate()?;

        tracing::info!("Submitting contact form for {}", submission.name);
        match api.submit_contact(&submission).await {
            Ok(()) => {
                self.state = SubmitState::Submitted;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.state = SubmitState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
