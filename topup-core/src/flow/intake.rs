//! Confirmation hand-off to the intake service.

use crate::entities::PendingRequest;
use kanau::processor::Processor;
use topup_sdk::client::{ClientError, IntakeClient};

#[derive(Debug, Clone)]
/// Forward a confirmed pending request for manual review.
pub struct ForwardToIntake {
    pub request: PendingRequest,
}

impl Processor<ForwardToIntake> for IntakeClient {
    type Output = ();
    type Error = ClientError;
    #[tracing::instrument(skip_all, err, name = "HTTP:ForwardToIntake")]
    async fn process(&self, query: ForwardToIntake) -> Result<(), ClientError> {
        self.create_request(&query.request.to_intake_payload()).await
    }
}
