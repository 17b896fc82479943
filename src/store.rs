use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::model::form_data::FormData;

/// Persistence capability behind the submission pipeline.
///
/// The handler calls `persist` only for submissions the schema accepted, and
/// maps its error to the one 500 response the endpoint can produce.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn persist(
        &self,
        form_data: &FormData,
        received_at: DateTime<Utc>,
    ) -> Result<(), String>;
}

/// Store that records accepted submissions in the log and keeps nothing.
pub struct NullStore;

#[async_trait]
impl SubmissionStore for NullStore {
    async fn persist(
        &self,
        form_data: &FormData,
        received_at: DateTime<Utc>,
    ) -> Result<(), String> {
        info!(
            "Accepted submission from {} ({} fields, {} files)",
            received_at.to_rfc3339(),
            form_data.fields().len(),
            form_data.files().len(),
        );

        Ok(())
    }
}
