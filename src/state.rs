use std::path::PathBuf;
use std::sync::Arc;

use crate::schema::FormSchema;
use crate::store::SubmissionStore;

/// Shared handler state, passed to every request via axum's `State`.
///
/// Cheaply cloneable and immutable after start-up; requests share nothing
/// mutable through it.
#[derive(Clone)]
pub struct AppState {
    /// The fixed submission schema.
    pub schema: FormSchema,
    /// Persistence capability invoked for accepted submissions.
    pub store: Arc<dyn SubmissionStore>,
    /// Directory uploaded file content is spooled to while parsing.
    pub upload_dir: PathBuf,
}
