use std::path::PathBuf;

/// Reference to one uploaded file, spooled to disk during parsing.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name the client declared for the part.
    pub file_name: String,
    /// Declared content type, when the part carried one.
    pub content_type: Option<String>,
    /// Content length in bytes.
    pub size: u64,
    /// Where the content was written. Spool files are left behind for the
    /// store; nothing in the pipeline deletes them.
    pub spool_path: PathBuf,
}
