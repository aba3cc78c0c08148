/// Upload-parsing errors surfaced at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("payload content length greater than maximum allowed: {limit}")]
    TooLarge { limit: usize },

    #[error("no image found in the request")]
    Missing,

    #[error("malformed upload: {reason}")]
    Malformed { reason: String },
}
