use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("summarization model returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("summarization response parse error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("summarization model returned no summaries")]
    EmptyResponse,

    #[error("summarization model returned blank text")]
    BlankSummary,
}
