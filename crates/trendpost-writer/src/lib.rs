//! Blog post generation for trendpost.
//!
//! A [`Summarizer`] turns a prompt into text; [`generate_post`] wraps one
//! call per topic, substituting [`SENTINEL_BODY`] when the model fails, and
//! [`format_post`] renders the final post with its hashtag footer.

pub mod error;
pub mod format;
pub mod huggingface;
pub mod post;
pub mod prompt;
pub mod summarizer;

pub use error::SummarizeError;
pub use format::{format_post, FOOTER};
pub use huggingface::HuggingFaceSummarizer;
pub use post::{generate_post, GeneratedPost, Outcome};
pub use prompt::{build_prompt, SENTINEL_BODY, SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH};
pub use summarizer::Summarizer;
