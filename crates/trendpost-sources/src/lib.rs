//! Trending-topic collection for trendpost.
//!
//! Four upstream sources (Reddit hot listing, X place trends, and two HTML
//! scrapes) each yield at most [`MAX_TOPICS_PER_SOURCE`] topics. Every source
//! runs behind the same [`fetch_or_empty`] boundary so an outage in one never
//! aborts the run, and [`collect_topics`] concatenates their output in order.

pub mod aggregate;
pub mod error;
pub mod source;
pub mod sources;

pub use aggregate::{aggregate, collect_topics};
pub use error::SourceError;
pub use source::{fetch_or_empty, TopicSource};
pub use sources::{default_sources, HtmlTopicSource, RedditSource, XTrendsSource};

/// Upper bound on topics taken from any single source.
pub const MAX_TOPICS_PER_SOURCE: usize = 5;
