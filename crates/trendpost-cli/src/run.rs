//! One end-to-end pass: collect topics, generate and print a post per topic.

use std::io::Write;

use trendpost_core::Topic;
use trendpost_sources::{collect_topics, TopicSource};
use trendpost_writer::{format_post, generate_post, Outcome, Summarizer};

/// Printed after every post: blank line, 50 dashes, blank line.
pub(crate) const SEPARATOR: &str = "\n--------------------------------------------------\n";

const FETCHING_MESSAGE: &str = "Fetching trending tech topics...";
const GENERATING_MESSAGE: &str = "Generating tech blog posts...";
const NO_TOPICS_MESSAGE: &str = "No topics fetched. Exiting.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) topics: usize,
    pub(crate) posts: usize,
    pub(crate) failed_generations: usize,
}

/// Collect topics from `sources` and write one formatted post per topic.
///
/// Source failures and per-topic generation failures never abort the run;
/// only a write error on `out` does.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) async fn run_once<W: Write>(
    sources: &[Box<dyn TopicSource>],
    summarizer: &dyn Summarizer,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    writeln!(out, "{FETCHING_MESSAGE}\n")?;
    out.flush()?;

    let topics = collect_topics(sources).await;
    if topics.is_empty() {
        writeln!(out, "{NO_TOPICS_MESSAGE}")?;
        return Ok(RunSummary::default());
    }

    write_topic_list(&topics, out)?;
    writeln!(out, "{GENERATING_MESSAGE}\n")?;

    let mut summary = RunSummary {
        topics: topics.len(),
        ..RunSummary::default()
    };

    for topic in &topics {
        let post = generate_post(summarizer, topic).await;
        if post.outcome == Outcome::Failed {
            summary.failed_generations += 1;
        }

        writeln!(out, "{}", format_post(&post.topic.text, &post.body))?;
        writeln!(out, "{SEPARATOR}")?;
        out.flush()?;
        summary.posts += 1;
    }

    Ok(summary)
}

/// Collect topics and report the posts that would be generated.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) async fn run_dry<W: Write>(
    sources: &[Box<dyn TopicSource>],
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let topics = collect_topics(sources).await;
    if topics.is_empty() {
        writeln!(out, "{NO_TOPICS_MESSAGE}")?;
        return Ok(RunSummary::default());
    }

    writeln!(out, "dry-run: would generate {} posts:", topics.len())?;
    for (i, topic) in topics.iter().enumerate() {
        writeln!(out, "{:>2}. [{}] {}", i + 1, topic.source, topic.text)?;
    }

    Ok(RunSummary {
        topics: topics.len(),
        ..RunSummary::default()
    })
}

/// Collect topics and print one per line, tagged with its source.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) async fn list_topics<W: Write>(
    sources: &[Box<dyn TopicSource>],
    out: &mut W,
) -> anyhow::Result<usize> {
    let topics = collect_topics(sources).await;
    for topic in &topics {
        writeln!(out, "{}\t{}", topic.source, topic.text)?;
    }
    Ok(topics.len())
}

/// Topics as a bracketed list of double-quoted strings.
fn write_topic_list<W: Write>(topics: &[Topic], out: &mut W) -> std::io::Result<()> {
    let texts: Vec<&str> = topics.iter().map(|t| t.text.as_str()).collect();
    writeln!(out, "Generated topics: {texts:?}\n")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
