/// Hashtag line closing every post.
pub const FOOTER: &str = "#Tech #Innovation #AI #FutureOfTech #Trending";

/// Render a post: bold title, blank line, body, blank line, footer.
#[must_use]
pub fn format_post(topic: &str, body: &str) -> String {
    format!("**{topic}**\n\n{body}\n\n{FOOTER}")
}
