/// Lower bound on generated length, in model tokens.
pub const SUMMARY_MIN_LENGTH: u32 = 200;
/// Upper bound on generated length, in model tokens.
pub const SUMMARY_MAX_LENGTH: u32 = 300;

/// Body used in place of generated text when the model call fails.
pub const SENTINEL_BODY: &str = "Error generating blog post.";

/// The generation prompt for one topic. The topic is inserted verbatim.
#[must_use]
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Write a detailed, engaging, and professional tech blog post about '{topic}', \
         highlighting its global impact, recent trends, and future implications."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_quotes_topic() {
        assert_eq!(
            build_prompt("Quantum Chips"),
            "Write a detailed, engaging, and professional tech blog post about 'Quantum Chips', \
             highlighting its global impact, recent trends, and future implications."
        );
    }

    #[test]
    fn topic_is_not_escaped() {
        assert!(build_prompt("Rust's 'async' story").contains("'Rust's 'async' story'"));
    }
}
