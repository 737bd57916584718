//! LinkedIn Post Generator Library
//!
//! Fetches recent news articles for a topic and generates a LinkedIn post
//! about a chosen article in the user's own writing voice.

pub mod cli;
pub mod article;
pub mod fetcher;
pub mod prompts;
pub mod generator;
pub mod error;

pub use error::{Error, Result};

/// The user's writing-style configuration.
///
/// `post_style` is a free-text description of how posts should read;
/// `sample_posts` is a block of the user's own past posts, separated by
/// blank lines, used as few-shot examples. Both default to empty and any
/// string is legal, including empty.
#[derive(Debug, Clone, Default)]
pub struct UserConfig {
    pub post_style: String,
    pub sample_posts: String,
}

impl UserConfig {
    pub fn new(post_style: impl Into<String>, sample_posts: impl Into<String>) -> Self {
        Self {
            post_style: post_style.into(),
            sample_posts: sample_posts.into(),
        }
    }

    pub fn with_post_style(mut self, post_style: impl Into<String>) -> Self {
        self.post_style = post_style.into();
        self
    }

    pub fn with_sample_posts(mut self, sample_posts: impl Into<String>) -> Self {
        self.sample_posts = sample_posts.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = UserConfig::default();

        assert_eq!(config.post_style, "");
        assert_eq!(config.sample_posts, "");
    }

    #[test]
    fn test_with_post_style() {
        let config = UserConfig::default().with_post_style("Professional with emojis");

        assert_eq!(config.post_style, "Professional with emojis");
        assert_eq!(config.sample_posts, "");
    }

    #[test]
    fn test_with_sample_posts() {
        let sample = "Sample post 1\n\nSample post 2";
        let config = UserConfig::default().with_sample_posts(sample);

        assert_eq!(config.post_style, "");
        assert_eq!(config.sample_posts, sample);
    }

    #[test]
    fn test_new_with_both_fields() {
        let config = UserConfig::new("Casual and engaging", "Example post");

        assert_eq!(config.post_style, "Casual and engaging");
        assert_eq!(config.sample_posts, "Example post");
    }

    #[test]
    fn test_mutation_between_calls() {
        let mut config = UserConfig::default();
        config.post_style = "New style".to_string();
        config.sample_posts = "New sample".to_string();

        assert_eq!(config.post_style, "New style");
        assert_eq!(config.sample_posts, "New sample");
    }

    #[test]
    fn test_long_text() {
        let config = UserConfig::new("A".repeat(1000), "B".repeat(2000));

        assert_eq!(config.post_style.len(), 1000);
        assert_eq!(config.sample_posts.len(), 2000);
    }

    #[test]
    fn test_special_characters() {
        let special = "Style with 🚀 emojis & special chars!@#$%";
        let config = UserConfig::default().with_post_style(special);

        assert_eq!(config.post_style, special);
    }
}
