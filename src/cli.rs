//! Command line interface for the LinkedIn post generator

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::{Error, Result, UserConfig};

/// Generate LinkedIn posts from recent news articles
#[derive(Parser)]
#[command(name = "generate-linkedin-post")]
#[command(about = "A news-driven LinkedIn post generator")]
#[command(version = "1.0.0")]
#[command(long_about = r#"
Generate LinkedIn posts from recent news articles

This tool fetches recent articles for a topic and drafts a LinkedIn post
about one of them in your own writing voice, optionally steered by a style
description and samples of your past posts.

Examples:
  generate-linkedin-post                          # Post about Technology news
  generate-linkedin-post --topic "AI"             # Pick a different topic
  generate-linkedin-post --count 5 --pick 2       # Choose among more articles
  generate-linkedin-post --style "casual, emoji"  # Describe the desired voice
  generate-linkedin-post --samples-file posts.txt # Few-shot from past posts
"#)]
pub struct Cli {
    /// Topic to search articles for
    #[arg(long, default_value = "Technology")]
    pub topic: String,

    /// Number of articles to fetch
    #[arg(long, default_value = "3")]
    pub count: usize,

    /// Index of the fetched article to write about (0-based)
    #[arg(long, default_value = "0")]
    pub pick: usize,

    /// Free-text description of the desired post style
    #[arg(long, default_value = "")]
    pub style: String,

    /// File containing past posts (blank-line separated) used as few-shot examples
    #[arg(long)]
    pub samples_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidCount { count: self.count });
        }

        Ok(())
    }

    /// Build the user's style configuration, reading the samples file if one
    /// was given.
    pub fn to_user_config(&self) -> Result<UserConfig> {
        let sample_posts = match &self.samples_file {
            Some(path) => {
                fs::read_to_string(path).map_err(|_| Error::SamplePostsUnreadable {
                    path: path.clone(),
                })?
            }
            None => String::new(),
        };

        Ok(UserConfig::new(self.style.clone(), sample_posts))
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            topic: "Technology".to_string(),
            count: 3,
            pick: 0,
            style: String::new(),
            samples_file: None,
            verbose: false,
        }
    }
}
