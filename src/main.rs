//! LinkedIn Post Generator - Main entry point
//!
//! Fetches recent news articles for a topic and generates a LinkedIn post
//! about a chosen article in the user's own writing voice.

use linkedin_post_generator::{
    cli::Cli,
    fetcher::{ArticleFetcher, FetcherConfig},
    generator::{LlmConfig, PostGenerator, DEFAULT_MODEL},
    Error, Result,
};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    // Load .env if present, then initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Validate arguments
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Run the application
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let user_config = cli.to_user_config()?;

    // Build the fetcher; a missing key is legal and means placeholder articles
    let fetcher = ArticleFetcher::new(FetcherConfig {
        api_key: env_var("NEWS_API_KEY"),
    });

    if cli.verbose {
        println!("Fetching {} articles about '{}'", cli.count, cli.topic);
    }

    let articles = fetcher.fetch_articles_by_topic(&cli.topic, cli.count).await;

    if cli.verbose {
        println!("Found {} articles:", articles.len());
        for (i, article) in articles.iter().enumerate() {
            println!("  {}: {} ({})", i, article.title, article.source.name);
        }
    }

    // Select the article to post about
    let article = articles.get(cli.pick).ok_or(Error::ArticleOutOfRange {
        index: cli.pick,
        available: articles.len(),
    })?;

    if cli.verbose {
        println!("Writing a post about: {}", article.title);
    }

    // Build the generator; a missing key is legal and means a fallback post
    let generator = PostGenerator::new(LlmConfig {
        api_key: env_var("GROQ_API_KEY"),
        model: env_var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    });

    let post = generator.generate_linkedin_post(article, &user_config).await;

    // Output the generated post
    println!("{}", post);

    Ok(())
}

/// Reads an environment variable, treating empty or blank values as absent.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
