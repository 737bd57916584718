//! Prompt templates and rendering for LinkedIn post generation

use crate::article::Article;
use crate::UserConfig;

/// Fixed instruction establishing the assistant's role and output constraints.
pub const SYSTEM_TEMPLATE: &str = "\
You are a professional social media ghostwriter who writes engaging LinkedIn posts.
Write a LinkedIn post about the news article the user provides, in the user's own voice.
Keep it concise (3-4 short paragraphs), professional yet approachable, and end with
2-3 relevant hashtags. Output only the post itself, with no preamble, no explanation,
and no meta-commentary.";

/// User prompt template. Placeholders are filled by [`render_user_prompt`];
/// any missing article field substitutes an empty string.
pub const USER_TEMPLATE: &str = "\
Write a LinkedIn post about this article:

Title: {title}
Source: {source}
Description: {description}

User Style Preferences: {style_preferences}

{few_shot_examples}";

const FEW_SHOT_LEAD_IN: &str = "Here are sample posts from the user for reference:";

/// Formats the user's past posts as a few-shot block for the prompt.
///
/// Returns the empty string when there are no sample posts; otherwise a fixed
/// lead-in followed by the samples verbatim, preserving their formatting.
pub fn get_few_shot_examples(config: &UserConfig) -> String {
    if config.sample_posts.trim().is_empty() {
        return String::new();
    }
    format!("{}\n{}", FEW_SHOT_LEAD_IN, config.sample_posts)
}

/// Fills [`USER_TEMPLATE`] from the article and the user's style configuration.
pub fn render_user_prompt(article: &Article, config: &UserConfig) -> String {
    USER_TEMPLATE
        .replace("{title}", &article.title)
        .replace("{source}", &article.source.name)
        .replace("{description}", article.description.as_deref().unwrap_or(""))
        .replace("{style_preferences}", &config.post_style)
        .replace("{few_shot_examples}", &get_few_shot_examples(config))
}

/// Returns the system prompt. Same string every call.
pub fn render_system_prompt() -> String {
    SYSTEM_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleSource;

    fn article(title: &str, source: &str, description: Option<&str>) -> Article {
        Article {
            source: ArticleSource {
                name: source.to_string(),
            },
            author: None,
            title: title.to_string(),
            description: description.map(String::from),
            url: "https://example.com".to_string(),
            url_to_image: None,
            published_at: "2024-01-15T10:00:00Z".to_string(),
            content: None,
        }
    }

    #[test]
    fn test_system_template_content() {
        assert!(!SYSTEM_TEMPLATE.is_empty());
        assert!(SYSTEM_TEMPLATE.contains("LinkedIn"));
        assert!(SYSTEM_TEMPLATE.to_lowercase().contains("post"));
    }

    #[test]
    fn test_user_template_placeholders() {
        assert!(USER_TEMPLATE.contains("{title}"));
        assert!(USER_TEMPLATE.contains("{source}"));
        assert!(USER_TEMPLATE.contains("{description}"));
        assert!(USER_TEMPLATE.contains("{style_preferences}"));
        assert!(USER_TEMPLATE.contains("{few_shot_examples}"));
    }

    #[test]
    fn test_user_template_structure() {
        assert!(USER_TEMPLATE.contains("Title:"));
        assert!(USER_TEMPLATE.contains("Source:"));
        assert!(USER_TEMPLATE.contains("Description:"));
        assert!(USER_TEMPLATE.contains("User Style Preferences:"));
    }

    #[test]
    fn test_few_shot_empty_sample_posts() {
        let config = UserConfig::default();
        assert_eq!(get_few_shot_examples(&config), "");
    }

    #[test]
    fn test_few_shot_whitespace_only_sample_posts() {
        let config = UserConfig::default().with_sample_posts("   \n\t  \n");
        assert_eq!(get_few_shot_examples(&config), "");
    }

    #[test]
    fn test_few_shot_with_sample_posts() {
        let sample = "Sample post 1\n\nSample post 2";
        let config = UserConfig::default().with_sample_posts(sample);
        let result = get_few_shot_examples(&config);

        assert!(result.contains("Here are sample posts from the user for reference:"));
        assert!(result.contains(sample));
        assert!(result.len() > sample.len());
    }

    #[test]
    fn test_few_shot_preserves_multiline_formatting() {
        let sample = "Post 1: This is a great article!\n\nI learned so much.\n\n#Technology\n\n---\n\nPost 2: Another example post here.";
        let config = UserConfig::default().with_sample_posts(sample);
        let result = get_few_shot_examples(&config);

        assert!(result.contains(sample));
        assert!(result.contains("Post 1"));
        assert!(result.contains("Post 2"));
    }

    #[test]
    fn test_few_shot_preserves_special_characters() {
        let sample = "Post with emojis 🚀💡 and symbols @#$%";
        let config = UserConfig::default().with_sample_posts(sample);
        let result = get_few_shot_examples(&config);

        assert!(result.contains(sample));
        assert!(result.contains("🚀"));
    }

    #[test]
    fn test_render_user_prompt_fills_all_fields() {
        let article = article(
            "AI Revolution in 2024",
            "TechCrunch",
            Some("How AI is changing the world"),
        );
        let config = UserConfig::new("Professional tone", "My old post");

        let prompt = render_user_prompt(&article, &config);
        assert!(prompt.contains("Title: AI Revolution in 2024"));
        assert!(prompt.contains("Source: TechCrunch"));
        assert!(prompt.contains("Description: How AI is changing the world"));
        assert!(prompt.contains("User Style Preferences: Professional tone"));
        assert!(prompt.contains("My old post"));
        assert!(!prompt.contains("{title}"));
        assert!(!prompt.contains("{few_shot_examples}"));
    }

    #[test]
    fn test_render_user_prompt_missing_description() {
        let article = article("Test Article", "Example", None);
        let config = UserConfig::default();

        let prompt = render_user_prompt(&article, &config);
        assert!(prompt.contains("Title: Test Article"));
        assert!(prompt.contains("Description: \n"));
    }

    #[test]
    fn test_render_system_prompt_is_stable() {
        assert_eq!(render_system_prompt(), render_system_prompt());
        assert_eq!(render_system_prompt(), SYSTEM_TEMPLATE);
    }
}
