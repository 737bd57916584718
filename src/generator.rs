//! LinkedIn post generation via an LLM chat API
//!
//! Builds system and user prompts for a chosen article, sends them to the
//! chat-completion API as a single request, and normalizes the reply to plain
//! text. When no API key is configured, or when the call fails or comes back
//! in an unrecognized shape, a deterministic fallback post is returned
//! instead; the caller never observes the failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::article::Article;
use crate::prompts;
use crate::{Error, Result, UserConfig};

const CHAT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration for the post generator.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Chat API key. Absence is a legal, handled state: the generator
    /// returns a templated fallback post without touching the network.
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// A chat message carrying generated text.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

/// The closed set of reply shapes observed from chat backends.
#[derive(Debug, Clone)]
pub enum ChatReply {
    /// A message object with a `content` field.
    Message(ChatMessage),
    /// A bare string.
    Text(String),
    /// A loose mapping with the text expected under a `content` key.
    Fields(serde_json::Map<String, Value>),
}

impl ChatReply {
    /// Extracts the generated text. `None` marks the reply unusable, which
    /// triggers the fallback path in the generator.
    pub fn into_text(self) -> Option<String> {
        match self {
            ChatReply::Message(message) => Some(message.content),
            ChatReply::Text(text) => Some(text),
            ChatReply::Fields(map) => map
                .get("content")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

/// Transport seam for the chat-completion API.
#[async_trait]
pub trait ChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<ChatReply>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Production chat client for Groq's OpenAI-compatible endpoint.
pub struct GroqChatClient {
    client: Client,
    api_key: String,
}

impl GroqChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("linkedin-post-generator/1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ChatClient for GroqChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<ChatReply> {
        let request = ChatRequest {
            model,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                RequestMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response = self
            .client
            .post(CHAT_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::ChatApi {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        reply_from_value(body)
    }
}

/// Resolves a raw response body onto the closed set of reply shapes.
///
/// A standard completion body (`choices[0].message`) becomes a `Message`; a
/// bare JSON string becomes `Text`; any other object is kept as `Fields`.
/// Everything else is an unrecognized shape.
fn reply_from_value(body: Value) -> Result<ChatReply> {
    match body {
        Value::String(text) => Ok(ChatReply::Text(text)),
        Value::Object(map) => {
            if let Some(choices) = map.get("choices").and_then(Value::as_array) {
                let message = choices
                    .first()
                    .and_then(|choice| choice.get("message"))
                    .ok_or(Error::EmptyChatResponse)?;
                Ok(ChatReply::Message(serde_json::from_value(message.clone())?))
            } else {
                Ok(ChatReply::Fields(map))
            }
        }
        _ => Err(Error::UnrecognizedChatResponse),
    }
}

/// Generates LinkedIn posts for articles, degrading to a templated post when
/// the chat API is unavailable.
pub struct PostGenerator {
    model: String,
    client: Option<Box<dyn ChatClient + Send + Sync>>,
}

impl PostGenerator {
    pub fn new(config: LlmConfig) -> Self {
        let client = config
            .api_key
            .map(|key| Box::new(GroqChatClient::new(key)) as Box<dyn ChatClient + Send + Sync>);

        Self {
            model: config.model,
            client,
        }
    }

    /// Builds a generator over a custom chat transport.
    pub fn with_client(
        client: Box<dyn ChatClient + Send + Sync>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            client: Some(client),
        }
    }

    /// Generates a LinkedIn post about `article` in the user's voice.
    ///
    /// Total from the caller's perspective: a missing API key, a failed
    /// call, or an unrecognized reply shape all yield the fallback post. On
    /// success the reply content is returned exactly as the model produced
    /// it, with no mutation or truncation.
    pub async fn generate_linkedin_post(&self, article: &Article, config: &UserConfig) -> String {
        let Some(client) = &self.client else {
            log::info!("No LLM API key configured, using fallback post template");
            return fallback_post(article);
        };

        let system_prompt = prompts::render_system_prompt();
        let user_prompt = prompts::render_user_prompt(article, config);

        let outcome = client
            .complete(&system_prompt, &user_prompt, &self.model)
            .await
            .and_then(|reply| reply.into_text().ok_or(Error::UnrecognizedChatResponse));

        match outcome {
            Ok(post) => post,
            Err(e) => {
                log::warn!("Post generation failed, using fallback template: {}", e);
                fallback_post(article)
            }
        }
    }
}

/// Deterministic templated post used when the chat API is unavailable. Keeps
/// the article title verbatim and the source name with internal whitespace
/// removed so provenance survives degraded mode.
fn fallback_post(article: &Article) -> String {
    let source_tag: String = article.source.name.split_whitespace().collect();

    format!(
        "🚀 Just read \"{}\" and it's worth your time.\n\n\
         The pace of change here is remarkable, and pieces like this one from {} \
         are a good reminder to keep learning. What's your take?\n\n\
         #News #{}",
        article.title, source_tag, source_tag
    )
}
