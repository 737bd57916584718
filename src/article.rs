//! Article data model matching the article-search API wire format

use serde::{Deserialize, Serialize};

/// The outlet that published an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

/// A single news article as returned by the search API.
///
/// `title` and `source.name` are always present in any record handed to a
/// caller, including synthetic fallback records; everything else is optional
/// on the wire and stays optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Response envelope of the search API's `everything` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}
