use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::aggregate::EvidenceBundle;

const WIKIPEDIA_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const NEWSAPI_SEARCH_URL: &str = "https://newsapi.org/v2/everything";
const GNEWS_SEARCH_URL: &str = "https://gnews.io/api/v4/search";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ARTICLES: &str = "3";

/// Outcome of querying one evidence source.
///
/// Sources never fail the request: a timeout, error status, or unreadable
/// payload degrades to `Absent`, which downstream aggregation treats as an
/// empty slot rather than a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Found(String),
    Absent,
}

impl Evidence {
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Evidence::Absent
        } else {
            Evidence::Found(text)
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Evidence::Found(text) => Some(text),
            Evidence::Absent => None,
        }
    }
}

pub struct EvidenceClient {
    http: Client,
    news_api_key: String,
    gnews_api_key: String,
}

impl EvidenceClient {
    pub fn new(news_api_key: String, gnews_api_key: String) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            http,
            news_api_key,
            gnews_api_key,
        })
    }

    /// Query every source for one claim. Sources run concurrently; the
    /// bundle keeps them in fixed order so aggregation is deterministic
    /// regardless of completion order.
    pub async fn gather(&self, claim: &str) -> EvidenceBundle {
        let (wikipedia, newsapi, gnews) = tokio::join!(
            self.wikipedia(claim),
            self.newsapi(claim),
            self.gnews(claim),
        );

        EvidenceBundle {
            wikipedia,
            newsapi,
            gnews,
            fact_checker: self.fact_checker(claim),
        }
    }

    pub async fn wikipedia(&self, claim: &str) -> Evidence {
        match self.wikipedia_summary(claim).await {
            Ok(text) => Evidence::from_text(text),
            Err(err) => {
                debug!("wikipedia source degraded to no evidence: {err}");
                Evidence::Absent
            }
        }
    }

    pub async fn newsapi(&self, claim: &str) -> Evidence {
        match self.newsapi_headlines(claim).await {
            Ok(text) => Evidence::from_text(text),
            Err(err) => {
                debug!("newsapi source degraded to no evidence: {err}");
                Evidence::Absent
            }
        }
    }

    pub async fn gnews(&self, claim: &str) -> Evidence {
        match self.gnews_headlines(claim).await {
            Ok(text) => Evidence::from_text(text),
            Err(err) => {
                debug!("gnews source degraded to no evidence: {err}");
                Evidence::Absent
            }
        }
    }

    /// Fact-checker feeds (Snopes, PolitiFact) are not wired up; this source
    /// always reports absent evidence.
    pub fn fact_checker(&self, _claim: &str) -> Evidence {
        Evidence::Absent
    }

    async fn wikipedia_summary(&self, claim: &str) -> reqwest::Result<String> {
        let url = format!("{}/{}", WIKIPEDIA_SUMMARY_URL, claim.replace(' ', "_"));

        let summary: WikipediaSummary = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(summary.extract.unwrap_or_default())
    }

    async fn newsapi_headlines(&self, claim: &str) -> reqwest::Result<String> {
        let list: ArticleList = self
            .http
            .get(NEWSAPI_SEARCH_URL)
            .query(&[
                ("q", claim),
                ("language", "en"),
                ("pageSize", MAX_ARTICLES),
                ("apiKey", self.news_api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(headline_snippets(&list.articles))
    }

    async fn gnews_headlines(&self, claim: &str) -> reqwest::Result<String> {
        let list: ArticleList = self
            .http
            .get(GNEWS_SEARCH_URL)
            .query(&[
                ("q", claim),
                ("lang", "en"),
                ("max", MAX_ARTICLES),
                ("token", self.gnews_api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(headline_snippets(&list.articles))
    }
}

#[derive(Debug, Deserialize)]
struct WikipediaSummary {
    extract: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleList {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
}

fn headline_snippets(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|article| {
            format!(
                "{}: {}",
                article.title.as_deref().unwrap_or_default(),
                article.description.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(Evidence::from_text(String::new()), Evidence::Absent);
        assert_eq!(Evidence::from_text("   \n".into()), Evidence::Absent);
    }

    #[test]
    fn non_blank_text_is_found() {
        let evidence = Evidence::from_text("The moon is real.".into());
        assert_eq!(evidence.text(), Some("The moon is real."));
    }

    #[test]
    fn snippets_join_title_and_description() {
        let articles = vec![
            Article {
                title: Some("Moon landing turns 50".into()),
                description: Some("Anniversary coverage.".into()),
            },
            Article {
                title: Some("Apollo archive released".into()),
                description: None,
            },
        ];

        assert_eq!(
            headline_snippets(&articles),
            "Moon landing turns 50: Anniversary coverage.\nApollo archive released: "
        );
    }

    #[test]
    fn no_articles_means_empty_snippets() {
        assert_eq!(headline_snippets(&[]), "");
    }

    #[test]
    fn fact_checker_is_a_stub() {
        let client = EvidenceClient::new("k1".into(), "k2".into()).unwrap();
        assert_eq!(client.fact_checker("any claim"), Evidence::Absent);
    }
}
